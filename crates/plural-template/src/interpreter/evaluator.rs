//! Template rendering engine.
//!
//! Walks a parsed [`Template`], copying literal text and replacing each action
//! with the display form of its pipeline result.

use crate::interpreter::error::{RenderError, compute_suggestions};
use crate::interpreter::functions::FuncMap;
use crate::parser::ast::{Command, Operand, Pipeline, Segment, Template};
use crate::types::{Data, Value};

/// How action output is written into the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    /// Output is written verbatim.
    #[default]
    None,
    /// `& < > " '` in action output are replaced with HTML entities.
    /// Literal template text is never escaped.
    Html,
}

/// Render a template AST against a payload, producing a string.
///
/// Function names are resolved against `funcs` in order; the first table
/// that defines a name wins.
///
/// # Errors
///
/// Returns an error if:
/// - A field path cannot be resolved in the payload
/// - A function is not defined or reports a failure
/// - A pipeline stage after the first is not a function call
pub fn render(
    template: &Template,
    data: &dyn Data,
    funcs: &[&FuncMap],
    escaping: Escaping,
) -> Result<String, RenderError> {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(s) => output.push_str(s),
            Segment::Action(pipeline) => {
                let text = eval_pipeline(pipeline, data, funcs)?.to_string();
                match escaping {
                    Escaping::None => output.push_str(&text),
                    Escaping::Html => output.push_str(&escape_html(&text)),
                }
            }
        }
    }
    Ok(output)
}

/// Evaluate each stage in turn, feeding its result into the next call.
fn eval_pipeline(
    pipeline: &Pipeline,
    data: &dyn Data,
    funcs: &[&FuncMap],
) -> Result<Value, RenderError> {
    let mut result: Option<Value> = None;
    for (i, command) in pipeline.commands.iter().enumerate() {
        let value = match (command, result.take()) {
            (Command::Operand(operand), None) => eval_operand(operand, data)?,
            (Command::Operand(_), Some(_)) => {
                return Err(RenderError::NonFunctionStage { stage: i + 1 });
            }
            (Command::Call { name, args }, piped) => call(name, args, piped, data, funcs)?,
        };
        result = Some(value);
    }
    result.ok_or(RenderError::EmptyPipeline)
}

fn call(
    name: &str,
    args: &[Operand],
    piped: Option<Value>,
    data: &dyn Data,
    funcs: &[&FuncMap],
) -> Result<Value, RenderError> {
    let Some(f) = funcs.iter().find_map(|table| table.get(name)) else {
        return Err(RenderError::UnknownFunction {
            name: name.to_string(),
            suggestions: compute_suggestions(name, funcs.iter().flat_map(|table| table.names())),
        });
    };

    let mut values = args
        .iter()
        .map(|arg| eval_operand(arg, data))
        .collect::<Result<Vec<_>, _>>()?;
    values.extend(piped);

    f(&values).map_err(|message| RenderError::Function {
        name: name.to_string(),
        message,
    })
}

fn eval_operand(operand: &Operand, data: &dyn Data) -> Result<Value, RenderError> {
    match operand {
        Operand::Field(path) => resolve_field(path, data),
        Operand::String(s) => Ok(Value::String(s.clone())),
        Operand::Number(n) => Ok(Value::Number(*n)),
        Operand::Bool(b) => Ok(Value::Bool(*b)),
    }
}

/// Resolve a field path: the first step through [`Data`], later steps
/// through nested [`Value::Map`]s.
fn resolve_field(path: &[String], data: &dyn Data) -> Result<Value, RenderError> {
    let Some((first, rest)) = path.split_first() else {
        return data.root().ok_or(RenderError::MissingRoot);
    };

    let mut current = data.field(first).ok_or_else(|| RenderError::MissingField {
        path: dotted(&path[..1]),
    })?;
    for (i, key) in rest.iter().enumerate() {
        let step = &path[..i + 2];
        current = match &current {
            Value::Map(map) => map.get(key).cloned().ok_or_else(|| RenderError::MissingField {
                path: dotted(step),
            })?,
            other => {
                return Err(RenderError::NotAMap {
                    path: dotted(step),
                    kind: other.kind(),
                });
            }
        };
    }
    Ok(current)
}

fn dotted(path: &[String]) -> String {
    path.iter().map(|key| format!(".{key}")).collect()
}

/// Escape text for inclusion in HTML element content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
