//! Public AST types for message templates.
//!
//! These types are public so alternate [`Parser`](crate::Parser)
//! implementations can produce or inspect templates directly.

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// A template that renders `text` verbatim.
    pub fn literal(text: &str) -> Self {
        let segments = if text.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Literal(text.to_string())]
        };
        Self { segments }
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, copied to the output unchanged.
    Literal(String),
    /// An action between delimiters: {{ pipeline }}
    Action(Pipeline),
}

/// One or more commands joined by `|`.
///
/// The result of each stage is appended as the last argument of the next
/// stage, so every stage after the first must be a function call.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipeline {
    pub commands: Vec<Command>,
}

/// A single pipeline stage.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// A bare operand: {{.Count}}
    Operand(Operand),
    /// A function call with space-separated arguments: {{printf "%d" .Count}}
    Call { name: String, args: Vec<Operand> },
}

/// A value-producing term.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A field path from the payload root. Empty means the root itself (`.`).
    Field(Vec<String>),
    /// A quoted or raw string literal.
    String(String),
    /// An integer literal.
    Number(i64),
    /// `true` or `false`.
    Bool(bool),
}
