//! Error types for template rendering.

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::ParseError;

/// An error that occurred while rendering a parsed template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A field path that the payload does not contain.
    #[error("field '{path}' not found in data")]
    MissingField { path: String },

    /// A field step applied to a value that is not a map.
    #[error("cannot read field '{path}' of {kind} value")]
    NotAMap { path: String, kind: &'static str },

    /// A bare `.` used with a payload that has no root value.
    #[error("data has no root value for '.'")]
    MissingRoot,

    /// Function name not present in the function table.
    #[error("function '{name}' not defined{}", did_you_mean(suggestions))]
    UnknownFunction {
        name: String,
        suggestions: Vec<String>,
    },

    /// A pipeline stage after the first that is not a function call.
    #[error("pipeline stage {stage} is not a function call")]
    NonFunctionStage { stage: usize },

    /// An action whose pipeline has no commands.
    #[error("action has no commands")]
    EmptyPipeline,

    /// A function reported a failure.
    #[error("error calling '{name}': {message}")]
    Function { name: String, message: String },
}

/// Any failure raised by the substitution engine while parsing or rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - Limit to 3 suggestions, sorted by distance
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
