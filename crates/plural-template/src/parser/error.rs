//! Parse error types for message templates.

use thiserror::Error;

/// An error that occurred while parsing a template.
///
/// Parse outcomes are cached per template unit, so this type is `Clone`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A syntax error with location information.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// An opening delimiter with no matching closing delimiter.
    #[error("unclosed action at {line}:{column}: expected '{right}'")]
    UnclosedAction {
        line: usize,
        column: usize,
        right: String,
    },
}
