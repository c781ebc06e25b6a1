use thiserror::Error;

use crate::interpreter::TemplateError;
use crate::types::PluralForm;

/// An error returned when executing a message template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecuteError {
    /// The message defines no text for the requested plural category.
    #[error("message {message_id:?} has no plural form \"{form}\"")]
    PluralFormNotFound {
        form: PluralForm,
        message_id: String,
    },

    /// Parse or render failure, passed through unchanged.
    #[error(transparent)]
    Template(#[from] TemplateError),
}
