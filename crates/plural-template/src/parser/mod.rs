//! Placeholder grammar for message templates.
//!
//! This module parses message source text into an AST that the
//! interpreter renders against a payload. The AST is public so alternate
//! substitution strategies can reuse it.

pub mod ast;
pub mod error;
mod template;

pub use ast::*;
pub use error::ParseError;
pub use template::parse_template;
