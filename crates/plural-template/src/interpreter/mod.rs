//! Template interpreter.
//!
//! This module renders parsed templates against caller data. It resolves
//! field paths, evaluates function pipelines, and provides the [`Parser`]
//! strategies that template units delegate to.

mod engine;
mod error;
mod evaluator;
mod functions;

pub(crate) use engine::BorrowedTextParser;
pub use engine::{HtmlParser, Parser, TextParser, parse_source};
pub use error::{RenderError, TemplateError, compute_suggestions};
pub use evaluator::{Escaping, render};
pub use functions::{FuncMap, TemplateFn};
