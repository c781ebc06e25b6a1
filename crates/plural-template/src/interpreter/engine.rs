//! Pluggable substitution strategies.
//!
//! A [`Parser`] turns template source into an AST and renders that AST
//! against a payload. Template units call `parse` at most once per unit and
//! cache key, and `render` on every execution.

use bon::Builder;

use crate::interpreter::error::RenderError;
use crate::interpreter::evaluator::{Escaping, render};
use crate::interpreter::functions::FuncMap;
use crate::parser::{ParseError, Template, parse_template};
use crate::types::{Data, Delimiters};

/// A substitution engine.
pub trait Parser {
    /// Names the grammar `parse` implements.
    ///
    /// A template unit keeps one cached parse per key and hands it only to
    /// parsers reporting the same key. Return `None` when `parse` depends on
    /// per-call state; the unit then parses on every execution and leaves
    /// its cache untouched.
    fn cache_key(&self) -> Option<&'static str>;

    /// Parse source text enclosed by the given delimiters.
    fn parse(&self, src: &str, delims: &Delimiters) -> Result<Template, ParseError> {
        parse_source(src, delims)
    }

    /// Render a parsed template against a payload.
    fn render(&self, template: &Template, data: &dyn Data) -> Result<String, RenderError>;
}

/// Parse `src`, skipping the grammar entirely when it contains no opening
/// delimiter.
pub fn parse_source(src: &str, delims: &Delimiters) -> Result<Template, ParseError> {
    if src.contains(delims.left()) {
        parse_template(src, delims)
    } else {
        Ok(Template::literal(src))
    }
}

/// Plain-text substitution with a configurable function table.
///
/// Caller functions shadow builtins of the same name.
///
/// # Example
///
/// ```
/// use plural_template::{FuncMap, TextParser};
///
/// let parser = TextParser::builder()
///     .funcs(FuncMap::new().with("twice", |args| Ok(format!("{0}{0}", args[0]).into())))
///     .build();
/// assert!(parser.funcs().contains("twice"));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct TextParser {
    /// Functions exposed to template expressions.
    #[builder(default)]
    funcs: FuncMap,

    /// Whether [`FuncMap::builtins`] are available behind `funcs`.
    #[builder(default = true)]
    builtins: bool,
}

impl TextParser {
    /// Cache key of the grammar shared by [`TextParser`] and [`HtmlParser`].
    pub const GRAMMAR: &'static str = "text";

    /// A parser exposing only the builtin functions.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// A parser exposing `funcs` in front of the builtin functions.
    pub fn with_funcs(funcs: FuncMap) -> Self {
        Self::builder().funcs(funcs).build()
    }

    /// The caller-supplied function table.
    pub fn funcs(&self) -> &FuncMap {
        &self.funcs
    }

    fn render_escaped(
        &self,
        template: &Template,
        data: &dyn Data,
        escaping: Escaping,
    ) -> Result<String, RenderError> {
        render_layered(template, data, &self.funcs, self.builtins, escaping)
    }
}

fn render_layered(
    template: &Template,
    data: &dyn Data,
    funcs: &FuncMap,
    builtins: bool,
    escaping: Escaping,
) -> Result<String, RenderError> {
    if builtins {
        render(
            template,
            data,
            &[funcs, FuncMap::shared_builtins()],
            escaping,
        )
    } else {
        render(template, data, &[funcs], escaping)
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for TextParser {
    fn cache_key(&self) -> Option<&'static str> {
        Some(Self::GRAMMAR)
    }

    fn render(&self, template: &Template, data: &dyn Data) -> Result<String, RenderError> {
        self.render_escaped(template, data, Escaping::None)
    }
}

/// Substitution that HTML-escapes the output of every action.
///
/// Parsing is identical to [`TextParser`]; literal template text is left as
/// written so messages may carry their own markup.
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    inner: TextParser,
}

impl HtmlParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_funcs(funcs: FuncMap) -> Self {
        Self {
            inner: TextParser::with_funcs(funcs),
        }
    }
}

impl From<TextParser> for HtmlParser {
    fn from(inner: TextParser) -> Self {
        Self { inner }
    }
}

impl Parser for HtmlParser {
    fn cache_key(&self) -> Option<&'static str> {
        Some(TextParser::GRAMMAR)
    }

    fn render(&self, template: &Template, data: &dyn Data) -> Result<String, RenderError> {
        self.inner.render_escaped(template, data, Escaping::Html)
    }
}

/// [`TextParser`] over a borrowed function table, with builtins behind it.
pub(crate) struct BorrowedTextParser<'a> {
    funcs: &'a FuncMap,
}

impl<'a> BorrowedTextParser<'a> {
    pub(crate) fn new(funcs: &'a FuncMap) -> Self {
        Self { funcs }
    }
}

impl Parser for BorrowedTextParser<'_> {
    fn cache_key(&self) -> Option<&'static str> {
        Some(TextParser::GRAMMAR)
    }

    fn render(&self, template: &Template, data: &dyn Data) -> Result<String, RenderError> {
        render_layered(template, data, self.funcs, true, Escaping::None)
    }
}
