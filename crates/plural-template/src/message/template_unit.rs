use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::interpreter::{Parser, TemplateError};
use crate::parser::{ParseError, Template};
use crate::types::{Data, Delimiters};

/// Outcome of the first parse under one grammar, reused by every later
/// execution with a parser reporting the same key. A failed parse is cached
/// as well.
#[derive(Debug)]
struct CachedParse {
    key: &'static str,
    result: Result<Arc<Template>, ParseError>,
}

/// The source text of one plural variant, parsed lazily on first execution.
///
/// Parses are cached per [`Parser::cache_key`], so parsers with different
/// grammars never see each other's output. Concurrent first executions are
/// serialized on the parse lock so the source is parsed once per key;
/// rendering happens outside the lock.
#[derive(Debug)]
pub struct TemplateUnit {
    src: String,
    delims: Delimiters,
    cache: Mutex<Vec<CachedParse>>,
}

impl TemplateUnit {
    pub fn new(src: impl Into<String>, delims: Delimiters) -> Self {
        Self {
            src: src.into(),
            delims,
            cache: Mutex::new(Vec::new()),
        }
    }

    pub fn source(&self) -> &str {
        &self.src
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delims
    }

    /// Whether any cacheable parser has already parsed this unit.
    pub fn is_parsed(&self) -> bool {
        !self.lock_cache().is_empty()
    }

    /// Whether a parse under the grammar `key` is cached.
    pub fn is_parsed_for(&self, key: &str) -> bool {
        self.lock_cache().iter().any(|entry| entry.key == key)
    }

    /// Parse (or reuse the cached parse for the parser's key) and render
    /// against `data`.
    pub fn execute(&self, parser: &dyn Parser, data: &dyn Data) -> Result<String, TemplateError> {
        let template = match parser.cache_key() {
            Some(key) => self.cached_parse(parser, key)?,
            None => {
                debug!(src = %self.src, "parser is not cacheable, parsing without cache");
                Arc::new(parser.parse(&self.src, &self.delims)?)
            }
        };
        Ok(parser.render(&template, data)?)
    }

    fn cached_parse(
        &self,
        parser: &dyn Parser,
        key: &'static str,
    ) -> Result<Arc<Template>, ParseError> {
        let mut cache = self.lock_cache();
        if let Some(entry) = cache.iter().find(|entry| entry.key == key) {
            return entry.result.clone();
        }

        let result = parser.parse(&self.src, &self.delims).map(Arc::new);
        trace!(
            src = %self.src,
            key,
            ok = result.is_ok(),
            "parsed template unit"
        );
        cache.push(CachedParse {
            key,
            result: result.clone(),
        });
        result
    }

    // The cache is only written after `parse` returns, so a panicking parser
    // leaves it consistent.
    fn lock_cache(&self) -> MutexGuard<'_, Vec<CachedParse>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
