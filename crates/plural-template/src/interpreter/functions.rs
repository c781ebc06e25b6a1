//! Named functions callable from template actions.
//!
//! A [`FuncMap`] is the function table a parser exposes to expressions such
//! as `{{upper .Name}}` or `{{.Items | len}}`. [`FuncMap::builtins`] holds the
//! functions every [`TextParser`](crate::TextParser) provides by default.

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::{Arc, LazyLock};

use crate::interpreter::evaluator::escape_html;
use crate::types::Value;

/// Template function signature.
///
/// Receives the evaluated arguments (with any piped value last) and returns
/// the result, or a message describing why the call failed. Functions may
/// capture state such as a locale or a number formatter.
pub type TemplateFn = Arc<dyn Fn(&[Value]) -> Result<Value, String> + Send + Sync>;

static BUILTINS: LazyLock<FuncMap> = LazyLock::new(FuncMap::builtins);

/// A table of named template functions.
#[derive(Clone, Default)]
pub struct FuncMap {
    funcs: BTreeMap<String, TemplateFn>,
}

impl FuncMap {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the builtin functions: `print`, `len`, `upper`,
    /// `lower` and `html`.
    pub fn builtins() -> Self {
        Self::new()
            .with("print", print)
            .with("len", len)
            .with("upper", upper)
            .with("lower", lower)
            .with("html", html)
    }

    /// Shared instance of [`FuncMap::builtins`].
    pub(crate) fn shared_builtins() -> &'static FuncMap {
        &BUILTINS
    }

    /// Register a function, replacing any previous function of that name.
    pub fn insert<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.funcs.insert(name.into(), Arc::new(f));
    }

    /// Builder-style [`FuncMap::insert`].
    pub fn with<F>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.insert(name, f);
        self
    }

    /// Get a function by name.
    pub fn get(&self, name: &str) -> Option<&TemplateFn> {
        self.funcs.get(name)
    }

    /// Check if a function is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Registered function names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.funcs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }
}

impl Debug for FuncMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.funcs.keys()).finish()
    }
}

/// Concatenate arguments, adding a space between two operands when neither
/// is a string.
fn print(args: &[Value]) -> Result<Value, String> {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        let spaced = i > 0
            && !matches!(arg, Value::String(_))
            && !matches!(args[i - 1], Value::String(_));
        if spaced {
            out.push(' ');
        }
        out.push_str(&arg.to_string());
    }
    Ok(Value::String(out))
}

fn len(args: &[Value]) -> Result<Value, String> {
    let [arg] = args else {
        return Err(format!("expected 1 argument, got {}", args.len()));
    };
    match arg {
        Value::String(s) => Ok(Value::from(s.chars().count())),
        Value::List(items) => Ok(Value::from(items.len())),
        Value::Map(map) => Ok(Value::from(map.len())),
        other => Err(format!("len of {} value", other.kind())),
    }
}

fn upper(args: &[Value]) -> Result<Value, String> {
    single_text(args).map(|text| Value::String(text.to_uppercase()))
}

fn lower(args: &[Value]) -> Result<Value, String> {
    single_text(args).map(|text| Value::String(text.to_lowercase()))
}

fn html(args: &[Value]) -> Result<Value, String> {
    let joined = print(args)?.to_string();
    Ok(Value::String(escape_html(&joined)))
}

fn single_text(args: &[Value]) -> Result<String, String> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(format!("expected 1 argument, got {}", args.len())),
    }
}
