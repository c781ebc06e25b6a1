use std::collections::{BTreeMap, HashMap};

use super::Value;

/// A payload that templates can read fields from.
///
/// This is the only capability the renderer needs from caller data: look a
/// top-level key up by name. Nested access (`.User.Name`) continues through
/// [`Value::Map`] once the first step has been resolved.
pub trait Data {
    /// Resolve a top-level field by name.
    fn field(&self, name: &str) -> Option<Value>;

    /// The whole payload as a value, used by a bare `{{.}}`.
    fn root(&self) -> Option<Value> {
        None
    }
}

impl Data for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Data for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn root(&self) -> Option<Value> {
        Some(Value::Map(self.clone()))
    }
}

impl Data for Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn root(&self) -> Option<Value> {
        Some(self.clone())
    }
}

/// The empty payload, for messages without placeholders.
impl Data for () {
    fn field(&self, _name: &str) -> Option<Value> {
        None
    }
}
