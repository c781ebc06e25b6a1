//! Per-plural-form message templates.
//!
//! A [`Message`] carries up to six text variants, one per CLDR plural
//! category. [`MessageTemplate::new`] compiles the non-empty variants into
//! lazily parsed [`TemplateUnit`]s, and [`MessageTemplate::execute`] renders
//! the variant for an already-resolved [`PluralForm`] against caller data.
//!
//! ```
//! use plural_template::{ExecuteError, FuncMap, Message, MessageTemplate, PluralForm, data};
//!
//! let template = MessageTemplate::new(
//!     Message::builder()
//!         .id("cart.items")
//!         .one("You have {{.Count}} item")
//!         .other("You have {{.Count}} items")
//!         .build(),
//! )
//! .unwrap();
//!
//! let one = template.execute(PluralForm::One, &data! { "Count" => 1 }, &FuncMap::new());
//! assert_eq!(one.unwrap(), "You have 1 item");
//!
//! let few = template.execute(PluralForm::Few, &data! { "Count" => 3 }, &FuncMap::new());
//! assert!(matches!(few, Err(ExecuteError::PluralFormNotFound { .. })));
//! ```

pub mod interpreter;
pub mod message;
pub mod parser;
pub mod types;

pub use interpreter::{
    Escaping, FuncMap, HtmlParser, Parser, RenderError, TemplateError, TemplateFn, TextParser,
};
pub use message::{ExecuteError, Message, MessageTemplate, TemplateUnit};
pub use parser::ParseError;
pub use types::{Data, Delimiters, PluralForm, UnknownPluralForm, Value};

/// Creates a `HashMap<String, Value>` payload from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, or nested values directly.
///
/// # Example
///
/// ```
/// use plural_template::{data, Value};
///
/// let d = data! { "Count" => 3, "Name" => "Alice" };
/// assert_eq!(d.len(), 2);
/// assert_eq!(d["Count"].as_number(), Some(3));
/// assert_eq!(d["Name"].as_str(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! data {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
