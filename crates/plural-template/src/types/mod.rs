mod data;
mod delimiters;
mod plural_form;
mod value;

pub use data::Data;
pub use delimiters::{DEFAULT_LEFT_DELIM, DEFAULT_RIGHT_DELIM, Delimiters};
pub use plural_form::{PluralForm, UnknownPluralForm};
pub use value::Value;
