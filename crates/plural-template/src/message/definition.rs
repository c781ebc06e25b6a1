use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::{Delimiters, PluralForm};

/// A localizable string with up to six plural variants.
///
/// An empty variant means the message has no text for that category.
/// Messages are usually produced by a catalog loader; the serde
/// representation uses camelCase keys (`leftDelim`, `rightDelim`) and every
/// field except `id` may be omitted.
///
/// # Example
///
/// ```
/// use plural_template::{Message, PluralForm};
///
/// let message = Message::builder()
///     .id("cart.items")
///     .one("You have {{.Count}} item")
///     .other("You have {{.Count}} items")
///     .build();
///
/// assert_eq!(message.text(PluralForm::One), "You have {{.Count}} item");
/// assert_eq!(message.text(PluralForm::Few), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Identifier, unique within a catalog.
    #[builder(into)]
    pub id: String,

    /// Hash of the source text this translation was made from.
    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub hash: String,

    /// Notes for translators.
    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Opening action delimiter; empty means `{{`.
    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub left_delim: String,

    /// Closing action delimiter; empty means `}}`.
    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub right_delim: String,

    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zero: String,

    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub one: String,

    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub two: String,

    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub few: String,

    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub many: String,

    #[builder(into, default)]
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub other: String,
}

impl Message {
    /// The source text for a plural category (empty when absent).
    pub fn text(&self, form: PluralForm) -> &str {
        match form {
            PluralForm::Zero => &self.zero,
            PluralForm::One => &self.one,
            PluralForm::Two => &self.two,
            PluralForm::Few => &self.few,
            PluralForm::Many => &self.many,
            PluralForm::Other => &self.other,
        }
    }

    /// The action delimiters, with empty overrides replaced by the defaults.
    pub fn delimiters(&self) -> Delimiters {
        Delimiters::resolve(&self.left_delim, &self.right_delim)
    }
}
