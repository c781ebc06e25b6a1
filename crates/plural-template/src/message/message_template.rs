use crate::interpreter::{BorrowedTextParser, FuncMap, Parser};
use crate::message::{ExecuteError, Message, TemplateUnit};
use crate::types::{Data, PluralForm};

/// An executable message: one [`TemplateUnit`] per non-empty plural variant.
///
/// A `MessageTemplate` always holds at least one unit; a message without any
/// plural text compiles to `None` instead.
///
/// # Example
///
/// ```
/// use plural_template::{FuncMap, Message, MessageTemplate, PluralForm, data};
///
/// let message = Message::builder()
///     .id("cart.items")
///     .one("You have {{.Count}} item")
///     .other("You have {{.Count}} items")
///     .build();
/// let template = MessageTemplate::new(message).unwrap();
///
/// let rendered = template
///     .execute(PluralForm::Other, &data! { "Count" => 5 }, &FuncMap::new())
///     .unwrap();
/// assert_eq!(rendered, "You have 5 items");
/// ```
#[derive(Debug)]
pub struct MessageTemplate {
    message: Message,
    /// Indexed by [`PluralForm::index`].
    units: [Option<TemplateUnit>; 6],
}

impl MessageTemplate {
    /// Compile a message, returning `None` when every plural variant is empty.
    ///
    /// Each non-empty variant becomes a unit carrying the message's
    /// delimiters. No parsing happens here.
    pub fn new(message: Message) -> Option<Self> {
        let delims = message.delimiters();
        let units = PluralForm::ALL.map(|form| {
            let src = message.text(form);
            (!src.is_empty()).then(|| TemplateUnit::new(src, delims.clone()))
        });
        if units.iter().all(Option::is_none) {
            return None;
        }
        Some(Self { message, units })
    }

    /// The message this template was compiled from.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The unit for a plural category, if the message defines one.
    pub fn get(&self, form: PluralForm) -> Option<&TemplateUnit> {
        self.units[form.index()].as_ref()
    }

    /// Plural categories that have a unit, in CLDR order.
    pub fn forms(&self) -> impl Iterator<Item = PluralForm> + '_ {
        PluralForm::ALL
            .into_iter()
            .filter(|form| self.get(*form).is_some())
    }

    /// Number of plural categories with a unit. Never zero.
    pub fn variant_count(&self) -> usize {
        self.units.iter().flatten().count()
    }

    /// Render the variant for `form` with the builtin functions plus `funcs`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::PluralFormNotFound`] if the message has no
    /// text for `form`, or [`ExecuteError::Template`] with the engine's
    /// parse or render failure.
    pub fn execute(
        &self,
        form: PluralForm,
        data: &dyn Data,
        funcs: &FuncMap,
    ) -> Result<String, ExecuteError> {
        let unit = self.unit(form)?;
        Ok(unit.execute(&BorrowedTextParser::new(funcs), data)?)
    }

    /// Render the variant for `form` with a caller-chosen substitution engine.
    ///
    /// Lookup and errors are identical to [`MessageTemplate::execute`].
    pub fn execute_with(
        &self,
        form: PluralForm,
        data: &dyn Data,
        parser: &dyn Parser,
    ) -> Result<String, ExecuteError> {
        Ok(self.unit(form)?.execute(parser, data)?)
    }

    fn unit(&self, form: PluralForm) -> Result<&TemplateUnit, ExecuteError> {
        self.get(form).ok_or_else(|| ExecuteError::PluralFormNotFound {
            form,
            message_id: self.message.id.clone(),
        })
    }
}
