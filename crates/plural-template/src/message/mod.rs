//! Messages and their compiled, executable form.
//!
//! [`MessageTemplate::new`] compiles a [`Message`] into per-category
//! [`TemplateUnit`]s; [`MessageTemplate::execute`] renders the unit for a
//! plural category that the caller has already resolved.

mod definition;
mod error;
mod message_template;
mod template_unit;

pub use definition::Message;
pub use error::ExecuteError;
pub use message_template::MessageTemplate;
pub use template_unit::TemplateUnit;
