pub mod menu;
pub mod message;

pub use menu::{MenuOption, Selection};
pub use message::{Attachment, Button, OutboundMessage, SendRequest, TemplatePayload};
