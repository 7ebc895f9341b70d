use serde::{Deserialize, Serialize};

use super::menu::MenuOption;
use crate::domain::value_objects::Recipient;

/// Body of the `message` field of a Send API request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutboundMessage {
    Text { text: String },
    Attachment { attachment: Attachment },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Attachment {
    Template(TemplatePayload),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum TemplatePayload {
    Button { text: String, buttons: Vec<Button> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    Postback { title: String, payload: String },
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        OutboundMessage::Text { text: text.into() }
    }

    /// Button template with one postback button per option, in order.
    pub fn buttons(prompt: impl Into<String>, options: &[MenuOption]) -> Self {
        let buttons = options
            .iter()
            .map(|option| Button::Postback {
                title: option.title.to_string(),
                payload: option.payload.to_string(),
            })
            .collect();

        OutboundMessage::Attachment {
            attachment: Attachment::Template(TemplatePayload::Button {
                text: prompt.into(),
                buttons,
            }),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            OutboundMessage::Text { text } => Some(text),
            OutboundMessage::Attachment { .. } => None,
        }
    }

    /// Postback payloads of the buttons carried by a template message.
    pub fn button_payloads(&self) -> Vec<&str> {
        match self {
            OutboundMessage::Text { .. } => Vec::new(),
            OutboundMessage::Attachment {
                attachment: Attachment::Template(TemplatePayload::Button { buttons, .. }),
            } => buttons
                .iter()
                .map(|button| match button {
                    Button::Postback { payload, .. } => payload.as_str(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRequest {
    pub recipient: Recipient,
    pub message: OutboundMessage,
}

impl SendRequest {
    pub fn new(recipient_id: impl Into<String>, message: OutboundMessage) -> Self {
        Self {
            recipient: Recipient::new(recipient_id),
            message,
        }
    }
}
