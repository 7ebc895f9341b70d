use crate::domain::models::{OutboundMessage, Selection};

pub const OPTION_1_REPLY: &str = "Here is the information for Option 1. It's a great choice!";
pub const OPTION_2_REPLY: &str = "You picked Option 2! Here are the details you requested.";
pub const OPTION_3_REPLY: &str =
    "Excellent selection. Here is everything you need to know about Option 3.";
pub const FALLBACK_REPLY: &str = "Sorry, I didn't understand that selection.";

/// Canned reply for a postback payload.
pub fn reply_for(payload: &str) -> OutboundMessage {
    let text = match Selection::parse(payload) {
        Selection::Option1 => OPTION_1_REPLY,
        Selection::Option2 => OPTION_2_REPLY,
        Selection::Option3 => OPTION_3_REPLY,
        Selection::MainMenu | Selection::Unrecognized => FALLBACK_REPLY,
    };
    OutboundMessage::text(text)
}
