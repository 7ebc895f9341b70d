use serde_json::Value;

/// `object` value of callbacks delivered for a page subscription.
pub const PAGE_OBJECT: &str = "page";

/// A webhook delivery from the platform, after transport decoding.
#[derive(Debug, Clone)]
pub struct CallbackEnvelope {
    pub object: String,
    pub entries: Vec<CallbackEntry>,
}

impl CallbackEnvelope {
    pub fn is_page_subscription(&self) -> bool {
        self.object == PAGE_OBJECT
    }
}

#[derive(Debug, Clone, Default)]
pub struct CallbackEntry {
    pub events: Vec<MessagingEvent>,
}

impl CallbackEntry {
    /// Events of this entry that should be handled, in delivery order.
    ///
    /// Only the first event is taken unless `all_events` is set.
    pub fn consumable(&self, all_events: bool) -> &[MessagingEvent] {
        if all_events {
            &self.events
        } else {
            &self.events[..self.events.len().min(1)]
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessagingEvent {
    pub sender_id: Option<String>,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    /// Free-form user message. Only its presence matters.
    Message(Value),
    Postback(Postback),
    /// Delivery, read, reaction and other events this bot ignores.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postback {
    pub payload: String,
    pub title: Option<String>,
}
