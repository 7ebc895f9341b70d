use crate::{
    domain::events::{CallbackEntry, CallbackEnvelope, EventKind, MessagingEvent, Postback},
    presentation::http::requests::{MessagingEventDto, WebhookEnvelopeDto},
};

pub fn map_envelope(dto: WebhookEnvelopeDto) -> CallbackEnvelope {
    CallbackEnvelope {
        object: dto.object,
        entries: dto
            .entry
            .into_iter()
            .map(|entry| CallbackEntry {
                events: entry.messaging.into_iter().map(map_event).collect(),
            })
            .collect(),
    }
}

fn map_event(dto: MessagingEventDto) -> MessagingEvent {
    // A message takes precedence over a postback carried by the same event.
    let kind = match (dto.message, dto.postback) {
        (Some(message), _) => EventKind::Message(message),
        (None, Some(postback)) => EventKind::Postback(Postback {
            payload: postback.payload.unwrap_or_default(),
            title: postback.title,
        }),
        (None, None) => EventKind::Other,
    };

    MessagingEvent {
        sender_id: dto.sender.map(|sender| sender.id),
        kind,
    }
}
