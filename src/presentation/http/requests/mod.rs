use poem_openapi::Object;
use serde_json::Value;

/// Callback body posted by the platform to the webhook.
#[derive(Object, Debug)]
pub struct WebhookEnvelopeDto {
    #[oai(default)]
    pub object: String,
    #[oai(default)]
    pub entry: Vec<WebhookEntryDto>,
}

#[derive(Object, Debug)]
pub struct WebhookEntryDto {
    #[oai(default)]
    pub messaging: Vec<MessagingEventDto>,
}

#[derive(Object, Debug)]
pub struct MessagingEventDto {
    pub sender: Option<SenderDto>,
    pub message: Option<Value>,
    pub postback: Option<PostbackDto>,
}

#[derive(Object, Debug)]
pub struct SenderDto {
    pub id: String,
}

#[derive(Object, Debug)]
pub struct PostbackDto {
    pub payload: Option<String>,
    pub title: Option<String>,
}
