use poem_openapi::{ApiResponse, payload::PlainText};

pub const EVENT_RECEIVED: &str = "EVENT_RECEIVED";

#[derive(ApiResponse)]
pub enum VerifyResponse {
    /// Subscription verified; the body echoes `hub.challenge`.
    #[oai(status = 200)]
    Challenge(PlainText<String>),
    /// Mode missing or verify token mismatch.
    #[oai(status = 403)]
    Forbidden,
}

#[derive(ApiResponse)]
pub enum ReceiveResponse {
    /// Callback accepted.
    #[oai(status = 200)]
    Received(PlainText<String>),
    /// Callback is not for a page subscription.
    #[oai(status = 404)]
    NotFound,
}
