use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::Query,
    payload::{Json, PlainText},
};

use crate::{
    application::usecases::{
        receive_callback::ReceiveOutcome, verify_subscription::VerifySubscriptionRequest,
    },
    presentation::http::{
        endpoints::root::{ApiState, EndpointsTags},
        mappers::map_envelope,
        requests::WebhookEnvelopeDto,
        responses::{EVENT_RECEIVED, ReceiveResponse, VerifyResponse},
    },
};

#[derive(Clone)]
pub struct WebhookEndpoints {
    state: Arc<ApiState>,
}

impl WebhookEndpoints {
    pub fn new(state: Arc<ApiState>) -> Self {
        Self { state }
    }
}

#[OpenApi]
impl WebhookEndpoints {
    /// Subscription handshake performed by the platform when the webhook is registered.
    #[oai(path = "/webhook", method = "get", tag = EndpointsTags::Webhook)]
    pub async fn verify(
        &self,
        #[oai(name = "hub.mode")] mode: Query<Option<String>>,
        #[oai(name = "hub.verify_token")] verify_token: Query<Option<String>>,
        #[oai(name = "hub.challenge")] challenge: Query<Option<String>>,
    ) -> VerifyResponse {
        let request = VerifySubscriptionRequest {
            mode: mode.0,
            verify_token: verify_token.0,
            challenge: challenge.0,
        };

        match self.state.verify_subscription_usecase.execute(request) {
            Ok(challenge) => VerifyResponse::Challenge(PlainText(challenge)),
            Err(_) => VerifyResponse::Forbidden,
        }
    }

    /// Event delivery. Acknowledged before any reply is sent.
    #[oai(path = "/webhook", method = "post", tag = EndpointsTags::Webhook)]
    pub async fn receive(&self, request: Json<WebhookEnvelopeDto>) -> ReceiveResponse {
        let envelope = map_envelope(request.0);

        match self.state.receive_callback_usecase.execute(envelope) {
            // Dispatch tasks are left detached; their failures are logged by the dialogue.
            ReceiveOutcome::Acknowledged { .. } => {
                ReceiveResponse::Received(PlainText(EVENT_RECEIVED.to_string()))
            }
            ReceiveOutcome::UnsupportedObject(_) => ReceiveResponse::NotFound,
        }
    }
}
