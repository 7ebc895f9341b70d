use std::sync::Arc;

use poem_openapi::Tags;

use crate::{
    application::{
        handlers::dialogue::{DialogueConfig, DialogueHandler},
        services::send_api::SendApi,
        usecases::{
            receive_callback::{ReceiveCallbackConfig, ReceiveCallbackUseCase},
            verify_subscription::VerifySubscriptionUseCase,
        },
    },
    config::Config,
};

#[derive(Clone)]
pub struct ApiState {
    pub verify_subscription_usecase: Arc<VerifySubscriptionUseCase>,
    pub receive_callback_usecase: Arc<ReceiveCallbackUseCase>,
}

impl ApiState {
    pub fn new(config: &Config, send_api: Arc<dyn SendApi>) -> Self {
        let dialogue = Arc::new(DialogueHandler::new(
            send_api,
            DialogueConfig {
                main_menu_postback: config.main_menu_postback,
            },
        ));

        Self {
            verify_subscription_usecase: Arc::new(VerifySubscriptionUseCase::new(
                config.verify_token.clone(),
            )),
            receive_callback_usecase: Arc::new(ReceiveCallbackUseCase::new(
                dialogue,
                ReceiveCallbackConfig {
                    process_all_events: config.process_all_events,
                },
            )),
        }
    }
}

/// Enum of API sections (tags)
#[derive(Tags)]
pub enum EndpointsTags {
    Health,
    Webhook,
}
