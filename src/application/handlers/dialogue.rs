use std::ops::AddAssign;
use std::sync::Arc;

use serde_json::Value;

use crate::{
    application::services::{
        catalog,
        menu::{build_back_to_menu, build_main_menu},
        send_api::SendApi,
    },
    domain::{
        events::{EventKind, Postback},
        models::{OutboundMessage, SendRequest, Selection},
    },
};

#[derive(Debug, Clone, Copy)]
pub struct DialogueConfig {
    /// Answer `MAIN_MENU` postbacks with the main menu instead of the catalog fallback.
    pub main_menu_postback: bool,
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            main_menu_postback: true,
        }
    }
}

/// Tally of the sends triggered by one event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub attempted: u32,
    pub failed: u32,
}

impl AddAssign for Delivery {
    fn add_assign(&mut self, other: Self) {
        self.attempted += other.attempted;
        self.failed += other.failed;
    }
}

pub struct DialogueHandler {
    send_api: Arc<dyn SendApi>,
    config: DialogueConfig,
}

impl DialogueHandler {
    pub fn new(send_api: Arc<dyn SendApi>, config: DialogueConfig) -> Self {
        Self { send_api, config }
    }

    pub async fn handle(&self, sender_id: &str, kind: &EventKind) -> Delivery {
        match kind {
            EventKind::Message(message) => self.on_message(sender_id, message).await,
            EventKind::Postback(postback) => self.on_postback(sender_id, postback).await,
            EventKind::Other => Delivery::default(),
        }
    }

    /// Any message gets the main menu, whatever it says.
    pub async fn on_message(&self, sender_id: &str, _message: &Value) -> Delivery {
        let mut delivery = Delivery::default();
        self.deliver(sender_id, build_main_menu(), "main_menu", &mut delivery)
            .await;
        delivery
    }

    /// Sends the catalog reply, then the back-to-menu prompt once the reply
    /// send has completed. The prompt is attempted even if the reply failed.
    pub async fn on_postback(&self, sender_id: &str, postback: &Postback) -> Delivery {
        let mut delivery = Delivery::default();

        if self.config.main_menu_postback
            && Selection::parse(&postback.payload) == Selection::MainMenu
        {
            self.deliver(sender_id, build_main_menu(), "main_menu", &mut delivery)
                .await;
            return delivery;
        }

        let reply = catalog::reply_for(&postback.payload);
        self.deliver(sender_id, reply, "postback_reply", &mut delivery)
            .await;

        self.deliver(sender_id, build_back_to_menu(), "back_to_menu", &mut delivery)
            .await;

        delivery
    }

    async fn deliver(
        &self,
        recipient: &str,
        message: OutboundMessage,
        kind: &'static str,
        delivery: &mut Delivery,
    ) {
        let request = SendRequest::new(recipient, message);
        delivery.attempted += 1;

        match self.send_api.send(&request).await {
            Ok(()) => tracing::info!(recipient, kind, "message sent"),
            Err(err) => {
                delivery.failed += 1;
                tracing::error!(recipient, kind, error = %err, "unable to send message");
            }
        }
    }
}
