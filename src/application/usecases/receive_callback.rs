use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    application::handlers::dialogue::{Delivery, DialogueHandler},
    domain::events::{CallbackEnvelope, EventKind},
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiveCallbackConfig {
    /// Handle every messaging event of an entry instead of only the first one.
    pub process_all_events: bool,
}

#[derive(Debug)]
pub enum ReceiveOutcome {
    /// The envelope was accepted; dialogue work runs on the returned tasks.
    Acknowledged {
        delivery_id: Uuid,
        dispatched: usize,
        tasks: Vec<JoinHandle<Delivery>>,
    },
    UnsupportedObject(String),
}

pub struct ReceiveCallbackUseCase {
    dialogue: Arc<DialogueHandler>,
    config: ReceiveCallbackConfig,
}

impl ReceiveCallbackUseCase {
    pub fn new(dialogue: Arc<DialogueHandler>, config: ReceiveCallbackConfig) -> Self {
        Self { dialogue, config }
    }

    /// Routes the envelope's events to the dialogue without waiting for the sends.
    ///
    /// Events of one entry are handled in order on a single task; entries run
    /// independently of each other. Must be called from within a tokio runtime.
    pub fn execute(&self, envelope: CallbackEnvelope) -> ReceiveOutcome {
        if !envelope.is_page_subscription() {
            tracing::debug!(object = %envelope.object, "ignoring callback for unsupported object");
            return ReceiveOutcome::UnsupportedObject(envelope.object);
        }

        let delivery_id = Uuid::new_v4();
        let mut dispatched = 0;
        let mut tasks = Vec::new();

        for (index, entry) in envelope.entries.iter().enumerate() {
            let events: Vec<(String, EventKind)> = entry
                .consumable(self.config.process_all_events)
                .iter()
                .filter_map(|event| match (&event.sender_id, &event.kind) {
                    (_, EventKind::Other) => None,
                    (None, _) => {
                        tracing::debug!(%delivery_id, entry = index, "skipping event without sender");
                        None
                    }
                    (Some(sender), kind) => Some((sender.clone(), kind.clone())),
                })
                .collect();

            if events.is_empty() {
                tracing::debug!(%delivery_id, entry = index, "nothing to handle in entry");
                continue;
            }

            dispatched += events.len();
            let dialogue = self.dialogue.clone();
            let span = tracing::info_span!("webhook_entry", %delivery_id, entry = index);
            tasks.push(tokio::spawn(
                async move {
                    let mut total = Delivery::default();
                    for (sender, kind) in events {
                        total += dialogue.handle(&sender, &kind).await;
                    }
                    tracing::debug!(
                        attempted = total.attempted,
                        failed = total.failed,
                        "entry handled"
                    );
                    total
                }
                .instrument(span),
            ));
        }

        tracing::info!(
            %delivery_id,
            entries = envelope.entries.len(),
            dispatched,
            "webhook delivery accepted"
        );

        ReceiveOutcome::Acknowledged {
            delivery_id,
            dispatched,
            tasks,
        }
    }
}
