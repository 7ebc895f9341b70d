use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use crate::{
    application::services::send_api::SendApi,
    domain::{errors::SendError, models::SendRequest},
};

/// A send attempt recorded by [`InMemorySendApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSend {
    pub request: SendRequest,
    pub delivered: bool,
}

/// Send API that keeps every attempt in memory instead of calling the platform.
///
/// Attempts listed in `failing_attempts` (1-based, counted across all
/// recipients) are recorded and then reported as transport failures.
#[derive(Default)]
pub struct InMemorySendApi {
    sends: Arc<RwLock<Vec<RecordedSend>>>,
    failing_attempts: HashSet<usize>,
    recorded: Notify,
}

impl InMemorySendApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(attempts: &[usize]) -> Self {
        Self {
            failing_attempts: attempts.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub async fn sends(&self) -> Vec<RecordedSend> {
        self.sends.read().await.clone()
    }

    /// Waits until at least `count` attempts were recorded or `timeout` elapses,
    /// then returns whatever was recorded.
    pub async fn wait_for(&self, count: usize, timeout: Duration) -> Vec<RecordedSend> {
        let _ = tokio::time::timeout(timeout, async {
            loop {
                let notified = self.recorded.notified();
                if self.sends.read().await.len() >= count {
                    return;
                }
                notified.await;
            }
        })
        .await;
        self.sends().await
    }
}

#[async_trait]
impl SendApi for InMemorySendApi {
    async fn send(&self, request: &SendRequest) -> Result<(), SendError> {
        let result = {
            let mut sends = self.sends.write().await;
            let attempt = sends.len() + 1;
            let delivered = !self.failing_attempts.contains(&attempt);
            sends.push(RecordedSend {
                request: request.clone(),
                delivered,
            });
            if delivered {
                Ok(())
            } else {
                Err(SendError::Transport(format!(
                    "simulated failure on attempt {attempt}"
                )))
            }
        };
        self.recorded.notify_waiters();
        result
    }
}
