use async_trait::async_trait;

use crate::domain::{errors::SendError, models::SendRequest};

/// Outbound side of the platform: the only place network sends happen.
#[async_trait]
pub trait SendApi: Send + Sync {
    async fn send(&self, request: &SendRequest) -> Result<(), SendError>;
}
