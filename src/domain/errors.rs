use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("send api request failed: {0}")]
    Transport(String),
    #[error("send api request timed out after {0:?}")]
    Timeout(Duration),
    #[error("send api returned {status}: {detail}")]
    Platform { status: u16, detail: String },
}

#[derive(Debug, Error)]
#[error("subscription verification rejected")]
pub struct VerificationRejected;
