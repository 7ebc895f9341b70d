//! Messenger menu bot: webhook ingestion, a one-level scripted menu dialogue,
//! and replies relayed through the platform's Send API.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
