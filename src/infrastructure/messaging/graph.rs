use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    application::services::send_api::SendApi,
    domain::{errors::SendError, models::SendRequest},
};

#[derive(Clone)]
pub struct GraphSendApiConfig {
    pub base_url: String,
    pub api_version: String,
    pub access_token: String,
    pub timeout: Duration,
}

/// Send API client for the Messenger Platform (`/me/messages` on the Graph API).
pub struct GraphSendApi {
    http: Client,
    endpoint: String,
    access_token: String,
    timeout: Duration,
}

impl GraphSendApi {
    pub fn new(config: GraphSendApiConfig) -> anyhow::Result<Arc<dyn SendApi>> {
        let http = Client::builder()
            .user_agent("menu-bot/graph")
            .timeout(config.timeout)
            .build()
            .context("failed to build graph api client")?;

        let endpoint = format!(
            "{}/{}/me/messages",
            config.base_url.trim_end_matches('/'),
            config.api_version.trim_matches('/')
        );

        Ok(Arc::new(Self {
            http,
            endpoint,
            access_token: config.access_token,
            timeout: config.timeout,
        }) as Arc<dyn SendApi>)
    }

    fn transport_error(&self, err: reqwest::Error) -> SendError {
        if err.is_timeout() {
            return SendError::Timeout(self.timeout);
        }
        // The request url carries the access token.
        SendError::Transport(err.without_url().to_string())
    }
}

#[async_trait]
impl SendApi for GraphSendApi {
    async fn send(&self, request: &SendRequest) -> Result<(), SendError> {
        let response = self
            .http
            .post(&self.endpoint)
            .query(&[("access_token", self.access_token.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|err| self.transport_error(err))?;

        Err(SendError::Platform {
            status: status.as_u16(),
            detail: platform_detail(&body),
        })
    }
}

fn platform_detail(body: &str) -> String {
    match serde_json::from_str::<GraphErrorEnvelope>(body) {
        Ok(envelope) => {
            let error = envelope.error;
            let mut detail = error.message.unwrap_or_else(|| "unknown error".to_string());
            if let Some(kind) = error.error_type {
                detail.push_str(&format!(" (type {kind}"));
                if let Some(code) = error.code {
                    detail.push_str(&format!(", code {code}"));
                }
                detail.push(')');
            }
            if let Some(trace) = error.fbtrace_id {
                detail.push_str(&format!(" [trace {trace}]"));
            }
            detail
        }
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphError,
}

#[derive(Debug, Deserialize)]
struct GraphError {
    message: Option<String>,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<i64>,
    fbtrace_id: Option<String>,
}
