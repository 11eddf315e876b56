use crate::models::ChatResponse;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, warn};

pub const FALLBACK_REPLY: &str = "I'm here with you, but something went wrong. Please try again.";

/// Forwards chat messages to the remote assistant. Every failure collapses into
/// [`FALLBACK_REPLY`].
#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: Option<String>,
}

impl ChatClient {
    pub fn new(endpoint: Option<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub async fn reply(&self, message: &str) -> String {
        let Some(endpoint) = self.endpoint.as_deref() else {
            debug!("no assistant endpoint configured");
            return FALLBACK_REPLY.to_string();
        };

        match self.forward(endpoint, message).await {
            Ok(reply) => reply,
            Err(err) => {
                warn!("assistant request failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    async fn forward(&self, endpoint: &str, message: &str) -> Result<String, reqwest::Error> {
        let reply: ChatResponse = self
            .client
            .post(endpoint)
            .json(&json!({ "message": message }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(reply.response)
    }
}
