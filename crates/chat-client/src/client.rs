//! Chat gateway HTTP client.

use crate::error::ClientError;
use crate::types::*;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// The three gateway capabilities the bot depends on.
#[async_trait]
pub trait ChatConnection: Send + Sync {
    /// Send text to a channel.
    async fn send(&self, channel_id: &str, text: &str) -> Result<(), ClientError>;

    /// Send text directly to a user.
    async fn send_direct(&self, user_id: &str, text: &str) -> Result<(), ClientError>;

    /// Terminate the gateway connection.
    async fn disconnect(&self) -> Result<(), ClientError>;
}

/// Chat gateway REST API client.
#[derive(Clone)]
pub struct GatewayClient {
    client: Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a new gateway client authenticating with the given token.
    pub fn new(base_url: impl Into<String>, token: &str) -> Result<Self, ClientError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ClientError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check if the gateway is healthy.
    pub async fn health_check(&self) -> bool {
        self.client
            .get(format!("{}/v1/health", self.base_url))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    /// Fetch the identity of the account behind the token.
    #[instrument(skip(self))]
    pub async fn identity(&self) -> Result<Identity, ClientError> {
        let response = self
            .client
            .get(format!("{}/v1/identity", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(msg));
        }

        Ok(response.json().await?)
    }

    /// Receive pending messages.
    #[instrument(skip(self))]
    pub async fn receive(&self) -> Result<Vec<IncomingMessage>, ClientError> {
        let response = self
            .client
            .get(format!("{}/v1/receive", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(msg));
        }

        let messages: Vec<IncomingMessage> = response.json().await?;
        debug!("Received {} messages", messages.len());
        Ok(messages)
    }
}

#[async_trait]
impl ChatConnection for GatewayClient {
    async fn send(&self, channel_id: &str, text: &str) -> Result<(), ClientError> {
        let request = SendMessageRequest {
            channel_id: channel_id.to_string(),
            content: text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/v1/send", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Send failed: {}", msg);
            return Err(ClientError::SendFailed(msg));
        }

        debug!("Sent message to channel {}", channel_id);
        Ok(())
    }

    async fn send_direct(&self, user_id: &str, text: &str) -> Result<(), ClientError> {
        let request = SendDirectRequest {
            user_id: user_id.to_string(),
            content: text.to_string(),
        };

        let response = self
            .client
            .post(format!("{}/v1/send-direct", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            warn!("Direct send failed: {}", msg);
            return Err(ClientError::SendFailed(msg));
        }

        debug!("Sent direct message to {}", user_id);
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .post(format!("{}/v1/disconnect", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(msg));
        }

        debug!("Gateway connection closed");
        Ok(())
    }
}
