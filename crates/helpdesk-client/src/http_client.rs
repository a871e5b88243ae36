use std::time::Duration;

use async_trait::async_trait;

use crate::types::{CreateSessionRequest, MessageRequest, Reply, Session, Summary};
use crate::{ClientError, SupportClient};

#[cfg(test)]
#[path = "http_client_test.rs"]
mod tests;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP implementation of [`SupportClient`] against a configurable base
/// address.
pub struct HttpSupportClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpSupportClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Capture status and raw body from a failed response so the caller
    /// gets something diagnosable instead of a bare status line.
    async fn failure_parts(response: reqwest::Response) -> (u16, String) {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "failed to read error body".to_string());
        (status, body)
    }
}

#[async_trait]
impl SupportClient for HttpSupportClient {
    async fn create_session(&self, user_id: &str) -> Result<Session, ClientError> {
        if user_id.is_empty() {
            return Err(ClientError::EmptyUserId);
        }

        let url = format!("{}/sessions", self.base_url);
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&CreateSessionRequest::new(user_id))
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body) = Self::failure_parts(response).await;
            tracing::error!(status, body = %body, "session creation rejected");
            return Err(ClientError::SessionCreation { status, body });
        }

        Ok(response.json::<Session>().await?)
    }

    async fn send_message(&self, session_id: &str, text: &str) -> Result<Reply, ClientError> {
        if text.trim().is_empty() {
            return Err(ClientError::EmptyMessage);
        }

        let url = format!("{}/message", self.base_url);
        let payload = MessageRequest {
            session_id: session_id.to_string(),
            user_message: text.to_string(),
        };
        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body) = Self::failure_parts(response).await;
            tracing::error!(status, body = %body, "message delivery rejected");
            return Err(ClientError::MessageDelivery { status, body });
        }

        Ok(response.json::<Reply>().await?)
    }

    async fn summarize(&self, session_id: &str) -> Result<Summary, ClientError> {
        let url = format!("{}/sessions/{}/summarize", self.base_url, session_id);
        let response = self.client.post(&url).timeout(self.timeout).send().await?;

        if !response.status().is_success() {
            let (status, body) = Self::failure_parts(response).await;
            tracing::error!(status, body = %body, "summarize rejected");
            return Err(ClientError::Summarize { status, body });
        }

        Ok(response.json::<Summary>().await?)
    }

    async fn health_check(&self) -> Result<(), ClientError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(status = status.as_u16(), "health check failed");
            return Err(ClientError::Health {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
