//! Client for the helpdesk assistant backend.
//!
//! This crate owns the session/message exchange contract: obtaining a
//! session, sending user messages, and requesting conversation summaries
//! over a plain request/response HTTP transport. It deliberately keeps no
//! state of its own — the caller owns the `Session` returned by
//! `create_session` and passes its id back in on every subsequent call.
//! Failures are surfaced as typed errors carrying the HTTP status and raw
//! body text so the UI can present something human-readable; nothing is
//! retried, since a blind retry could duplicate a user-visible message.

use async_trait::async_trait;

pub mod error;
pub mod http_client;
pub mod types;

pub use error::ClientError;
pub use types::*;

/// SupportClient trait for talking to the assistant backend.
#[async_trait]
pub trait SupportClient: Send + Sync {
    /// Create a fresh session for the given user. Called once per client
    /// lifetime; a prior session's id is never reused.
    async fn create_session(&self, user_id: &str) -> Result<Session, ClientError>;

    /// Send one user message within a session and return the assistant reply.
    async fn send_message(&self, session_id: &str, text: &str) -> Result<Reply, ClientError>;

    /// Request a condensed summary of the conversation so far.
    async fn summarize(&self, session_id: &str) -> Result<Summary, ClientError>;

    /// Check if the backend is healthy and reachable.
    async fn health_check(&self) -> Result<(), ClientError>;
}

pub type SupportClientBox = Box<dyn SupportClient>;

/// Create an HTTP client against the given base address.
pub fn for_base_url(base_url: String) -> SupportClientBox {
    Box::new(http_client::HttpSupportClient::new(base_url))
}
