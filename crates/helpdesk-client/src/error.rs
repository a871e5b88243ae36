//! Error types for the session/message exchange contract.
//!
//! Each operation has its own failure variant so callers can react
//! differently: a failed session creation is terminal for the UI instance,
//! a failed delivery only poisons one transcript entry, and a failed
//! summary is a transient notice. HTTP-shaped variants keep the status code
//! and raw body text for diagnostics.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("session creation failed: {status} {body}")]
    SessionCreation { status: u16, body: String },
    #[error("message delivery failed: {status} {body}")]
    MessageDelivery { status: u16, body: String },
    #[error("summarize failed: {status} {body}")]
    Summarize { status: u16, body: String },
    #[error("health check failed: {status}")]
    Health { status: u16 },
    /// Local precondition failure: send/summarize attempted before a session
    /// exists. Never reaches the transport.
    #[error("no active session")]
    NoActiveSession,
    #[error("user id must not be empty")]
    EmptyUserId,
    #[error("message text must not be empty")]
    EmptyMessage,
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status for variants that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::SessionCreation { status, .. }
            | ClientError::MessageDelivery { status, .. }
            | ClientError::Summarize { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body for variants that carry one.
    pub fn body(&self) -> Option<&str> {
        match self {
            ClientError::SessionCreation { body, .. }
            | ClientError::MessageDelivery { body, .. }
            | ClientError::Summarize { body, .. } => Some(body),
            _ => None,
        }
    }
}
