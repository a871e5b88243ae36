use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-issued handle identifying one conversation.
///
/// Sessions are never persisted client-side: every client instance creates a
/// fresh one and discards it at teardown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// The backend's response to one sent message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub reply: String,
    /// Ranked FAQ matches. Accepted and exposed, but the transcript does not
    /// render them.
    #[serde(default)]
    pub faqs: Vec<FaqMatch>,
    /// Signals the conversation should be routed to a human agent.
    pub escalation: bool,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// One ranked FAQ suggestion attached to a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqMatch {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub score: f64,
}

/// On-demand conversation summary. Both fields are best-effort on the
/// backend side and may be absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub next_action: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest {
    pub user_id: String,
    pub metadata: Map<String, Value>,
}

impl CreateSessionRequest {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            metadata: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest {
    pub session_id: String,
    pub user_message: String,
}
