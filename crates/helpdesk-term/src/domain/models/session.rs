use helpdesk_client::Session;

/// Session lifecycle for one UI instance.
///
/// `Uninitialized` moves to `Active` or `Unavailable` exactly once, when
/// session creation resolves. Neither of those states ever transitions back;
/// retrying session creation means starting a new process.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionPhase {
    #[default]
    Uninitialized,
    Active(Session),
    Unavailable,
}

impl SessionPhase {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionPhase::Active(_))
    }

    pub fn session_id(&self) -> Option<&str> {
        match self {
            SessionPhase::Active(session) => Some(&session.id),
            _ => None,
        }
    }
}
