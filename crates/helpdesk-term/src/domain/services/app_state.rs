use crate::domain::models::Author;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::SessionPhase;

use super::Scroll;

#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

const NO_SESSION_TEXT: &str = "No session. Try restarting the client.";
const SESSION_FAILED_TEXT: &str = "Failed to create session (backend unavailable).";

/// Owned state container for one conversation: the transcript, the session
/// phase, and the bits of UI state that hang off them. Created at
/// conversation start and discarded at teardown; nothing survives a restart.
pub struct AppState {
    pub messages: Vec<Message>,
    pub phase: SessionPhase,
    pub scroll: Scroll,
    /// Transient notice shown above the composer (summary text, summary
    /// failures). Replaced on every new notice.
    pub notice: Option<String>,
    pending_sends: usize,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            messages: vec![],
            phase: SessionPhase::Uninitialized,
            scroll: Scroll::default(),
            notice: None,
            pending_sends: 0,
        }
    }

    pub fn waiting_for_backend(&self) -> bool {
        self.pending_sends > 0
    }

    /// Queue a user message for sending. Returns the request id to tag the
    /// outgoing send with, or None when there is no active session — in that
    /// case a local error bubble is added and the transport is never touched.
    pub fn submit_user_message(&mut self, text: &str) -> Option<String> {
        if !self.phase.is_active() {
            self.add_message(Message::new_with_type(
                Author::Assistant,
                MessageType::Error,
                NO_SESSION_TEXT,
            ));
            return None;
        }

        let message = Message::new(Author::User, text);
        let request_id = message.id.clone();
        self.pending_sends += 1;
        self.add_message(message);
        Some(request_id)
    }

    pub fn handle_backend_event(&mut self, event: Event) {
        match event {
            Event::SessionReady(session) => {
                self.phase = SessionPhase::Active(session);
            }
            Event::SessionFailed(err) => {
                self.phase = SessionPhase::Unavailable;
                self.add_message(Message::new_with_type(
                    Author::Assistant,
                    MessageType::Error,
                    &format!("{SESSION_FAILED_TEXT}\n\n{err}"),
                ));
            }
            Event::BackendWarning(text) => {
                self.add_message(Message::new_with_type(
                    Author::Assistant,
                    MessageType::Error,
                    &text,
                ));
            }
            Event::ReplyReceived { request_id, reply } => {
                self.pending_sends = self.pending_sends.saturating_sub(1);
                self.insert_after(
                    &request_id,
                    Message::new(Author::Assistant, &reply.reply)
                        .with_escalation(reply.escalation),
                );
            }
            Event::DeliveryFailed { request_id, error } => {
                self.pending_sends = self.pending_sends.saturating_sub(1);
                self.insert_after(
                    &request_id,
                    Message::new_with_type(
                        Author::Assistant,
                        MessageType::Error,
                        &format!("Error: {error}"),
                    ),
                );
            }
            Event::SummaryReady(text) => {
                self.notice = Some(text);
            }
            Event::SummaryFailed(err) => {
                self.notice = Some(format!("Summarize failed: {err}"));
            }
            // Keyboard and UI events are routed by the loop, not here.
            _ => {}
        }
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.scroll.last();
    }

    /// Keep the scroll position consistent with the rendered line count,
    /// pinning to the bottom while the user has not scrolled away from it.
    pub fn sync_scroll(&mut self, entries: usize, viewport: usize) {
        let stick = self.scroll.is_position_at_last();
        self.scroll.set_state(entries, viewport);
        if stick {
            self.scroll.last();
        }
    }

    /// Place a reply (or its error bubble) directly under the user message
    /// that requested it, so out-of-order arrival cannot land a reply under
    /// the wrong request. Unknown ids fall back to appending.
    fn insert_after(&mut self, request_id: &str, message: Message) {
        match self.messages.iter().position(|m| m.id == request_id) {
            Some(index) => self.messages.insert(index + 1, message),
            None => self.messages.push(message),
        }
        self.scroll.last();
    }
}

impl Default for AppState {
    fn default() -> AppState {
        AppState::new()
    }
}
