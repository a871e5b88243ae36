use helpdesk_client::{Reply, Session};
use tui_textarea::Input;

#[derive(Debug)]
pub enum Event {
    SessionReady(Session),
    SessionFailed(String),
    BackendWarning(String),
    ReplyReceived { request_id: String, reply: Reply },
    DeliveryFailed { request_id: String, error: String },
    SummaryReady(String),
    SummaryFailed(String),
    KeyboardCharInput(Input),
    KeyboardCTRLC,
    KeyboardCTRLS,
    KeyboardEnter,
    KeyboardPaste(String),
    UITick,
    UIScrollDown,
    UIScrollUp,
    UIScrollPageDown,
    UIScrollPageUp,
}
