use helpdesk_client::{Reply, Session};

use super::*;

fn session(id: &str) -> Session {
    Session {
        id: id.to_string(),
        user_id: Some("web_user".to_string()),
        metadata: None,
        created_at: None,
    }
}

fn reply(text: &str, escalation: bool) -> Reply {
    Reply {
        reply: text.to_string(),
        faqs: vec![],
        escalation,
        summary: None,
        reason: None,
    }
}

fn active_state() -> AppState {
    let mut app = AppState::new();
    app.handle_backend_event(Event::SessionReady(session("abc123")));
    app
}

#[test]
fn test_sequential_sends_preserve_submission_order() {
    let mut app = active_state();

    let first = app.submit_user_message("Where is my order?").unwrap();
    app.handle_backend_event(Event::ReplyReceived {
        request_id: first,
        reply: reply("It ships tomorrow.", false),
    });
    let second = app.submit_user_message("Thanks!").unwrap();
    app.handle_backend_event(Event::ReplyReceived {
        request_id: second,
        reply: reply("Anytime.", false),
    });

    let authors: Vec<Author> = app.messages.iter().map(|m| m.author.clone()).collect();
    assert_eq!(
        authors,
        vec![Author::User, Author::Assistant, Author::User, Author::Assistant]
    );
    assert_eq!(app.messages[0].text, "Where is my order?");
    assert_eq!(app.messages[1].text, "It ships tomorrow.");
    assert!(!app.waiting_for_backend());
}

#[test]
fn test_out_of_order_replies_land_under_their_requests() {
    let mut app = active_state();

    let first = app.submit_user_message("first question").unwrap();
    let second = app.submit_user_message("second question").unwrap();

    // Second reply arrives before the first.
    app.handle_backend_event(Event::ReplyReceived {
        request_id: second,
        reply: reply("second answer", false),
    });
    app.handle_backend_event(Event::ReplyReceived {
        request_id: first,
        reply: reply("first answer", false),
    });

    let texts: Vec<&str> = app.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "first question",
            "first answer",
            "second question",
            "second answer"
        ]
    );
}

#[test]
fn test_submit_without_session_adds_local_error_only() {
    let mut app = AppState::new();

    assert!(app.submit_user_message("hello?").is_none());

    assert_eq!(app.messages.len(), 1);
    assert!(app.messages[0].is_error());
    assert!(!app.waiting_for_backend());
}

#[test]
fn test_session_failure_is_terminal_for_this_instance() {
    let mut app = AppState::new();

    app.handle_backend_event(Event::SessionFailed("connection refused".to_string()));

    assert_eq!(app.phase, SessionPhase::Unavailable);
    assert!(app.messages[0].is_error());
    assert!(app.messages[0].text.contains("connection refused"));

    // Still unavailable; sends keep failing locally.
    assert!(app.submit_user_message("anyone there?").is_none());
    assert_eq!(app.messages.len(), 2);
}

#[test]
fn test_delivery_failure_becomes_inline_error_bubble() {
    let mut app = active_state();

    let request_id = app.submit_user_message("hello").unwrap();
    assert!(app.waiting_for_backend());

    app.handle_backend_event(Event::DeliveryFailed {
        request_id,
        error: "message delivery failed: 500 internal error".to_string(),
    });

    assert!(!app.waiting_for_backend());
    assert_eq!(app.messages.len(), 2);
    assert!(app.messages[1].is_error());
    assert!(app.messages[1].text.contains("500 internal error"));

    // The conversation stays usable for subsequent sends.
    assert!(app.submit_user_message("retrying that").is_some());
}

#[test]
fn test_escalated_reply_carries_marker_flag() {
    let mut app = active_state();

    let request_id = app.submit_user_message("I want a refund").unwrap();
    app.handle_backend_event(Event::ReplyReceived {
        request_id,
        reply: reply("Let me get a human.", true),
    });

    assert!(app.messages[1].escalated);
    assert!(!app.messages[1].is_error());
}

#[test]
fn test_summary_events_set_transient_notice() {
    let mut app = active_state();

    app.handle_backend_event(Event::SummaryReady("Customer asked about shipping.".to_string()));
    assert_eq!(app.notice.as_deref(), Some("Customer asked about shipping."));

    app.handle_backend_event(Event::SummaryFailed("summarize failed: 500".to_string()));
    assert!(app.notice.as_deref().unwrap().starts_with("Summarize failed"));

    // Notices never touch the transcript.
    assert!(app.messages.is_empty());
}

#[test]
fn test_sync_scroll_sticks_to_bottom_until_user_scrolls_away() {
    let mut app = active_state();
    app.sync_scroll(40, 10);
    assert_eq!(app.scroll.position, 30);

    app.scroll.up_page();
    app.sync_scroll(45, 10);
    assert_eq!(app.scroll.position, 20);

    app.scroll.last();
    app.sync_scroll(50, 10);
    assert_eq!(app.scroll.position, 40);
}
