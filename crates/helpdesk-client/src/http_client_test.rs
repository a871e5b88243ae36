use mockito::Matcher;
use serde_json::json;

use super::*;

fn client_for(server: &mockito::ServerGuard) -> HttpSupportClient {
    HttpSupportClient::new(server.url())
}

#[tokio::test]
async fn test_create_session_parses_session() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/sessions")
        .match_body(Matcher::Json(json!({"user_id": "web_user", "metadata": {}})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "abc123", "user_id": "web_user", "metadata": {}}"#)
        .create_async()
        .await;

    let session = client_for(&server)
        .create_session("web_user")
        .await
        .unwrap();

    assert_eq!(session.id, "abc123");
    assert_eq!(session.user_id.as_deref(), Some("web_user"));
    assert!(session.created_at.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_session_ids_are_not_reused_across_instances() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/sessions")
        .with_status(200)
        .with_body(r#"{"id": "first"}"#)
        .create_async()
        .await;
    let first = client_for(&server).create_session("web_user").await.unwrap();

    let mut server_two = mockito::Server::new_async().await;
    let _mock = server_two
        .mock("POST", "/sessions")
        .with_status(200)
        .with_body(r#"{"id": "second"}"#)
        .create_async()
        .await;
    let second = client_for(&server_two)
        .create_session("web_user")
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_create_session_failure_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/sessions")
        .with_status(503)
        .with_body("backend unavailable")
        .create_async()
        .await;

    let err = client_for(&server)
        .create_session("web_user")
        .await
        .unwrap_err();

    match err {
        ClientError::SessionCreation { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "backend unavailable");
        }
        other => panic!("expected SessionCreation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_session_rejects_empty_user_id_without_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/sessions")
        .expect(0)
        .create_async()
        .await;

    let err = client_for(&server).create_session("").await.unwrap_err();

    assert!(matches!(err, ClientError::EmptyUserId));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_message_parses_reply() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/message")
        .match_body(Matcher::Json(json!({
            "session_id": "abc123",
            "user_message": "Where is my order?"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"reply": "Your order ships tomorrow.", "escalation": false}"#)
        .create_async()
        .await;

    let reply = client_for(&server)
        .send_message("abc123", "Where is my order?")
        .await
        .unwrap();

    assert_eq!(reply.reply, "Your order ships tomorrow.");
    assert!(!reply.escalation);
    assert!(reply.faqs.is_empty());
    assert!(reply.summary.is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_send_message_parses_escalation_and_faqs() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/message")
        .with_status(200)
        .with_body(
            r#"{
                "reply": "Let me hand you to a colleague.",
                "escalation": true,
                "reason": "refund request",
                "faqs": [
                    {"id": 3, "question": "How do refunds work?", "answer": "Within 14 days.", "score": 0.91}
                ]
            }"#,
        )
        .create_async()
        .await;

    let reply = client_for(&server)
        .send_message("abc123", "I want a refund")
        .await
        .unwrap();

    assert!(reply.escalation);
    assert_eq!(reply.reason.as_deref(), Some("refund request"));
    assert_eq!(reply.faqs.len(), 1);
    assert_eq!(reply.faqs[0].question, "How do refunds work?");
}

#[tokio::test]
async fn test_send_message_failure_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/message")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let err = client_for(&server)
        .send_message("abc123", "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MessageDelivery { .. }));
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some("internal error"));
}

#[tokio::test]
async fn test_send_message_rejects_blank_text_without_network_call() {
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", "/message").expect(0).create_async().await;

    let err = client_for(&server)
        .send_message("abc123", "   ")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::EmptyMessage));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_summarize_parses_summary_and_next_action() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/sessions/abc123/summarize")
        .with_status(200)
        .with_body(r#"{"summary": "Customer asked about shipping.", "next_action": "none"}"#)
        .create_async()
        .await;

    let summary = client_for(&server).summarize("abc123").await.unwrap();

    assert_eq!(summary.summary.as_deref(), Some("Customer asked about shipping."));
    assert_eq!(summary.next_action.as_deref(), Some("none"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_summarize_tolerates_absent_fields() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/sessions/abc123/summarize")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let summary = client_for(&server).summarize("abc123").await.unwrap();

    assert!(summary.summary.is_none());
    assert!(summary.next_action.is_none());
}

#[tokio::test]
async fn test_summarize_failure_carries_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/sessions/abc123/summarize")
        .with_status(404)
        .with_body("No messages found for this session")
        .create_async()
        .await;

    let err = client_for(&server).summarize("abc123").await.unwrap_err();

    assert!(matches!(err, ClientError::Summarize { .. }));
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_health_check_failure() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/health")
        .with_status(500)
        .with_body(r#"{"status": "error"}"#)
        .create_async()
        .await;

    let err = client_for(&server).health_check().await.unwrap_err();
    assert!(matches!(err, ClientError::Health { status: 500 }));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_error() {
    // Nothing listens here; reqwest fails at connect time.
    let client = HttpSupportClient::new("http://127.0.0.1:1".to_string())
        .with_timeout(Duration::from_millis(250));

    let err = client.create_session("web_user").await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_base_url_trailing_slash_is_normalized() {
    let client = HttpSupportClient::new("http://127.0.0.1:8000/".to_string());
    assert_eq!(client.base_url(), "http://127.0.0.1:8000");
}
