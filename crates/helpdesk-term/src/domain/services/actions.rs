use std::sync::Arc;

use anyhow::Result;
use helpdesk_client::{ClientError, SupportClientBox};
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;

const NO_SUMMARY_TEXT: &str = "No summary";

/// Worker loop owning the backend client and the session handle.
///
/// The session id is written exactly once, when creation succeeds on
/// startup. Creation is never retried; when it fails, every later action is
/// answered with a local failure event and the transport is never called.
/// Message sends run on spawned workers so a slow backend does not freeze
/// the interface; the request id carried by each action lets the transcript
/// place the reply under the right message regardless of arrival order.
pub struct ActionsService {}

impl ActionsService {
    pub async fn start(
        client: SupportClientBox,
        user_id: &str,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let client = Arc::new(client);

        if let Err(err) = client.health_check().await {
            tracing::warn!(error = %err, "backend health check failed");
            event_tx.send(Event::BackendWarning(format!(
                "The backend did not pass its health check, replies may fail.\n\n{err}"
            )))?;
        }

        let session_id = match client.create_session(user_id).await {
            Ok(session) => {
                tracing::debug!(session_id = %session.id, "session created");
                let id = session.id.clone();
                event_tx.send(Event::SessionReady(session))?;
                Some(id)
            }
            Err(err) => {
                tracing::error!(error = %err, "session creation failed");
                event_tx.send(Event::SessionFailed(err.to_string()))?;
                None
            }
        };

        while let Some(action) = rx.recv().await {
            match action {
                Action::SendMessage { request_id, text } => {
                    let Some(session_id) = session_id.clone() else {
                        event_tx.send(Event::DeliveryFailed {
                            request_id,
                            error: ClientError::NoActiveSession.to_string(),
                        })?;
                        continue;
                    };

                    let worker_client = client.clone();
                    let worker_tx = event_tx.clone();
                    tokio::spawn(async move {
                        let event = match worker_client.send_message(&session_id, &text).await {
                            Ok(reply) => Event::ReplyReceived { request_id, reply },
                            Err(err) => Event::DeliveryFailed {
                                request_id,
                                error: err.to_string(),
                            },
                        };
                        let _ = worker_tx.send(event);
                    });
                }
                Action::Summarize => {
                    let Some(session_id) = session_id.as_deref() else {
                        event_tx
                            .send(Event::SummaryFailed(ClientError::NoActiveSession.to_string()))?;
                        continue;
                    };

                    match client.summarize(session_id).await {
                        Ok(summary) => event_tx.send(Event::SummaryReady(
                            summary.summary.unwrap_or_else(|| NO_SUMMARY_TEXT.to_string()),
                        ))?,
                        Err(err) => event_tx.send(Event::SummaryFailed(err.to_string()))?,
                    }
                }
            }
        }

        Ok(())
    }
}
