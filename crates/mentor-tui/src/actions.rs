//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action becomes a tokio task that reports back through the
//! message channel. Nothing here touches `AppState`; results re-enter
//! the update loop as messages and go through the generation check.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use mentor_app::provider::LocalAnalysisProvider;
use mentor_app::{Message, MockProvider, UpdateAction};

use crate::clipboard;

/// Execute an action by spawning a background task
pub fn handle_action(
    action: UpdateAction,
    msg_tx: mpsc::Sender<Message>,
    provider: Arc<MockProvider>,
) {
    match action {
        UpdateAction::ScheduleCompletion { target, completion } => {
            // Exactly one timer per trigger; delivery is validated
            // against the carried generation on arrival.
            tokio::spawn(async move {
                tokio::time::sleep(completion.delay).await;
                let _ = msg_tx
                    .send(Message::ActionCompleted {
                        target,
                        generation: completion.generation,
                        outcome: completion.outcome,
                    })
                    .await;
            });
        }

        UpdateAction::Analyze {
            target,
            generation,
            request,
        } => {
            tokio::spawn(async move {
                let result = provider
                    .analyze(request)
                    .await
                    .map_err(|err| err.to_string());
                let _ = msg_tx
                    .send(Message::AnalysisCompleted {
                        target,
                        generation,
                        result,
                    })
                    .await;
            });
        }

        UpdateAction::CopyToClipboard { target, text } => {
            let ok = match clipboard::copy(&text) {
                Ok(()) => true,
                Err(err) => {
                    warn!(%err, "clipboard write failed");
                    false
                }
            };
            tokio::spawn(async move {
                let _ = msg_tx.send(Message::ClipboardResult { target, ok }).await;
            });
        }
    }
}
