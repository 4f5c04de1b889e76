//! Delivering timer, provider, and clipboard results.
//!
//! Completions arrive as messages from spawned tasks, so by the time one
//! lands the owning view may have been torn down or re-armed. Delivery
//! goes through [`AsyncAction::complete`], which drops anything carrying
//! a stale generation; only a live delivery applies side effects.

use std::time::Instant;

use mentor_core::ActionOutcome;
use rand::Rng;
use tracing::debug;

use crate::data::{ApiKey, ExportRecord, IntegrationStatus};
use crate::message::{ActionTarget, AnalysisTarget, CopyTarget};
use crate::provider::AnalysisReply;
use crate::state::{AppState, ToastLevel};

use super::{flows, UpdateResult};

/// A scheduled timer fired.
pub fn handle_action_completed(
    state: &mut AppState,
    target: ActionTarget,
    generation: u64,
    outcome: ActionOutcome,
) -> UpdateResult {
    let Some(action) = flows::action_mut(state, target) else {
        return UpdateResult::none();
    };
    if !action.complete(generation, outcome, None) {
        debug!(?target, generation, "stale completion dropped");
        return UpdateResult::none();
    }

    match outcome {
        ActionOutcome::Succeeded => apply_success(state, target),
        ActionOutcome::Failed => {
            state.push_toast(
                ToastLevel::Error,
                "The operation failed. Try again in a moment.",
            );
        }
    }
    UpdateResult::none()
}

/// Per-target side effects of a successful completion.
fn apply_success(state: &mut AppState, target: ActionTarget) {
    match target {
        ActionTarget::Invite => {
            let email = state.team.invite_email.trim().to_string();
            state.team.show_invite = false;
            state.team.invite_email.clear();
            state.team.invite.reset();
            state.push_toast(ToastLevel::Success, format!("Invitation sent to {email}"));
        }
        ActionTarget::ProfileSave => {
            state.settings.profile.editing = false;
            state.push_toast(ToastLevel::Success, "Profile saved");
        }
        ActionTarget::ApiKeyGenerate => {
            let api_keys = &mut state.settings.api_keys;
            let name = format!("API Key {}", api_keys.keys.len() + 1);
            api_keys.keys.push(ApiKey {
                name,
                key: generate_key(),
                last_used: "Never",
                usage: 0,
            });
            // New keys start revealed; this is the only time the full
            // value is shown.
            api_keys.visible.push(true);
            api_keys.cursor = api_keys.keys.len() - 1;
            state.push_toast(
                ToastLevel::Success,
                "New API key generated. Copy it now; it will be masked later.",
            );
        }
        ActionTarget::IntegrationConnect(idx) => {
            if let Some(row) = state.settings.integrations.rows.get_mut(idx) {
                row.status = IntegrationStatus::Connected;
                row.last_sync = "just now".to_string();
                let name = row.name;
                state.push_toast(ToastLevel::Success, format!("{name} connected"));
            }
        }
        ActionTarget::NotificationsSave => {
            state.push_toast(ToastLevel::Success, "Notification preferences saved");
        }
        ActionTarget::PlanUpgrade => {
            let billing = &mut state.settings.billing;
            billing.plan_name = "Team";
            billing.plan_price_cents = 9900;
            state.push_toast(ToastLevel::Success, "Upgraded to the Team plan");
        }
        ActionTarget::SignOutOthers => {
            let before = state.settings.security.sessions.len();
            state.settings.security.sessions.retain(|s| s.current);
            let removed = before - state.settings.security.sessions.len();
            state.push_toast(
                ToastLevel::Success,
                format!("Signed out {removed} other session(s)"),
            );
        }
        ActionTarget::Export => {
            let count = state.settings.export.selected_categories().len();
            let record = ExportRecord {
                label: "Data Export",
                date: chrono::Local::now().format("%Y-%m-%d").to_string(),
                size: format!("{:.1} MB", rand::thread_rng().gen_range(0.5..3.0)),
            };
            state.settings.export.history.insert(0, record);
            state.push_toast(
                ToastLevel::Success,
                format!("Export ready ({count} categories)"),
            );
        }
        ActionTarget::DeleteAccount => {
            state.settings.delete.confirmation.clear();
            state.push_toast(ToastLevel::Info, "Account deleted");
        }
    }
}

fn generate_key() -> String {
    const CHARS: &[u8] = b"abcdef0123456789";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..16)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect();
    format!("cm_live_{suffix}")
}

/// The analysis provider came back.
pub fn handle_analysis_completed(
    state: &mut AppState,
    target: AnalysisTarget,
    generation: u64,
    result: Result<AnalysisReply, String>,
) -> UpdateResult {
    match target {
        AnalysisTarget::Dashboard(kind) => {
            let action = state.dashboard.analyze_mut(kind);
            let delivered = match &result {
                Ok(reply) => action.complete(
                    generation,
                    ActionOutcome::Succeeded,
                    Some(reply.text.clone()),
                ),
                Err(err) => action.complete(generation, ActionOutcome::Failed, Some(err.clone())),
            };
            if !delivered {
                debug!(?kind, generation, "stale analysis reply dropped");
            } else if result.is_err() {
                state.push_toast(ToastLevel::Error, "Analysis failed. Try again.");
            }
        }
        AnalysisTarget::Chat => match result {
            Ok(reply) => {
                if state
                    .chat
                    .send
                    .complete(generation, ActionOutcome::Succeeded, None)
                {
                    state.chat.push_mentor(reply.text, reply.has_code);
                    state.chat.send.reset();
                } else {
                    debug!(generation, "stale chat reply dropped");
                }
            }
            Err(err) => {
                if state
                    .chat
                    .send
                    .complete(generation, ActionOutcome::Failed, Some(err))
                {
                    state.push_toast(ToastLevel::Error, "The mentor didn't answer. Try again.");
                }
            }
        },
    }
    UpdateResult::none()
}

/// A clipboard write finished.
pub fn handle_clipboard_result(state: &mut AppState, target: CopyTarget, ok: bool) -> UpdateResult {
    if !ok {
        // Clipboard access can fail under some terminals; tell the user
        // instead of flashing a false "Copied!".
        state.push_toast(
            ToastLevel::Error,
            "Couldn't access the clipboard. Select the text to copy it manually.",
        );
        return UpdateResult::none();
    }
    match target {
        CopyTarget::ChatMessage(idx) => {
            state.chat.copied = Some((idx, Instant::now()));
        }
        CopyTarget::InviteLink => {
            state.team.link_copied = Some(Instant::now());
        }
        CopyTarget::ApiKey(_) => {
            state.push_toast(ToastLevel::Success, "API key copied");
        }
    }
    UpdateResult::none()
}
