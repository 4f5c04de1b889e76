//! Arming simulated operations.
//!
//! Every flow follows the same shape: validate, call
//! [`AsyncAction::trigger`], and hand the scheduled completion (or the
//! provider request) to the event loop. Re-triggering a pending flow is
//! a silent no-op because `trigger` refuses to double-arm.

use std::time::Duration;

use mentor_core::{ActionOutcome, AsyncAction};
use tracing::debug;

use crate::data::IntegrationStatus;
use crate::message::{ActionTarget, AnalysisTarget, CopyTarget};
use crate::provider::{AnalysisKind, AnalysisRequest};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

// Base latencies of the simulated backend, before config scaling.
const INVITE_DELAY: Duration = Duration::from_millis(1200);
const SAVE_DELAY: Duration = Duration::from_millis(800);
const KEY_GENERATE_DELAY: Duration = Duration::from_millis(1000);
const CONNECT_DELAY: Duration = Duration::from_millis(2000);
const UPGRADE_DELAY: Duration = Duration::from_millis(1500);
const SIGN_OUT_DELAY: Duration = Duration::from_millis(1000);
const DELETE_DELAY: Duration = Duration::from_millis(3000);

/// Export is the long one; its progress bar is derived from this.
pub const EXPORT_DELAY: Duration = Duration::from_millis(5000);

fn base_delay(target: ActionTarget) -> Duration {
    match target {
        ActionTarget::Invite => INVITE_DELAY,
        ActionTarget::ProfileSave => SAVE_DELAY,
        ActionTarget::ApiKeyGenerate => KEY_GENERATE_DELAY,
        ActionTarget::IntegrationConnect(_) => CONNECT_DELAY,
        ActionTarget::NotificationsSave => SAVE_DELAY,
        ActionTarget::PlanUpgrade => UPGRADE_DELAY,
        ActionTarget::SignOutOthers => SIGN_OUT_DELAY,
        ActionTarget::Export => EXPORT_DELAY,
        ActionTarget::DeleteAccount => DELETE_DELAY,
    }
}

/// The action instance a target routes to, if it exists.
pub(crate) fn action_mut(state: &mut AppState, target: ActionTarget) -> Option<&mut AsyncAction> {
    match target {
        ActionTarget::Invite => Some(&mut state.team.invite),
        ActionTarget::ProfileSave => Some(&mut state.settings.profile.save),
        ActionTarget::ApiKeyGenerate => Some(&mut state.settings.api_keys.generate),
        ActionTarget::IntegrationConnect(idx) => state.settings.integrations.connect.get_mut(idx),
        ActionTarget::NotificationsSave => Some(&mut state.settings.notifications.save),
        ActionTarget::PlanUpgrade => Some(&mut state.settings.billing.upgrade),
        ActionTarget::SignOutOthers => Some(&mut state.settings.security.sign_out_others),
        ActionTarget::Export => Some(&mut state.settings.export.export),
        ActionTarget::DeleteAccount => Some(&mut state.settings.delete.delete),
    }
}

/// Whether the target's preconditions hold right now.
fn ready(state: &AppState, target: ActionTarget) -> bool {
    match target {
        ActionTarget::Invite => state.team.invite_email_valid(),
        ActionTarget::IntegrationConnect(idx) => state
            .settings
            .integrations
            .rows
            .get(idx)
            .map_or(false, |row| row.status != IntegrationStatus::Connected),
        ActionTarget::Export => state.settings.export.selected.iter().any(|on| *on),
        ActionTarget::DeleteAccount => state.settings.delete.confirmed(),
        _ => true,
    }
}

/// Arm a timer-backed flow. The shipped mock backend always succeeds.
pub fn trigger(state: &mut AppState, target: ActionTarget) -> UpdateResult {
    if !ready(state, target) {
        return UpdateResult::none();
    }

    let delay = state.config.simulation.scale(base_delay(target));
    let Some(action) = action_mut(state, target) else {
        return UpdateResult::none();
    };
    let Some(completion) = action.trigger(delay, ActionOutcome::Succeeded) else {
        // Already pending, keep the in-flight timer.
        return UpdateResult::none();
    };
    debug!(?target, delay_ms = delay.as_millis() as u64, "flow armed");

    if let ActionTarget::IntegrationConnect(idx) = target {
        if let Some(row) = state.settings.integrations.rows.get_mut(idx) {
            row.status = IntegrationStatus::Pending;
        }
    }

    UpdateResult::action(UpdateAction::ScheduleCompletion { target, completion })
}

/// Run one of the dashboard analysis tabs through the provider.
///
/// The action is armed with a zero-length timer: the provider owns the
/// latency, and its reply delivers the completion.
pub fn run_analysis(state: &mut AppState, kind: AnalysisKind) -> UpdateResult {
    let input = state.dashboard.active_input().to_string();
    if input.trim().is_empty() {
        return UpdateResult::none();
    }

    let Some(scheduled) = state
        .dashboard
        .analyze_mut(kind)
        .trigger(Duration::ZERO, ActionOutcome::Succeeded)
    else {
        return UpdateResult::none();
    };

    UpdateResult::action(UpdateAction::Analyze {
        target: AnalysisTarget::Dashboard(kind),
        generation: scheduled.generation,
        request: AnalysisRequest { kind, input },
    })
}

/// Send the chat input to the mentor.
pub fn send_chat(state: &mut AppState) -> UpdateResult {
    let text = state.chat.input.trim().to_string();
    if text.is_empty() || state.chat.send.is_pending() {
        return UpdateResult::none();
    }

    let Some(scheduled) = state
        .chat
        .send
        .trigger(Duration::ZERO, ActionOutcome::Succeeded)
    else {
        return UpdateResult::none();
    };

    state.chat.input.clear();
    state.chat.push_user(text.clone());

    UpdateResult::action(UpdateAction::Analyze {
        target: AnalysisTarget::Chat,
        generation: scheduled.generation,
        request: AnalysisRequest {
            kind: AnalysisKind::Explain,
            input: text,
        },
    })
}

/// Resolve the text a copy target points at and hand it to the runtime.
pub fn copy(state: &AppState, target: CopyTarget) -> UpdateResult {
    let text = match target {
        CopyTarget::ChatMessage(idx) => match state.chat.messages.get(idx) {
            Some(msg) => msg.text.clone(),
            None => return UpdateResult::none(),
        },
        CopyTarget::InviteLink => crate::data::INVITE_LINK.to_string(),
        CopyTarget::ApiKey(idx) => match state.settings.api_keys.keys.get(idx) {
            Some(key) => key.key.clone(),
            None => return UpdateResult::none(),
        },
    };
    UpdateResult::action(UpdateAction::CopyToClipboard { target, text })
}
