//! Key event handlers for the settings screen.
//!
//! Tab/BackTab walk the section sidebar, `o` opens the grouped section
//! navigator; everything else goes to the active section's panel. Sections with text entry (profile editing,
//! delete confirmation) capture keys while that mode is on.

use mentor_core::Section;

use crate::input_key::InputKey;
use crate::message::{ActionTarget, CopyTarget, Message};
use crate::prefs::{notification_key, ANALYSIS_SETTINGS, CHANNELS, CUSTOM_RULES, NOTIFICATION_CATEGORIES};
use crate::state::{AppState, ConfirmDialog, DropdownKind, DropdownState};

use super::keys::handle_key_global;

pub fn handle_key_settings(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Typing modes swallow everything first.
    if state.section == Section::Profile && state.settings.profile.editing {
        return handle_key_profile_editing(state, key);
    }
    if state.section == Section::Delete && state.settings.delete.typing {
        return handle_key_delete_typing(state, key);
    }

    match key {
        InputKey::Tab => return Some(Message::GotoSection(state.section.next())),
        InputKey::BackTab => return Some(Message::GotoSection(state.section.prev())),
        // The grouped section navigator, cursor parked on the active panel.
        InputKey::Char('o') => {
            state.dropdown = Some(DropdownState::open(
                DropdownKind::Section,
                state.section.index(),
            ));
            return None;
        }
        _ => {}
    }

    match state.section {
        Section::Profile => handle_key_profile(state, key),
        Section::ApiKeys => handle_key_api_keys(state, key),
        Section::Integrations => handle_key_integrations(state, key),
        Section::Notifications => handle_key_notifications(state, key),
        Section::Analysis => handle_key_analysis(state, key),
        Section::Billing => handle_key_billing(state, key),
        Section::Security => handle_key_security(state, key),
        Section::Export => handle_key_export(state, key),
        Section::Delete => handle_key_delete(state, key),
    }
}

// ─────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────

fn handle_key_profile(state: &mut AppState, key: InputKey) -> Option<Message> {
    let profile = &mut state.settings.profile;
    match key {
        InputKey::Up => {
            profile.cursor = profile.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            profile.cursor = (profile.cursor + 1).min(profile.fields.len() - 1);
            None
        }
        InputKey::Char('e') | InputKey::Enter => {
            profile.editing = true;
            None
        }
        _ => handle_key_global(state, key),
    }
}

fn handle_key_profile_editing(state: &mut AppState, key: InputKey) -> Option<Message> {
    let profile = &mut state.settings.profile;
    match key {
        InputKey::Esc => {
            profile.editing = false;
            None
        }
        InputKey::Enter => Some(Message::TriggerAction(ActionTarget::ProfileSave)),
        InputKey::Up => {
            profile.cursor = profile.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            profile.cursor = (profile.cursor + 1).min(profile.fields.len() - 1);
            None
        }
        InputKey::Backspace => {
            if let Some(field) = profile.fields.get_mut(profile.cursor) {
                field.value.pop();
            }
            None
        }
        InputKey::CharCtrl('u') => {
            if let Some(field) = profile.fields.get_mut(profile.cursor) {
                field.value.clear();
            }
            None
        }
        InputKey::Char(c) => {
            if let Some(field) = profile.fields.get_mut(profile.cursor) {
                field.value.push(c);
            }
            None
        }
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────
// API keys
// ─────────────────────────────────────────────────────────────────

fn handle_key_api_keys(state: &mut AppState, key: InputKey) -> Option<Message> {
    let api_keys = &mut state.settings.api_keys;
    match key {
        InputKey::Up => {
            api_keys.cursor = api_keys.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            if !api_keys.keys.is_empty() {
                api_keys.cursor = (api_keys.cursor + 1).min(api_keys.keys.len() - 1);
            }
            None
        }
        InputKey::Char('v') => {
            api_keys.toggle_visibility();
            None
        }
        InputKey::Char('y') => Some(Message::CopyRequested(CopyTarget::ApiKey(api_keys.cursor))),
        InputKey::Char('g') => Some(Message::TriggerAction(ActionTarget::ApiKeyGenerate)),
        _ => handle_key_global(state, key),
    }
}

// ─────────────────────────────────────────────────────────────────
// Integrations
// ─────────────────────────────────────────────────────────────────

fn handle_key_integrations(state: &mut AppState, key: InputKey) -> Option<Message> {
    let integrations = &mut state.settings.integrations;
    match key {
        InputKey::Up => {
            integrations.cursor = integrations.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            integrations.cursor = (integrations.cursor + 1).min(integrations.rows.len() - 1);
            None
        }
        InputKey::Enter => Some(Message::TriggerAction(ActionTarget::IntegrationConnect(
            integrations.cursor,
        ))),
        _ => handle_key_global(state, key),
    }
}

// ─────────────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────────────

fn handle_key_notifications(state: &mut AppState, key: InputKey) -> Option<Message> {
    let notifications = &mut state.settings.notifications;
    match key {
        InputKey::Up => {
            notifications.cursor = notifications.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            notifications.cursor =
                (notifications.cursor + 1).min(NOTIFICATION_CATEGORIES.len() - 1);
            None
        }
        InputKey::Left => {
            notifications.channel = notifications.channel.saturating_sub(1);
            None
        }
        InputKey::Right => {
            notifications.channel = (notifications.channel + 1).min(CHANNELS.len() - 1);
            None
        }
        InputKey::Char(' ') => {
            let (category, _) = NOTIFICATION_CATEGORIES[notifications.cursor];
            let channel = CHANNELS[notifications.channel];
            state.prefs.toggle(&notification_key(category, channel));
            None
        }
        InputKey::Char('s') => Some(Message::TriggerAction(ActionTarget::NotificationsSave)),
        _ => handle_key_global(state, key),
    }
}

// ─────────────────────────────────────────────────────────────────
// Analysis preferences
// ─────────────────────────────────────────────────────────────────

fn handle_key_analysis(state: &mut AppState, key: InputKey) -> Option<Message> {
    let total = ANALYSIS_SETTINGS.len() + CUSTOM_RULES.len();
    let analysis = &mut state.settings.analysis;
    match key {
        InputKey::Up => {
            analysis.cursor = analysis.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            analysis.cursor = (analysis.cursor + 1).min(total - 1);
            None
        }
        InputKey::Char(' ') => {
            // Toggles apply immediately; there is no save step here.
            let key_name = if analysis.cursor < ANALYSIS_SETTINGS.len() {
                ANALYSIS_SETTINGS[analysis.cursor].0
            } else {
                CUSTOM_RULES[analysis.cursor - ANALYSIS_SETTINGS.len()].0
            };
            state.prefs.toggle(key_name);
            None
        }
        _ => handle_key_global(state, key),
    }
}

// ─────────────────────────────────────────────────────────────────
// Billing / Security
// ─────────────────────────────────────────────────────────────────

fn handle_key_billing(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('u') | InputKey::Enter => {
            Some(Message::TriggerAction(ActionTarget::PlanUpgrade))
        }
        _ => handle_key_global(state, key),
    }
}

fn handle_key_security(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('t') => {
            state.settings.security.two_factor_enabled = !state.settings.security.two_factor_enabled;
            None
        }
        InputKey::Char('s') => {
            let others = state
                .settings
                .security
                .sessions
                .iter()
                .filter(|s| !s.current)
                .count();
            if others > 0 {
                state.confirm = Some(ConfirmDialog::sign_out_others(others));
            }
            None
        }
        _ => handle_key_global(state, key),
    }
}

// ─────────────────────────────────────────────────────────────────
// Export / Delete
// ─────────────────────────────────────────────────────────────────

fn handle_key_export(state: &mut AppState, key: InputKey) -> Option<Message> {
    let export = &mut state.settings.export;
    match key {
        InputKey::Up => {
            export.cursor = export.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            export.cursor = (export.cursor + 1).min(export.selected.len() - 1);
            None
        }
        InputKey::Char(' ') => {
            export.toggle_selected();
            None
        }
        InputKey::Enter => Some(Message::TriggerAction(ActionTarget::Export)),
        _ => handle_key_global(state, key),
    }
}

fn handle_key_delete(state: &mut AppState, key: InputKey) -> Option<Message> {
    let delete = &mut state.settings.delete;
    match key {
        InputKey::Up => {
            delete.cursor = delete.cursor.saturating_sub(1);
            None
        }
        InputKey::Down => {
            delete.cursor = (delete.cursor + 1).min(delete.options.len() - 1);
            None
        }
        InputKey::Char(' ') => {
            delete.toggle_option();
            None
        }
        InputKey::Char('i') => {
            delete.typing = true;
            None
        }
        InputKey::Enter if delete.confirmed() => {
            state.confirm = Some(ConfirmDialog::delete_account());
            None
        }
        _ => handle_key_global(state, key),
    }
}

fn handle_key_delete_typing(state: &mut AppState, key: InputKey) -> Option<Message> {
    let delete = &mut state.settings.delete;
    match key {
        InputKey::Esc => {
            delete.typing = false;
            None
        }
        InputKey::Enter => {
            delete.typing = false;
            if delete.confirmed() {
                state.confirm = Some(ConfirmDialog::delete_account());
            }
            None
        }
        InputKey::Backspace => {
            delete.confirmation.pop();
            None
        }
        InputKey::CharCtrl('u') => {
            delete.confirmation.clear();
            None
        }
        InputKey::Char(c) => {
            delete.confirmation.push(c);
            None
        }
        _ => None,
    }
}
