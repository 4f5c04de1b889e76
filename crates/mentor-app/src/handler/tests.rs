//! Integration-style tests driving `update()` with full message flows.

use mentor_core::{ActionStatus, Section};

use crate::config::UserConfig;
use crate::data::IntegrationStatus;
use crate::input_key::InputKey;
use crate::message::{ActionTarget, AnalysisTarget, CopyTarget, Message};
use crate::provider::{AnalysisKind, AnalysisReply};
use crate::state::{AppState, ConfirmAction, DropdownKind, Screen, ToastLevel};

use super::{update, UpdateAction, UpdateResult};

fn state() -> AppState {
    AppState::new(UserConfig::default())
}

/// Run a message plus any follow-ups it queues, returning the actions.
fn drive(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let UpdateResult { message, action } = update(state, message);
        next = message;
        if let Some(action) = action {
            actions.push(action);
        }
    }
    actions
}

#[test]
fn test_quit_goes_through_confirm_dialog() {
    let mut state = state();
    drive(&mut state, Message::RequestQuit);
    assert!(!state.should_quit);
    assert!(state.confirm.is_some());

    drive(&mut state, Message::Key(InputKey::Enter));
    assert!(state.should_quit);
}

#[test]
fn test_quit_dialog_cancel() {
    let mut state = state();
    drive(&mut state, Message::RequestQuit);
    drive(&mut state, Message::Key(InputKey::Esc));
    assert!(!state.should_quit);
    assert!(state.confirm.is_none());
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut state = state();
    state.chat.open = true;
    drive(&mut state, Message::Key(InputKey::CharCtrl('c')));
    assert!(state.should_quit);
}

#[test]
fn test_screen_switch_keys() {
    let mut state = state();
    drive(&mut state, Message::Key(InputKey::Char('2')));
    assert_eq!(state.screen, Screen::Team);
    drive(&mut state, Message::Key(InputKey::Char('3')));
    assert_eq!(state.screen, Screen::History);
}

#[test]
fn test_chat_send_round_trip() {
    let mut state = state();
    state.chat.open = true;
    state.chat.input = "what is a closure?".to_string();

    let actions = drive(&mut state, Message::SendChatMessage);
    assert!(state.chat.send.is_pending());
    assert_eq!(state.chat.messages.len(), 2); // greeting + user message
    assert!(state.chat.input.is_empty());

    let generation = match actions.as_slice() {
        [UpdateAction::Analyze {
            target: AnalysisTarget::Chat,
            generation,
            ..
        }] => *generation,
        other => panic!("expected analyze action, got {other:?}"),
    };

    drive(
        &mut state,
        Message::AnalysisCompleted {
            target: AnalysisTarget::Chat,
            generation,
            result: Ok(AnalysisReply {
                text: "A closure captures its environment.".to_string(),
                has_code: false,
            }),
        },
    );
    assert_eq!(state.chat.messages.len(), 3);
    assert_eq!(state.chat.send.status(), ActionStatus::Idle);
}

#[test]
fn test_stale_chat_reply_is_dropped() {
    let mut state = state();
    state.chat.input = "hello".to_string();
    let actions = drive(&mut state, Message::SendChatMessage);
    let generation = match actions.as_slice() {
        [UpdateAction::Analyze { generation, .. }] => *generation,
        other => panic!("expected analyze action, got {other:?}"),
    };

    // Simulated teardown: the send flow is invalidated mid-flight.
    state.chat.send.invalidate();

    drive(
        &mut state,
        Message::AnalysisCompleted {
            target: AnalysisTarget::Chat,
            generation,
            result: Ok(AnalysisReply {
                text: "late".to_string(),
                has_code: false,
            }),
        },
    );
    // No mentor message appended.
    assert_eq!(state.chat.messages.len(), 2);
}

#[test]
fn test_send_chat_rejected_while_pending() {
    let mut state = state();
    state.chat.input = "first".to_string();
    drive(&mut state, Message::SendChatMessage);

    state.chat.input = "second".to_string();
    let actions = drive(&mut state, Message::SendChatMessage);
    assert!(actions.is_empty());
    assert_eq!(state.chat.input, "second");
}

#[test]
fn test_run_analysis_with_empty_input_is_noop() {
    let mut state = state();
    state.dashboard.code.clear();
    let actions = drive(&mut state, Message::RunAnalysis(AnalysisKind::Review));
    assert!(actions.is_empty());
    assert_eq!(
        state.dashboard.analyze(AnalysisKind::Review).status(),
        ActionStatus::Idle
    );
}

#[test]
fn test_analysis_reply_fills_tab_payload() {
    let mut state = state();
    let actions = drive(&mut state, Message::RunAnalysis(AnalysisKind::Review));
    let generation = match actions.as_slice() {
        [UpdateAction::Analyze { generation, .. }] => *generation,
        other => panic!("expected analyze action, got {other:?}"),
    };

    drive(
        &mut state,
        Message::AnalysisCompleted {
            target: AnalysisTarget::Dashboard(AnalysisKind::Review),
            generation,
            result: Ok(AnalysisReply {
                text: "Looks good overall.".to_string(),
                has_code: false,
            }),
        },
    );
    let action = state.dashboard.analyze(AnalysisKind::Review);
    assert_eq!(action.status(), ActionStatus::Succeeded);
    assert_eq!(action.payload(), Some("Looks good overall."));
}

#[test]
fn test_invite_requires_valid_email() {
    let mut state = state();
    state.team.invite_email = "not-an-email".to_string();
    let actions = drive(&mut state, Message::TriggerAction(ActionTarget::Invite));
    assert!(actions.is_empty());
    assert!(!state.team.invite.is_pending());
}

#[test]
fn test_invite_flow_completes_and_closes_dialog() {
    let mut state = state();
    state.team.show_invite = true;
    state.team.invite_email = "dana@company.com".to_string();

    let actions = drive(&mut state, Message::TriggerAction(ActionTarget::Invite));
    let completion = match actions.as_slice() {
        [UpdateAction::ScheduleCompletion {
            target: ActionTarget::Invite,
            completion,
        }] => *completion,
        other => panic!("expected scheduled completion, got {other:?}"),
    };
    assert!(state.team.invite.is_pending());

    drive(
        &mut state,
        Message::ActionCompleted {
            target: ActionTarget::Invite,
            generation: completion.generation,
            outcome: completion.outcome,
        },
    );
    assert!(!state.team.show_invite);
    assert!(state.team.invite_email.is_empty());
    assert_eq!(state.team.invite.status(), ActionStatus::Idle);
    assert!(state
        .toasts
        .iter()
        .any(|t| t.level == ToastLevel::Success && t.text.contains("dana@company.com")));
}

#[test]
fn test_trigger_while_pending_schedules_nothing() {
    let mut state = state();
    drive(
        &mut state,
        Message::TriggerAction(ActionTarget::ProfileSave),
    );
    let actions = drive(
        &mut state,
        Message::TriggerAction(ActionTarget::ProfileSave),
    );
    assert!(actions.is_empty());
}

#[test]
fn test_integration_connect_updates_row() {
    let mut state = state();
    state.screen = Screen::Settings;
    state.section = Section::Integrations;
    let idx = state
        .settings
        .integrations
        .rows
        .iter()
        .position(|r| r.status == IntegrationStatus::Disconnected)
        .unwrap();

    let actions = drive(
        &mut state,
        Message::TriggerAction(ActionTarget::IntegrationConnect(idx)),
    );
    assert_eq!(
        state.settings.integrations.rows[idx].status,
        IntegrationStatus::Pending
    );
    let completion = match actions.as_slice() {
        [UpdateAction::ScheduleCompletion { completion, .. }] => *completion,
        other => panic!("expected scheduled completion, got {other:?}"),
    };

    drive(
        &mut state,
        Message::ActionCompleted {
            target: ActionTarget::IntegrationConnect(idx),
            generation: completion.generation,
            outcome: completion.outcome,
        },
    );
    assert_eq!(
        state.settings.integrations.rows[idx].status,
        IntegrationStatus::Connected
    );
    assert_eq!(state.settings.integrations.rows[idx].last_sync, "just now");
}

#[test]
fn test_connecting_a_connected_integration_is_noop() {
    let mut state = state();
    let idx = state
        .settings
        .integrations
        .rows
        .iter()
        .position(|r| r.status == IntegrationStatus::Connected)
        .unwrap();
    let actions = drive(
        &mut state,
        Message::TriggerAction(ActionTarget::IntegrationConnect(idx)),
    );
    assert!(actions.is_empty());
}

#[test]
fn test_section_switch_drops_inflight_completion() {
    let mut state = state();
    state.screen = Screen::Settings;
    let actions = drive(
        &mut state,
        Message::TriggerAction(ActionTarget::ProfileSave),
    );
    let completion = match actions.as_slice() {
        [UpdateAction::ScheduleCompletion { completion, .. }] => *completion,
        other => panic!("expected scheduled completion, got {other:?}"),
    };

    drive(&mut state, Message::GotoSection(Section::Billing));

    drive(
        &mut state,
        Message::ActionCompleted {
            target: ActionTarget::ProfileSave,
            generation: completion.generation,
            outcome: completion.outcome,
        },
    );
    // No save toast, action back to idle.
    assert!(state.toasts.is_empty());
    assert_eq!(state.settings.profile.save.status(), ActionStatus::Idle);
}

#[test]
fn test_export_requires_a_selection() {
    let mut state = state();
    state.settings.export.selected.iter_mut().for_each(|s| *s = false);
    let actions = drive(&mut state, Message::TriggerAction(ActionTarget::Export));
    assert!(actions.is_empty());
}

#[test]
fn test_export_completion_adds_history_record() {
    let mut state = state();
    let before = state.settings.export.history.len();
    let actions = drive(&mut state, Message::TriggerAction(ActionTarget::Export));
    let completion = match actions.as_slice() {
        [UpdateAction::ScheduleCompletion { completion, .. }] => *completion,
        other => panic!("expected scheduled completion, got {other:?}"),
    };

    drive(
        &mut state,
        Message::ActionCompleted {
            target: ActionTarget::Export,
            generation: completion.generation,
            outcome: completion.outcome,
        },
    );
    assert_eq!(state.settings.export.history.len(), before + 1);
    assert_eq!(state.settings.export.history[0].label, "Data Export");
}

#[test]
fn test_delete_flow_needs_confirmation_text_and_dialog() {
    let mut state = state();
    state.screen = Screen::Settings;
    drive(&mut state, Message::GotoSection(Section::Delete));

    // Enter without the confirmation text: nothing happens.
    drive(&mut state, Message::Key(InputKey::Enter));
    assert!(state.confirm.is_none());

    state.settings.delete.confirmation = "DELETE".to_string();
    drive(&mut state, Message::Key(InputKey::Enter));
    let dialog = state.confirm.as_ref().expect("confirm dialog open");
    assert_eq!(dialog.action, ConfirmAction::DeleteAccount);

    let actions = drive(&mut state, Message::ConfirmAccept);
    assert!(state.settings.delete.delete.is_pending());
    assert!(matches!(
        actions.as_slice(),
        [UpdateAction::ScheduleCompletion {
            target: ActionTarget::DeleteAccount,
            ..
        }]
    ));
}

#[test]
fn test_api_key_generation_appends_revealed_key() {
    let mut state = state();
    let before = state.settings.api_keys.keys.len();
    let actions = drive(
        &mut state,
        Message::TriggerAction(ActionTarget::ApiKeyGenerate),
    );
    let completion = match actions.as_slice() {
        [UpdateAction::ScheduleCompletion { completion, .. }] => *completion,
        other => panic!("expected scheduled completion, got {other:?}"),
    };
    drive(
        &mut state,
        Message::ActionCompleted {
            target: ActionTarget::ApiKeyGenerate,
            generation: completion.generation,
            outcome: completion.outcome,
        },
    );

    let api_keys = &state.settings.api_keys;
    assert_eq!(api_keys.keys.len(), before + 1);
    assert!(api_keys.keys.last().unwrap().key.starts_with("cm_live_"));
    assert_eq!(api_keys.visible.last(), Some(&true));
    assert_eq!(api_keys.cursor, before);
}

#[test]
fn test_clipboard_failure_shows_error_toast() {
    let mut state = state();
    drive(
        &mut state,
        Message::ClipboardResult {
            target: CopyTarget::InviteLink,
            ok: false,
        },
    );
    assert!(state.team.link_copied.is_none());
    assert!(state
        .toasts
        .iter()
        .any(|t| t.level == ToastLevel::Error && t.text.contains("clipboard")));
}

#[test]
fn test_clipboard_success_sets_flash() {
    let mut state = state();
    drive(
        &mut state,
        Message::ClipboardResult {
            target: CopyTarget::ChatMessage(0),
            ok: true,
        },
    );
    assert_eq!(state.chat.copied.map(|(idx, _)| idx), Some(0));
}

#[test]
fn test_dropdown_applies_role_filter() {
    let mut state = state();
    state.screen = Screen::Team;
    drive(&mut state, Message::Key(InputKey::Char('f')));
    assert!(state.dropdown.is_some());

    drive(&mut state, Message::Key(InputKey::Down));
    drive(&mut state, Message::Key(InputKey::Enter));
    assert!(state.dropdown.is_none());
    assert_eq!(
        state.team.role_filter,
        Some(crate::data::MemberRole::Owner)
    );
}

#[test]
fn test_billing_section_passes_global_keys_through() {
    let mut state = state();
    state.screen = Screen::Settings;
    drive(&mut state, Message::GotoSection(Section::Billing));

    drive(&mut state, Message::Key(InputKey::Char('1')));
    assert_eq!(state.screen, Screen::Dashboard);

    state.screen = Screen::Settings;
    drive(&mut state, Message::Key(InputKey::Char('q')));
    assert!(state.confirm.is_some());
}

#[test]
fn test_section_dropdown_opens_on_active_section_and_navigates() {
    let mut state = state();
    state.screen = Screen::Settings;
    drive(&mut state, Message::Key(InputKey::Char('o')));

    let dd = state.dropdown.as_ref().expect("section dropdown open");
    assert_eq!(dd.kind, DropdownKind::Section);
    assert_eq!(dd.cursor, Section::Profile.index());

    // Walk down to Notifications and apply.
    for _ in 0..Section::Notifications.index() {
        drive(&mut state, Message::Key(InputKey::Down));
    }
    drive(&mut state, Message::Key(InputKey::Enter));
    assert!(state.dropdown.is_none());
    assert_eq!(state.section, Section::Notifications);
}

#[test]
fn test_section_dropdown_esc_keeps_section() {
    let mut state = state();
    state.screen = Screen::Settings;
    drive(&mut state, Message::GotoSection(Section::Security));
    drive(&mut state, Message::Key(InputKey::Char('o')));
    drive(&mut state, Message::Key(InputKey::Esc));
    assert!(state.dropdown.is_none());
    assert_eq!(state.section, Section::Security);
}

#[test]
fn test_notifications_space_toggles_pref() {
    let mut state = state();
    state.screen = Screen::Settings;
    drive(&mut state, Message::GotoSection(Section::Notifications));

    let key = crate::prefs::notification_key("code_reviews", "email");
    let before = state.prefs.get(&key);
    drive(&mut state, Message::Key(InputKey::Char(' ')));
    assert_eq!(state.prefs.get(&key), !before);
}
