//! Key event handlers for the main screens and overlays.
//!
//! Overlays swallow keys first (confirm dialog, dropdown, chat), then the
//! focused screen gets its turn. Local edits (cursors, text fields) mutate
//! state directly; anything that arms a flow or navigates comes back as a
//! [`Message`] for the update loop.

use crate::input_key::InputKey;
use crate::message::{ActionTarget, CopyTarget, Message};
use crate::state::{AppState, DropdownKind, DropdownState, Screen};

use super::settings_keys;

/// Convert a key event into an optional follow-up message.
pub fn handle_key(state: &mut AppState, key: InputKey) -> Option<Message> {
    // Ctrl+C always force-quits, no matter what has focus.
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    if state.confirm.is_some() {
        return handle_key_confirm_dialog(key);
    }
    if state.dropdown.is_some() {
        return handle_key_dropdown(state, key);
    }
    if state.chat.open {
        return handle_key_chat(state, key);
    }

    match state.screen {
        Screen::Dashboard => handle_key_dashboard(state, key),
        Screen::Team => handle_key_team(state, key),
        Screen::History => handle_key_history(state, key),
        Screen::Settings => settings_keys::handle_key_settings(state, key),
    }
}

/// Screen switching and the chat toggle, shared by every non-typing context.
pub(super) fn handle_key_global(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::Char('1') => Some(Message::GotoScreen(Screen::Dashboard)),
        InputKey::Char('2') => Some(Message::GotoScreen(Screen::Team)),
        InputKey::Char('3') => Some(Message::GotoScreen(Screen::History)),
        InputKey::Char('4') => Some(Message::GotoScreen(Screen::Settings)),
        InputKey::PageDown => Some(Message::GotoScreen(state.screen.next())),
        InputKey::PageUp => Some(Message::GotoScreen(state.screen.prev())),
        InputKey::Char('c') => Some(Message::ToggleChat),
        _ => None,
    }
}

fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') | InputKey::Enter => Some(Message::ConfirmAccept),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::ConfirmCancel),
        _ => None,
    }
}

/// The dropdown overlay: move, apply, dismiss.
fn handle_key_dropdown(state: &mut AppState, key: InputKey) -> Option<Message> {
    let Some(dropdown) = state.dropdown.as_mut() else {
        return None;
    };
    let len = dropdown.kind.items().len();
    match key {
        InputKey::Up | InputKey::Char('k') => {
            dropdown.cursor = (dropdown.cursor + len - 1) % len;
            None
        }
        InputKey::Down | InputKey::Char('j') => {
            dropdown.cursor = (dropdown.cursor + 1) % len;
            None
        }
        InputKey::Enter => {
            let (kind, cursor) = (dropdown.kind, dropdown.cursor);
            state.dropdown = None;
            apply_dropdown(state, kind, cursor)
        }
        InputKey::Esc => {
            state.dropdown = None;
            None
        }
        _ => None,
    }
}

fn apply_dropdown(state: &mut AppState, kind: DropdownKind, cursor: usize) -> Option<Message> {
    use crate::data::{HistoryKind, MemberRole};
    use mentor_core::Section;
    match kind {
        DropdownKind::Section => {
            return Section::from_index(cursor).map(Message::GotoSection);
        }
        DropdownKind::RoleFilter => {
            state.team.role_filter = match cursor {
                1 => Some(MemberRole::Owner),
                2 => Some(MemberRole::Reviewer),
                3 => Some(MemberRole::Viewer),
                _ => None,
            };
        }
        DropdownKind::InviteRole => {
            state.team.invite_role = match cursor {
                1 => MemberRole::Viewer,
                _ => MemberRole::Reviewer,
            };
        }
        DropdownKind::HistoryFilter => {
            state.history.kind_filter = match cursor {
                1 => Some(HistoryKind::Review),
                2 => Some(HistoryKind::Debug),
                3 => Some(HistoryKind::Explain),
                _ => None,
            };
        }
    }
    None
}

/// The floating chat panel captures all input while open.
fn handle_key_chat(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ToggleChat),
        InputKey::Enter => Some(Message::SendChatMessage),
        // Copy the newest mentor reply.
        InputKey::CharCtrl('y') => state
            .chat
            .last_mentor_index()
            .map(|idx| Message::CopyRequested(CopyTarget::ChatMessage(idx))),
        InputKey::Backspace => {
            state.chat.input.pop();
            None
        }
        InputKey::CharCtrl('u') => {
            state.chat.input.clear();
            None
        }
        InputKey::Char(c) => {
            state.chat.input.push(c);
            None
        }
        _ => None,
    }
}

fn handle_key_dashboard(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Tab | InputKey::Right => {
            state.dashboard.cycle_tab();
            None
        }
        InputKey::Enter => Some(Message::RunAnalysis(state.dashboard.tab)),
        InputKey::Char('r') => Some(Message::ResetAnalysis(state.dashboard.tab)),
        _ => handle_key_global(state, key),
    }
}

fn handle_key_team(state: &mut AppState, key: InputKey) -> Option<Message> {
    if state.team.show_invite {
        return handle_key_invite_dialog(state, key);
    }
    if state.team.searching {
        return handle_key_search(&mut state.team.search, &mut state.team.searching, key);
    }
    match key {
        InputKey::Char('/') => {
            state.team.searching = true;
            None
        }
        InputKey::Char('f') => {
            state.dropdown = Some(DropdownState::open(DropdownKind::RoleFilter, 0));
            None
        }
        InputKey::Char('i') => {
            state.team.show_invite = true;
            None
        }
        InputKey::Char('y') => Some(Message::CopyRequested(CopyTarget::InviteLink)),
        _ => handle_key_global(state, key),
    }
}

fn handle_key_invite_dialog(state: &mut AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => {
            // Closing the dialog abandons a pending invite.
            if state.team.invite.is_pending() {
                state.team.invite.invalidate();
            }
            state.team.show_invite = false;
            None
        }
        InputKey::Enter => Some(Message::TriggerAction(ActionTarget::Invite)),
        InputKey::Tab => {
            state.dropdown = Some(DropdownState::open(DropdownKind::InviteRole, 0));
            None
        }
        InputKey::Backspace => {
            state.team.invite_email.pop();
            None
        }
        InputKey::CharCtrl('u') => {
            state.team.invite_email.clear();
            None
        }
        InputKey::Char(c) => {
            state.team.invite_email.push(c);
            None
        }
        _ => None,
    }
}

fn handle_key_history(state: &mut AppState, key: InputKey) -> Option<Message> {
    if state.history.searching {
        return handle_key_search(&mut state.history.query, &mut state.history.searching, key);
    }
    match key {
        InputKey::Char('/') => {
            state.history.searching = true;
            None
        }
        InputKey::Char('f') => {
            state.dropdown = Some(DropdownState::open(DropdownKind::HistoryFilter, 0));
            None
        }
        _ => handle_key_global(state, key),
    }
}

/// Shared search-input editing: Esc/Enter leave the mode, keeping the query.
fn handle_key_search(query: &mut String, searching: &mut bool, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter => {
            *searching = false;
            None
        }
        InputKey::Backspace => {
            query.pop();
            None
        }
        InputKey::CharCtrl('u') => {
            query.clear();
            None
        }
        InputKey::Char(c) => {
            query.push(c);
            None
        }
        _ => None,
    }
}
