//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppState, ConfirmAction, Screen};

use super::{completions, flows, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::ConfirmAccept => {
            let Some(dialog) = state.confirm.take() else {
                return UpdateResult::none();
            };
            match dialog.action {
                ConfirmAction::Quit => UpdateResult::message(Message::Quit),
                ConfirmAction::DeleteAccount => UpdateResult::message(Message::TriggerAction(
                    crate::message::ActionTarget::DeleteAccount,
                )),
                ConfirmAction::SignOutOthers => UpdateResult::message(Message::TriggerAction(
                    crate::message::ActionTarget::SignOutOthers,
                )),
            }
        }

        Message::ConfirmCancel => {
            state.confirm = None;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.on_tick();
            UpdateResult::none()
        }

        Message::GotoScreen(screen) => {
            state.goto_screen(screen);
            UpdateResult::none()
        }

        Message::GotoSection(section) => {
            if state.screen != Screen::Settings {
                state.goto_screen(Screen::Settings);
            }
            state.goto_section(section);
            UpdateResult::none()
        }

        Message::ToggleChat => {
            state.chat.open = !state.chat.open;
            UpdateResult::none()
        }

        Message::SendChatMessage => flows::send_chat(state),

        Message::RunAnalysis(kind) => flows::run_analysis(state, kind),

        Message::ResetAnalysis(kind) => {
            // Rejected while the analysis is still running.
            state.dashboard.analyze_mut(kind).reset();
            UpdateResult::none()
        }

        Message::TriggerAction(target) => flows::trigger(state, target),

        Message::CopyRequested(target) => flows::copy(state, target),

        Message::ActionCompleted {
            target,
            generation,
            outcome,
        } => completions::handle_action_completed(state, target, generation, outcome),

        Message::AnalysisCompleted {
            target,
            generation,
            result,
        } => completions::handle_analysis_completed(state, target, generation, result),

        Message::ClipboardResult { target, ok } => {
            completions::handle_clipboard_result(state, target, ok)
        }
    }
}
