//! Top-level view function.
//!
//! Draw order matters: screen content first, then the chat overlay, then
//! the dropdown, toasts, and finally the confirm dialog on top.

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use mentor_app::state::DropdownKind;
use mentor_app::{AppState, Screen};

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    dropdown, history, settings, team, MainHeader, StatusBar, render_chat, render_confirm_dialog,
    render_dashboard, render_history, render_settings, render_team, render_toasts,
};

pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(palette::DEEPEST_BG)), area);

    let areas = layout::create(area);
    frame.render_widget(MainHeader::new(state), areas.header);

    match state.screen {
        Screen::Dashboard => render_dashboard(frame, areas.body, state),
        Screen::Team => render_team(frame, areas.body, state),
        Screen::History => render_history(frame, areas.body, state),
        Screen::Settings => render_settings(frame, areas.body, state),
    }

    frame.render_widget(StatusBar::new(state), areas.status);

    if state.chat.open {
        render_chat(frame, area, state);
    }

    if let Some(dd) = &state.dropdown {
        let anchor = match dd.kind {
            DropdownKind::Section => settings::section_anchor(areas.body),
            DropdownKind::RoleFilter => team::filter_anchor(areas.body),
            DropdownKind::InviteRole => team::invite_role_anchor(area),
            DropdownKind::HistoryFilter => history::filter_anchor(areas.body),
        };
        dropdown::render_dropdown(frame, area, anchor, dd);
    }

    render_toasts(frame, area, &state.toasts);

    if let Some(dialog) = &state.confirm {
        render_confirm_dialog(frame, area, dialog);
    }
}
