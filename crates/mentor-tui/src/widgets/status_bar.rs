//! Bottom status bar: contextual key hints and the clock.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use mentor_app::{AppState, Screen};
use mentor_core::Section;

use crate::theme::styles;

pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static str {
        if self.state.confirm.is_some() {
            return "y/Enter confirm · n/Esc cancel";
        }
        if self.state.dropdown.is_some() {
            return "↑↓ move · Enter select · Esc close";
        }
        if self.state.chat.open {
            return "Enter send · Ctrl+Y copy reply · Esc close";
        }
        match self.state.screen {
            Screen::Dashboard => "Tab switch tab · Enter analyze · r reset · c chat · q quit",
            Screen::Team => "/ search · f filter · i invite · y copy link · q quit",
            Screen::History => "/ search · f filter · q quit",
            Screen::Settings => match self.state.section {
                Section::Profile => "o sections · Tab next · e edit · Enter save · q quit",
                Section::ApiKeys => "↑↓ move · v reveal · y copy · g generate",
                Section::Integrations => "↑↓ move · Enter connect",
                Section::Notifications => "↑↓←→ move · Space toggle · s save",
                Section::Analysis => "↑↓ move · Space toggle",
                Section::Billing => "u upgrade plan · q quit",
                Section::Security => "t toggle 2FA · s sign out others",
                Section::Export => "↑↓ move · Space toggle · Enter export",
                Section::Delete => "Space toggle · i type confirmation · Enter delete",
            },
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let clock = chrono::Local::now().format("%H:%M").to_string();
        let hints = self.hints();
        let line = Line::from(vec![
            Span::styled(hints, styles::keybinding()),
            Span::raw(" "),
        ]);
        line.render(area, buf);

        // Right-aligned clock.
        let width = clock.len() as u16;
        if area.width > width {
            let clock_area = Rect::new(area.x + area.width - width, area.y, width, 1);
            Line::from(Span::styled(clock, styles::text_muted())).render(clock_area, buf);
        }
    }
}
