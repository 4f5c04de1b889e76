//! Header bar: app title plus the screen tabs.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use mentor_app::{AppState, Screen};

use crate::theme::{palette, styles};

pub struct MainHeader<'a> {
    state: &'a AppState,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut spans = vec![
            Span::styled(
                "Code Mentor",
                Style::default()
                    .fg(palette::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for (idx, screen) in Screen::ALL.iter().enumerate() {
            let label = format!(" {} {} ", idx + 1, screen.title());
            if *screen == self.state.screen {
                spans.push(Span::styled(label, styles::selected_highlight()));
            } else {
                spans.push(Span::styled(label, styles::text_secondary()));
            }
            spans.push(Span::raw(" "));
        }
        if self.state.any_pending() {
            spans.push(Span::styled("●", Style::default().fg(palette::STATUS_YELLOW)));
        }

        Line::from(spans).render(inner, buf);
    }
}
