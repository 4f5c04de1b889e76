//! Modal yes/no confirmation dialog.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

use mentor_app::state::ConfirmDialog;

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::{centered_rect, dim_area};

pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, dialog: &ConfirmDialog) {
    dim_area(frame.buffer_mut(), area);

    let rect = centered_rect(50, 8, area);
    frame.render_widget(Clear, rect);

    let block = styles::panel_block(true)
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default()
                .fg(palette::ACCENT)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette::POPUP_BG));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(dialog.body.clone(), styles::text_primary())),
        Line::raw(""),
        Line::from(vec![
            Span::styled(
                format!("[y] {}", dialog.confirm_label),
                Style::default().fg(palette::STATUS_GREEN),
            ),
            Span::raw("   "),
            Span::styled("[n] Cancel", Style::default().fg(palette::STATUS_RED)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
