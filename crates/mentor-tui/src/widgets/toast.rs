//! Toast notifications, stacked in the top-right corner.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use mentor_app::{Toast, ToastLevel};

use crate::theme::{palette, styles};

pub fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let mut y = area.y + 1;
    for toast in toasts {
        let (icon, color) = match toast.level {
            ToastLevel::Info => ("i", palette::STATUS_BLUE),
            ToastLevel::Success => ("✓", palette::STATUS_GREEN),
            ToastLevel::Error => ("✗", palette::STATUS_RED),
        };
        let text = format!(" {icon} {} ", toast.text);
        let width = (text.width() as u16).min(area.width.saturating_sub(2));
        if y >= area.bottom() {
            break;
        }
        let rect = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            y,
            width,
            1,
        );
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                text,
                Style::default().fg(color).bg(palette::POPUP_BG),
            )))
            .style(styles::text_primary()),
            rect,
        );
        y += 1;
    }
}
