//! Floating chat overlay.
//!
//! Renders the transcript, a typing indicator while the send flow is
//! pending, the per-message "Copied!" flash, and the input line.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Wrap};
use ratatui::Frame;

use mentor_app::screens::{ChatMessage, ChatSender};
use mentor_app::AppState;

use crate::layout;
use crate::theme::{palette, styles};

pub fn render_chat(frame: &mut Frame, area: Rect, state: &AppState) {
    let chat = &state.chat;
    let rect = layout::chat_rect(area);
    frame.render_widget(Clear, rect);

    let block = styles::panel_block(true).title(" AI Mentor  [Esc] close ");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let [transcript_area, input_area] =
        Layout::vertical([Constraint::Min(3), Constraint::Length(2)]).areas(inner);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, message) in chat.messages.iter().enumerate() {
        lines.extend(message_lines(message, idx, chat.copied));
        lines.push(Line::default());
    }
    if chat.send.is_pending() {
        lines.push(Line::from(Span::styled(
            "Mentor is typing…",
            Style::default().fg(palette::CHAT_MENTOR),
        )));
    }

    // Stick to the tail of the transcript.
    let visible_rows = transcript_area.height as usize;
    let scroll = lines.len().saturating_sub(visible_rows) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        transcript_area,
    );

    let input_lines = vec![
        Line::from(Span::styled(
            "─".repeat(input_area.width as usize),
            styles::border_inactive(),
        )),
        Line::from(vec![
            Span::styled("> ", styles::accent()),
            Span::styled(format!("{}▏", chat.input), styles::text_primary()),
        ]),
    ];
    frame.render_widget(Paragraph::new(input_lines), input_area);
}

fn message_lines(
    message: &ChatMessage,
    idx: usize,
    copied: Option<(usize, std::time::Instant)>,
) -> Vec<Line<'static>> {
    let (name, color) = match message.sender {
        ChatSender::User => ("You", palette::CHAT_USER),
        ChatSender::Mentor => ("Mentor", palette::CHAT_MENTOR),
    };

    let mut header = vec![Span::styled(
        name,
        Style::default()
            .fg(color)
            .add_modifier(ratatui::style::Modifier::BOLD),
    )];
    if message.sender == ChatSender::Mentor {
        if copied.map_or(false, |(i, _)| i == idx) {
            header.push(Span::styled(
                "  Copied!",
                Style::default().fg(palette::STATUS_GREEN),
            ));
        } else {
            header.push(Span::styled("  [Ctrl+Y] copy", styles::text_muted()));
        }
    }

    let mut lines = vec![Line::from(header)];
    let mut in_code = false;
    for raw in message.text.lines() {
        if raw.trim_start().starts_with("```") {
            in_code = !in_code;
            continue;
        }
        let style = if in_code && message.has_code {
            Style::default()
                .fg(palette::STATUS_GREEN)
                .bg(palette::POPUP_BG)
        } else {
            styles::text_primary()
        };
        lines.push(Line::from(Span::styled(raw.to_string(), style)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fences_are_stripped() {
        let message = ChatMessage {
            sender: ChatSender::Mentor,
            text: "before\n```js\nlet x = 1;\n```\nafter".to_string(),
            has_code: true,
        };
        let lines = message_lines(&message, 0, None);
        // header + 3 content lines, no fence markers
        assert_eq!(lines.len(), 4);
    }
}
