//! History screen: past analysis runs with search and kind filter.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};
use ratatui::Frame;

use mentor_app::data::HistoryKind;
use mentor_app::AppState;

use crate::theme::{palette, styles};

const FILTER_WIDTH: u16 = 18;

/// Rect of the kind-filter field; the dropdown overlay anchors here.
pub fn filter_anchor(body: Rect) -> Rect {
    Rect::new(
        body.x + body.width.saturating_sub(FILTER_WIDTH + 1),
        body.y + 1,
        FILTER_WIDTH.min(body.width),
        1,
    )
}

pub fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let history = &state.history;
    let [bar, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    let search_label = if history.searching {
        Span::styled(format!("/{}▏", history.query), styles::text_primary())
    } else if history.query.is_empty() {
        Span::styled("[/] search", styles::text_muted())
    } else {
        Span::styled(format!("/{}", history.query), styles::text_secondary())
    };
    frame.render_widget(
        Paragraph::new(Line::from(search_label))
            .block(styles::panel_block(history.searching).title(" History ")),
        bar,
    );

    let filter_label = history.kind_filter.map_or("All kinds", |kind| kind.label());
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("[f] ▾ {filter_label}"),
            styles::accent(),
        )),
        filter_anchor(bar),
    );

    let visible = history.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|&idx| {
            let item = &history.items[idx];
            let badge = Span::styled(
                format!("[{}]", item.kind.label()),
                Style::default().fg(kind_color(item.kind)),
            );
            let status = if item.completed {
                Span::styled(
                    format!(" {} ", "★".repeat(item.rating as usize)),
                    Style::default().fg(palette::STATUS_YELLOW),
                )
            } else {
                Span::styled(" in progress ", Style::default().fg(palette::STATUS_YELLOW))
            };
            ListItem::new(vec![
                Line::from(vec![
                    badge,
                    Span::raw(" "),
                    Span::styled(item.title, styles::text_primary()),
                    status,
                ]),
                Line::from(Span::styled(
                    format!(
                        "    {} · {} · {} · {} lines · {}",
                        item.repository, item.language, item.duration, item.lines_of_code,
                        item.timestamp
                    ),
                    styles::text_muted(),
                )),
            ])
        })
        .collect();

    let title = format!(" Sessions ({}/{}) ", visible.len(), history.items.len());
    frame.render_widget(
        List::new(items).block(styles::panel_block(!history.searching).title(title)),
        list_area,
    );
}

fn kind_color(kind: HistoryKind) -> ratatui::style::Color {
    match kind {
        HistoryKind::Review => palette::STATUS_BLUE,
        HistoryKind::Debug => palette::STATUS_RED,
        HistoryKind::Explain => palette::STATUS_GREEN,
    }
}
