//! Settings screen: grouped section sidebar plus the active panel.

mod sections;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem};
use ratatui::Frame;

use mentor_app::AppState;
use mentor_core::{Section, SECTION_GROUPS};

use crate::layout;
use crate::theme::styles;

/// Anchor for the section navigator dropdown: the sidebar's title row.
pub fn section_anchor(body: Rect) -> Rect {
    let (sidebar, _) = layout::settings_split(body);
    Rect::new(sidebar.x + 1, sidebar.y, sidebar.width.saturating_sub(2), 1)
}

pub fn render_settings(frame: &mut Frame, body: Rect, state: &AppState) {
    let (sidebar, panel) = layout::settings_split(body);
    render_sidebar(frame, sidebar, state.section);

    match state.section {
        Section::Profile => sections::render_profile(frame, panel, state),
        Section::ApiKeys => sections::render_api_keys(frame, panel, state),
        Section::Integrations => sections::render_integrations(frame, panel, state),
        Section::Notifications => sections::render_notifications(frame, panel, state),
        Section::Analysis => sections::render_analysis(frame, panel, state),
        Section::Billing => sections::render_billing(frame, panel, state),
        Section::Security => sections::render_security(frame, panel, state),
        Section::Export => sections::render_export(frame, panel, state),
        Section::Delete => sections::render_delete(frame, panel, state),
    }
}

fn render_sidebar(frame: &mut Frame, area: Rect, active: Section) {
    let mut items: Vec<ListItem> = Vec::new();
    for group in SECTION_GROUPS {
        items.push(ListItem::new(Line::from(Span::styled(
            group.title,
            styles::text_muted(),
        ))));
        for section in group.sections {
            let line = if *section == active {
                Line::from(Span::styled(
                    format!("▸ {}", section.title()),
                    styles::selected_highlight(),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", section.title()),
                    styles::text_secondary(),
                ))
            };
            items.push(ListItem::new(line));
        }
    }
    frame.render_widget(
        List::new(items).block(styles::panel_block(false).title(" Settings  [o] sections  [Tab] next ")),
        area,
    );
}
