//! Team screen: member table, search/filter bar, invite modal.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Clear, Paragraph, Row, Table};
use ratatui::Frame;

use mentor_app::data::{MemberRole, INVITE_LINK};
use mentor_app::AppState;

use crate::theme::{palette, styles};
use crate::widgets::modal_overlay::{centered_rect, dim_area};

const FILTER_WIDTH: u16 = 18;
const INVITE_WIDTH: u16 = 54;
const INVITE_HEIGHT: u16 = 11;

/// Rect of the role-filter field; the dropdown overlay anchors here.
pub fn filter_anchor(body: Rect) -> Rect {
    Rect::new(
        body.x + body.width.saturating_sub(FILTER_WIDTH + 1),
        body.y + 1,
        FILTER_WIDTH.min(body.width),
        1,
    )
}

/// Rect of the role field inside the invite modal, for the role dropdown.
pub fn invite_role_anchor(area: Rect) -> Rect {
    let modal = centered_rect(INVITE_WIDTH, INVITE_HEIGHT, area);
    Rect::new(modal.x + 2, modal.y + 5, modal.width.saturating_sub(4), 1)
}

pub fn render_team(frame: &mut Frame, area: Rect, state: &AppState) {
    let team = &state.team;
    let [bar, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(area);

    render_search_bar(frame, bar, state);

    let visible = team.visible();
    let header = Row::new(["Name", "Role", "Status", "Reviews", "Last Active"])
        .style(styles::accent_bold());
    let rows: Vec<Row> = visible
        .iter()
        .map(|&idx| {
            let member = &team.members[idx];
            let status = if member.active {
                Cell::from("● active").style(Style::default().fg(palette::STATUS_GREEN))
            } else {
                Cell::from("○ away").style(styles::text_muted())
            };
            Row::new(vec![
                Cell::from(format!("{} {}", member.name, member.username))
                    .style(styles::text_primary()),
                Cell::from(role_label(member.role)).style(styles::text_secondary()),
                status,
                Cell::from(member.reviews.to_string()).style(styles::text_secondary()),
                Cell::from(member.last_active).style(styles::text_muted()),
            ])
        })
        .collect();

    let title = format!(" Members ({}/{}) ", visible.len(), team.members.len());
    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(10),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(16),
        ],
    )
    .header(header)
    .block(styles::panel_block(!team.searching).title(title));
    frame.render_widget(table, table_area);

    if team.show_invite {
        render_invite_modal(frame, frame.area(), state);
    }
}

fn render_search_bar(frame: &mut Frame, bar: Rect, state: &AppState) {
    let team = &state.team;
    let search_label = if team.searching {
        Span::styled(format!("/{}▏", team.search), styles::text_primary())
    } else if team.search.is_empty() {
        Span::styled("[/] search", styles::text_muted())
    } else {
        Span::styled(format!("/{}", team.search), styles::text_secondary())
    };

    let link_hint = if team.link_copied.is_some() {
        Span::styled("Copied!", Style::default().fg(palette::STATUS_GREEN))
    } else {
        Span::styled(format!("[y] {INVITE_LINK}"), styles::text_muted())
    };

    let line = Line::from(vec![
        search_label,
        Span::raw("  "),
        link_hint,
        Span::raw("  "),
        Span::styled("[i] invite", styles::keybinding()),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(styles::panel_block(team.searching).title(" Team ")),
        bar,
    );

    let filter_label = team
        .role_filter
        .map_or("All roles", |role| role_label(role));
    let anchor = filter_anchor(bar);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("[f] ▾ {filter_label}"),
            styles::accent(),
        )),
        anchor,
    );
}

fn render_invite_modal(frame: &mut Frame, area: Rect, state: &AppState) {
    let team = &state.team;
    dim_area(frame.buffer_mut(), area);

    let modal = centered_rect(INVITE_WIDTH, INVITE_HEIGHT, area);
    frame.render_widget(Clear, modal);
    frame.render_widget(styles::panel_block(true).title(" Invite Member "), modal);

    let inner = Rect::new(
        modal.x + 2,
        modal.y + 1,
        modal.width.saturating_sub(4),
        modal.height.saturating_sub(2),
    );

    let email_style = if team.invite_email_valid() || team.invite_email.is_empty() {
        styles::text_primary()
    } else {
        Style::default().fg(palette::STATUS_RED)
    };
    let (indicator, indicator_style) = styles::action_indicator(team.invite.status());

    let lines = vec![
        Line::from(Span::styled("Email", styles::text_muted())),
        Line::from(Span::styled(format!("{}▏", team.invite_email), email_style)),
        Line::default(),
        Line::from(Span::styled("Role", styles::text_muted())),
        Line::from(Span::styled(
            format!("[Tab] ▾ {}", role_label(team.invite_role)),
            styles::accent(),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[Enter] send  [Esc] cancel  ", styles::keybinding()),
            Span::styled(indicator, indicator_style),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn role_label(role: MemberRole) -> &'static str {
    role.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_anchor_hugs_right_edge() {
        let body = Rect::new(0, 3, 80, 20);
        let anchor = filter_anchor(body);
        assert_eq!(anchor.y, 4);
        assert_eq!(anchor.x + anchor.width, 79);
    }

    #[test]
    fn test_invite_role_anchor_inside_modal() {
        let area = Rect::new(0, 0, 100, 30);
        let modal = centered_rect(INVITE_WIDTH, INVITE_HEIGHT, area);
        let anchor = invite_role_anchor(area);
        assert!(anchor.x > modal.x && anchor.y > modal.y);
        assert!(anchor.y < modal.y + modal.height);
    }
}
