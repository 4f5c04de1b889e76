//! The nine settings section panels.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use mentor_app::data::{IntegrationStatus, DATA_CATEGORIES};
use mentor_app::handler::EXPORT_DELAY;
use mentor_app::prefs::{notification_key, ANALYSIS_SETTINGS, CHANNELS, CUSTOM_RULES, NOTIFICATION_CATEGORIES};
use mentor_app::settings_state::DELETE_CONFIRMATION;
use mentor_app::AppState;
use mentor_core::ActionStatus;

use crate::theme::{palette, styles};

fn cursor_style(selected: bool) -> Style {
    if selected {
        styles::selected_highlight()
    } else {
        styles::text_primary()
    }
}

fn indicator_line(status: ActionStatus, hint: &'static str) -> Line<'static> {
    let (text, style) = styles::action_indicator(status);
    Line::from(vec![
        Span::styled(hint, styles::keybinding()),
        Span::raw("  "),
        Span::styled(text, style),
    ])
}

pub fn render_profile(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.settings.profile;
    let mut lines: Vec<Line> = Vec::new();
    for (idx, field) in profile.fields.iter().enumerate() {
        let selected = idx == profile.cursor;
        let value = if selected && profile.editing {
            format!("{}▏", field.value)
        } else {
            field.value.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", field.label), styles::text_muted()),
            Span::styled(value, cursor_style(selected)),
        ]));
    }
    lines.push(Line::default());
    let hint = if profile.editing {
        "[Enter] save  [Esc] cancel"
    } else {
        "[e] edit  [↑↓] field"
    };
    lines.push(indicator_line(profile.save.status(), hint));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::panel_block(true).title(" Profile ")),
        area,
    );
}

pub fn render_api_keys(frame: &mut Frame, area: Rect, state: &AppState) {
    let keys = &state.settings.api_keys;
    let mut items: Vec<ListItem> = Vec::new();
    for (idx, key) in keys.keys.iter().enumerate() {
        let selected = idx == keys.cursor;
        items.push(ListItem::new(vec![
            Line::from(Span::styled(key.name.clone(), cursor_style(selected))),
            Line::from(Span::styled(
                format!("  {}", keys.display_key(idx)),
                styles::text_secondary(),
            )),
            Line::from(Span::styled(
                format!("  {} requests · last used {}", key.usage, key.last_used),
                styles::text_muted(),
            )),
        ]));
    }
    items.push(ListItem::new(indicator_line(
        keys.generate.status(),
        "[v] reveal  [y] copy  [g] generate",
    )));

    frame.render_widget(
        List::new(items).block(styles::panel_block(true).title(" API Keys ")),
        area,
    );
}

pub fn render_integrations(frame: &mut Frame, area: Rect, state: &AppState) {
    let integrations = &state.settings.integrations;
    let items: Vec<ListItem> = integrations
        .rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            let selected = idx == integrations.cursor;
            let (badge, color) = match row.status {
                IntegrationStatus::Connected => ("● Connected", palette::STATUS_GREEN),
                IntegrationStatus::Pending => ("◌ Pending", palette::STATUS_YELLOW),
                IntegrationStatus::Disconnected => ("○ Disconnected", palette::STATUS_RED),
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{:<16}", row.name), cursor_style(selected)),
                    Span::styled(badge, Style::default().fg(color)),
                ]),
                Line::from(Span::styled(
                    format!("  {} · last sync {}", row.description, row.last_sync),
                    styles::text_muted(),
                )),
            ])
        })
        .collect();

    frame.render_widget(
        List::new(items)
            .block(styles::panel_block(true).title(" Integrations  [Enter] connect ")),
        area,
    );
}

pub fn render_notifications(frame: &mut Frame, area: Rect, state: &AppState) {
    let notif = &state.settings.notifications;
    let mut lines: Vec<Line> = Vec::new();

    let mut header = vec![Span::styled(format!("{:<18}", ""), styles::text_muted())];
    for (col, channel) in CHANNELS.iter().enumerate() {
        let style = if col == notif.channel {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        header.push(Span::styled(format!("{channel:<10}"), style));
    }
    lines.push(Line::from(header));

    for (row, (category, label)) in NOTIFICATION_CATEGORIES.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{label:<18}"),
            cursor_style(row == notif.cursor),
        )];
        for (col, channel) in CHANNELS.iter().enumerate() {
            let on = state.prefs.get(&notification_key(category, channel));
            let mark = if on { "[x]" } else { "[ ]" };
            let style = if row == notif.cursor && col == notif.channel {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(format!("{mark:<10}"), style));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(indicator_line(
        notif.save.status(),
        "[Space] toggle  [s] save",
    ));

    frame.render_widget(
        Paragraph::new(lines).block(styles::panel_block(true).title(" Notifications ")),
        area,
    );
}

pub fn render_analysis(frame: &mut Frame, area: Rect, state: &AppState) {
    let analysis = &state.settings.analysis;
    let mut items: Vec<ListItem> = Vec::new();
    let mut idx = 0usize;

    items.push(ListItem::new(Span::styled("Defaults", styles::text_muted())));
    for (key, label) in ANALYSIS_SETTINGS {
        items.push(toggle_item(state, key, label, idx == analysis.cursor));
        idx += 1;
    }
    items.push(ListItem::new(Span::styled(
        "Custom Rules",
        styles::text_muted(),
    )));
    for (key, label) in CUSTOM_RULES {
        items.push(toggle_item(state, key, label, idx == analysis.cursor));
        idx += 1;
    }
    // Toggles apply immediately; no save step here.
    items.push(ListItem::new(Span::styled(
        "[Space] toggle",
        styles::keybinding(),
    )));

    frame.render_widget(
        List::new(items).block(styles::panel_block(true).title(" Analysis ")),
        area,
    );
}

fn toggle_item(state: &AppState, key: &str, label: &str, selected: bool) -> ListItem<'static> {
    let mark = if state.prefs.get(key) { "[x]" } else { "[ ]" };
    ListItem::new(Line::from(Span::styled(
        format!("  {mark} {label}"),
        cursor_style(selected),
    )))
}

pub fn render_billing(frame: &mut Frame, area: Rect, state: &AppState) {
    let billing = &state.settings.billing;
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Current plan  ", styles::text_muted()),
            Span::styled(billing.plan_name, styles::accent_bold()),
            Span::styled(
                format!("  ${:.2}/mo", billing.plan_price_cents as f64 / 100.0),
                styles::text_primary(),
            ),
        ]),
        Line::from(Span::styled(
            format!("Next billing  {}", billing.next_billing),
            styles::text_secondary(),
        )),
        Line::default(),
        Line::from(Span::styled("Invoices", styles::text_muted())),
    ];
    for invoice in &billing.invoices {
        let paid = if invoice.paid {
            Span::styled("paid", Style::default().fg(palette::STATUS_GREEN))
        } else {
            Span::styled("due", Style::default().fg(palette::STATUS_RED))
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!(
                    "  {}  {}  ${:.2}  ",
                    invoice.id,
                    invoice.date,
                    invoice.amount_cents as f64 / 100.0
                ),
                styles::text_secondary(),
            ),
            paid,
        ]));
    }
    lines.push(Line::default());
    lines.push(indicator_line(billing.upgrade.status(), "[u] upgrade to Team"));

    frame.render_widget(
        Paragraph::new(lines).block(styles::panel_block(true).title(" Billing ")),
        area,
    );
}

pub fn render_security(frame: &mut Frame, area: Rect, state: &AppState) {
    let security = &state.settings.security;
    let two_factor = if security.two_factor_enabled {
        Span::styled("enabled", Style::default().fg(palette::STATUS_GREEN))
    } else {
        Span::styled("disabled", Style::default().fg(palette::STATUS_RED))
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Two-factor auth  ", styles::text_primary()),
            two_factor,
            Span::styled("  [t] toggle", styles::text_muted()),
        ]),
        Line::default(),
        Line::from(Span::styled("Active sessions", styles::text_muted())),
    ];
    for session in &security.sessions {
        let marker = if session.current { "▸" } else { " " };
        lines.push(Line::from(Span::styled(
            format!(
                "{marker} {} · {} · {} · {}",
                session.device, session.browser, session.location, session.last_active
            ),
            if session.current {
                styles::text_primary()
            } else {
                styles::text_secondary()
            },
        )));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Recent activity", styles::text_muted())));
    for event in &security.events {
        let mark = if event.success {
            Span::styled("✓ ", Style::default().fg(palette::STATUS_GREEN))
        } else {
            Span::styled("✗ ", Style::default().fg(palette::STATUS_RED))
        };
        lines.push(Line::from(vec![
            mark,
            Span::styled(
                format!("{} · {} · {}", event.description, event.location, event.timestamp),
                styles::text_secondary(),
            ),
        ]));
    }

    lines.push(Line::default());
    lines.push(indicator_line(
        security.sign_out_others.status(),
        "[s] sign out other sessions",
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::panel_block(true).title(" Security ")),
        area,
    );
}

pub fn render_export(frame: &mut Frame, area: Rect, state: &AppState) {
    let export = &state.settings.export;
    let block = styles::panel_block(true).title(" Export Data ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = DATA_CATEGORIES.len() as u16;
    let [categories_area, progress_area, history_area] = Layout::vertical([
        Constraint::Length(rows + 1),
        Constraint::Length(2),
        Constraint::Min(2),
    ])
    .areas(inner);

    let mut lines: Vec<Line> = DATA_CATEGORIES
        .iter()
        .enumerate()
        .map(|(idx, (_, label))| {
            let mark = if export.selected[idx] { "[x]" } else { "[ ]" };
            Line::from(Span::styled(
                format!("{mark} {label}"),
                cursor_style(idx == export.cursor),
            ))
        })
        .collect();
    lines.push(indicator_line(
        export.export.status(),
        "[Space] select  [Enter] export",
    ));
    frame.render_widget(Paragraph::new(lines), categories_area);

    if export.export.is_pending() {
        let scaled = state.config.simulation.scale(EXPORT_DELAY);
        frame.render_widget(
            Gauge::default()
                .gauge_style(styles::accent())
                .label("exporting…")
                .ratio(export.export.progress(scaled)),
            progress_area,
        );
    }

    let mut history: Vec<Line> = vec![Line::from(Span::styled(
        "Previous exports",
        styles::text_muted(),
    ))];
    for record in &export.history {
        history.push(Line::from(Span::styled(
            format!("  {} · {} · {}", record.label, record.date, record.size),
            styles::text_secondary(),
        )));
    }
    frame.render_widget(Paragraph::new(history), history_area);
}

pub fn render_delete(frame: &mut Frame, area: Rect, state: &AppState) {
    let delete = &state.settings.delete;
    let mut lines = vec![
        Line::from(Span::styled(
            "Danger zone: this permanently deletes your account.",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for (idx, (_, label)) in DATA_CATEGORIES.iter().enumerate() {
        let mark = if delete.options[idx] { "[x]" } else { "[ ]" };
        lines.push(Line::from(Span::styled(
            format!("{mark} {label}"),
            cursor_style(idx == delete.cursor),
        )));
    }

    lines.push(Line::default());
    let confirm_value = if delete.typing {
        format!("{}▏", delete.confirmation)
    } else {
        delete.confirmation.clone()
    };
    let confirm_style = if delete.confirmed() {
        Style::default().fg(palette::STATUS_GREEN)
    } else {
        styles::text_primary()
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!("Type {DELETE_CONFIRMATION} to confirm: "),
            styles::text_muted(),
        ),
        Span::styled(confirm_value, confirm_style),
    ]));
    lines.push(Line::default());
    lines.push(indicator_line(
        delete.delete.status(),
        "[Space] option  [i] type  [Enter] delete",
    ));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(styles::panel_block(true).title(" Delete Account ")),
        area,
    );
}
