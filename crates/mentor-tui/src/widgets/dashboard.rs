//! Dashboard screen: the analysis tabs, input buffer, and result panel.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};
use ratatui::Frame;

use mentor_app::{AnalysisKind, AppState};
use mentor_core::ActionStatus;

use crate::theme::styles;

const TABS: [AnalysisKind; 3] = [
    AnalysisKind::Review,
    AnalysisKind::Debug,
    AnalysisKind::Explain,
];

pub fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let dash = &state.dashboard;
    let [tab_row, columns] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(5)]).areas(area);
    let [input_area, result_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(columns);

    let mut spans = vec![Span::raw(" ")];
    for kind in TABS {
        let style = if kind == dash.tab {
            styles::selected_highlight()
        } else {
            styles::text_secondary()
        };
        spans.push(Span::styled(format!(" {} ", kind.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled("[Tab] switch", styles::text_muted()));
    frame.render_widget(Paragraph::new(Line::from(spans)), tab_row);

    let input_title = match dash.tab {
        AnalysisKind::Debug => " Error Log ",
        _ => " Code ",
    };
    frame.render_widget(
        Paragraph::new(dash.active_input())
            .style(styles::text_primary())
            .wrap(Wrap { trim: false })
            .block(styles::panel_block(false).title(input_title)),
        input_area,
    );

    render_result_panel(frame, result_area, state);
}

fn render_result_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let dash = &state.dashboard;
    let action = dash.analyze(dash.tab);
    let (indicator, indicator_style) = styles::action_indicator(action.status());

    let block = styles::panel_block(action.is_pending())
        .title(format!(" {} Result ", dash.tab.label()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match action.status() {
        ActionStatus::Idle => {
            frame.render_widget(
                Paragraph::new("[Enter] run analysis  [r] reset").style(styles::text_muted()),
                inner,
            );
        }
        ActionStatus::Pending => {
            let [label_row, gauge_row] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(inner);
            frame.render_widget(
                Paragraph::new(Span::styled(indicator, indicator_style)),
                label_row,
            );
            let ratio = pulse_ratio(action.elapsed());
            frame.render_widget(
                Gauge::default()
                    .gauge_style(styles::accent())
                    .label("")
                    .ratio(ratio),
                gauge_row,
            );
        }
        ActionStatus::Succeeded | ActionStatus::Failed => {
            let [status_row, body] =
                Layout::vertical([Constraint::Length(1), Constraint::Min(1)]).areas(inner);
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(indicator, indicator_style),
                    Span::styled("  [r] reset", styles::text_muted()),
                ])),
                status_row,
            );
            let text = action.payload().unwrap_or("Analysis failed. Try again.");
            frame.render_widget(
                Paragraph::new(text)
                    .style(styles::text_primary())
                    .wrap(Wrap { trim: false }),
                body,
            );
        }
    }
}

/// Indeterminate progress: the provider gives no completion estimate, so
/// sweep a two-second cycle while the request is in flight.
fn pulse_ratio(elapsed: Option<std::time::Duration>) -> f64 {
    match elapsed {
        Some(elapsed) => (elapsed.as_millis() % 2000) as f64 / 2000.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_pulse_ratio_wraps() {
        assert_eq!(pulse_ratio(None), 0.0);
        assert!((pulse_ratio(Some(Duration::from_millis(500))) - 0.25).abs() < f64::EPSILON);
        assert_eq!(pulse_ratio(Some(Duration::from_millis(2000))), 0.0);
    }
}
