//! Dropdown overlay for the inline selectors.
//!
//! The overlay opens below its anchor unless the estimated box would run
//! past the bottom of the viewport, in which case it flips above. The
//! check happens here at draw time against the live terminal size, so a
//! resize between frames re-evaluates the placement.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, List, ListItem};
use ratatui::Frame;

use mentor_app::state::{DropdownKind, DropdownState};
use mentor_core::{choose_placement, Placement, SECTION_GROUPS};

use crate::theme::styles;

/// Box the overlay occupies: anchored left-aligned under (or over) `anchor`.
pub fn dropdown_rect(anchor: Rect, item_count: u16, viewport: Rect) -> Rect {
    let height = item_count + 2; // items + borders
    let width = 24u16.min(viewport.width);
    let anchor_bottom = anchor.y + anchor.height;

    let y = match choose_placement(anchor_bottom, height, viewport.height) {
        Placement::Below => anchor_bottom,
        Placement::Above => anchor.y.saturating_sub(height),
    };
    let x = anchor.x.min(viewport.width.saturating_sub(width));
    Rect::new(x, y, width, height.min(viewport.height))
}

pub fn render_dropdown(frame: &mut Frame, viewport: Rect, anchor: Rect, state: &DropdownState) {
    let rows = match state.kind {
        DropdownKind::Section => section_rows(state.cursor),
        _ => flat_rows(state),
    };
    let rect = dropdown_rect(anchor, rows.len() as u16, viewport);
    frame.render_widget(Clear, rect);
    frame.render_widget(List::new(rows).block(styles::panel_block(true)), rect);
}

fn flat_rows(state: &DropdownState) -> Vec<ListItem<'static>> {
    state
        .kind
        .items()
        .iter()
        .enumerate()
        .map(|(idx, label)| ListItem::new(item_line(label, idx == state.cursor)))
        .collect()
}

/// Section navigator: group headers interleaved with the selectable rows.
/// Headers are skipped by the cursor, which counts sections only.
fn section_rows(cursor: usize) -> Vec<ListItem<'static>> {
    let mut rows = Vec::new();
    let mut idx = 0;
    for group in SECTION_GROUPS {
        rows.push(ListItem::new(Line::from(Span::styled(
            group.title,
            styles::text_muted(),
        ))));
        for section in group.sections {
            rows.push(ListItem::new(item_line(section.title(), idx == cursor)));
            idx += 1;
        }
    }
    rows
}

fn item_line(label: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("▸ {label}"),
            styles::selected_highlight(),
        ))
    } else {
        Line::from(Span::styled(format!("  {label}"), styles::text_primary()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_dropdown_opens_below_when_room() {
        let anchor = Rect::new(10, 2, 12, 1);
        let rect = dropdown_rect(anchor, 4, VIEWPORT);
        assert_eq!(rect.y, 3); // directly under the anchor
    }

    #[test]
    fn test_dropdown_flips_above_near_bottom() {
        let anchor = Rect::new(10, 21, 12, 1);
        let rect = dropdown_rect(anchor, 4, VIEWPORT);
        // 6 rows would overflow a 24-row viewport from y=22; flips above.
        assert_eq!(rect.y, 21 - 6);
    }

    #[test]
    fn test_section_rows_interleave_group_headers() {
        let sections: usize = SECTION_GROUPS.iter().map(|g| g.sections.len()).sum();
        let rows = section_rows(0);
        assert_eq!(rows.len(), sections + SECTION_GROUPS.len());
    }

    #[test]
    fn test_dropdown_exact_fit_stays_below() {
        // anchor_bottom 18 + height 6 == viewport 24: still below.
        let anchor = Rect::new(0, 17, 10, 1);
        let rect = dropdown_rect(anchor, 4, VIEWPORT);
        assert_eq!(rect.y, 18);
    }
}
