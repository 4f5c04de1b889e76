//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title + screen tabs)
    pub header: Rect,
    /// Main content area for the focused screen
    pub body: Rect,
    /// Bottom status bar (key hints, pending indicator)
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header with borders
        Constraint::Min(5),   // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Split the settings body into section sidebar and content panel.
pub fn settings_split(body: Rect) -> (Rect, Rect) {
    let chunks =
        Layout::horizontal([Constraint::Length(26), Constraint::Min(30)]).split(body);
    (chunks[0], chunks[1])
}

/// Anchor the chat overlay to the bottom-right of the screen.
pub fn chat_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(70);
    let height = area.height.saturating_sub(4).min(22);
    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let areas = create(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.body.height, 20);
        assert_eq!(areas.status.y, 23);
    }

    #[test]
    fn test_settings_split_widths() {
        let (sidebar, panel) = settings_split(Rect::new(0, 3, 80, 20));
        assert_eq!(sidebar.width, 26);
        assert_eq!(panel.width, 54);
        assert_eq!(sidebar.height, panel.height);
    }

    #[test]
    fn test_chat_rect_fits_small_terminal() {
        let rect = chat_rect(Rect::new(0, 0, 40, 12));
        assert!(rect.width <= 40);
        assert!(rect.height <= 12);
    }
}
