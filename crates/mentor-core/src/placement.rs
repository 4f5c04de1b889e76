//! Overlay placement geometry.
//!
//! Decides whether an overlay opens above or below its anchor so it stays
//! inside the viewport. Pure geometry; callers decide when to evaluate it.

/// Above/below orientation of an overlay relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    Above,
    #[default]
    Below,
}

/// Choose the placement for an overlay.
///
/// `Above` only when the overlay would overflow the viewport bottom:
/// `anchor_bottom + estimated_height > viewport_height`, strict comparison,
/// so an exact fit stays `Below`.
pub fn choose_placement(anchor_bottom: u16, estimated_height: u16, viewport_height: u16) -> Placement {
    if u32::from(anchor_bottom) + u32::from(estimated_height) > u32::from(viewport_height) {
        Placement::Above
    } else {
        Placement::Below
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_places_above() {
        // 500 + 400 = 900 > 800
        assert_eq!(choose_placement(500, 400, 800), Placement::Above);
    }

    #[test]
    fn test_room_below_places_below() {
        // 300 + 400 = 700 <= 800
        assert_eq!(choose_placement(300, 400, 800), Placement::Below);
    }

    #[test]
    fn test_exact_fit_favors_below() {
        // 400 + 400 = 800, strict comparison
        assert_eq!(choose_placement(400, 400, 800), Placement::Below);
    }

    #[test]
    fn test_no_overflow_on_large_inputs() {
        // Sums past u16::MAX must not wrap.
        assert_eq!(choose_placement(u16::MAX, u16::MAX, u16::MAX), Placement::Above);
    }
}
