//! Screen state and orientation classification.

use serde::Serialize;

use crate::environment::ScreenGeometry;

/// Orientation angle reported for portrait.
pub const PORTRAIT_ANGLE: i32 = 0;

/// Orientation angle reported for landscape.
pub const LANDSCAPE_ANGLE: i32 = 90;

/// Screen geometry and orientation at one point in time.
///
/// Recomputed from the environment on demand; two states compare equal when
/// every field is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ScreenState {
    pub avail_width: u32,
    pub avail_height: u32,
    pub width: u32,
    pub height: u32,
    pub is_portrait: bool,
    pub is_landscape: bool,
}

impl ScreenState {
    /// Build a state from raw geometry and an orientation signal.
    pub fn new(geometry: ScreenGeometry, orientation: Option<i32>) -> Self {
        let (is_portrait, is_landscape) = classify_orientation(orientation);
        Self {
            avail_width: geometry.avail_width,
            avail_height: geometry.avail_height,
            width: geometry.width,
            height: geometry.height,
            is_portrait,
            is_landscape,
        }
    }

    /// Whether neither orientation flag is set (e.g. angle `-90` or `180`).
    pub fn is_unclassified(&self) -> bool {
        !self.is_portrait && !self.is_landscape
    }
}

/// Classify an orientation signal as `(is_portrait, is_landscape)`.
///
/// A missing signal and angle `0` both carry no information and fall back to
/// portrait. Angle `90` is landscape. Every other angle sets neither flag.
pub fn classify_orientation(orientation: Option<i32>) -> (bool, bool) {
    match orientation {
        None | Some(PORTRAIT_ANGLE) => (true, false),
        Some(LANDSCAPE_ANGLE) => (false, true),
        Some(_) => (false, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ScreenGeometry {
        ScreenGeometry {
            avail_width: 390,
            avail_height: 844,
            width: 390,
            height: 844,
        }
    }

    #[test]
    fn test_no_signal_defaults_to_portrait() {
        let state = ScreenState::new(geometry(), None);
        assert!(state.is_portrait);
        assert!(!state.is_landscape);
    }

    #[test]
    fn test_zero_angle_is_portrait() {
        assert_eq!(classify_orientation(Some(0)), (true, false));
    }

    #[test]
    fn test_ninety_is_landscape() {
        let state = ScreenState::new(geometry(), Some(90));
        assert!(!state.is_portrait);
        assert!(state.is_landscape);
    }

    #[test]
    fn test_other_angles_are_neither() {
        for angle in [-90, 180, 270, 45] {
            let state = ScreenState::new(geometry(), Some(angle));
            assert!(state.is_unclassified(), "angle {} should be neither", angle);
        }
    }

    #[test]
    fn test_geometry_copied_verbatim() {
        let state = ScreenState::new(
            ScreenGeometry {
                avail_width: 1,
                avail_height: 2,
                width: 3,
                height: 4,
            },
            None,
        );
        assert_eq!(
            (state.avail_width, state.avail_height, state.width, state.height),
            (1, 2, 3, 4)
        );
    }
}
