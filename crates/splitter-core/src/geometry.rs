#![forbid(unsafe_code)]

//! Axis and pointer primitives.

use serde::{Deserialize, Serialize};

/// The axis panels are laid out along.
///
/// `Horizontal` places panels left to right (dividers are vertical bars);
/// `Vertical` stacks them top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// Orientation of the divider bars, which is perpendicular to the axis.
    #[inline]
    #[must_use]
    pub const fn divider_orientation(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A pointer position in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    /// Create a new pointer position.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The coordinate along `axis`.
    #[inline]
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn along_picks_matching_coordinate() {
        let pos = PointerPosition::new(12.5, 40.0);
        assert_eq!(pos.along(Axis::Horizontal), 12.5);
        assert_eq!(pos.along(Axis::Vertical), 40.0);
    }

    #[test]
    fn divider_runs_across_the_axis() {
        assert_eq!(Axis::Horizontal.divider_orientation(), Axis::Vertical);
        assert_eq!(Axis::Vertical.divider_orientation(), Axis::Horizontal);
    }

    #[test]
    fn axis_serializes_snake_case() {
        let json = serde_json::to_string(&Axis::Vertical).expect("serialize axis");
        assert_eq!(json, "\"vertical\"");
        let axis: Axis = serde_json::from_str("\"horizontal\"").expect("deserialize axis");
        assert_eq!(axis, Axis::Horizontal);
    }
}
