//! Adjacent-pair constraint solver.
//!
//! [`resize_pair`] moves one divider by a delta (in percent) and settles the
//! two panels it separates against their bounds. Every other entry passes
//! through untouched.
//!
//! ```text
//!   left' = left + delta        right' = right - delta
//!   clamp left'  -> right' = total - left'
//!   clamp right' -> left'  = total - right'   (only if the clamp moved it)
//! ```
//!
//! The pair total is preserved unless both minimums exceed it, in which case
//! each panel receives its minimum and the container renormalizes.

use crate::size_model::PercentBounds;

/// Apply `delta` percent at the divider after `left` and return the new
/// vector.
///
/// Non-finite deltas are treated as `0`.
///
/// # Panics
///
/// Panics when `left + 1` is out of range or when `bounds` does not have one
/// entry per panel.
#[must_use]
pub fn resize_pair(sizes: &[f64], left: usize, delta: f64, bounds: &[PercentBounds]) -> Vec<f64> {
    assert!(
        left + 1 < sizes.len(),
        "divider {left} out of range for {} panels",
        sizes.len()
    );
    assert_eq!(
        sizes.len(),
        bounds.len(),
        "bounds table must have one entry per panel"
    );

    let right = left + 1;
    let delta = if delta.is_finite() { delta } else { 0.0 };
    let total = sizes[left] + sizes[right];
    let (left_bounds, right_bounds) = (bounds[left], bounds[right]);

    let mut out = sizes.to_vec();
    if is_over_constrained(sizes, left, bounds) {
        out[left] = left_bounds.min;
        out[right] = right_bounds.min;
        return out;
    }

    let mut next_left = sizes[left] + delta;
    let mut next_right = sizes[right] - delta;

    let clamped = left_bounds.clamp(next_left);
    if clamped != next_left {
        next_left = clamped;
        next_right = total - next_left;
    }
    let clamped = right_bounds.clamp(next_right);
    if clamped != next_right {
        next_right = clamped;
        next_left = total - next_right;
    }

    out[left] = next_left;
    out[right] = next_right;
    out
}

/// Whether the pair at `left` cannot satisfy both minimums.
#[must_use]
pub fn is_over_constrained(sizes: &[f64], left: usize, bounds: &[PercentBounds]) -> bool {
    bounds[left].min + bounds[left + 1].min > sizes[left] + sizes[left + 1]
}
