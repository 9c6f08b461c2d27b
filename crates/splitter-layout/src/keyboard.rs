//! Arrow-key divider resizing.
//!
//! A focused divider reacts to the two arrow keys along the splitter axis
//! (Left/Right for horizontal, Up/Down for vertical). Each keypress is one
//! atomic [`resize_pair`] against the current vector; there is no session.

use splitter_core::{Axis, KeyEvent};

use crate::config::KeyboardTuning;
use crate::size_model::PercentBounds;
use crate::solver::resize_pair;

/// Maps key events on a focused divider to resize steps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct KeyboardController {
    tuning: KeyboardTuning,
}

impl KeyboardController {
    #[must_use]
    pub const fn new(tuning: KeyboardTuning) -> Self {
        Self { tuning }
    }

    #[must_use]
    pub const fn tuning(&self) -> KeyboardTuning {
        self.tuning
    }

    /// Signed step in percent for `key`, or `None` when the key does not move
    /// a divider on `axis`.
    #[must_use]
    pub fn step_for(&self, axis: Axis, key: &KeyEvent) -> Option<f64> {
        if !key.is_down() {
            return None;
        }
        let (key_axis, sign) = key.code.arrow()?;
        if key_axis != axis {
            return None;
        }
        let step = if key.shift() {
            self.tuning.step * self.tuning.coarse_multiplier
        } else {
            self.tuning.step
        };
        Some(sign * step)
    }

    /// Resize the pair at `divider` for one keypress.
    ///
    /// The keyboard minimum is combined with each panel's pixel minimum but
    /// never forces a panel that is already under it to grow. Returns `None`
    /// when the key is ignored or the clamped result leaves the vector
    /// unchanged.
    #[must_use]
    pub fn resize(
        &self,
        sizes: &[f64],
        divider: usize,
        axis: Axis,
        key: &KeyEvent,
        bounds: &[PercentBounds],
    ) -> Option<Vec<f64>> {
        let delta = self.step_for(axis, key)?;
        let bounds: Vec<PercentBounds> = bounds
            .iter()
            .zip(sizes)
            .map(|(bound, &size)| bound.with_min_floor(self.tuning.min_percent.min(size)))
            .collect();
        let next = resize_pair(sizes, divider, delta, &bounds);
        (next != sizes).then_some(next)
    }
}
