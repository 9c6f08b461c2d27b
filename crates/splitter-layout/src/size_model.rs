//! Size vector and per-panel constraint table.
//!
//! The [`SizeModel`] holds one percentage per panel. At every externally
//! observable point the entries are non-negative, sum to [`TOTAL_PERCENT`], and
//! an entry is `0` exactly when its panel is collapsed. All mutation funnels
//! through [`SizeModel::apply_vector`], which repairs callers that break the
//! sum (the over-constrained solver case) by rescaling proportionally.

use crate::config::{PanelSpec, SplitterConfig};

/// Sum of every published size vector.
pub const TOTAL_PERCENT: f64 = 100.0;

/// Drift from [`TOTAL_PERCENT`] above which a vector counts as violating the
/// sum invariant (and is logged when repaired).
pub const RENORMALIZE_TOLERANCE: f64 = 1e-9;

/// Pixel constraints for one panel, resolved against container defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelConstraints {
    /// Minimum size in pixels.
    pub min_size: f64,
    /// Maximum size in pixels (`None` = unbounded).
    pub max_size: Option<f64>,
    pub resizable: bool,
    pub collapsible: bool,
}

impl PanelConstraints {
    /// Resolve a panel's constraints, falling back to the container minimum.
    #[must_use]
    pub fn resolve(panel: &PanelSpec, config: &SplitterConfig) -> Self {
        Self {
            min_size: panel.min_size.unwrap_or(config.min_size),
            max_size: panel.max_size,
            resizable: panel.resizable,
            collapsible: panel.collapsible,
        }
    }

    /// Bounds in percent of `available` pixels.
    #[must_use]
    pub fn percent_bounds(self, available: f64) -> PercentBounds {
        PercentBounds {
            min: px_to_percent(self.min_size, available),
            max: self
                .max_size
                .filter(|_| available > 0.0)
                .map_or(f64::INFINITY, |max| px_to_percent(max, available)),
        }
    }
}

/// Size bounds in percent of the available axis length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentBounds {
    pub min: f64,
    pub max: f64,
}

impl PercentBounds {
    /// No bounds at all.
    pub const UNBOUNDED: Self = Self {
        min: 0.0,
        max: f64::INFINITY,
    };

    /// Clamp `value` into the bounds. When `max < min` the minimum wins.
    #[inline]
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.min(self.max).max(self.min)
    }

    /// Raise the minimum to at least `floor`.
    #[inline]
    #[must_use]
    pub fn with_min_floor(self, floor: f64) -> Self {
        Self {
            min: self.min.max(floor),
            max: self.max,
        }
    }
}

/// Axis length left for panels once dividers are subtracted.
#[must_use]
pub fn available_length(container_length: f64, panel_count: usize, gutter_size: f64) -> f64 {
    let gutters = panel_count.saturating_sub(1) as f64 * gutter_size;
    (container_length - gutters).max(0.0)
}

/// Convert pixels to percent of `available`. An unmeasured container
/// (`available <= 0`) maps every length to `0`.
#[inline]
#[must_use]
pub fn px_to_percent(px: f64, available: f64) -> f64 {
    if available > 0.0 && px.is_finite() {
        px / available * TOTAL_PERCENT
    } else {
        0.0
    }
}

/// Initial size vector for a panel set.
///
/// Precedence: a container-level `default_sizes` of matching length, then
/// per-panel hints (`default_size`, else `size`) with the remainder split
/// evenly among panels without one, then an even split.
///
/// When the hints leave no remainder, panels without one take an even
/// `100 / n` share instead of `0`; the caller's normalization then shrinks
/// the hinted entries to make room.
#[must_use]
pub fn initial_sizes(panels: &[PanelSpec], default_sizes: Option<&[f64]>) -> Vec<f64> {
    let count = panels.len();
    assert!(count > 0, "splitter requires at least one panel");

    if let Some(defaults) = default_sizes
        && defaults.len() == count
    {
        return defaults.to_vec();
    }

    let hints: Vec<Option<f64>> = panels
        .iter()
        .map(|panel| panel.default_size.or(panel.size))
        .collect();
    if hints.iter().all(Option::is_none) {
        return vec![TOTAL_PERCENT / count as f64; count];
    }

    let explicit: f64 = hints.iter().flatten().sum();
    let missing = hints.iter().filter(|hint| hint.is_none()).count();
    let remainder = TOTAL_PERCENT - explicit;
    let share = if missing == 0 {
        0.0
    } else if remainder > RENORMALIZE_TOLERANCE {
        remainder / missing as f64
    } else {
        TOTAL_PERCENT / count as f64
    };
    hints.into_iter().map(|hint| hint.unwrap_or(share)).collect()
}

/// Merge host-controlled per-panel sizes with the engine's own vector.
///
/// Returns `None` when no panel carries a controlled `size`. Collapsed panels
/// render at `0` whatever their `size`. Expanded panels with a `size` keep it,
/// and the remainder of the total is spread over the other expanded panels in
/// proportion to their internal sizes. When the controlled entries leave no
/// remainder, the free panels keep their internal sizes and the whole vector
/// is rescaled, so the result always satisfies the size-vector invariants.
#[must_use]
pub fn controlled_panel_sizes(
    panels: &[PanelSpec],
    internal: &[f64],
    collapsed: &[bool],
) -> Option<Vec<f64>> {
    assert_eq!(panels.len(), internal.len(), "panel/size length mismatch");
    assert_eq!(panels.len(), collapsed.len(), "panel/collapsed length mismatch");
    if panels.iter().all(|panel| panel.size.is_none()) {
        return None;
    }

    let mut sizes = vec![0.0; panels.len()];
    let mut controlled = 0.0;
    let mut free = Vec::new();
    for (i, panel) in panels.iter().enumerate() {
        if collapsed[i] {
            continue;
        }
        match panel.size {
            Some(size) => {
                sizes[i] = size;
                controlled += size;
            }
            None => free.push(i),
        }
    }

    let remainder = TOTAL_PERCENT - controlled;
    let free_total: f64 = free.iter().map(|&i| internal[i]).sum();
    for &i in &free {
        sizes[i] = if remainder <= RENORMALIZE_TOLERANCE {
            internal[i]
        } else if free_total > 0.0 {
            remainder * internal[i] / free_total
        } else {
            remainder / free.len() as f64
        };
    }

    let _ = normalize_sizes(&mut sizes, collapsed);
    Some(sizes)
}

/// Repair `sizes` in place so it satisfies the size-vector invariants for the
/// given collapsed flags.
///
/// Collapsed entries become exactly `0`, negative or non-finite entries become
/// `0`, and the expanded entries are rescaled to sum to [`TOTAL_PERCENT`] (an
/// all-zero expansion is replaced by an even split). Returns `true` when the
/// input broke an invariant beyond floating-point noise.
pub fn normalize_sizes(sizes: &mut [f64], collapsed: &[bool]) -> bool {
    assert_eq!(sizes.len(), collapsed.len(), "size/collapsed length mismatch");
    let mut repaired = false;

    for (size, &is_collapsed) in sizes.iter_mut().zip(collapsed) {
        if is_collapsed {
            if *size != 0.0 {
                *size = 0.0;
                repaired = true;
            }
        } else if !size.is_finite() || *size < 0.0 {
            *size = 0.0;
            repaired = true;
        }
    }

    let expanded = collapsed.iter().filter(|&&c| !c).count();
    debug_assert!(expanded > 0, "at least one panel must stay expanded");
    if expanded == 0 {
        let share = TOTAL_PERCENT / sizes.len() as f64;
        sizes.iter_mut().for_each(|size| *size = share);
        return true;
    }

    let total: f64 = sizes.iter().sum();
    if total <= 0.0 {
        let share = TOTAL_PERCENT / expanded as f64;
        for (size, &is_collapsed) in sizes.iter_mut().zip(collapsed) {
            if !is_collapsed {
                *size = share;
            }
        }
        return true;
    }

    let drift = (total - TOTAL_PERCENT).abs();
    if drift > 0.0 {
        let scale = TOTAL_PERCENT / total;
        sizes.iter_mut().for_each(|size| *size *= scale);
        repaired |= drift > RENORMALIZE_TOLERANCE;
    }
    repaired
}

/// Ordered panel sizes plus the constraint table and collapsed flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeModel {
    sizes: Vec<f64>,
    constraints: Vec<PanelConstraints>,
    collapsed: Vec<bool>,
}

impl SizeModel {
    /// Build the model for a panel set.
    ///
    /// # Panics
    ///
    /// Panics when `panels` is empty.
    #[must_use]
    pub fn new(panels: &[PanelSpec], config: &SplitterConfig) -> Self {
        assert!(!panels.is_empty(), "splitter requires at least one panel");

        let mut collapsed: Vec<bool> = panels.iter().map(PanelSpec::initially_collapsed).collect();
        if collapsed.iter().all(|&c| c)
            && let Some(last) = collapsed.last_mut()
        {
            *last = false;
        }

        let mut sizes = initial_sizes(panels, config.default_sizes.as_deref());
        let _ = normalize_sizes(&mut sizes, &collapsed);

        Self {
            sizes,
            constraints: resolve_constraints(panels, config),
            collapsed,
        }
    }

    #[inline]
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.sizes.len()
    }

    /// Current size vector in percent.
    #[inline]
    #[must_use]
    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    #[inline]
    #[must_use]
    pub fn constraints(&self) -> &[PanelConstraints] {
        &self.constraints
    }

    #[inline]
    #[must_use]
    pub fn is_collapsed(&self, index: usize) -> bool {
        self.collapsed[index]
    }

    #[inline]
    #[must_use]
    pub fn collapsed_flags(&self) -> &[bool] {
        &self.collapsed
    }

    /// Inverse of [`Self::collapsed_flags`].
    #[must_use]
    pub fn expanded_flags(&self) -> Vec<bool> {
        self.collapsed.iter().map(|&c| !c).collect()
    }

    /// Number of panels currently expanded.
    #[must_use]
    pub fn expanded_count(&self) -> usize {
        self.collapsed.iter().filter(|&&c| !c).count()
    }

    /// Whether the divider between `divider` and `divider + 1` may move:
    /// both neighbours resizable and expanded.
    #[must_use]
    pub fn divider_resizable(&self, divider: usize) -> bool {
        assert!(
            divider + 1 < self.panel_count(),
            "divider {divider} out of range for {} panels",
            self.panel_count()
        );
        let (left, right) = (divider, divider + 1);
        self.constraints[left].resizable
            && self.constraints[right].resizable
            && !self.collapsed[left]
            && !self.collapsed[right]
    }

    /// Percent bounds for every panel at the given available length.
    #[must_use]
    pub fn percent_bounds(&self, available: f64) -> Vec<PercentBounds> {
        self.constraints
            .iter()
            .map(|constraint| constraint.percent_bounds(available))
            .collect()
    }

    /// Minimum fraction for every panel at the given available length.
    #[must_use]
    pub fn min_percents(&self, available: f64) -> Vec<f64> {
        self.constraints
            .iter()
            .map(|constraint| px_to_percent(constraint.min_size, available))
            .collect()
    }

    /// Flip a collapsed flag without touching sizes.
    ///
    /// Refuses (returns `false`) to collapse the last expanded panel.
    pub fn set_collapsed(&mut self, index: usize, collapsed: bool) -> bool {
        if collapsed && !self.collapsed[index] && self.expanded_count() <= 1 {
            return false;
        }
        self.collapsed[index] = collapsed;
        true
    }

    /// Replace the constraint table (panel count unchanged).
    pub fn set_constraints(&mut self, panels: &[PanelSpec], config: &SplitterConfig) {
        assert_eq!(panels.len(), self.panel_count(), "panel count changed");
        self.constraints = resolve_constraints(panels, config);
    }

    /// Repair a candidate vector against this model's collapsed flags without
    /// publishing it.
    #[must_use]
    pub fn normalized(&self, mut sizes: Vec<f64>) -> Vec<f64> {
        assert_eq!(
            sizes.len(),
            self.panel_count(),
            "size vector length must match panel count"
        );
        if normalize_sizes(&mut sizes, &self.collapsed) {
            tracing::warn!(
                target: "splitter.layout",
                panels = sizes.len(),
                "size vector violated invariants; renormalized"
            );
        }
        sizes
    }

    /// The single mutation entry point: repair `sizes` if needed and publish.
    pub fn apply_vector(&mut self, sizes: Vec<f64>) -> &[f64] {
        self.sizes = self.normalized(sizes);
        &self.sizes
    }
}

fn resolve_constraints(panels: &[PanelSpec], config: &SplitterConfig) -> Vec<PanelConstraints> {
    panels
        .iter()
        .map(|panel| PanelConstraints::resolve(panel, config))
        .collect()
}
