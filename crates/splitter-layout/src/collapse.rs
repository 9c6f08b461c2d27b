//! Collapse/expand redistribution.
//!
//! Collapsing hands a panel's fraction to its expanded siblings in proportion
//! to their current share; expanding takes the remembered fraction back the
//! same way, pinning any sibling that would drop under its minimum and
//! re-spreading the shortfall over the rest.

use std::collections::BTreeMap;

use crate::size_model::TOTAL_PERCENT;

/// Redistribute `sizes[index]` over the other expanded panels.
///
/// `expanded[j]` marks the panels that may receive space; the entry for
/// `index` itself is ignored. With no other expanded panel the vector is
/// returned unchanged. If every receiver currently holds `0` they split the
/// freed fraction evenly.
#[must_use]
pub fn collapse(sizes: &[f64], index: usize, expanded: &[bool]) -> Vec<f64> {
    assert_eq!(sizes.len(), expanded.len(), "size/flag length mismatch");
    assert!(index < sizes.len(), "panel {index} out of range");

    let receivers = siblings(expanded, index);
    let mut out = sizes.to_vec();
    if receivers.is_empty() {
        return out;
    }

    let freed = sizes[index];
    let pool: f64 = receivers.iter().map(|&j| sizes[j]).sum();
    for &j in &receivers {
        let share = if pool > 0.0 {
            sizes[j] / pool
        } else {
            1.0 / receivers.len() as f64
        };
        out[j] += freed * share;
    }
    out[index] = 0.0;
    out
}

/// Restore `sizes[index]` to `remembered` percent, taking the space from the
/// other expanded panels in proportion to their current share.
///
/// A sibling that would drop below `min_percents[j]` is pinned there and the
/// shortfall is re-spread over the remaining siblings until the request is met
/// or no sibling can give more; the expanding panel then receives less than
/// `remembered`, possibly nothing at all.
#[must_use]
pub fn expand(
    sizes: &[f64],
    index: usize,
    remembered: f64,
    expanded: &[bool],
    min_percents: &[f64],
) -> Vec<f64> {
    assert_eq!(sizes.len(), expanded.len(), "size/flag length mismatch");
    assert_eq!(sizes.len(), min_percents.len(), "size/min length mismatch");
    assert!(index < sizes.len(), "panel {index} out of range");

    let mut out = sizes.to_vec();
    let mut donors = siblings(expanded, index);
    let mut remaining = if remembered.is_finite() {
        remembered.clamp(0.0, TOTAL_PERCENT)
    } else {
        0.0
    };
    let mut granted = 0.0;

    while remaining > 0.0 && !donors.is_empty() {
        let pool: f64 = donors.iter().map(|&j| out[j]).sum();
        if pool <= 0.0 {
            break;
        }

        let pinned: Vec<usize> = donors
            .iter()
            .copied()
            .filter(|&j| out[j] - remaining * out[j] / pool < min_percents[j])
            .collect();

        if pinned.is_empty() {
            for &j in &donors {
                out[j] -= remaining * out[j] / pool;
            }
            granted += remaining;
            break;
        }

        for &j in &pinned {
            let spare = (out[j] - min_percents[j]).max(0.0);
            out[j] -= spare;
            granted += spare;
            remaining -= spare;
        }
        donors.retain(|j| !pinned.contains(j));
    }

    out[index] = sizes[index] + granted;
    out
}

fn siblings(expanded: &[bool], index: usize) -> Vec<usize> {
    expanded
        .iter()
        .enumerate()
        .filter(|&(j, &is_expanded)| j != index && is_expanded)
        .map(|(j, _)| j)
        .collect()
}

/// Size vectors captured right before each panel was last collapsed.
///
/// Entries are overwritten on the next collapse of the same panel and cleared
/// wholesale when the panel count changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollapseMemory {
    snapshots: BTreeMap<usize, Vec<f64>>,
}

impl CollapseMemory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the vector in effect just before `index` collapses.
    pub fn remember(&mut self, index: usize, sizes: &[f64]) {
        let _ = self.snapshots.insert(index, sizes.to_vec());
    }

    /// The fraction `index` held before it was last collapsed, if known and
    /// non-zero.
    #[must_use]
    pub fn remembered(&self, index: usize) -> Option<f64> {
        self.snapshots
            .get(&index)
            .and_then(|snapshot| snapshot.get(index).copied())
            .filter(|&size| size > 0.0)
    }

    /// Fraction to restore on expand, falling back to an even share.
    #[must_use]
    pub fn restore_size(&self, index: usize, panel_count: usize) -> f64 {
        self.remembered(index)
            .unwrap_or(TOTAL_PERCENT / panel_count as f64)
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
