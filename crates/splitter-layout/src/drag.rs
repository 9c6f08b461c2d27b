//! Divider drag lifecycle.
//!
//! ```text
//! Idle --pointer-down (divider unlocked)--> Dragging
//! Dragging --pointer-move--> Dragging   (re-solve from start snapshot)
//! Dragging --pointer-up | cancel | panel-set or config change | collapse | teardown--> Idle
//! ```
//!
//! Every move is solved against the immutable `start_sizes` snapshot taken at
//! pointer-down, never against the previous move's output, so replaying the
//! same position always yields the same vector.
//!
//! While dragging, the session holds a [`BodyOverride`] guard that forces the
//! resize cursor and suppresses text selection on the host. Dropping the
//! session (on any exit path) releases it.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use splitter_core::{BodyStyleHost, CursorIcon};

use crate::size_model::{PercentBounds, px_to_percent};
use crate::solver::resize_pair;

/// Scoped document-level override held for the duration of a drag.
pub struct BodyOverride {
    host: Rc<dyn BodyStyleHost>,
}

impl BodyOverride {
    /// Apply the resize cursor and suppress selection on `host`.
    #[must_use]
    pub fn acquire(host: Rc<dyn BodyStyleHost>, cursor: CursorIcon) -> Self {
        host.override_cursor(Some(cursor));
        host.suppress_selection(true);
        Self { host }
    }
}

impl Drop for BodyOverride {
    fn drop(&mut self) {
        self.host.override_cursor(None);
        self.host.suppress_selection(false);
    }
}

impl fmt::Debug for BodyOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BodyOverride").finish_non_exhaustive()
    }
}

/// Transient state of one in-flight drag.
#[derive(Debug)]
pub struct DragSession {
    divider: usize,
    origin: f64,
    current: f64,
    start_sizes: Vec<f64>,
    _body: Option<BodyOverride>,
}

impl DragSession {
    /// Divider index (the panel on its start side).
    #[must_use]
    pub const fn divider(&self) -> usize {
        self.divider
    }

    /// Pointer position along the axis at pointer-down.
    #[must_use]
    pub const fn origin(&self) -> f64 {
        self.origin
    }

    /// Most recent pointer position along the axis.
    #[must_use]
    pub const fn current(&self) -> f64 {
        self.current
    }

    /// Size vector snapshot taken at pointer-down.
    #[must_use]
    pub fn start_sizes(&self) -> &[f64] {
        &self.start_sizes
    }
}

/// Observable drag state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    Idle,
    Dragging {
        divider: usize,
        origin: f64,
        current: f64,
    },
}

/// Why a drag ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEndReason {
    PointerUp,
    PointerCancel,
    PanelSetChanged,
    /// Container-level settings were replaced mid-drag.
    ConfigChanged,
    /// A panel was collapsed or expanded mid-drag.
    CollapseToggled,
    Teardown,
}

/// Lifecycle events that are safely ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragNoopReason {
    IdleWithoutActiveDrag,
    ActiveDragAlreadyInProgress,
    /// A neighbour of the divider is collapsed or not resizable.
    DividerLocked,
}

/// Effect of one drag lifecycle step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum DragEffect {
    Started {
        divider: usize,
        origin: f64,
    },
    Updated {
        divider: usize,
        total_delta_px: f64,
        sizes: Vec<f64>,
    },
    Ended {
        divider: usize,
        reason: DragEndReason,
    },
    Noop {
        reason: DragNoopReason,
    },
}

impl DragEffect {
    /// Published sizes carried by an `Updated` effect.
    #[must_use]
    pub fn sizes(&self) -> Option<&[f64]> {
        match self {
            Self::Updated { sizes, .. } => Some(sizes),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::Noop { .. })
    }
}

/// Pointer-driven divider controller.
#[derive(Debug, Default)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        match &self.session {
            None => DragState::Idle,
            Some(session) => DragState::Dragging {
                divider: session.divider,
                origin: session.origin,
                current: session.current,
            },
        }
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Enter `Dragging` on `divider`. The caller has already checked that the
    /// divider is unlocked.
    ///
    /// The body override is acquired only when the drag actually starts.
    pub fn begin(
        &mut self,
        divider: usize,
        origin: f64,
        start_sizes: Vec<f64>,
        body: Option<(Rc<dyn BodyStyleHost>, CursorIcon)>,
    ) -> DragEffect {
        if self.session.is_some() {
            return DragEffect::Noop {
                reason: DragNoopReason::ActiveDragAlreadyInProgress,
            };
        }
        assert!(
            divider + 1 < start_sizes.len(),
            "divider {divider} out of range for {} panels",
            start_sizes.len()
        );

        self.session = Some(DragSession {
            divider,
            origin,
            current: origin,
            start_sizes,
            _body: body.map(|(host, cursor)| BodyOverride::acquire(host, cursor)),
        });
        DragEffect::Started { divider, origin }
    }

    /// Solve the vector for a pointer at `position` along the axis.
    ///
    /// `available` is the current axis length minus dividers; `bounds` the
    /// per-panel percent bounds at that length. Returns `None` when idle.
    pub fn update(
        &mut self,
        position: f64,
        available: f64,
        bounds: &[PercentBounds],
    ) -> Option<DragEffect> {
        let session = self.session.as_mut()?;
        session.current = position;

        let total_delta_px = position - session.origin;
        let delta = px_to_percent(total_delta_px, available);
        let sizes = resize_pair(&session.start_sizes, session.divider, delta, bounds);
        Some(DragEffect::Updated {
            divider: session.divider,
            total_delta_px,
            sizes,
        })
    }

    /// Return to `Idle`, releasing the body override.
    pub fn end(&mut self, reason: DragEndReason) -> DragEffect {
        match self.session.take() {
            Some(session) => DragEffect::Ended {
                divider: session.divider,
                reason,
            },
            None => DragEffect::Noop {
                reason: DragNoopReason::IdleWithoutActiveDrag,
            },
        }
    }
}
