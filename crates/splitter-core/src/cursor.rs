#![forbid(unsafe_code)]

//! Host hooks for document-level cursor and selection overrides.
//!
//! While a divider drag is in flight the pointer usually leaves the divider's
//! hit area. To keep the resize cursor visible and to stop the host from
//! selecting text under the pointer, the engine forces both at the document
//! (body) level for exactly the duration of the drag.
//!
//! Hosts implement [`BodyStyleHost`]; the engine wraps it in a scoped guard so
//! that every exit path (pointer-up, cancel, teardown) restores the host.

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Cursor icons the engine can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorIcon {
    /// Host default cursor.
    #[default]
    Default,
    /// Horizontal resize arrows (for a horizontal splitter).
    ColResize,
    /// Vertical resize arrows (for a vertical splitter).
    RowResize,
}

impl CursorIcon {
    /// Resize cursor for dividers of a splitter laid out along `axis`.
    #[must_use]
    pub const fn resize_for(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self::ColResize,
            Axis::Vertical => Self::RowResize,
        }
    }
}

/// Document-level style overrides applied during a drag.
///
/// Methods take `&self`: the engine shares the host handle between the
/// container and the in-flight drag guard, so implementors use interior
/// mutability.
pub trait BodyStyleHost {
    /// Force `cursor` on the whole document, or restore the host cursor when
    /// `None`.
    fn override_cursor(&self, cursor: Option<CursorIcon>);

    /// Suppress (or re-enable) text selection on the whole document.
    fn suppress_selection(&self, suppress: bool);
}

/// Host that ignores every override.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBodyStyle;

impl BodyStyleHost for NoopBodyStyle {
    fn override_cursor(&self, _cursor: Option<CursorIcon>) {}

    fn suppress_selection(&self, _suppress: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_cursor_follows_axis() {
        assert_eq!(CursorIcon::resize_for(Axis::Horizontal), CursorIcon::ColResize);
        assert_eq!(CursorIcon::resize_for(Axis::Vertical), CursorIcon::RowResize);
    }

    #[test]
    fn noop_host_accepts_overrides() {
        let host = NoopBodyStyle;
        host.override_cursor(Some(CursorIcon::ColResize));
        host.suppress_selection(true);
        host.override_cursor(None);
        host.suppress_selection(false);
    }
}
