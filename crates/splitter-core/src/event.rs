//! Key input delivered to a focused divider.
//!
//! Hosts translate native keyboard events into [`KeyEvent`]. Only arrow keys
//! move a divider; the remaining variants exist so hosts can forward every
//! event without filtering and let the engine ignore what it does not use.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// One key transition on a focused divider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyEvent {
    pub code: KeyCode,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A press of `code` with no modifiers held.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
            kind: KeyEventKind::Press,
        }
    }

    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Shift selects the coarse keyboard step.
    #[must_use]
    pub const fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Press or auto-repeat. Releases never move a divider.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }
}

/// Keys a host may forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Char(char),
    Enter,
    Escape,
    Tab,
    Home,
    End,
    Up,
    Down,
    Left,
    Right,
    /// Anything without a dedicated variant.
    Other,
}

impl KeyCode {
    /// The axis an arrow key points along and its sign (`-1` toward the start
    /// of the axis, `+1` toward the end). `None` for non-arrow keys.
    #[must_use]
    pub const fn arrow(self) -> Option<(Axis, f64)> {
        match self {
            Self::Left => Some((Axis::Horizontal, -1.0)),
            Self::Right => Some((Axis::Horizontal, 1.0)),
            Self::Up => Some((Axis::Vertical, -1.0)),
            Self::Down => Some((Axis::Vertical, 1.0)),
            _ => None,
        }
    }
}

/// Press, auto-repeat, or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyEventKind {
    /// Hosts that cannot distinguish transitions report presses.
    #[default]
    Press,
    Repeat,
    Release,
}

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modifiers: u8 {
        const NONE  = 0;
        const SHIFT = 1 << 0;
        const ALT   = 1 << 1;
        const CTRL  = 1 << 2;
        /// Meta / Command / Windows key.
        const SUPER = 1 << 3;
    }
}
