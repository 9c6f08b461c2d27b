#![forbid(unsafe_code)]

//! Splitter public facade crate.
//!
//! Re-exports the engine from `splitter-layout` and the input vocabulary from
//! `splitter-core`, and adds [`SplitterLayout`]: a serializable description
//! of one splitter that hosts can load from JSON, build, and snapshot back
//! for persistence.

use std::fmt;

use serde::{Deserialize, Serialize};

// --- Core re-exports -------------------------------------------------------

pub use splitter_core::{
    Axis, BodyStyleHost, CursorIcon, KeyCode, KeyEvent, KeyEventKind, Modifiers, NoopBodyStyle,
    PointerPosition,
};

// --- Layout re-exports -----------------------------------------------------

pub use splitter_layout::{
    BodyOverride, CollapseMemory, DragController, DragEffect, DragEndReason, DragNoopReason,
    DragState, GutterInfo, KeyboardController, KeyboardTuning, PanelConstraints, PanelExtents,
    PanelSpec, PercentBounds, SizeMode, SizeModel, Splitter, SplitterConfig, SplitterConfigError,
    SplitterListener, TOTAL_PERCENT, resize_pair,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for splitter hosts.
#[derive(Debug)]
pub enum Error {
    /// The configuration or panel list was rejected.
    Config(SplitterConfigError),
    /// A layout description could not be parsed or written.
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid splitter configuration: {err}"),
            Self::Json(err) => write!(f, "invalid layout description: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<SplitterConfigError> for Error {
    fn from(err: SplitterConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// Standard result type for splitter APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Layout descriptions --------------------------------------------------

/// Serializable description of one splitter.
///
/// When `sizes` is present the built splitter runs in
/// [`SizeMode::Controlled`] with that vector; otherwise it owns its sizes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterLayout {
    pub config: SplitterConfig,
    pub panels: Vec<PanelSpec>,
    pub sizes: Option<Vec<f64>>,
}

impl SplitterLayout {
    #[must_use]
    pub fn new(config: SplitterConfig, panels: Vec<PanelSpec>) -> Self {
        Self {
            config,
            panels,
            sizes: None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the splitter this layout describes.
    pub fn build(self) -> Result<Splitter> {
        let splitter = match self.sizes {
            Some(sizes) => Splitter::controlled(self.config, self.panels, sizes)?,
            None => Splitter::new(self.config, self.panels)?,
        };
        tracing::debug!(
            target: "splitter.layout",
            panels = splitter.panel_count(),
            mode = ?splitter.mode(),
            "layout built"
        );
        Ok(splitter)
    }

    /// Capture a running splitter so it can be rebuilt later.
    ///
    /// Owned splitters persist their current vector as `default_sizes` and
    /// their collapsed flags as `default_collapsed`; controlled splitters keep
    /// the host's vector in `sizes`.
    #[must_use]
    pub fn snapshot(splitter: &Splitter) -> Self {
        let panels = splitter
            .panels()
            .iter()
            .zip(splitter.collapsed_flags())
            .map(|(panel, &collapsed)| panel.clone().default_collapsed(collapsed))
            .collect();
        let sizes = splitter.current_sizes();
        match splitter.mode() {
            SizeMode::Owned => Self {
                config: splitter.config().clone().default_sizes(sizes),
                panels,
                sizes: None,
            },
            SizeMode::Controlled => Self {
                config: splitter.config().clone(),
                panels,
                sizes: Some(sizes),
            },
        }
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Axis, DragEffect, Error, KeyCode, KeyEvent, Modifiers, PanelSpec, PointerPosition, Result,
        Splitter, SplitterConfig, SplitterLayout, SplitterListener,
    };

    pub use crate::{core, layout};
}

pub use splitter_core as core;
pub use splitter_layout as layout;
