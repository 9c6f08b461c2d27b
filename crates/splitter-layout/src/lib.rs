#![forbid(unsafe_code)]

//! Resizable split-panel layout engine.
//!
//! A run of panels laid out along one axis, separated by draggable dividers.
//! Sizes are percentages of the container that always sum to 100; pixel
//! bounds are converted against the measured axis length at the moment they
//! are needed.
//!
//! - [`size_model`] holds the vector, collapsed flags, and constraint table.
//! - [`solver`] moves one divider and settles the pair it separates.
//! - [`collapse`] hands a panel's space to its siblings and takes it back.
//! - [`drag`] and [`keyboard`] turn pointer and key input into solver calls.
//! - [`Splitter`] ties them together and notifies the host.

pub mod collapse;
pub mod config;
pub mod drag;
pub mod keyboard;
pub mod size_model;
pub mod solver;
mod splitter;

pub use collapse::CollapseMemory;
pub use config::{
    DEFAULT_GUTTER_SIZE, DEFAULT_KEYBOARD_COARSE_MULTIPLIER, DEFAULT_KEYBOARD_MIN_PERCENT,
    DEFAULT_KEYBOARD_STEP, DEFAULT_MIN_SIZE, KeyboardTuning, PanelSpec, SizeMode, SplitterConfig,
    SplitterConfigError,
};
pub use drag::{
    BodyOverride, DragController, DragEffect, DragEndReason, DragNoopReason, DragSession,
    DragState,
};
pub use keyboard::KeyboardController;
pub use size_model::{PanelConstraints, PercentBounds, SizeModel, TOTAL_PERCENT};
pub use solver::resize_pair;
pub use splitter::{GutterInfo, PanelExtents, Splitter, SplitterListener};

pub use splitter_core::{
    Axis, BodyStyleHost, CursorIcon, KeyCode, KeyEvent, KeyEventKind, Modifiers, NoopBodyStyle,
    PointerPosition,
};
