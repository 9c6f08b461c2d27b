#![forbid(unsafe_code)]

//! Core: the input vocabulary shared by the splitter engine and its hosts.
//!
//! # Role in the workspace
//! `splitter-core` carries no layout logic. It defines what a host hands to
//! the engine (pointer positions, key events) and what the engine hands back
//! to the host while a drag is in flight (cursor and text-selection
//! overrides).
//!
//! # Primary responsibilities
//! - **Axis / PointerPosition**: project 2-D pointer coordinates onto the
//!   splitter's active axis.
//! - **KeyEvent**: canonical key events with bitflag modifiers.
//! - **BodyStyleHost**: the host hook for document-level cursor and
//!   selection overrides.

pub mod cursor;
pub mod event;
pub mod geometry;

pub use cursor::{BodyStyleHost, CursorIcon, NoopBodyStyle};
pub use event::{KeyCode, KeyEvent, KeyEventKind, Modifiers};
pub use geometry::{Axis, PointerPosition};
