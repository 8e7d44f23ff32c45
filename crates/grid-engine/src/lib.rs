//! # grid-engine
//!
//! Layout and direct-manipulation geometry for calendar time grids.
//!
//! Given the timed events of one day, the engine assigns each a column so that
//! overlapping events sit side by side, and computes pixel positions on a
//! vertical time axis. Given a finished drag gesture (a vertical pixel delta
//! and a drop target), it computes the snapped, clamped interval the event
//! should move or resize to. Everything here is pure: nothing is retained
//! between calls and host events are never mutated.
//!
//! ## Modules
//!
//! - [`config`]: Validated time-grid parameters
//! - [`snap`]: Minute-of-day conversion and snapping
//! - [`event`]: Calendar events, intervals, sorting and grouping
//! - [`layout`]: Column assignment and block geometry for one day
//! - [`drag`]: Gesture intents, drop targets and resolutions
//! - [`movement`]: Resolve a move gesture
//! - [`resize`]: Resolve a resize gesture
//! - [`gesture`]: Single-gesture lifecycle tracking and drag previews
//! - [`grid`]: Time slots and pixel/minute conversion
//! - [`diagnostics`]: Non-fatal event validation
//! - [`error`]: Error types

pub mod config;
pub mod diagnostics;
pub mod drag;
pub mod error;
pub mod event;
pub mod gesture;
pub mod grid;
pub mod layout;
pub mod movement;
pub mod resize;
pub mod snap;

pub use config::GridConfig;
pub use diagnostics::{validate_events, EventDiagnostic};
pub use drag::{DragIntent, DragKind, DropTarget, MoveResolution, ResizeResolution};
pub use error::GridError;
pub use event::{CalendarEvent, EventId, InteractionFlags, TimeInterval};
pub use gesture::{GestureOutcome, GestureTracker};
pub use layout::{layout, LayoutedBlock};
pub use movement::resolve_move;
pub use resize::resolve_resize;
