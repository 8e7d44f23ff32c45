//! Gesture lifecycle: `Idle -> Dragging -> (resolved | cancelled) -> Idle`.
//!
//! Pointer samples during a drag only update a visual offset. The snapped
//! geometry is computed once, when the gesture finishes. The tracker holds
//! no configuration; the grid is passed in at the call that needs it.

use serde::Serialize;

use crate::config::GridConfig;
use crate::drag::{DragIntent, DragKind, DropTarget, MoveResolution, ResizeResolution};
use crate::event::TimeInterval;
use crate::movement::resolve_move;
use crate::resize::resolve_resize;
use crate::snap::round_half_up;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging {
        intent: DragIntent,
        /// Total vertical pointer offset since the gesture began, in pixels.
        offset_y: f64,
    },
}

/// What a finished gesture proposes to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    Moved(MoveResolution),
    Resized(ResizeResolution),
    /// Nothing changes: no drop target, no active gesture, or an intent the
    /// resolver does not handle.
    Cancelled,
}

/// Visual geometry of a block while it is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewGeometry {
    pub top: f64,
    pub height: f64,
}

/// Tracks at most one active drag gesture.
#[derive(Debug, Default)]
pub struct GestureTracker {
    state: GestureState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    pub fn active_intent(&self) -> Option<&DragIntent> {
        match &self.state {
            GestureState::Dragging { intent, .. } => Some(intent),
            GestureState::Idle => None,
        }
    }

    /// Start tracking `intent`. Refused (returns `false`) while another
    /// gesture is active.
    pub fn begin(&mut self, intent: DragIntent) -> bool {
        if let GestureState::Dragging { intent: active, .. } = &self.state {
            log::debug!(
                "ignoring gesture on event {}: event {} is already being dragged",
                intent.event_id,
                active.event_id
            );
            return false;
        }

        log::debug!("gesture {:?} started on event {}", intent.kind, intent.event_id);
        self.state = GestureState::Dragging {
            intent,
            offset_y: 0.0,
        };
        true
    }

    /// Record the pointer's total vertical offset. Ignored when idle.
    pub fn pointer_moved(&mut self, delta_y: f64) {
        if let GestureState::Dragging { offset_y, .. } = &mut self.state {
            *offset_y = delta_y;
        }
    }

    /// End the gesture and resolve it. Always returns the tracker to idle.
    pub fn finish(
        &mut self,
        drop_target: Option<&DropTarget>,
        config: &GridConfig,
    ) -> GestureOutcome {
        let (intent, offset_y) = match std::mem::take(&mut self.state) {
            GestureState::Dragging { intent, offset_y } => (intent, offset_y),
            GestureState::Idle => return GestureOutcome::Cancelled,
        };

        let resolved = if intent.kind.is_resize() {
            resolve_resize(&intent, offset_y, config).map(GestureOutcome::Resized)
        } else {
            resolve_move(&intent, offset_y, drop_target, config).map(GestureOutcome::Moved)
        };
        let outcome = resolved.unwrap_or(GestureOutcome::Cancelled);

        match &outcome {
            GestureOutcome::Cancelled => {
                log::debug!("gesture on event {} cancelled", intent.event_id)
            }
            _ => log::debug!("gesture on event {} resolved", intent.event_id),
        }
        outcome
    }

    /// Abort the active gesture without proposing a change.
    pub fn cancel(&mut self) {
        if let GestureState::Dragging { intent, .. } = std::mem::take(&mut self.state) {
            log::debug!("gesture on event {} cancelled", intent.event_id);
        }
    }

    /// Where the dragged block should be drawn right now.
    ///
    /// Resize previews snap the offset to whole snap steps in pixels and keep
    /// the block at least one snap step tall. Move previews follow the pointer
    /// unsnapped. Returns `None` when idle.
    pub fn preview(&self, top: f64, height: f64, config: &GridConfig) -> Option<PreviewGeometry> {
        let (intent, offset_y) = match &self.state {
            GestureState::Dragging { intent, offset_y } => (intent, *offset_y),
            GestureState::Idle => return None,
        };

        let snap_pixels = f64::from(config.snap_duration()) * config.pixels_per_minute();
        let snapped = round_half_up(offset_y / snap_pixels) * snap_pixels;

        let geometry = match intent.kind {
            DragKind::Move => PreviewGeometry {
                top: top + offset_y,
                height,
            },
            DragKind::ResizeEnd => PreviewGeometry {
                top,
                height: snap_pixels.max(height + snapped),
            },
            DragKind::ResizeStart => {
                let delta = snapped.min(height - snap_pixels);
                PreviewGeometry {
                    top: top + delta,
                    height: snap_pixels.max(height - delta),
                }
            }
        };
        Some(geometry)
    }
}

/// Fallback size of the floating move preview when the host cannot measure
/// the original block: one slot height per slot of duration.
pub fn drag_preview_height(original: &TimeInterval, config: &GridConfig) -> f64 {
    let minutes = original.duration().num_seconds() as f64 / 60.0;
    (minutes / f64::from(config.slot_duration())) * config.slot_height()
}
