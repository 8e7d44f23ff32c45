//! Drag gesture descriptors shared by the move and resize resolvers.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::event::{CalendarEvent, EventId, InteractionFlags, TimeInterval};
use crate::snap::start_of_day;

/// What a gesture does to its event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DragKind {
    /// Translate the whole event, preserving its duration.
    Move,
    /// Drag the top edge; the end stays fixed.
    ResizeStart,
    /// Drag the bottom edge; the start stays fixed.
    ResizeEnd,
}

impl DragKind {
    pub fn is_resize(&self) -> bool {
        matches!(self, DragKind::ResizeStart | DragKind::ResizeEnd)
    }
}

/// Snapshot of an event taken when a gesture starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragIntent {
    pub kind: DragKind,
    pub event_id: EventId,
    pub original: TimeInterval,
}

impl DragIntent {
    pub fn new(kind: DragKind, event_id: impl Into<EventId>, original: TimeInterval) -> Self {
        Self {
            kind,
            event_id: event_id.into(),
            original,
        }
    }

    /// Start a gesture on `event` if the interaction is allowed.
    ///
    /// Returns `None` when moves are disabled for the event, when resizes are
    /// disabled for the event, or when a resize is requested on an all-day
    /// event (all-day chips have no time edges).
    pub fn for_event(
        event: &CalendarEvent,
        kind: DragKind,
        flags: InteractionFlags,
    ) -> Option<Self> {
        let allowed = match kind {
            DragKind::Move => event.is_draggable(flags),
            DragKind::ResizeStart | DragKind::ResizeEnd => {
                !event.all_day && event.is_resizable(flags)
            }
        };

        allowed.then(|| Self::new(kind, event.id.clone(), event.interval()))
    }
}

/// Where a gesture ended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DropTarget {
    /// A day lane, either the timed grid or the all-day row.
    #[serde(rename_all = "camelCase")]
    Day { day: NaiveDate, all_day_lane: bool },
    /// Another event; the drop lands on that event's day.
    #[serde(rename_all = "camelCase")]
    Event { event_id: EventId, start: NaiveDateTime },
}

impl DropTarget {
    pub fn day(day: NaiveDate) -> Self {
        DropTarget::Day {
            day,
            all_day_lane: false,
        }
    }

    pub fn all_day_lane(day: NaiveDate) -> Self {
        DropTarget::Day {
            day,
            all_day_lane: true,
        }
    }

    pub fn on_event(event: &CalendarEvent) -> Self {
        DropTarget::Event {
            event_id: event.id.clone(),
            start: event.start,
        }
    }

    /// Midnight of the day the drop lands on.
    pub fn target_day_start(&self) -> NaiveDateTime {
        match self {
            DropTarget::Day { day, .. } => start_of_day(*day),
            DropTarget::Event { start, .. } => start_of_day(start.date()),
        }
    }

    /// Only an all-day lane turns the event into an all-day event.
    pub fn is_all_day_lane(&self) -> bool {
        matches!(
            self,
            DropTarget::Day {
                all_day_lane: true,
                ..
            }
        )
    }
}

/// Proposed replacement produced by a completed move gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResolution {
    pub event_id: EventId,
    pub interval: TimeInterval,
    pub all_day: bool,
}

/// Proposed replacement produced by a completed resize gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResizeResolution {
    pub event_id: EventId,
    pub interval: TimeInterval,
}
