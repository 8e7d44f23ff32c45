//! Resolve a completed move gesture into a new interval.

use chrono::NaiveDateTime;

use crate::config::GridConfig;
use crate::drag::{DragIntent, DragKind, DropTarget, MoveResolution};
use crate::event::TimeInterval;
use crate::snap::{from_minute_of_day, minute_of_day, snap};

/// Compute where a dragged event lands.
///
/// The vertical pixel delta is converted to minutes and added to the original
/// start's minute of day, then snapped to `snap_duration`. The result is
/// clamped from below at `start_hour * 60`; there is no upper clamp, so an
/// event may spill past `end_hour`. The new start is placed on the drop
/// target's day and the original duration is kept exactly.
///
/// Returns `None` (nothing changes) when there is no drop target or the
/// intent is not a move.
pub fn resolve_move(
    intent: &DragIntent,
    delta_y: f64,
    drop_target: Option<&DropTarget>,
    config: &GridConfig,
) -> Option<MoveResolution> {
    if intent.kind != DragKind::Move {
        return None;
    }
    let target = drop_target?;

    let original = intent.original;
    let duration = original.duration();
    let minute_delta = config.pixels_to_minute_delta(delta_y);

    let snapped = snap(
        minute_of_day(original.start) as f64 + minute_delta,
        config.snap_duration(),
    );
    let start_minute = snapped.max(config.grid_start_minute());

    let start = from_minute_of_day(target.target_day_start(), start_minute);
    let end = start
        .checked_add_signed(duration)
        .unwrap_or(NaiveDateTime::MAX);

    Some(MoveResolution {
        event_id: intent.event_id.clone(),
        interval: TimeInterval::new(start, end),
        all_day: target.is_all_day_lane(),
    })
}
