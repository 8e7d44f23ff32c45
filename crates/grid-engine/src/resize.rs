//! Resolve a completed resize gesture into a new interval.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::config::{GridConfig, MINUTES_PER_DAY};
use crate::drag::{DragIntent, DragKind, ResizeResolution};
use crate::event::TimeInterval;
use crate::snap::{from_minute_of_day, minute_of_day, snap};

/// Compute the interval after dragging one edge of an event.
///
/// The dragged edge moves by the snapped minute delta; the opposite edge is
/// the anchor and never changes. The dragged edge is kept at least one
/// `snap_duration` away from the anchor and inside the visible hours:
///
/// | edge          | lower bound            | upper bound            |
/// |---------------|------------------------|------------------------|
/// | `ResizeEnd`   | anchor + snap          | `end_hour * 60`        |
/// | `ResizeStart` | `start_hour * 60`      | anchor - snap          |
///
/// When the bounds cross, the lower bound wins. The new edge is rebuilt on
/// the dragged edge's own original day, so minute values outside `0..1440`
/// roll into the neighbouring day. An end that sits exactly on midnight is
/// treated as minute 1440 of the day before it.
///
/// Returns `None` for a move intent.
pub fn resolve_resize(
    intent: &DragIntent,
    delta_y: f64,
    config: &GridConfig,
) -> Option<ResizeResolution> {
    let original = intent.original;
    let snap_minutes = i64::from(config.snap_duration());
    let minute_delta = config.pixels_to_minute_delta(delta_y);

    let interval = match intent.kind {
        DragKind::Move => return None,
        DragKind::ResizeEnd => {
            let (end_base, end_minute) = end_minute_of_day(&original);
            let candidate = snap(end_minute as f64 + minute_delta, config.snap_duration());
            let lower = minute_of_day(original.start) + snap_minutes;
            let upper = config.grid_end_minute();
            let end = from_minute_of_day(end_base, clamp_low_wins(candidate, lower, upper));
            TimeInterval::new(original.start, end)
        }
        DragKind::ResizeStart => {
            let (_, anchor_minute) = end_minute_of_day(&original);
            let candidate = snap(
                minute_of_day(original.start) as f64 + minute_delta,
                config.snap_duration(),
            );
            let lower = config.grid_start_minute();
            let upper = anchor_minute - snap_minutes;
            let start = from_minute_of_day(original.start, clamp_low_wins(candidate, lower, upper));
            TimeInterval::new(start, original.end)
        }
    };

    Some(ResizeResolution {
        event_id: intent.event_id.clone(),
        interval,
    })
}

/// Minute of day of an interval's end, with the instant whose day it is
/// measured against. A midnight end closing a non-empty interval belongs to
/// the previous day as minute 1440.
fn end_minute_of_day(interval: &TimeInterval) -> (NaiveDateTime, i64) {
    let end = interval.end;
    if end > interval.start && end.time() == NaiveTime::MIN {
        if let Some(previous_day) = end.checked_sub_signed(Duration::days(1)) {
            return (previous_day, MINUTES_PER_DAY);
        }
    }
    (end, minute_of_day(end))
}

/// Clamp into `[lower, upper]`; when the bounds cross, `lower` wins.
fn clamp_low_wins(value: i64, lower: i64, upper: i64) -> i64 {
    value.min(upper).max(lower)
}
