//! Minute-of-day arithmetic and snapping.
//!
//! Every geometric computation in the engine works on "minutes since local
//! midnight". These helpers convert between wall-clock instants and that
//! scale, and round minute values onto the snap grid.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Minutes since midnight of `instant`'s own day (`hours * 60 + minutes`).
///
/// Seconds are ignored, so the result is always in `0..1440`.
pub fn minute_of_day(instant: NaiveDateTime) -> i64 {
    i64::from(instant.hour()) * 60 + i64::from(instant.minute())
}

/// Midnight at the beginning of `day`.
pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

/// Midnight at the beginning of the day after `day` (exclusive end of `day`).
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    offset_by_minutes(start_of_day(day), 24 * 60)
}

/// Start of `base`'s day plus `minutes`.
///
/// `minutes` may be negative or exceed a full day; the result then rolls over
/// into the previous or following calendar day.
pub fn from_minute_of_day(base: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    offset_by_minutes(start_of_day(base.date()), minutes)
}

/// Round `minutes` to the nearest multiple of `snap_duration`.
///
/// Halves round up toward positive infinity: with a 15-minute snap, 7 goes
/// to 0, 7.5 and 8 go to 15, and -7.5 goes to 0.
pub fn snap(minutes: f64, snap_duration: u32) -> i64 {
    let step = f64::from(snap_duration.max(1));
    let snapped = round_half_up(minutes / step) * step;
    // `as` saturates, and NaN becomes 0.
    snapped as i64
}

/// Round to the nearest integer, halves toward positive infinity.
///
/// The fractional part `q - q.floor()` is exact, so values just below a half
/// (such as `0.49999999999999994`) round down instead of being pushed over
/// by an inexact `q + 0.5`.
pub(crate) fn round_half_up(q: f64) -> f64 {
    let whole = q.floor();
    if q - whole >= 0.5 {
        whole + 1.0
    } else {
        whole
    }
}

/// Add `minutes` to `instant`, saturating at the representable range.
fn offset_by_minutes(instant: NaiveDateTime, minutes: i64) -> NaiveDateTime {
    Duration::try_minutes(minutes)
        .and_then(|delta| instant.checked_add_signed(delta))
        .unwrap_or(if minutes < 0 {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
}
