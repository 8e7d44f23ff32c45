//! Time-axis geometry: slots, labels and pixel/minute conversion.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::snap::minute_of_day;

/// One row of the time grid, in minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: i64,
    pub end: i64,
    /// 12-hour clock label for the slot start, e.g. `"9:00 AM"`.
    pub label: String,
}

/// All slots between `start_hour` and `end_hour`, one per `slot_duration`.
///
/// The last slot may extend past `end_hour` when the visible range is not a
/// multiple of the slot duration.
pub fn each_slot_of_day(config: &GridConfig) -> Vec<TimeSlot> {
    let step = i64::from(config.slot_duration());
    let end = config.grid_end_minute();

    let mut slots = Vec::new();
    let mut minute = config.grid_start_minute();
    while minute < end {
        slots.push(TimeSlot {
            start: minute,
            end: minute + step,
            label: slot_label(minute),
        });
        minute += step;
    }
    slots
}

/// Pixel offset from the top of the grid for a minute of day.
pub fn minutes_to_pixels(minutes: f64, config: &GridConfig) -> f64 {
    (minutes - config.grid_start_minute() as f64) * config.pixels_per_minute()
}

/// Minute of day for a pixel offset from the top of the grid.
pub fn pixels_to_minutes(pixels: f64, config: &GridConfig) -> f64 {
    pixels / config.pixels_per_minute() + config.grid_start_minute() as f64
}

/// Pixel offset of `instant`'s time of day, e.g. for a current-time marker.
pub fn time_to_grid_position(instant: NaiveDateTime, config: &GridConfig) -> f64 {
    minutes_to_pixels(minute_of_day(instant) as f64, config)
}

fn slot_label(minute: i64) -> String {
    let minute = minute.rem_euclid(24 * 60) as u32;
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}
