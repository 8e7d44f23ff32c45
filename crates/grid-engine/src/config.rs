//! Time-grid configuration.
//!
//! A [`GridConfig`] describes the vertical time axis of a day column: the
//! visible hour range, how many minutes one slot represents, how tall a slot
//! is in pixels, and the granularity that drag gestures snap to.
//!
//! The type is validated on construction (both through [`GridConfig::new`] and
//! through serde), so every `GridConfig` the engine sees is usable.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

pub const DEFAULT_START_HOUR: u32 = 0;
pub const DEFAULT_END_HOUR: u32 = 24;
pub const DEFAULT_SLOT_DURATION: u32 = 30;
pub const DEFAULT_SLOT_HEIGHT: f64 = 48.0;
pub const DEFAULT_SNAP_DURATION: u32 = 15;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Validated time-grid parameters.
///
/// Durations are in minutes, `slot_height` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGridConfig", into = "RawGridConfig")]
pub struct GridConfig {
    start_hour: u32,
    end_hour: u32,
    slot_duration: u32,
    slot_height: f64,
    snap_duration: u32,
}

/// Unvalidated wire form of [`GridConfig`]. Missing fields take the defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawGridConfig {
    start_hour: u32,
    end_hour: u32,
    slot_duration: u32,
    slot_height: f64,
    snap_duration: u32,
}

impl Default for RawGridConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            slot_duration: DEFAULT_SLOT_DURATION,
            slot_height: DEFAULT_SLOT_HEIGHT,
            snap_duration: DEFAULT_SNAP_DURATION,
        }
    }
}

impl TryFrom<RawGridConfig> for GridConfig {
    type Error = GridError;

    fn try_from(raw: RawGridConfig) -> Result<Self> {
        GridConfig::new(
            raw.start_hour,
            raw.end_hour,
            raw.slot_duration,
            raw.slot_height,
            raw.snap_duration,
        )
    }
}

impl From<GridConfig> for RawGridConfig {
    fn from(config: GridConfig) -> Self {
        Self {
            start_hour: config.start_hour,
            end_hour: config.end_hour,
            slot_duration: config.slot_duration,
            slot_height: config.slot_height,
            snap_duration: config.snap_duration,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
            slot_duration: DEFAULT_SLOT_DURATION,
            slot_height: DEFAULT_SLOT_HEIGHT,
            snap_duration: DEFAULT_SNAP_DURATION,
        }
    }
}

impl GridConfig {
    /// Build a grid configuration, rejecting values that would produce
    /// meaningless geometry.
    ///
    /// # Errors
    /// - `GridError::InvalidSlotDuration` if `slot_duration` is 0.
    /// - `GridError::InvalidSlotHeight` if `slot_height` is not a positive finite number.
    /// - `GridError::InvalidSnapDuration` if `snap_duration` is 0.
    /// - `GridError::InvalidEndHour` if `end_hour` is past 24.
    /// - `GridError::InvalidHourRange` if `start_hour >= end_hour`.
    pub fn new(
        start_hour: u32,
        end_hour: u32,
        slot_duration: u32,
        slot_height: f64,
        snap_duration: u32,
    ) -> Result<Self> {
        if slot_duration == 0 {
            return Err(GridError::InvalidSlotDuration(slot_duration));
        }
        if !slot_height.is_finite() || slot_height <= 0.0 {
            return Err(GridError::InvalidSlotHeight(slot_height));
        }
        if snap_duration == 0 {
            return Err(GridError::InvalidSnapDuration(snap_duration));
        }
        if end_hour > 24 {
            return Err(GridError::InvalidEndHour(end_hour));
        }
        if start_hour >= end_hour {
            return Err(GridError::InvalidHourRange {
                start_hour,
                end_hour,
            });
        }

        Ok(Self {
            start_hour,
            end_hour,
            slot_duration,
            slot_height,
            snap_duration,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn slot_duration(&self) -> u32 {
        self.slot_duration
    }

    pub fn slot_height(&self) -> f64 {
        self.slot_height
    }

    pub fn snap_duration(&self) -> u32 {
        self.snap_duration
    }

    /// Vertical pixels per minute of time.
    pub fn pixels_per_minute(&self) -> f64 {
        self.slot_height / f64::from(self.slot_duration)
    }

    /// First visible minute of the day (`start_hour * 60`).
    pub fn grid_start_minute(&self) -> i64 {
        i64::from(self.start_hour) * 60
    }

    /// Last visible minute of the day (`end_hour * 60`), exclusive.
    pub fn grid_end_minute(&self) -> i64 {
        i64::from(self.end_hour) * 60
    }

    /// Height floor for laid-out blocks so short events stay clickable.
    pub fn min_block_height(&self) -> f64 {
        self.slot_height / 2.0
    }

    /// Pixel height of the whole visible grid.
    pub fn total_height(&self) -> f64 {
        let visible_minutes = (self.grid_end_minute() - self.grid_start_minute()) as f64;
        (visible_minutes / f64::from(self.slot_duration)) * self.slot_height
    }

    /// Convert a vertical pixel delta into a (fractional) minute delta.
    pub fn pixels_to_minute_delta(&self, delta_y: f64) -> f64 {
        delta_y / self.pixels_per_minute()
    }
}
