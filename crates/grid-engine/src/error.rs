//! Error types for grid-engine operations.

use thiserror::Error;

/// Configuration defects detected while building a [`GridConfig`](crate::GridConfig).
///
/// Gestures and layout passes never fail; the only fallible step is
/// constructing the grid they run against.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid slotDuration: {0}. Must be greater than 0.")]
    InvalidSlotDuration(u32),

    #[error("Invalid slotHeight: {0}. Must be a finite number greater than 0.")]
    InvalidSlotHeight(f64),

    #[error("Invalid snapDuration: {0}. Must be greater than 0.")]
    InvalidSnapDuration(u32),

    #[error("Invalid time range: startHour ({start_hour}) must be less than endHour ({end_hour}).")]
    InvalidHourRange { start_hour: u32, end_hour: u32 },

    #[error("Invalid endHour: {0}. Must not exceed 24.")]
    InvalidEndHour(u32),
}

pub type Result<T> = std::result::Result<T, GridError>;
