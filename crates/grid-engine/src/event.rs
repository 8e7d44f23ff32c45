//! Calendar events as read by the engine.
//!
//! Events are owned by the host application. The engine borrows them for a
//! layout pass or a gesture and proposes replacement intervals; it never
//! mutates them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::snap::{end_of_day, start_of_day};

/// Host-assigned event identity. Accepts either a string or a number on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId::Text(s.to_string())
    }
}

impl From<String> for EventId {
    fn from(s: String) -> Self {
        EventId::Text(s)
    }
}

impl From<i64> for EventId {
    fn from(n: i64) -> Self {
        EventId::Number(n)
    }
}

/// A half-open wall-clock interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// True when `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Two intervals intersect iff `a.start < b.end && b.start < a.end`.
    /// Intervals that only touch at an endpoint do not intersect.
    pub fn intersects(&self, other: &TimeInterval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Per-event override; `Some(false)` opts out of move gestures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    /// Per-event override; `Some(false)` opts out of resize gestures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resizable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl CalendarEvent {
    /// A timed event with no optional fields set.
    pub fn new(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            all_day: false,
            color: None,
            draggable: None,
            resizable: None,
            calendar_id: None,
            description: None,
            location: None,
        }
    }

    pub fn interval(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether a move gesture may start on this event.
    pub fn is_draggable(&self, flags: InteractionFlags) -> bool {
        flags.draggable && self.draggable != Some(false)
    }

    /// Whether a resize gesture may start on this event.
    pub fn is_resizable(&self, flags: InteractionFlags) -> bool {
        flags.resizable && self.resizable != Some(false)
    }
}

/// Calendar-wide interaction switches. Both default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionFlags {
    pub draggable: bool,
    pub resizable: bool,
}

impl Default for InteractionFlags {
    fn default() -> Self {
        Self {
            draggable: true,
            resizable: true,
        }
    }
}

/// Sort events for display: all-day first, then by start, then longest
/// first, then by title.
pub fn sort_events<'a>(events: &[&'a CalendarEvent]) -> Vec<&'a CalendarEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| {
        b.all_day
            .cmp(&a.all_day)
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| b.duration().cmp(&a.duration()))
            .then_with(|| a.title.cmp(&b.title))
    });
    sorted
}

/// Keep the events that intersect `range`.
pub fn filter_events_for_range<'a>(
    events: &'a [CalendarEvent],
    range: &TimeInterval,
) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|e| e.start < range.end && e.end > range.start)
        .collect()
}

/// Bucket events by each of the given days, sorted with [`sort_events`].
///
/// Every requested day gets an entry, possibly empty. An event lands in each
/// day it touches, so multi-day events appear under several keys.
pub fn group_events_by_date<'a>(
    events: &'a [CalendarEvent],
    days: &[NaiveDate],
) -> BTreeMap<NaiveDate, Vec<&'a CalendarEvent>> {
    let mut grouped = BTreeMap::new();

    for &day in days {
        let day_start = start_of_day(day);
        let day_end = end_of_day(day);
        let touching: Vec<&CalendarEvent> = events
            .iter()
            .filter(|e| e.start < day_end && e.end > day_start)
            .collect();
        grouped.insert(day, sort_events(&touching));
    }

    grouped
}
