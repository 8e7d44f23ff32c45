//! Column layout for timed events within one day.
//!
//! Overlapping events are placed side by side. The algorithm:
//!
//! 1. Drop all-day events and events that do not touch the day.
//! 2. Clip each interval to the day and convert it to minutes since midnight.
//! 3. Sort by start, longest first on ties.
//! 4. Greedy interval colouring: each event takes the lowest column whose
//!    occupants it does not overlap.
//! 5. Group events into overlap-connected components (depth-first search over
//!    a pairwise overlap test). Every event in a component shares the
//!    component's column count, so transitively linked events render with
//!    equal widths.
//! 6. Convert minutes into pixel `top`/`height` against the visible grid.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{GridConfig, MINUTES_PER_DAY};
use crate::event::CalendarEvent;
use crate::snap::{end_of_day, minute_of_day, start_of_day};

/// Placement of one timed event in a day column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutedBlock<'a> {
    pub event: &'a CalendarEvent,
    /// Zero-based column index, always `< total_columns`.
    pub column: usize,
    /// Number of columns shared by this event's overlap component.
    pub total_columns: usize,
    /// Offset from the top of the visible grid, in pixels.
    pub top: f64,
    /// Block height in pixels, never below `slot_height / 2`.
    pub height: f64,
}

/// An event clipped to the day, in minutes since midnight.
#[derive(Debug, Clone, Copy)]
struct Placed<'a> {
    event: &'a CalendarEvent,
    start_minute: i64,
    end_minute: i64,
    column: usize,
}

impl Placed<'_> {
    fn overlaps(&self, other: &Placed<'_>) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    fn span(&self) -> i64 {
        self.end_minute - self.start_minute
    }
}

/// Lay out the timed events touching `day`.
///
/// Output order follows the internal sort (start ascending, longest first)
/// but callers should key blocks by event identity rather than position.
/// Inverted or zero-length events are not rejected; they get the minimum
/// block height.
pub fn layout<'a>(
    events: &'a [CalendarEvent],
    day: NaiveDate,
    config: &GridConfig,
) -> Vec<LayoutedBlock<'a>> {
    let mut placed = clip_to_day(events, day);

    // Stable sort keeps host order for events with identical spans.
    placed.sort_by(|a, b| {
        a.start_minute
            .cmp(&b.start_minute)
            .then_with(|| b.span().cmp(&a.span()))
    });

    assign_columns(&mut placed);
    let total_columns = component_column_counts(&placed);

    let grid_start = config.grid_start_minute();
    let grid_end = config.grid_end_minute();
    let px_per_minute = config.pixels_per_minute();
    let min_height = config.min_block_height();

    placed
        .iter()
        .zip(total_columns)
        .map(|(p, total_columns)| {
            let visible_start = p.start_minute.max(grid_start);
            let visible_end = p.end_minute.min(grid_end);
            let top = (visible_start - grid_start) as f64 * px_per_minute;
            let raw_height = (visible_end - visible_start) as f64 * px_per_minute;

            LayoutedBlock {
                event: p.event,
                column: p.column,
                total_columns,
                top,
                height: raw_height.max(min_height),
            }
        })
        .collect()
}

/// Filter to timed events touching `day` and clip them to `[00:00, 24:00]`.
fn clip_to_day(events: &[CalendarEvent], day: NaiveDate) -> Vec<Placed<'_>> {
    let day_start = start_of_day(day);
    let day_end = end_of_day(day);

    events
        .iter()
        .filter(|e| !e.all_day && e.start < day_end && e.end > day_start)
        .map(|event| {
            let start_minute = if event.start <= day_start {
                0
            } else {
                minute_of_day(event.start)
            };
            let end_minute = if event.end >= day_end {
                MINUTES_PER_DAY
            } else {
                minute_of_day(event.end)
            };
            Placed {
                event,
                start_minute,
                end_minute,
                column: 0,
            }
        })
        .collect()
}

/// Greedy colouring over events already sorted by start.
fn assign_columns(placed: &mut [Placed<'_>]) {
    // columns[c] holds indices into `placed` of the events in column c.
    let mut columns: Vec<Vec<usize>> = Vec::new();

    for i in 0..placed.len() {
        let current = placed[i];
        let free = columns
            .iter()
            .position(|occupants| occupants.iter().all(|&j| !placed[j].overlaps(&current)));

        let column = match free {
            Some(column) => column,
            None => {
                columns.push(Vec::new());
                columns.len() - 1
            }
        };

        columns[column].push(i);
        placed[i].column = column;
    }
}

/// Column count for each event, shared across its overlap component.
fn component_column_counts(placed: &[Placed<'_>]) -> Vec<usize> {
    let n = placed.len();
    let mut visited = vec![false; n];
    let mut totals = vec![1; n];
    let mut stack = Vec::new();
    let mut component = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }

        component.clear();
        stack.push(root);
        visited[root] = true;

        while let Some(idx) = stack.pop() {
            component.push(idx);
            for next in 0..n {
                if !visited[next] && placed[idx].overlaps(&placed[next]) {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }

        let max_column = component
            .iter()
            .map(|&idx| placed[idx].column)
            .max()
            .unwrap_or(0);
        for &idx in &component {
            totals[idx] = max_column + 1;
        }
    }

    totals
}
