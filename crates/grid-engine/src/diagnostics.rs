//! Non-fatal checks on host-supplied events.
//!
//! Malformed events never abort a layout pass; they are reported here so the
//! host can surface them, and the layout still gives them a minimum-height
//! block.

use serde::Serialize;

use crate::event::{CalendarEvent, EventId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagnosticKind {
    /// `start` is after `end`.
    Inverted,
    /// A timed event with `start == end`.
    ZeroLength,
}

/// One finding about one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDiagnostic {
    pub event_id: EventId,
    pub kind: DiagnosticKind,
    pub message: String,
}

/// Report malformed events, logging a warning for each finding.
pub fn validate_events(events: &[CalendarEvent]) -> Vec<EventDiagnostic> {
    let mut findings = Vec::new();

    for event in events {
        let interval = event.interval();
        if interval.is_well_formed() {
            continue;
        }

        let (kind, message) = if interval.start > interval.end {
            (
                DiagnosticKind::Inverted,
                format!(
                    "Event \"{}\" has start after end ({} > {}).",
                    event.id, interval.start, interval.end
                ),
            )
        } else if !event.all_day {
            (
                DiagnosticKind::ZeroLength,
                format!("Event \"{}\" has zero duration at {}.", event.id, interval.start),
            )
        } else {
            continue;
        };

        log::warn!("{}", message);
        findings.push(EventDiagnostic {
            event_id: event.id.clone(),
            kind,
            message,
        });
    }

    findings
}
