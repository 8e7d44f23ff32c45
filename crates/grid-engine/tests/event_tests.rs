//! Tests for event helpers: gating, sorting, range filtering and grouping.

use chrono::{NaiveDate, NaiveDateTime};
use grid_engine::event::{filter_events_for_range, group_events_by_date, sort_events};
use grid_engine::{CalendarEvent, EventId, InteractionFlags, TimeInterval};

fn at(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, day)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn feb(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

fn ids(events: &[&CalendarEvent]) -> Vec<String> {
    events.iter().map(|e| e.id.to_string()).collect()
}

#[test]
fn interaction_flags_default_to_enabled() {
    let event = CalendarEvent::new("1", "Standup", at(11, 9, 0), at(11, 9, 15));
    let flags = InteractionFlags::default();

    assert!(event.is_draggable(flags));
    assert!(event.is_resizable(flags));
}

#[test]
fn per_event_override_disables_interaction() {
    let mut event = CalendarEvent::new("1", "Locked", at(11, 9, 0), at(11, 10, 0));
    event.draggable = Some(false);

    assert!(!event.is_draggable(InteractionFlags::default()));
    assert!(event.is_resizable(InteractionFlags::default()));
}

#[test]
fn calendar_flag_overrides_event_opt_in() {
    let mut event = CalendarEvent::new("1", "Meeting", at(11, 9, 0), at(11, 10, 0));
    event.resizable = Some(true);
    let flags = InteractionFlags {
        draggable: true,
        resizable: false,
    };

    assert!(!event.is_resizable(flags));
}

#[test]
fn intervals_touching_at_endpoint_do_not_intersect() {
    let a = TimeInterval::new(at(11, 9, 0), at(11, 10, 0));
    let b = TimeInterval::new(at(11, 10, 0), at(11, 11, 0));
    let c = TimeInterval::new(at(11, 9, 59), at(11, 11, 0));

    assert!(!a.intersects(&b));
    assert!(a.intersects(&c));
    assert!(c.intersects(&a));
}

#[test]
fn only_forward_intervals_are_well_formed() {
    assert!(TimeInterval::new(at(11, 9, 0), at(11, 10, 0)).is_well_formed());
    assert!(!TimeInterval::new(at(11, 9, 0), at(11, 9, 0)).is_well_formed());
    assert!(!TimeInterval::new(at(11, 10, 0), at(11, 9, 0)).is_well_formed());
}

#[test]
fn sort_puts_all_day_first_then_start_then_longest_then_title() {
    let mut holiday = CalendarEvent::new("holiday", "Holiday", at(11, 0, 0), at(12, 0, 0));
    holiday.all_day = true;
    let events = vec![
        CalendarEvent::new("late", "Late", at(11, 15, 0), at(11, 16, 0)),
        CalendarEvent::new("b-short", "B", at(11, 9, 0), at(11, 9, 30)),
        CalendarEvent::new("long", "Long", at(11, 9, 0), at(11, 11, 0)),
        CalendarEvent::new("a-short", "A", at(11, 9, 0), at(11, 9, 30)),
        holiday,
    ];
    let refs: Vec<&CalendarEvent> = events.iter().collect();

    let sorted = sort_events(&refs);

    assert_eq!(ids(&sorted), vec!["holiday", "long", "a-short", "b-short", "late"]);
}

#[test]
fn filter_keeps_events_intersecting_range() {
    let events = vec![
        CalendarEvent::new("before", "Before", at(10, 9, 0), at(10, 10, 0)),
        CalendarEvent::new("inside", "Inside", at(11, 9, 0), at(11, 10, 0)),
        CalendarEvent::new("edge", "Edge", at(11, 23, 0), at(12, 0, 0)),
        CalendarEvent::new("after", "After", at(12, 0, 0), at(12, 1, 0)),
    ];
    let range = TimeInterval::new(at(11, 0, 0), at(12, 0, 0));

    let kept = filter_events_for_range(&events, &range);

    assert_eq!(ids(&kept), vec!["inside", "edge"]);
}

#[test]
fn group_includes_every_requested_day() {
    let events = vec![
        CalendarEvent::new("multi", "Conference", at(11, 9, 0), at(13, 17, 0)),
        CalendarEvent::new("single", "Lunch", at(11, 12, 0), at(11, 13, 0)),
    ];
    let days = [feb(10), feb(11), feb(12), feb(13), feb(14)];

    let grouped = group_events_by_date(&events, &days);

    assert_eq!(grouped.len(), 5);
    assert!(grouped[&feb(10)].is_empty());
    assert_eq!(ids(&grouped[&feb(11)]), vec!["multi", "single"]);
    assert_eq!(ids(&grouped[&feb(12)]), vec!["multi"]);
    assert_eq!(ids(&grouped[&feb(13)]), vec!["multi"]);
    assert!(grouped[&feb(14)].is_empty());
}

#[test]
fn event_ids_accept_strings_and_numbers() {
    let json = r#"[
        {"id": 7, "title": "Numbered", "start": "2026-02-11T09:00:00", "end": "2026-02-11T10:00:00"},
        {"id": "abc", "title": "Named", "start": "2026-02-11T09:00:00", "end": "2026-02-11T10:00:00", "allDay": true, "draggable": false}
    ]"#;

    let events: Vec<CalendarEvent> = serde_json::from_str(json).unwrap();

    assert_eq!(events[0].id, EventId::Number(7));
    assert!(!events[0].all_day);
    assert_eq!(events[1].id, EventId::from("abc"));
    assert!(events[1].all_day);
    assert_eq!(events[1].draggable, Some(false));
}
