//! Tests for minute-of-day conversion and snapping.

use chrono::{NaiveDate, NaiveDateTime};
use grid_engine::snap::{end_of_day, from_minute_of_day, minute_of_day, snap, start_of_day};

fn at(day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day)
        .unwrap()
        .and_hms_opt(hour, min, sec)
        .unwrap()
}

#[test]
fn minute_of_day_ignores_date_and_seconds() {
    assert_eq!(minute_of_day(at(1, 0, 0, 0)), 0);
    assert_eq!(minute_of_day(at(1, 9, 30, 0)), 570);
    assert_eq!(minute_of_day(at(20, 9, 30, 59)), 570);
    assert_eq!(minute_of_day(at(1, 23, 59, 59)), 1439);
}

#[test]
fn from_minute_of_day_uses_base_midnight() {
    assert_eq!(from_minute_of_day(at(5, 17, 42, 10), 600), at(5, 10, 0, 0));
}

#[test]
fn from_minute_of_day_rolls_over_forward() {
    assert_eq!(from_minute_of_day(at(5, 12, 0, 0), 1440), at(6, 0, 0, 0));
    assert_eq!(from_minute_of_day(at(5, 12, 0, 0), 1500), at(6, 1, 0, 0));
}

#[test]
fn from_minute_of_day_rolls_over_backward() {
    assert_eq!(from_minute_of_day(at(5, 12, 0, 0), -30), at(4, 23, 30, 0));
}

#[test]
fn day_bounds() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 8).unwrap();
    assert_eq!(start_of_day(day), at(8, 0, 0, 0));
    assert_eq!(end_of_day(day), at(9, 0, 0, 0));
}

#[test]
fn snap_rounds_to_nearest_multiple() {
    assert_eq!(snap(0.0, 15), 0);
    assert_eq!(snap(7.0, 15), 0);
    assert_eq!(snap(8.0, 15), 15);
    assert_eq!(snap(22.0, 15), 15);
    assert_eq!(snap(23.0, 15), 30);
    assert_eq!(snap(604.9, 30), 600);
}

#[test]
fn snap_ties_round_up() {
    assert_eq!(snap(7.5, 15), 15);
    assert_eq!(snap(22.5, 15), 30);
    assert_eq!(snap(-7.5, 15), 0, "ties go toward positive infinity, not away from zero");
}

#[test]
fn snap_handles_negative_minutes() {
    assert_eq!(snap(-8.0, 15), -15);
    assert_eq!(snap(-45.0, 15), -45);
    assert_eq!(snap(-52.0, 15), -45);
}

#[test]
fn snap_is_idempotent_on_multiples() {
    for minutes in [-90, -15, 0, 15, 540, 1440] {
        let once = snap(minutes as f64, 15);
        assert_eq!(once, minutes);
        assert_eq!(snap(once as f64, 15), once);
    }
}

#[test]
fn snap_of_nan_is_zero() {
    assert_eq!(snap(f64::NAN, 15), 0);
}

#[test]
fn snap_just_below_half_rounds_down() {
    // 7.499999999999999 / 15 is 0.49999999999999994; adding 0.5 to that
    // rounds to 1.0 in f64, but the value is below the tie.
    let just_below = 0.49999999999999994 * 15.0;

    assert_eq!(snap(just_below, 15), 0);
    assert_eq!(snap(-7.500000000000001, 15), -15);
    assert_eq!(snap(7.5, 15), 15);
}
