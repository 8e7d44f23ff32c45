//! Integration tests for the `gridctl` binary.
//!
//! These use `assert_cmd` and `predicates` to exercise each subcommand through
//! the actual binary, including stdin input, file I/O, config loading and
//! error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn gridctl() -> Command {
    Command::cargo_bin("gridctl").unwrap()
}

/// Run the command and parse its stdout as JSON.
fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout must be JSON")
}

fn block<'a>(blocks: &'a Value, id: &str) -> &'a Value {
    blocks
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["event"]["id"] == id)
        .unwrap_or_else(|| panic!("no block for {}", id))
}

// ─────────────────────────────────────────────────────────────────────────────
// layout
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn layout_from_file() {
    let blocks = json_output(gridctl().args(["layout", "--day", "2026-02-11", "-i", &fixture("events.json")]));

    assert_eq!(blocks.as_array().unwrap().len(), 3, "all-day and other-day events are skipped");

    let a = block(&blocks, "a");
    assert_eq!(a["column"], 0);
    assert_eq!(a["totalColumns"], 2);
    assert_eq!(a["top"], 864.0);
    assert_eq!(a["height"], 96.0);

    assert_eq!(block(&blocks, "b")["column"], 1);
    assert_eq!(block(&blocks, "c")["column"], 0);
    assert_eq!(block(&blocks, "c")["event"]["color"], "sage");
}

#[test]
fn layout_from_stdin() {
    let input = r#"[{"id": 1, "title": "Solo", "start": "2026-02-11T13:00:00", "end": "2026-02-11T14:30:00"}]"#;

    let blocks = json_output(gridctl().args(["layout", "--day", "2026-02-11"]).write_stdin(input));

    assert_eq!(blocks[0]["event"]["id"], 1);
    assert_eq!(blocks[0]["top"], 1248.0);
    assert_eq!(blocks[0]["height"], 144.0);
}

#[test]
fn layout_to_file() {
    let output_path = std::env::temp_dir().join("gridctl-test-layout-output.json");
    let _ = std::fs::remove_file(&output_path);

    gridctl()
        .args(["layout", "--day", "2026-02-11", "-i", &fixture("events.json"), "-o"])
        .arg(&output_path)
        .assert()
        .success();

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let blocks: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(blocks.as_array().unwrap().len(), 3);

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn layout_uses_config_file() {
    // Grid 08:00-18:00, 60-minute slots at 40 px: a 09:00 event sits 40 px down.
    let blocks = json_output(gridctl().args([
        "--config",
        &fixture("workday.json"),
        "layout",
        "--day",
        "2026-02-11",
        "-i",
        &fixture("events.json"),
    ]));

    let a = block(&blocks, "a");
    assert_eq!(a["top"], 40.0);
    assert_eq!(a["height"], 40.0);
}

#[test]
fn layout_rejects_bad_events_json() {
    gridctl()
        .args(["layout", "--day", "2026-02-11"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse events JSON"));
}

// ─────────────────────────────────────────────────────────────────────────────
// move / resize
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn move_two_hours_down() {
    let result = json_output(gridctl().args([
        "move",
        "--start",
        "2026-02-11T10:00",
        "--end",
        "2026-02-11T11:00",
        "--delta-y",
        "192",
        "--drop-day",
        "2026-02-11",
    ]));

    assert_eq!(result["interval"]["start"], "2026-02-11T12:00:00");
    assert_eq!(result["interval"]["end"], "2026-02-11T13:00:00");
    assert_eq!(result["allDay"], false);
}

#[test]
fn move_onto_all_day_lane() {
    let result = json_output(gridctl().args([
        "move",
        "--id",
        "42",
        "--start",
        "2026-02-11T10:00",
        "--end",
        "2026-02-11T11:00",
        "--delta-y",
        "0",
        "--drop-day",
        "2026-02-13",
        "--all-day",
    ]));

    assert_eq!(result["eventId"], "42");
    assert_eq!(result["allDay"], true);
    assert_eq!(result["interval"]["start"], "2026-02-13T10:00:00");
}

#[test]
fn move_onto_another_event() {
    let result = json_output(gridctl().args([
        "move",
        "--start",
        "2026-02-11T10:00",
        "--end",
        "2026-02-11T11:00",
        "--delta-y=-96",
        "--drop-event-start",
        "2026-02-14T16:45",
    ]));

    assert_eq!(result["interval"]["start"], "2026-02-14T09:00:00");
}

#[test]
fn move_without_target_prints_null() {
    gridctl()
        .args([
            "move",
            "--start",
            "2026-02-11T10:00",
            "--end",
            "2026-02-11T11:00",
            "--delta-y",
            "96",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("null\n"));
}

#[test]
fn resize_bottom_edge_keeps_minimum_duration() {
    let result = json_output(gridctl().args([
        "resize",
        "--edge",
        "end",
        "--start",
        "2026-02-11T09:00",
        "--end",
        "2026-02-11T10:00",
        "--delta-y",
        "-192",
    ]));

    assert_eq!(result["interval"]["start"], "2026-02-11T09:00:00");
    assert_eq!(result["interval"]["end"], "2026-02-11T09:15:00");
}

#[test]
fn resize_top_edge_stops_at_midnight() {
    let result = json_output(gridctl().args([
        "resize",
        "--edge",
        "start",
        "--start",
        "2026-02-11T00:15",
        "--end",
        "2026-02-11T01:15",
        "--delta-y=-96",
    ]));

    assert_eq!(result["interval"]["start"], "2026-02-11T00:00:00");
    assert_eq!(result["interval"]["end"], "2026-02-11T01:15:00");
}

#[test]
fn snap_duration_flag_overrides_default() {
    // +8 minutes snaps to 10 on a 5-minute grid (15 on the default grid).
    let result = json_output(gridctl().args([
        "--snap-duration",
        "5",
        "resize",
        "--edge",
        "end",
        "--start",
        "2026-02-11T09:00",
        "--end",
        "2026-02-11T10:00",
        "--delta-y",
        "12.8",
    ]));

    assert_eq!(result["interval"]["end"], "2026-02-11T10:10:00");
}

#[test]
fn bad_datetime_is_rejected() {
    gridctl()
        .args(["resize", "--edge", "end", "--start", "yesterday", "--end", "2026-02-11T10:00", "--delta-y", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid datetime"));
}

// ─────────────────────────────────────────────────────────────────────────────
// slots / validate / config errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_for_workday_grid() {
    let slots = json_output(gridctl().args(["--config", &fixture("workday.json"), "slots"]));

    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 10);
    assert_eq!(slots[0]["label"], "8:00 AM");
    assert_eq!(slots[9]["label"], "5:00 PM");
}

#[test]
fn invalid_grid_is_rejected() {
    gridctl()
        .args(["--start-hour", "12", "--end-hour", "9", "slots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid grid configuration"));
}

#[test]
fn missing_config_file_is_reported() {
    gridctl()
        .args(["--config", "/nonexistent/grid.json", "slots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn validate_reports_inverted_events() {
    let findings = json_output(gridctl().args(["validate", "-i", &fixture("malformed.json")]));

    let findings = findings.as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["eventId"], "backwards");
    assert_eq!(findings[0]["kind"], "inverted");
}

#[test]
fn validate_strict_fails_on_findings() {
    gridctl()
        .args(["validate", "--strict", "-i", &fixture("malformed.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 malformed event(s)"));
}

#[test]
fn validate_strict_passes_clean_input() {
    gridctl()
        .args(["validate", "--strict", "-i", &fixture("events.json")])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}
