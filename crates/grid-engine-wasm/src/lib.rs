//! WASM bindings for grid-engine.
//!
//! Exposes day layout, gesture resolution, grid slots and event validation to
//! a JavaScript view layer via `wasm-bindgen`. All complex types are passed as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p grid-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/grid-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/grid_engine_wasm.wasm
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use grid_engine::drag::{DragIntent, DragKind, DropTarget};
use grid_engine::{CalendarEvent, EventId, GridConfig, TimeInterval};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Event as sent from JavaScript. Datetimes are strings in local wall time,
/// either naive or carrying the local offset. UTC strings such as
/// `Date.toISOString()` output are taken at their UTC wall time.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventInput {
    id: EventId,
    #[serde(default)]
    title: String,
    start: String,
    end: String,
    #[serde(default)]
    all_day: bool,
    color: Option<String>,
    draggable: Option<bool>,
    resizable: Option<bool>,
    calendar_id: Option<String>,
    description: Option<String>,
    location: Option<String>,
}

impl EventInput {
    fn into_event(self) -> Result<CalendarEvent, JsValue> {
        let mut event = CalendarEvent::new(
            self.id,
            self.title,
            parse_datetime(&self.start)?,
            parse_datetime(&self.end)?,
        );
        event.all_day = self.all_day;
        event.color = self.color;
        event.draggable = self.draggable;
        event.resizable = self.resizable;
        event.calendar_id = self.calendar_id;
        event.description = self.description;
        event.location = self.location;
        Ok(event)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct IntentInput {
    kind: DragKind,
    event_id: EventId,
    start: String,
    end: String,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum DropTargetInput {
    #[serde(rename_all = "camelCase")]
    Day {
        day: String,
        #[serde(default)]
        all_day_lane: bool,
    },
    #[serde(rename_all = "camelCase")]
    Event { event_id: EventId, start: String },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockDto {
    event_id: EventId,
    column: usize,
    total_columns: usize,
    top: f64,
    height: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResolutionDto {
    event_id: EventId,
    start: String,
    end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    all_day: Option<bool>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a datetime string into a wall-clock `NaiveDateTime`.
///
/// Accepts RFC 3339 (e.g., "2026-02-17T14:00:00+01:00", whose wall time is
/// kept and the offset dropped) and naive local time with or without seconds.
/// No zone conversion happens, so hosts must send local wall time, not UTC.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }
    parse_datetime(s).map(|dt| dt.date())
}

/// Parse the grid config; `None` or an empty string means the defaults.
fn parse_config(json: Option<String>) -> Result<GridConfig, JsValue> {
    match json.as_deref().map(str::trim) {
        None | Some("") => Ok(GridConfig::default()),
        Some(json) => serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("Invalid grid config: {}", e))),
    }
}

fn parse_events_json(json: &str) -> Result<Vec<CalendarEvent>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;
    inputs.into_iter().map(EventInput::into_event).collect()
}

fn parse_intent_json(json: &str) -> Result<DragIntent, JsValue> {
    let input: IntentInput = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid drag intent JSON: {}", e)))?;
    let original = TimeInterval::new(parse_datetime(&input.start)?, parse_datetime(&input.end)?);
    Ok(DragIntent::new(input.kind, input.event_id, original))
}

fn parse_drop_target_json(json: Option<String>) -> Result<Option<DropTarget>, JsValue> {
    let json = match json.as_deref().map(str::trim) {
        None | Some("") | Some("null") => return Ok(None),
        Some(json) => json,
    };
    let input: DropTargetInput = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid drop target JSON: {}", e)))?;

    let target = match input {
        DropTargetInput::Day { day, all_day_lane } => DropTarget::Day {
            day: parse_date(&day)?,
            all_day_lane,
        },
        DropTargetInput::Event { event_id, start } => DropTarget::Event {
            event_id,
            start: parse_datetime(&start)?,
        },
    };
    Ok(Some(target))
}

fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out one day's timed events.
///
/// `events_json` is an array of `{id, title, start, end, allDay?, ...}`; `day`
/// is `YYYY-MM-DD`. Returns a JSON array of
/// `{eventId, column, totalColumns, top, height}`.
#[wasm_bindgen(js_name = "computeLayout")]
pub fn compute_layout(
    events_json: &str,
    day: &str,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let day = parse_date(day)?;
    let config = parse_config(config_json)?;

    let dtos: Vec<BlockDto> = grid_engine::layout(&events, day, &config)
        .into_iter()
        .map(|b| BlockDto {
            event_id: b.event.id.clone(),
            column: b.column,
            total_columns: b.total_columns,
            top: b.top,
            height: b.height,
        })
        .collect();

    to_json(&dtos)
}

/// Resolve a finished move gesture.
///
/// `intent_json` is `{kind: "move", eventId, start, end}`; `drop_target_json`
/// is `{type: "day", day, allDayLane?}`, `{type: "event", eventId, start}`, or
/// absent. Returns `{eventId, start, end, allDay}` or the string `null`.
#[wasm_bindgen(js_name = "resolveMove")]
pub fn resolve_move(
    intent_json: &str,
    delta_y: f64,
    drop_target_json: Option<String>,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let intent = parse_intent_json(intent_json)?;
    let target = parse_drop_target_json(drop_target_json)?;
    let config = parse_config(config_json)?;

    let dto = grid_engine::resolve_move(&intent, delta_y, target.as_ref(), &config).map(|r| {
        ResolutionDto {
            event_id: r.event_id,
            start: format_datetime(r.interval.start),
            end: format_datetime(r.interval.end),
            all_day: Some(r.all_day),
        }
    });

    to_json(&dto)
}

/// Resolve a finished resize gesture.
///
/// `intent_json` is `{kind: "resize-start" | "resize-end", eventId, start, end}`.
/// Returns `{eventId, start, end}` or the string `null`.
#[wasm_bindgen(js_name = "resolveResize")]
pub fn resolve_resize(
    intent_json: &str,
    delta_y: f64,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    let intent = parse_intent_json(intent_json)?;
    let config = parse_config(config_json)?;

    let dto = grid_engine::resolve_resize(&intent, delta_y, &config).map(|r| ResolutionDto {
        event_id: r.event_id,
        start: format_datetime(r.interval.start),
        end: format_datetime(r.interval.end),
        all_day: None,
    });

    to_json(&dto)
}

/// Slot rows of the grid as a JSON array of `{start, end, label}`.
#[wasm_bindgen(js_name = "eachSlotOfDay")]
pub fn each_slot_of_day(config_json: Option<String>) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    to_json(&grid_engine::grid::each_slot_of_day(&config))
}

/// Check a grid config once, at configuration time. Throws on invalid input.
#[wasm_bindgen(js_name = "validateConfig")]
pub fn validate_config(config_json: &str) -> Result<(), JsValue> {
    parse_config(Some(config_json.to_string())).map(|_| ())
}

/// Report malformed events as a JSON array of `{eventId, kind, message}`.
#[wasm_bindgen(js_name = "validateEvents")]
pub fn validate_events(events_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    to_json(&grid_engine::validate_events(&events))
}
