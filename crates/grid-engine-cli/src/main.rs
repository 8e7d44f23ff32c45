//! `gridctl`: run calendar time-grid layout and gesture resolution from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out one day's events (JSON array on stdin or -i)
//! gridctl layout --day 2026-02-11 -i events.json
//!
//! # Use a custom grid (JSON file), overriding one field
//! gridctl --config grid.json --snap-duration 5 layout --day 2026-02-11 -i events.json
//!
//! # Resolve a move: 192 px down, dropped on the same day
//! gridctl move --start 2026-02-11T10:00 --end 2026-02-11T11:00 --delta-y 192 --drop-day 2026-02-11
//!
//! # Resolve a resize of the bottom edge
//! gridctl resize --edge end --start 2026-02-11T09:00 --end 2026-02-11T10:00 --delta-y=-192
//!
//! # Print the slot rows of the grid
//! gridctl slots
//!
//! # Report malformed events
//! gridctl validate -i events.json
//! ```
//!
//! Results are JSON on stdout; a gesture that resolves to nothing prints `null`.
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use grid_engine::drag::{DragIntent, DragKind, DropTarget};
use grid_engine::{CalendarEvent, GridConfig, TimeInterval};
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "gridctl",
    version,
    about = "Calendar time-grid layout and drag/resize resolution"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with grid settings (startHour, endHour, slotDuration, slotHeight, snapDuration)
    #[arg(long, global = true)]
    config: Option<String>,

    /// First visible hour
    #[arg(long, global = true)]
    start_hour: Option<u32>,

    /// Last visible hour (exclusive, at most 24)
    #[arg(long, global = true)]
    end_hour: Option<u32>,

    /// Minutes per slot row
    #[arg(long, global = true)]
    slot_duration: Option<u32>,

    /// Pixel height of one slot row
    #[arg(long, global = true)]
    slot_height: Option<f64>,

    /// Minute granularity for gestures
    #[arg(long, global = true)]
    snap_duration: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign columns and pixel positions to one day's timed events
    Layout {
        /// Day to lay out (YYYY-MM-DD)
        #[arg(long)]
        day: NaiveDate,
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Resolve a finished move gesture
    Move {
        #[command(flatten)]
        gesture: GestureArgs,
        /// Day lane the event was dropped on (YYYY-MM-DD)
        #[arg(long, conflicts_with = "drop_event_start")]
        drop_day: Option<NaiveDate>,
        /// The drop lane is the all-day row
        #[arg(long, requires = "drop_day")]
        all_day: bool,
        /// Start of the event the drag was dropped onto
        #[arg(long, value_parser = parse_datetime)]
        drop_event_start: Option<NaiveDateTime>,
    },
    /// Resolve a finished resize gesture
    Resize {
        #[command(flatten)]
        gesture: GestureArgs,
        /// Which edge was dragged
        #[arg(long, value_enum)]
        edge: Edge,
    },
    /// Print the slot rows of the grid
    Slots,
    /// Report malformed events without changing them
    Validate {
        /// Events JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Exit with an error if any event is malformed
        #[arg(long)]
        strict: bool,
    },
}

#[derive(clap::Args)]
struct GestureArgs {
    /// Id of the dragged event
    #[arg(long, default_value = "event")]
    id: String,
    /// Original start (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_datetime)]
    start: NaiveDateTime,
    /// Original end (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, value_parser = parse_datetime)]
    end: NaiveDateTime,
    /// Vertical pointer offset in pixels (negative is up)
    #[arg(long, allow_negative_numbers = true)]
    delta_y: f64,
}

impl GestureArgs {
    fn intent(&self, kind: DragKind) -> DragIntent {
        DragIntent::new(
            kind,
            self.id.as_str(),
            TimeInterval::new(self.start, self.end),
        )
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Edge {
    Start,
    End,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    log::debug!("using grid {:?}", config);

    match cli.command {
        Commands::Layout { day, input, output } => {
            let events = read_events(input.as_deref())?;
            let blocks = grid_engine::layout(&events, day, &config);
            log::debug!("laid out {} of {} events on {}", blocks.len(), events.len(), day);
            write_output(output.as_deref(), &to_json(&blocks)?)?;
        }
        Commands::Move {
            gesture,
            drop_day,
            all_day,
            drop_event_start,
        } => {
            let target = match (drop_day, drop_event_start) {
                (Some(day), _) if all_day => Some(DropTarget::all_day_lane(day)),
                (Some(day), _) => Some(DropTarget::day(day)),
                (None, Some(start)) => Some(DropTarget::Event {
                    event_id: "drop-target".into(),
                    start,
                }),
                (None, None) => None,
            };
            let intent = gesture.intent(DragKind::Move);
            let resolution =
                grid_engine::resolve_move(&intent, gesture.delta_y, target.as_ref(), &config);
            write_output(None, &to_json(&resolution)?)?;
        }
        Commands::Resize { gesture, edge } => {
            let kind = match edge {
                Edge::Start => DragKind::ResizeStart,
                Edge::End => DragKind::ResizeEnd,
            };
            let intent = gesture.intent(kind);
            let resolution = grid_engine::resolve_resize(&intent, gesture.delta_y, &config);
            write_output(None, &to_json(&resolution)?)?;
        }
        Commands::Slots => {
            let slots = grid_engine::grid::each_slot_of_day(&config);
            write_output(None, &to_json(&slots)?)?;
        }
        Commands::Validate { input, strict } => {
            let events = read_events(input.as_deref())?;
            let findings = grid_engine::validate_events(&events);
            write_output(None, &to_json(&findings)?)?;
            if strict && !findings.is_empty() {
                anyhow::bail!("{} malformed event(s)", findings.len());
            }
        }
    }

    Ok(())
}

/// Build the grid from defaults, then the `--config` file, then flag overrides.
///
/// Everything funnels through `GridConfig`'s deserializer so validation
/// happens in one place.
fn load_config(cli: &Cli) -> Result<GridConfig> {
    let mut fields = match cli.config.as_deref() {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            match serde_json::from_str::<Value>(&raw)
                .with_context(|| format!("Config file is not valid JSON: {}", path))?
            {
                Value::Object(map) => map,
                _ => anyhow::bail!("Config file must contain a JSON object: {}", path),
            }
        }
        None => Map::new(),
    };

    let overrides = [
        ("startHour", cli.start_hour.map(Value::from)),
        ("endHour", cli.end_hour.map(Value::from)),
        ("slotDuration", cli.slot_duration.map(Value::from)),
        ("slotHeight", cli.slot_height.map(Value::from)),
        ("snapDuration", cli.snap_duration.map(Value::from)),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            fields.insert(key.to_string(), value);
        }
    }

    serde_json::from_value(Value::Object(fields)).context("Invalid grid configuration")
}

/// Accept `YYYY-MM-DDTHH:MM:SS` or `YYYY-MM-DDTHH:MM`.
fn parse_datetime(s: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("invalid datetime '{}': {}", s, e))
}

fn read_events(path: Option<&str>) -> Result<Vec<CalendarEvent>> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse events JSON")
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
