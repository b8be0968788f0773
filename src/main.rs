use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

use engagement_layout::calendar::CalendarWindow;
use engagement_layout::cluster::{BaseRecord, CoordinateLookup};
use engagement_layout::counter::{CategoryCounter, StatusCounter};
use engagement_layout::timeline::layout_timeline;
use engagement_layout::{EventRecord, EventTable, LayoutConfig, LayoutEngine};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lay out engagement pucks and print the placements as JSON", long_about = None)]
struct Cli {
    /// Layout config (TOML); defaults apply when omitted
    #[arg(long, global = true, value_name = "CONFIG")]
    config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Four-week calendar grid
    Calendar {
        /// Engagements JSON (array of records)
        #[arg(value_name = "EVENTS")]
        events: Utf8PathBuf,
        /// Show the window containing this date instead of the earliest event
        #[arg(long, value_name = "YYYY-MM-DD")]
        window_start: Option<NaiveDate>,
    },
    /// Map clusters by base coordinate
    Map {
        #[arg(value_name = "EVENTS")]
        events: Utf8PathBuf,
        /// Bases JSON (array of {name, longitude, latitude})
        #[arg(value_name = "BASES")]
        bases: Utf8PathBuf,
    },
    /// Ninety-day information environment timeline
    Timeline {
        #[arg(value_name = "EVENTS")]
        events: Utf8PathBuf,
        /// Reference date; defaults to today
        #[arg(long, value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,
    },
}

fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Open {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path))
}

fn load_table(path: &Utf8Path) -> Result<EventTable> {
    let records: Vec<EventRecord> = read_json(path)?;
    Ok(EventTable::from_records(records)?)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => LayoutConfig::from_path(path)?,
        None => LayoutConfig::default(),
    };
    let engine = LayoutEngine::new(config)?;

    let json = match cli.command {
        Commands::Calendar {
            events,
            window_start,
        } => {
            let table = load_table(&events)?;
            let mut counter = CategoryCounter::new();
            let layout = match window_start {
                Some(date) => engine.layout_calendar_window(
                    &table,
                    CalendarWindow::starting_on(date),
                    &mut counter,
                )?,
                None => engine.layout_calendar(&table, &mut counter)?,
            };
            let labels = layout.window.row_labels();
            serde_json::to_string_pretty(&serde_json::json!({
                "week_labels": labels,
                "layout": layout,
            }))?
        }
        Commands::Map { events, bases } => {
            let table = load_table(&events)?;
            let bases: Vec<BaseRecord> = read_json(&bases)?;
            let lookup = CoordinateLookup::from_bases(bases)?;
            let mut counter = CategoryCounter::new();
            let layout = engine.layout_map(&table, &lookup, &mut counter)?;
            serde_json::to_string_pretty(&layout)?
        }
        Commands::Timeline { events, today } => {
            let table = load_table(&events)?;
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let mut counter = StatusCounter::starting_at(engine.config().counter_start);
            let layout = layout_timeline(&table, today, &mut counter)?;
            serde_json::to_string_pretty(&layout)?
        }
    };
    println!("{}", json);
    Ok(())
}
