//! Engagement layout engine.
//!
//! Assigns every engagement in a table a deterministic, non-overlapping slot
//! on a four-week calendar grid, a geographic map, or a ninety-day timeline.
//! The crate produces placement records only; drawing them is left to the
//! caller.
//!
//! The binary `engagement-layout` runs a single pass over JSON input and
//! prints the placements as JSON.

pub mod calendar;
pub mod cluster;
pub mod config;
pub mod counter;
pub mod error;
pub mod layout;
pub mod model;
pub mod stack;
pub mod timeline;
pub mod weekday;
pub mod wrap;

pub use config::LayoutConfig;
pub use error::{LayoutError, Result};
pub use layout::{CalendarLayout, LayoutEngine, MapLayout, PlacementRecord, Slot};
pub use model::{Category, Event, EventRecord, EventTable, Status};
