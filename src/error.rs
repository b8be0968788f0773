//! Error types for the layout engine.

use thiserror::Error;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors that abort a layout pass or the ingestion of an event table.
///
/// Every variant is detected before any placement is emitted, so a failing
/// pass never produces a partial placement set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// An event's location has no coordinate (or the event has no location).
    #[error("event {index}: location {location:?} has no coordinate")]
    UnresolvedLocation {
        index: usize,
        location: Option<String>,
    },

    /// Category label outside the known set.
    #[error("event {index}: unknown category {value:?}")]
    UnknownCategory { index: usize, value: String },

    /// Status ordinal outside 0..=2.
    #[error("event {index}: unknown status ordinal {ordinal}")]
    UnknownStatus { index: usize, ordinal: i64 },

    /// Timeline band label outside the known set.
    #[error("event {index}: unknown band {value:?}")]
    UnknownBand { index: usize, value: String },

    /// A field the requested view needs is absent on this event.
    #[error("event {index}: missing {field}")]
    MissingField { index: usize, field: &'static str },

    /// The calendar window needs at least one dated event.
    #[error("calendar window requires at least one event")]
    EmptyBatch,

    #[error("coordinate for {location:?} is not finite")]
    NonFiniteCoordinate { location: String },

    #[error("duplicate location entry {0:?}")]
    DuplicateLocation(String),

    #[error("invalid layout config: {0}")]
    InvalidConfig(String),
}
