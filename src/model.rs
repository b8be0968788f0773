use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{LayoutError, Result};

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

/// Closed classification of an engagement. Drives the marker shape and the
/// counter bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Mil-Mil (US)")]
    MilMilUs,
    #[serde(rename = "Mil-Mil (ROK)")]
    MilMilRok,
    #[serde(rename = "Civ-Mil")]
    CivMil,
}

impl Category {
    /// All categories in legend order.
    pub const ALL: [Category; 3] = [Category::MilMilUs, Category::MilMilRok, Category::CivMil];

    pub fn label(self) -> &'static str {
        match self {
            Category::MilMilUs => "Mil-Mil (US)",
            Category::MilMilRok => "Mil-Mil (ROK)",
            Category::CivMil => "Civ-Mil",
        }
    }

    pub fn shape(self) -> Shape {
        match self {
            Category::MilMilUs => Shape::Triangle,
            Category::MilMilRok => Shape::Circle,
            Category::CivMil => Shape::Square,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or(())
    }
}

/// Marker shape of a puck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Triangle,
    Circle,
    Square,
}

// ────────────────────────────────────────────────────────────────────────────
// Status / Band
// ────────────────────────────────────────────────────────────────────────────

/// Approval status, stored as an ordinal in the source tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InPlanning,
    ForApproval,
    Approved,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::InPlanning, Status::ForApproval, Status::Approved];

    pub fn from_ordinal(ordinal: u8) -> Option<Status> {
        Status::ALL.get(ordinal as usize).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::InPlanning => "in planning",
            Status::ForApproval => "for approval",
            Status::Approved => "approved",
        }
    }
}

/// Horizontal row of the information-environment timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    Civilian,
    Military,
    #[serde(rename = "DIV")]
    Division,
    #[serde(rename = "8A")]
    EighthArmy,
    Higher,
    Holidays,
}

impl Band {
    /// Bands bottom to top.
    pub const ALL: [Band; 6] = [
        Band::Civilian,
        Band::Military,
        Band::Division,
        Band::EighthArmy,
        Band::Higher,
        Band::Holidays,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Band::Civilian => "Civilian",
            Band::Military => "Military",
            Band::Division => "DIV",
            Band::EighthArmy => "8A",
            Band::Higher => "Higher",
            Band::Holidays => "Holidays",
        }
    }

    /// Top edge of the band on the timeline's vertical axis.
    pub fn upper(self) -> f64 {
        match self {
            Band::Civilian => 16.0,
            Band::Military => 42.0,
            Band::Division => 50.0,
            Band::EighthArmy => 58.0,
            Band::Higher => 66.0,
            Band::Holidays => 74.0,
        }
    }

    /// Bottom edge: the upper edge of the band below, or 0 for the first band.
    pub fn lower(self) -> f64 {
        let pos = Band::ALL.iter().position(|b| *b == self).unwrap_or(0);
        if pos == 0 { 0.0 } else { Band::ALL[pos - 1].upper() }
    }

    /// Vertical center, where the row label sits.
    pub fn center(self) -> f64 {
        (self.lower() + self.upper()) * 0.5
    }
}

impl FromStr for Band {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, ()> {
        Band::ALL
            .into_iter()
            .find(|b| b.label() == s.trim())
            .ok_or(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Event
// ────────────────────────────────────────────────────────────────────────────

/// A row as handed over by an external table loader, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub category: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<i64>,
    #[serde(alias = "engagement")]
    pub label: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub band: Option<String>,
}

/// A validated engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    pub category: Category,
    pub location: Option<String>,
    pub status: Option<Status>,
    pub label: String,
    /// Renderer passthrough, never read by the engine.
    pub color: Option<String>,
    pub band: Option<Band>,
}

impl Event {
    pub fn new(date: NaiveDate, category: Category, label: impl Into<String>) -> Self {
        Self {
            date,
            category,
            location: None,
            status: None,
            label: label.into(),
            color: None,
            band: None,
        }
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn in_band(mut self, band: Band) -> Self {
        self.band = Some(band);
        self
    }

    /// Validate a loader record. `index` is the row position, used in errors.
    pub fn from_record(index: usize, record: EventRecord) -> Result<Self> {
        let category = record
            .category
            .parse::<Category>()
            .map_err(|_| LayoutError::UnknownCategory {
                index,
                value: record.category.clone(),
            })?;
        let status = record
            .status
            .map(|ordinal| {
                u8::try_from(ordinal)
                    .ok()
                    .and_then(Status::from_ordinal)
                    .ok_or(LayoutError::UnknownStatus { index, ordinal })
            })
            .transpose()?;
        let band = record
            .band
            .map(|value| {
                value
                    .parse::<Band>()
                    .map_err(|_| LayoutError::UnknownBand { index, value })
            })
            .transpose()?;
        Ok(Self {
            date: record.date,
            category,
            location: record.location,
            status,
            label: record.label,
            color: record.color,
            band,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// EventTable
// ────────────────────────────────────────────────────────────────────────────

/// Ordered, validated table of engagements. Row order is significant: it
/// decides stacking and numbering order in every view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTable {
    events: Vec<Event>,
}

impl EventTable {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Validate loader records in order; the first invalid row aborts ingestion.
    pub fn from_records(records: Vec<EventRecord>) -> Result<Self> {
        let events = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Event::from_record(index, record))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }
}

impl FromIterator<Event> for EventTable {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
