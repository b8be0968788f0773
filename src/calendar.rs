//! Four-week calendar window and cell bucketing.
//!
//! The grid has [`WINDOW_WEEKS`] rows and [`WORKDAYS_PER_WEEK`] columns. Each
//! event lands in the cell of its week (relative to the window start) and its
//! weekend-folded weekday. Events outside the window are reported, not placed.

use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::model::Event;
use crate::weekday::{monday_on_or_before, workday_index};

pub const WINDOW_WEEKS: usize = 4;
pub const WORKDAYS_PER_WEEK: usize = 5;

/// One `(week, weekday)` slot of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellKey {
    pub week: usize,
    pub weekday: usize,
}

impl CellKey {
    pub fn new(week: usize, weekday: usize) -> Self {
        Self { week, weekday }
    }
}

/// Visible four-week span, anchored on a Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarWindow {
    start: NaiveDate,
}

impl CalendarWindow {
    /// Window whose first row is the week containing `date`.
    pub fn starting_on(date: NaiveDate) -> Self {
        Self {
            start: monday_on_or_before(date),
        }
    }

    /// Window anchored on the Monday on/before the earliest event.
    pub fn for_events(events: &[Event]) -> Result<Self> {
        let earliest = events
            .iter()
            .map(|e| e.date)
            .min()
            .ok_or(LayoutError::EmptyBatch)?;
        Ok(Self::starting_on(earliest))
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last Friday shown by the grid.
    pub fn last_workday(&self) -> NaiveDate {
        self.start + Duration::days((WINDOW_WEEKS as i64 - 1) * 7 + 4)
    }

    /// Row headers for this window, counted from its own first Monday.
    pub fn row_labels(&self) -> [String; WINDOW_WEEKS] {
        week_labels(fiscal_week(self.start))
    }

    /// The window immediately after this one.
    pub fn next(&self) -> Self {
        Self {
            start: self.start + Duration::weeks(WINDOW_WEEKS as i64),
        }
    }

    /// Cell for `date`, or `None` when the date falls before or after the window.
    pub fn cell_for(&self, date: NaiveDate) -> Option<CellKey> {
        let days = (date - self.start).num_days();
        if days < 0 {
            return None;
        }
        let week = (days / 7) as usize;
        if week >= WINDOW_WEEKS {
            return None;
        }
        Some(CellKey::new(week, workday_index(date)))
    }

    /// Date printed in the corner of a cell.
    pub fn cell_date(&self, key: CellKey) -> NaiveDate {
        self.start + Duration::days((key.week * 7 + key.weekday) as i64)
    }

    /// Unpadded `month.day` label of a cell, e.g. `3.4`.
    pub fn cell_label(&self, key: CellKey) -> String {
        let d = self.cell_date(key);
        format!("{}.{}", d.month(), d.day())
    }

    /// All 20 cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = CellKey> {
        (0..WINDOW_WEEKS)
            .flat_map(|week| (0..WORKDAYS_PER_WEEK).map(move |weekday| CellKey::new(week, weekday)))
    }
}

/// Events sharing one cell, in table order (indices into the event slice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellBucket {
    pub key: CellKey,
    pub events: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellAssignment {
    /// Buckets in order of their first event.
    pub buckets: Vec<CellBucket>,
    /// Indices of events outside the window.
    pub excluded: Vec<usize>,
}

/// Bucket `events` into the cells of `window`.
pub fn assign_cells(events: &[Event], window: &CalendarWindow) -> CellAssignment {
    let mut buckets: IndexMap<CellKey, Vec<usize>> = IndexMap::new();
    let mut excluded = Vec::new();
    for (index, event) in events.iter().enumerate() {
        match window.cell_for(event.date) {
            Some(key) => buckets.entry(key).or_default().push(index),
            None => {
                tracing::debug!(index, date = %event.date, "event outside calendar window");
                excluded.push(index);
            }
        }
    }
    CellAssignment {
        buckets: buckets
            .into_iter()
            .map(|(key, events)| CellBucket { key, events })
            .collect(),
        excluded,
    }
}

/// Row labels for the grid, offset by the caller's fiscal week.
pub fn week_labels(fiscal_week: u32) -> [String; WINDOW_WEEKS] {
    std::array::from_fn(|row| format!("Week {}", fiscal_week as usize + row + 1))
}

/// Fiscal week of `date`; the fiscal year starts on October 1 and week 1 is
/// the first seven days.
pub fn fiscal_week(date: NaiveDate) -> u32 {
    let year = if date.month() >= 10 { date.year() } else { date.year() - 1 };
    let fiscal_start = NaiveDate::from_ymd_opt(year, 10, 1).unwrap_or(date);
    ((date - fiscal_start).num_days() / 7 + 1) as u32
}
