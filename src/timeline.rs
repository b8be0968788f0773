//! Ninety-day "information environment" timeline.
//!
//! Events are placed on a date axis inside horizontal bands. Within a band,
//! pucks step downward from the band's top edge and wrap back to the top once
//! they would cross the band's lower edge. Puck numbers run per approval
//! status rather than per category.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::counter::{StatusCounter, StatusTotal, check_sequence, status_totals};
use crate::error::{LayoutError, Result};
use crate::model::{Band, Category, EventTable, Status};

/// Days covered after the window start.
pub const TIMELINE_DAYS: i64 = 90;
/// Gap between a band's top edge and its first puck.
pub const BAND_TOP_MARGIN: f64 = 1.5;
/// Vertical step between pucks in a band.
pub const BAND_STEP: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimelineWindow {
    /// Window for a reference date (usually today). Starts on the first of the
    /// reference month, or of the next month when fewer than seven days of
    /// the current month remain.
    pub fn for_reference(today: NaiveDate) -> Self {
        let first = today.with_day(1).unwrap_or(today);
        let next_first = first_of_next_month(first);
        let last_day = (next_first - Duration::days(1)).day();
        let start = if today.day() + 7 > last_day { next_first } else { first };
        Self {
            start,
            end: start + Duration::days(TIMELINE_DAYS),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Monday gridlines across the window.
    pub fn mondays(&self) -> Vec<NaiveDate> {
        let offset = (7 - self.start.weekday().num_days_from_monday()) % 7;
        let first = self.start + Duration::days(i64::from(offset));
        std::iter::successors(Some(first), |d| Some(*d + Duration::weeks(1)))
            .take_while(|d| *d <= self.end)
            .collect()
    }
}

fn first_of_next_month(first: NaiveDate) -> NaiveDate {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(first)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePlacement {
    pub event: usize,
    pub date: NaiveDate,
    pub band: Band,
    /// Vertical position on the band axis.
    pub y: f64,
    pub kind: Category,
    pub status: Status,
    pub sequence: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub window: TimelineWindow,
    pub placements: Vec<TimelinePlacement>,
    /// Events dated outside the window.
    pub excluded: Vec<usize>,
    pub totals: Vec<StatusTotal>,
}

/// Per-band running slot index with wrap-around.
#[derive(Debug, Default)]
struct BandSlots {
    next: [usize; Band::ALL.len()],
}

impl BandSlots {
    fn place(&mut self, band: Band) -> f64 {
        let slot = &mut self.next[band as usize];
        let mut y = band.upper() - BAND_TOP_MARGIN - *slot as f64 * BAND_STEP;
        if y <= band.lower() {
            *slot = 0;
            y = band.upper() - BAND_TOP_MARGIN;
        }
        *slot += 1;
        y
    }
}

/// Lay out the events of `table` that fall inside the window for `today`.
///
/// Every in-window event must carry a band and a status; the pass is checked
/// up front and fails without touching `counter` if one is missing. Numbers
/// start at the counter's own start value.
pub fn layout_timeline(
    table: &EventTable,
    today: NaiveDate,
    counter: &mut StatusCounter,
) -> Result<TimelineLayout> {
    let window = TimelineWindow::for_reference(today);

    let mut selected = Vec::new();
    let mut excluded = Vec::new();
    for (index, event) in table.iter().enumerate() {
        if !window.contains(event.date) {
            excluded.push(index);
            continue;
        }
        let band = event
            .band
            .ok_or(LayoutError::MissingField { index, field: "band" })?;
        let status = event
            .status
            .ok_or(LayoutError::MissingField { index, field: "status" })?;
        selected.push((index, band, status));
    }

    check_sequence(counter.start(), selected.len())?;
    counter.reset();
    let mut slots = BandSlots::default();
    let placements = selected
        .into_iter()
        .map(|(index, band, status)| {
            let event = &table.events()[index];
            TimelinePlacement {
                event: index,
                date: event.date,
                band,
                y: slots.place(band),
                kind: event.category,
                status,
                sequence: counter.next(status),
                label: event.label.clone(),
            }
        })
        .collect();

    tracing::debug!(
        start = %window.start,
        end = %window.end,
        excluded = excluded.len(),
        "timeline pass complete"
    );

    Ok(TimelineLayout {
        window,
        placements,
        excluded,
        totals: status_totals(counter),
    })
}
