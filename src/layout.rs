//! Calendar and map layout passes.
//!
//! A pass takes a validated [`EventTable`], buckets it into cells or
//! clusters, stacks each group, numbers every puck per category in table
//! order and wraps its label. The result is a complete placement set or an
//! error; a pass never returns partial output.
//!
//! Suggested usage:
//! 1. Validate loader rows with [`EventTable::from_records`].
//! 2. Build a [`LayoutEngine`] from a [`LayoutConfig`].
//! 3. Run [`LayoutEngine::layout_calendar`] and/or [`LayoutEngine::layout_map`],
//!    each with its own [`CategoryCounter`], and hand the placements to the
//!    renderer.

use serde::Serialize;

use crate::calendar::{CalendarWindow, CellKey, assign_cells};
use crate::cluster::{Coordinate, CoordinateLookup, assign_clusters};
use crate::config::LayoutConfig;
use crate::counter::{CategoryCounter, LegendEntry, check_sequence, legend};
use crate::error::{LayoutError, Result};
use crate::model::{Category, EventTable};
use crate::stack::{CellOverflow, Offset, StackPolicy};
use crate::wrap::wrap_words;

/// Where a puck is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Cell(CellKey),
    Cluster(Coordinate),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementRecord {
    /// Row index in the event table.
    pub event: usize,
    pub category: Category,
    pub slot: Slot,
    /// Position of the puck within its cell or cluster.
    pub offset_index: usize,
    pub offset: Offset,
    /// Per-category number printed on the puck.
    pub sequence: u32,
    pub label: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarLayout {
    pub window: CalendarWindow,
    /// Placements in table order.
    pub placements: Vec<PlacementRecord>,
    /// Events outside the window, for a later page.
    pub excluded: Vec<usize>,
    pub overflow: Vec<CellOverflow<CellKey>>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayout {
    /// Placements in table order.
    pub placements: Vec<PlacementRecord>,
    pub legend: Vec<LegendEntry>,
}

pub struct LayoutEngine {
    config: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Calendar pass over the window anchored on the earliest event.
    pub fn layout_calendar(
        &self,
        table: &EventTable,
        counter: &mut CategoryCounter,
    ) -> Result<CalendarLayout> {
        let window = CalendarWindow::for_events(table.events())?;
        self.layout_calendar_window(table, window, counter)
    }

    /// Calendar pass over an explicit window, e.g. the page after
    /// [`CalendarWindow::for_events`].
    pub fn layout_calendar_window(
        &self,
        table: &EventTable,
        window: CalendarWindow,
        counter: &mut CategoryCounter,
    ) -> Result<CalendarLayout> {
        if table.is_empty() {
            return Err(LayoutError::EmptyBatch);
        }
        let assignment = assign_cells(table.events(), &window);

        let mut slots: Vec<Option<(Slot, usize)>> = vec![None; table.len()];
        let mut overflow = Vec::new();
        for bucket in &assignment.buckets {
            for (pos, &index) in bucket.events.iter().enumerate() {
                slots[index] = Some((Slot::Cell(bucket.key), pos));
            }
            if let Some(capacity) = self.config.cell_capacity {
                if bucket.events.len() > capacity {
                    tracing::warn!(
                        week = bucket.key.week,
                        weekday = bucket.key.weekday,
                        count = bucket.events.len(),
                        capacity,
                        "calendar cell overflows its frame"
                    );
                    overflow.push(CellOverflow {
                        key: bucket.key,
                        count: bucket.events.len(),
                        capacity,
                    });
                }
            }
        }

        let placements = self.place(table, &slots, self.config.calendar_policy(), counter)?;
        tracing::debug!(
            start = %window.start(),
            placed = placements.len(),
            excluded = assignment.excluded.len(),
            "calendar pass complete"
        );
        Ok(CalendarLayout {
            window,
            placements,
            excluded: assignment.excluded,
            overflow,
            legend: legend(counter),
        })
    }

    /// Map pass. Every event must resolve to a coordinate.
    pub fn layout_map(
        &self,
        table: &EventTable,
        lookup: &CoordinateLookup,
        counter: &mut CategoryCounter,
    ) -> Result<MapLayout> {
        let clusters = assign_clusters(table.events(), lookup)?;

        let mut slots: Vec<Option<(Slot, usize)>> = vec![None; table.len()];
        for cluster in &clusters {
            for (pos, &index) in cluster.events.iter().enumerate() {
                slots[index] = Some((Slot::Cluster(cluster.coordinate), pos));
            }
        }

        let placements = self.place(table, &slots, self.config.map_policy(), counter)?;
        tracing::debug!(
            clusters = clusters.len(),
            placed = placements.len(),
            "map pass complete"
        );
        Ok(MapLayout {
            placements,
            legend: legend(counter),
        })
    }

    /// Number, offset and label every slotted event in table order. Resets
    /// `counter` first, once the numbering is known to fit.
    fn place(
        &self,
        table: &EventTable,
        slots: &[Option<(Slot, usize)>],
        policy: StackPolicy,
        counter: &mut CategoryCounter,
    ) -> Result<Vec<PlacementRecord>> {
        check_sequence(self.config.counter_start, slots.iter().flatten().count())?;
        counter.reset_to(self.config.counter_start);
        let placements = table
            .iter()
            .zip(slots)
            .enumerate()
            .filter_map(|(index, (event, slot))| {
                let (slot, offset_index) = (*slot)?;
                Some(PlacementRecord {
                    event: index,
                    category: event.category,
                    slot,
                    offset_index,
                    offset: policy.offset(offset_index),
                    sequence: counter.next(event.category),
                    label: wrap_words(&event.label, self.config.label_width),
                })
            })
            .collect();
        Ok(placements)
    }
}
