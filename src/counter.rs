//! Per-key running sequence numbers for puck labels.

use indexmap::IndexMap;
use serde::Serialize;
use std::hash::Hash;

use crate::model::{Category, Shape, Status};

/// Issues `start, start + 1, ...` independently for each key.
///
/// Owned by the caller; the layout engine resets it at the start of every pass.
#[derive(Debug, Clone)]
pub struct SequenceCounter<K> {
    start: u32,
    issued: IndexMap<K, u32>,
}

pub type CategoryCounter = SequenceCounter<Category>;
pub type StatusCounter = SequenceCounter<Status>;

impl<K: Copy + Eq + Hash> SequenceCounter<K> {
    pub const DEFAULT_START: u32 = 1;

    pub fn new() -> Self {
        Self::starting_at(Self::DEFAULT_START)
    }

    pub fn starting_at(start: u32) -> Self {
        Self {
            start,
            issued: IndexMap::new(),
        }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    /// Next number for `key`.
    pub fn next(&mut self, key: K) -> u32 {
        let n = self.issued.entry(key).or_insert(0);
        let seq = self.start.saturating_add(*n);
        *n += 1;
        seq
    }

    /// How many numbers have been issued for `key` since the last reset.
    pub fn issued(&self, key: K) -> u32 {
        self.issued.get(&key).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.issued.values().sum()
    }

    pub fn reset(&mut self) {
        self.issued.clear();
    }

    /// Restart with a new start value.
    pub fn reset_to(&mut self, start: u32) {
        self.start = start;
        self.issued.clear();
    }
}

/// Whether `count` consecutive numbers starting at `start` fit in a `u32`.
pub fn sequence_fits(start: u32, count: usize) -> bool {
    match count.checked_sub(1) {
        None => true,
        Some(last) => u32::try_from(last)
            .ok()
            .and_then(|last| start.checked_add(last))
            .is_some(),
    }
}

/// Fail when numbering `count` events from `start` would overflow.
pub(crate) fn check_sequence(start: u32, count: usize) -> crate::error::Result<()> {
    if sequence_fits(start, count) {
        Ok(())
    } else {
        Err(crate::error::LayoutError::InvalidConfig(format!(
            "counter_start {start} overflows numbering {count} events"
        )))
    }
}

impl<K: Copy + Eq + Hash> Default for SequenceCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub category: Category,
    pub shape: Shape,
    pub count: u32,
}

/// Legend rows in canonical category order, including empty categories.
pub fn legend(counter: &CategoryCounter) -> Vec<LegendEntry> {
    Category::ALL
        .into_iter()
        .map(|category| LegendEntry {
            category,
            shape: category.shape(),
            count: counter.issued(category),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusTotal {
    pub status: Status,
    pub count: u32,
}

pub fn status_totals(counter: &StatusCounter) -> Vec<StatusTotal> {
    Status::ALL
        .into_iter()
        .map(|status| StatusTotal {
            status,
            count: counter.issued(status),
        })
        .collect()
}
