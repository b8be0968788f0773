//! Positional stacking of pucks that share a calendar cell or a map cluster.
//!
//! Offsets depend only on an event's position in its group. Nothing is
//! measured and nothing is moved after the fact, so dense groups may still
//! overlap visually at small scales.

use serde::{Deserialize, Serialize};

/// Displacement from a cell's or cluster's anchor point, in the renderer's
/// coordinate units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum StackPolicy {
    /// One puck per row, growing downward without bound.
    Column { row_height: f64 },
    /// Row-major grid `columns` wide, growing downward.
    Grid { unit: f64, columns: usize },
}

impl StackPolicy {
    /// Offset of the `index`-th puck in its group.
    pub fn offset(&self, index: usize) -> Offset {
        match *self {
            StackPolicy::Column { row_height } => Offset::new(0.0, index as f64 * row_height),
            StackPolicy::Grid { unit, columns } => {
                let columns = columns.max(1);
                Offset::new(
                    (index % columns) as f64 * unit,
                    (index / columns) as f64 * unit,
                )
            }
        }
    }

    /// Offsets for a group of `count` pucks, in order.
    pub fn resolve(&self, count: usize) -> Vec<Offset> {
        (0..count).map(|i| self.offset(i)).collect()
    }
}

/// A calendar cell holding more pucks than fit inside its frame. Reported to
/// the renderer; the stack itself is left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellOverflow<K> {
    pub key: K,
    pub count: usize,
    pub capacity: usize,
}
