//! Grouping of events by geographic coordinate.
//!
//! Grouping is by exact coordinate equality: two bases a hair apart form two
//! clusters. Only the sign of zero is normalized.

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::model::Event;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite()
    }

    /// Hashable identity used for exact grouping. `-0.0` and `0.0` share a key.
    fn key(&self) -> (u64, u64) {
        fn bits(v: f64) -> u64 {
            if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
        }
        (bits(self.longitude), bits(self.latitude))
    }
}

/// A named reference location as it appears in base tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseRecord {
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

/// Location name → coordinate table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoordinateLookup {
    entries: IndexMap<String, Coordinate>,
}

impl CoordinateLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, coordinate: Coordinate) -> Result<()> {
        let name = name.into();
        if !coordinate.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { location: name });
        }
        match self.entries.entry(name) {
            Entry::Occupied(e) => Err(LayoutError::DuplicateLocation(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(coordinate);
                Ok(())
            }
        }
    }

    pub fn from_bases(bases: impl IntoIterator<Item = BaseRecord>) -> Result<Self> {
        let mut lookup = Self::new();
        for base in bases {
            lookup.insert(base.name, Coordinate::new(base.longitude, base.latitude))?;
        }
        Ok(lookup)
    }

    pub fn resolve(&self, name: &str) -> Option<Coordinate> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Events sharing one exact coordinate, in table order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationCluster {
    pub coordinate: Coordinate,
    pub events: Vec<usize>,
}

/// Group events by resolved coordinate. Clusters appear in order of their
/// first event. Any unresolvable event fails the whole assignment.
pub fn assign_clusters(events: &[Event], lookup: &CoordinateLookup) -> Result<Vec<LocationCluster>> {
    let mut clusters: IndexMap<(u64, u64), LocationCluster> = IndexMap::new();
    for (index, event) in events.iter().enumerate() {
        let coordinate = event
            .location
            .as_deref()
            .and_then(|name| lookup.resolve(name))
            .ok_or_else(|| LayoutError::UnresolvedLocation {
                index,
                location: event.location.clone(),
            })?;
        clusters
            .entry(coordinate.key())
            .or_insert_with(|| LocationCluster {
                coordinate,
                events: Vec::new(),
            })
            .events
            .push(index);
    }
    Ok(clusters.into_values().collect())
}
