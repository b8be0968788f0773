//! Property tests for the placement invariants:
//!
//! 1. Every event maps to a workday column 0..5.
//! 2. Calendar offsets strictly increase within a cell.
//! 3. Cluster offsets are unique and follow the row-major wrap.
//! 4. Numbering is reproducible across passes.
//! 5. Wrapping preserves words and respects the width.

use chrono::{Duration, NaiveDate};
use engagement_layout::calendar::{CalendarWindow, assign_cells};
use engagement_layout::cluster::{Coordinate, CoordinateLookup};
use engagement_layout::counter::CategoryCounter;
use engagement_layout::model::{Category, Event, EventTable};
use engagement_layout::stack::StackPolicy;
use engagement_layout::weekday::workday_index;
use engagement_layout::wrap::wrap_words;
use engagement_layout::{LayoutConfig, LayoutEngine, Slot};
use proptest::prelude::*;
use std::collections::HashMap;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0i64..60, category_strategy(), 0usize..3), 1..40).prop_map(|rows| {
        rows.into_iter()
            .map(|(day, cat, loc)| {
                Event::new(base_date() + Duration::days(day), cat, "visit").at(format!("base{loc}"))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn workday_index_in_range(day in 0i64..3650) {
        let idx = workday_index(base_date() + Duration::days(day));
        prop_assert!(idx < 5);
    }

    #[test]
    fn calendar_offsets_strictly_increase(events in events_strategy()) {
        let table = EventTable::new(events);
        let mut counter = CategoryCounter::new();
        let layout = LayoutEngine::new(LayoutConfig::default())
            .unwrap()
            .layout_calendar(&table, &mut counter)
            .unwrap();
        let mut last: HashMap<String, f64> = HashMap::new();
        for p in &layout.placements {
            let key = format!("{:?}", p.slot);
            if let Some(prev) = last.get(&key) {
                prop_assert!(p.offset.y > *prev);
            }
            prop_assert_eq!(p.offset.x, 0.0);
            last.insert(key, p.offset.y);
        }
        let window = CalendarWindow::for_events(table.events()).unwrap();
        let assignment = assign_cells(table.events(), &window);
        let bucketed: usize = assignment.buckets.iter().map(|b| b.events.len()).sum();
        prop_assert_eq!(bucketed + assignment.excluded.len(), table.len());
    }

    #[test]
    fn grid_offsets_unique_and_wrapped(count in 0usize..50) {
        let offsets = StackPolicy::Grid { unit: 1.0, columns: 3 }.resolve(count);
        for (i, o) in offsets.iter().enumerate() {
            prop_assert_eq!(o.x, (i % 3) as f64);
            prop_assert_eq!(o.y, (i / 3) as f64);
            for other in &offsets[..i] {
                prop_assert!(other != o);
            }
        }
    }

    #[test]
    fn map_numbering_is_reproducible(events in events_strategy()) {
        let table = EventTable::new(events);
        let mut lookup = CoordinateLookup::new();
        for i in 0..3 {
            lookup.insert(format!("base{i}"), Coordinate::new(127.0 + i as f64, 37.0)).unwrap();
        }
        let engine = LayoutEngine::new(LayoutConfig::default()).unwrap();
        let mut counter = CategoryCounter::new();
        let first = engine.layout_map(&table, &lookup, &mut counter).unwrap();
        let second = engine.layout_map(&table, &lookup, &mut counter).unwrap();
        prop_assert_eq!(&first, &second);

        let mut per_category: HashMap<Category, u32> = HashMap::new();
        for p in &first.placements {
            let n = per_category.entry(p.category).or_insert(0);
            *n += 1;
            prop_assert_eq!(p.sequence, *n);
            prop_assert!(matches!(p.slot, Slot::Cluster(_)));
        }
    }

    #[test]
    fn wrap_preserves_words(words in prop::collection::vec("[a-zA-Z]{1,12}", 0..20), width in 1usize..30) {
        let text = words.join(" ");
        let lines = wrap_words(&text, width);
        prop_assert_eq!(lines.join(" "), text);
        for line in &lines {
            prop_assert!(line.chars().count() <= width || !line.contains(' '));
        }
    }
}
