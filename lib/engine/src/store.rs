//! Store contract and the in-memory adapter.
//!
//! The engine never owns item persistence; it consumes this boundary:
//! a lost-item lookup, a bulk corpus read for fitting the text model, and
//! the candidate query (found records inside a date window, optionally
//! narrowed by a location substring). [`MemoryStore`] is the in-process
//! implementation used by the CLI and the test suite.

use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;

use crate::error::Result;
use crate::item::ItemRecord;

/// Inclusive candidate date window around a lost item's event timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Window `[date - days_before, date + days_after]`.
    ///
    /// Each bound defaults to `date` itself when the corresponding filter
    /// is absent; with neither supplied the window collapses to a single
    /// instant and only records stamped exactly `date` qualify.
    pub fn around(date: DateTime<Utc>, days_before: Option<i64>, days_after: Option<i64>) -> Self {
        let start = match days_before {
            Some(days) => date - Duration::days(days),
            None => date,
        };
        let end = match days_after {
            Some(days) => date + Duration::days(days),
            None => date,
        };
        Self { start, end }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

/// Data-access boundary the engine calls into. Read-only.
pub trait ItemStore: Send + Sync {
    /// Resolve a lost item by id. `None` is a valid outcome, not an error.
    fn lost_item(&self, id: i64) -> Result<Option<ItemRecord>>;

    /// Every non-blank description across lost and found records.
    /// This is the corpus the vector space model is fitted on.
    fn all_descriptions(&self) -> Result<Vec<String>>;

    /// Found records whose event timestamp lies in `window`, additionally
    /// filtered by case-insensitive substring match on location when
    /// `location_filter` is supplied. Records without an event timestamp
    /// never qualify.
    fn found_in_window(
        &self,
        window: &DateWindow,
        location_filter: Option<&str>,
    ) -> Result<Vec<ItemRecord>>;
}

/// In-memory store over two record lists.
#[derive(Debug, Default)]
pub struct MemoryStore {
    lost: RwLock<Vec<ItemRecord>>,
    found: RwLock<Vec<ItemRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_lost(&self, item: ItemRecord) {
        self.lost.write().push(item);
    }

    pub fn insert_found(&self, item: ItemRecord) {
        self.found.write().push(item);
    }

    pub fn lost_count(&self) -> usize {
        self.lost.read().len()
    }

    pub fn found_count(&self) -> usize {
        self.found.read().len()
    }
}

impl ItemStore for MemoryStore {
    fn lost_item(&self, id: i64) -> Result<Option<ItemRecord>> {
        Ok(self.lost.read().iter().find(|item| item.id == id).cloned())
    }

    fn all_descriptions(&self) -> Result<Vec<String>> {
        let mut descriptions = Vec::new();
        for side in [&self.lost, &self.found] {
            for item in side.read().iter() {
                if let Some(description) = &item.description {
                    if !description.trim().is_empty() {
                        descriptions.push(description.clone());
                    }
                }
            }
        }
        Ok(descriptions)
    }

    fn found_in_window(
        &self,
        window: &DateWindow,
        location_filter: Option<&str>,
    ) -> Result<Vec<ItemRecord>> {
        let needle = location_filter.map(str::to_lowercase);
        let matches = self
            .found
            .read()
            .iter()
            .filter(|item| {
                let Some(occurred_at) = item.occurred_at else {
                    return false;
                };
                if !window.contains(occurred_at) {
                    return false;
                }
                match (&needle, &item.location) {
                    (Some(needle), Some(location)) => location.to_lowercase().contains(needle),
                    (Some(_), None) => false,
                    (None, _) => true,
                }
            })
            .cloned()
            .collect();
        Ok(matches)
    }
}
