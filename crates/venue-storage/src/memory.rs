//! InMemoryVenueStore: concurrent per-key access via DashMap.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use venue_core::errors::{VenueError, VenueResult};
use venue_core::traits::{IVenueStore, StoredVenue};
use venue_core::venue::{VenueKey, VenueRecord};

/// Thread-safe in-process store. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryVenueStore {
    venues: Arc<DashMap<VenueKey, StoredVenue>>,
}

impl InMemoryVenueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    pub fn keys(&self) -> Vec<VenueKey> {
        self.venues.iter().map(|r| r.key().clone()).collect()
    }
}

impl IVenueStore for InMemoryVenueStore {
    fn load(&self, key: &VenueKey) -> VenueResult<Option<StoredVenue>> {
        Ok(self.venues.get(key).map(|r| r.clone()))
    }

    fn store(&self, record: &VenueRecord, expected_version: Option<u64>) -> VenueResult<u64> {
        let conflict = |actual| VenueError::VersionConflict {
            key: record.key().to_string(),
            expected: expected_version,
            actual,
        };

        match self.venues.entry(record.key().clone()) {
            Entry::Vacant(slot) => match expected_version {
                None => {
                    slot.insert(StoredVenue {
                        record: record.clone(),
                        version: 1,
                    });
                    Ok(1)
                }
                Some(_) => Err(conflict(None)),
            },
            Entry::Occupied(mut slot) => {
                let current = slot.get().version;
                if expected_version != Some(current) {
                    return Err(conflict(Some(current)));
                }
                let next = current + 1;
                slot.insert(StoredVenue {
                    record: record.clone(),
                    version: next,
                });
                Ok(next)
            }
        }
    }
}
