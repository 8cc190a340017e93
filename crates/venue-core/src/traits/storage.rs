use crate::errors::VenueResult;
use crate::venue::{VenueKey, VenueRecord};

/// A record as held by a store, with its optimistic-concurrency version.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredVenue {
    pub record: VenueRecord,
    /// 1 after the first insert, incremented on every successful store.
    pub version: u64,
}

/// Get/put-by-key persistence for venue records with compare-and-swap writes.
pub trait IVenueStore: Send + Sync {
    /// `Ok(None)` when no record exists; storage faults are `LookupFailed`.
    fn load(&self, key: &VenueKey) -> VenueResult<Option<StoredVenue>>;

    /// Persist `record` if the stored version still equals `expected_version`
    /// (`None` = must not exist yet). Returns the new version.
    ///
    /// A mismatch is `VersionConflict`; storage faults are `StoreFailed`.
    fn store(&self, record: &VenueRecord, expected_version: Option<u64>) -> VenueResult<u64>;

    /// Records for the keys that exist, in request order.
    fn load_many(&self, keys: &[VenueKey]) -> VenueResult<Vec<StoredVenue>> {
        let mut found = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(stored) = self.load(key)? {
                found.push(stored);
            }
        }
        Ok(found)
    }
}
