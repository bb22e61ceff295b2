//! Persistent series cache
//!
//! [`SeriesCache`] pairs a raw [`KeyValueStore`] with a [`SeriesCodec`].
//! Entries never expire: once a window has been fetched it is served from
//! here until overwritten, which keeps load off the rate-limited public API.

mod codec;
mod store;

pub use codec::{JsonCodec, SeriesCodec};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::data::{PricePoint, TimeSeries};
use crate::error::Result;

/// Typed cache of sampled series
pub struct SeriesCache {
    store: Box<dyn KeyValueStore>,
    codec: Box<dyn SeriesCodec>,
}

impl SeriesCache {
    /// Cache over `store` using the JSON codec
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::with_codec(store, JsonCodec)
    }

    pub fn with_codec(
        store: impl KeyValueStore + 'static,
        codec: impl SeriesCodec + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            codec: Box::new(codec),
        }
    }

    /// In-memory cache, mostly for tests
    #[allow(dead_code)]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Cached series under `key`.
    ///
    /// Absence is the normal miss case. Entries that fail to decode or decode
    /// to an empty series are logged and reported as absent.
    pub fn get(&self, key: &str) -> Option<TimeSeries> {
        let raw = self.store.get(key)?;
        match self.codec.decode(&raw) {
            Ok(series) if series.is_empty() => {
                tracing::warn!(key, "ignoring empty cached series");
                None
            }
            Ok(series) => Some(series),
            Err(e) => {
                tracing::warn!(key, error = %e, "ignoring undecodable cache entry");
                None
            }
        }
    }

    /// Store `series` under `key`, replacing any existing entry
    pub fn put(&self, key: &str, series: &[PricePoint]) -> Result<()> {
        let encoded = self.codec.encode(series)?;
        self.store.put(key, encoded)
    }
}
