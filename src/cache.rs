//! Load-once dataset cache.
//!
//! The dataset is read on first use and shared for the rest of the session.
//! There is no invalidation policy; [`DatasetCache::clear`] is the explicit
//! teardown and the only way to force a reload.

use anyhow::Result;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

use crate::dataset::LocationDataset;

pub struct DatasetCache {
    source: String,
    slot: OnceLock<Arc<LocationDataset>>,
}

impl DatasetCache {
    pub fn new(source: impl Into<String>) -> Self {
        DatasetCache {
            source: source.into(),
            slot: OnceLock::new(),
        }
    }

    /// Builds a cache that is already populated, for callers holding a parsed dataset.
    pub fn with_dataset(source: impl Into<String>, dataset: LocationDataset) -> Self {
        let cache = Self::new(source);
        let _ = cache.slot.set(Arc::new(dataset));
        cache
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Returns the cached dataset, loading it on the first call.
    ///
    /// A failed load leaves the cache empty so the error surfaces to the caller.
    pub fn get_or_load(&self) -> Result<Arc<LocationDataset>> {
        if let Some(dataset) = self.slot.get() {
            debug!(source = %self.source, "Dataset cache hit");
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(LocationDataset::load(&self.source)?);
        // first value stored wins if another caller filled the slot meanwhile
        let cached = self.slot.get_or_init(|| dataset);
        info!(source = %self.source, records = cached.len(), "Dataset cached");
        Ok(Arc::clone(cached))
    }

    /// Drops the cached dataset. Outstanding handles stay valid.
    pub fn clear(&mut self) {
        if self.slot.take().is_some() {
            debug!(source = %self.source, "Dataset cache cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_loads_once_until_cleared() {
        let path = temp_path("zomato_explorer_test_cache.csv");
        fs::write(&path, "name,location,approx_cost,rate\nJalsa,Banashankari,800,4.1\n").unwrap();

        let mut cache = DatasetCache::new(&path);
        assert!(!cache.is_loaded());

        let first = cache.get_or_load().unwrap();
        assert!(cache.is_loaded());

        // file changes are not observed while cached
        fs::write(&path, "name,location,approx_cost,rate\n").unwrap();
        let second = cache.get_or_load().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.len(), 1);

        cache.clear();
        assert!(!cache.is_loaded());
        let reloaded = cache.get_or_load().unwrap();
        assert!(reloaded.is_empty());
        assert_eq!(first.len(), 1);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_load_stays_empty() {
        let cache = DatasetCache::new("/nonexistent/zomato_explorer/cache.csv");
        assert!(cache.get_or_load().is_err());
        assert!(!cache.is_loaded());
    }

    #[test]
    fn test_with_dataset_is_preloaded() {
        let cache = DatasetCache::with_dataset("memory", LocationDataset::default());
        assert!(cache.is_loaded());
        assert!(cache.get_or_load().unwrap().is_empty());
    }
}
