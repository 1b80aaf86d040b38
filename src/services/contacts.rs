//! Tailor contact directory with a cached listing
//!
//! The listing changes rarely and is read on most order screens, so it is
//! served through an injected expiring cache. Mutating workflows call
//! `invalidate` after writing.

use std::sync::Arc;

use crate::cache::TtlCache;
use crate::error::AppResult;
use crate::models::TailorContact;
use crate::store::ContactStore;

const TAILORS_CACHE_KEY: &str = "tailors";

/// Directory service for tailor contacts
pub struct TailorDirectory {
    store: Arc<dyn ContactStore>,
    cache: TtlCache<String, Vec<TailorContact>>,
}

impl TailorDirectory {
    /// Create a directory backed by `store`, serving reads through `cache`
    pub fn new(store: Arc<dyn ContactStore>, cache: TtlCache<String, Vec<TailorContact>>) -> Self {
        Self { store, cache }
    }

    /// List tailor contacts, served from cache while the entry is fresh
    pub async fn list_tailors(&self) -> AppResult<Vec<TailorContact>> {
        if let Some(cached) = self.cache.get(&TAILORS_CACHE_KEY.to_string()) {
            return Ok(cached);
        }

        let tailors = self.store.list_tailors().await?;
        self.cache
            .insert(TAILORS_CACHE_KEY.to_string(), tailors.clone());
        Ok(tailors)
    }

    /// Drop the cached listing; the next read hits the store
    pub fn invalidate(&self) {
        self.cache.invalidate(&TAILORS_CACHE_KEY.to_string());
    }
}
