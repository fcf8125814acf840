use crate::ports::outbound::VersionResolver;
use crate::reporting::domain::{Gav, VersionLookupResult};
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingVersionResolver wraps a VersionResolver and adds in-memory caching.
///
/// Report trees look the same coordinate up once per occurrence, and
/// diamonds are common in Maven graphs, so repeated lookups are served from
/// the cache. Failures are not cached. The cache is thread-safe and suitable
/// for concurrent batch lookups.
pub struct CachingVersionResolver<R: VersionResolver> {
    inner: R,
    cache: Arc<DashMap<Gav, VersionLookupResult>>,
}

impl<R: VersionResolver> CachingVersionResolver<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[async_trait]
impl<R: VersionResolver> VersionResolver for CachingVersionResolver<R> {
    async fn lookup_built_versions(&self, gav: &Gav) -> Result<VersionLookupResult> {
        if let Some(cached) = self.cache.get(gav) {
            return Ok(cached.clone());
        }

        let result = self.inner.lookup_built_versions(gav).await?;
        self.cache.insert(gav.clone(), result.clone());

        Ok(result)
    }
}
