use crate::ports::outbound::{ArtifactListing, VersionResolver};
use crate::reporting::domain::{BatchLookupResult, Gav, LookupFailure, LookupReport};
use crate::shared::Result;
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of coordinates looked up at the same time
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 10;

/// BatchLookup looks up many coordinates concurrently
///
/// Each coordinate costs one resolver call and two listing calls. Failures
/// are isolated per coordinate: the remaining lookups still run, and the
/// result says which coordinates failed.
pub struct BatchLookup<'a, V, L> {
    resolver: &'a V,
    listing: &'a L,
    max_concurrent: usize,
}

impl<'a, V, L> BatchLookup<'a, V, L>
where
    V: VersionResolver,
    L: ArtifactListing,
{
    pub fn new(resolver: &'a V, listing: &'a L) -> Self {
        Self {
            resolver,
            listing,
            max_concurrent: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }

    /// Caps the number of in-flight lookups. Zero is treated as one.
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    pub async fn lookup_all(&self, gavs: &[Gav]) -> BatchLookupResult {
        self.lookup_all_with_progress(gavs, |_, _| {}).await
    }

    /// Looks up every coordinate, calling `progress(done, total)` as each
    /// lookup finishes
    ///
    /// # Returns
    /// Rows in input order for the coordinates that succeeded, plus one
    /// failure entry (also in input order) for every coordinate that did not
    pub async fn lookup_all_with_progress<F>(&self, gavs: &[Gav], progress: F) -> BatchLookupResult
    where
        F: Fn(usize, usize) + Send + Sync,
    {
        let total = gavs.len();
        let done = AtomicUsize::new(0);
        let done = &done;
        let progress = &progress;

        let mut outcomes: Vec<(usize, Result<LookupReport>)> =
            stream::iter(gavs.iter().enumerate())
                .map(move |(index, gav)| async move {
                    let outcome = self.lookup_one(gav).await;
                    progress(done.fetch_add(1, Ordering::Relaxed) + 1, total);
                    (index, outcome)
                })
                .buffer_unordered(self.max_concurrent)
                .collect()
                .await;

        outcomes.sort_by_key(|(index, _)| *index);

        let mut rows = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for (index, outcome) in outcomes {
            match outcome {
                Ok(row) => rows.push(row),
                Err(e) => failures.push(LookupFailure {
                    gav: gavs[index].clone(),
                    message: format!("{:#}", e),
                }),
            }
        }

        BatchLookupResult::new(rows, failures)
    }

    async fn lookup_one(&self, gav: &Gav) -> Result<LookupReport> {
        let lookup = self.resolver.lookup_built_versions(gav).await?;
        let allowed = self.listing.is_allowed(gav).await?;
        let denied = self.listing.is_denied(gav).await?;
        Ok(LookupReport::new(gav.clone(), lookup, allowed, denied))
    }
}
