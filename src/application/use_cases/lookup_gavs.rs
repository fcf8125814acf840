use crate::application::dto::{LookupRequest, LookupResponse};
use crate::ports::outbound::{ArtifactListing, ProgressReporter, VersionResolver};
use crate::reporting::services::{BatchLookup, MetadataGenerator};
use crate::shared::Result;

/// LookupGavsUseCase - looks up built versions and listing status for a
/// batch of coordinates
///
/// A failed coordinate does not abort the batch. The response carries the
/// failures and `success == false`; deciding what to do with the partial
/// rows is left to the caller.
///
/// # Type Parameters
/// * `V` - VersionResolver implementation
/// * `L` - ArtifactListing implementation
/// * `PR` - ProgressReporter implementation
pub struct LookupGavsUseCase<V, L, PR> {
    version_resolver: V,
    artifact_listing: L,
    progress_reporter: PR,
}

impl<V, L, PR> LookupGavsUseCase<V, L, PR>
where
    V: VersionResolver,
    L: ArtifactListing,
    PR: ProgressReporter,
{
    /// Creates a new LookupGavsUseCase with injected dependencies
    pub fn new(version_resolver: V, artifact_listing: L, progress_reporter: PR) -> Self {
        Self {
            version_resolver,
            artifact_listing,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: LookupRequest) -> Result<LookupResponse> {
        self.progress_reporter.report(&format!(
            "🔍 Looking up {} artifact(s) (max {} concurrent)...",
            request.gavs.len(),
            request.max_concurrent
        ));

        let reporter = &self.progress_reporter;
        let result = BatchLookup::new(&self.version_resolver, &self.artifact_listing)
            .with_max_concurrent(request.max_concurrent)
            .lookup_all_with_progress(&request.gavs, |done, total| {
                reporter.report_progress(done, total, None)
            })
            .await;

        if result.success {
            self.progress_reporter.report_completion(&format!(
                "✅ Lookup complete: {} artifact(s)",
                result.rows.len()
            ));
        } else {
            for failure in &result.failures {
                self.progress_reporter.report_error(&format!(
                    "⚠️  Lookup failed for {}: {}",
                    failure.gav, failure.message
                ));
            }
        }

        Ok(LookupResponse::new(
            result,
            MetadataGenerator::generate_default_metadata(),
        ))
    }
}
