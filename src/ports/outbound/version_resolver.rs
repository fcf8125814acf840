use crate::reporting::domain::{Gav, VersionLookupResult};
use crate::shared::Result;
use async_trait::async_trait;

/// VersionResolver port for asking which versions of an artifact were
/// already built
///
/// This port abstracts the build-tracking service (a repository of rebuilt
/// artifacts, an internal catalogue, ...) consulted for every coordinate.
///
/// # Async Support
/// Implementations must be `Send + Sync` so lookups can run concurrently.
#[async_trait]
pub trait VersionResolver: Send + Sync {
    /// Looks up the built versions of a coordinate
    ///
    /// # Arguments
    /// * `gav` - Coordinate to look up
    ///
    /// # Returns
    /// The available built versions and, when the service judges one of them
    /// compatible with `gav`, the best-match version
    ///
    /// # Errors
    /// Returns an error (usually [`AnalyzerError::Communication`]) if the
    /// service cannot be reached or answers with an error
    ///
    /// [`AnalyzerError::Communication`]: crate::shared::error::AnalyzerError::Communication
    async fn lookup_built_versions(&self, gav: &Gav) -> Result<VersionLookupResult>;
}
