use crate::reporting::domain::{DependencyGraph, Gav, ScmLocator};
use crate::shared::Result;
use async_trait::async_trait;

/// DependencyGraphProvider port for obtaining the dependency graph of a
/// project
///
/// How the graph is produced (manifest analysis, repository manager
/// queries, exported files) is up to the adapter.
#[async_trait]
pub trait DependencyGraphProvider: Send + Sync {
    /// Dependency graph of the project stored at a source location
    ///
    /// # Errors
    /// Returns [`AnalyzerError::Scm`] or [`AnalyzerError::Analysis`] when the
    /// source cannot be fetched or analysed
    ///
    /// [`AnalyzerError::Scm`]: crate::shared::error::AnalyzerError::Scm
    /// [`AnalyzerError::Analysis`]: crate::shared::error::AnalyzerError::Analysis
    async fn graph_for_scm(&self, scm: &ScmLocator) -> Result<DependencyGraph>;

    /// Dependency graph rooted at a single coordinate
    async fn graph_for_gav(&self, gav: &Gav) -> Result<DependencyGraph>;
}
