use crate::application::dto::{ReportRequest, ReportResponse, ReportSubject};
use crate::ports::outbound::{ArtifactListing, DependencyGraphProvider, ProgressReporter, VersionResolver};
use crate::reporting::domain::{ArtifactReport, DependencyGraph, Gav, ScmLocator};
use crate::reporting::services::{MetadataGenerator, ReportTreeBuilder};
use crate::shared::Result;

/// GenerateReportUseCase - builds the full report tree for a project or a
/// single artifact
///
/// # Type Parameters
/// * `G` - DependencyGraphProvider implementation
/// * `V` - VersionResolver implementation
/// * `L` - ArtifactListing implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<G, V, L, PR> {
    graph_provider: G,
    version_resolver: V,
    artifact_listing: L,
    progress_reporter: PR,
}

impl<G, V, L, PR> GenerateReportUseCase<G, V, L, PR>
where
    G: DependencyGraphProvider,
    V: VersionResolver,
    L: ArtifactListing,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(graph_provider: G, version_resolver: V, artifact_listing: L, progress_reporter: PR) -> Self {
        Self {
            graph_provider,
            version_resolver,
            artifact_listing,
            progress_reporter,
        }
    }

    /// Executes the report use case
    ///
    /// # Errors
    /// Returns the first failure of the graph provider, the version resolver
    /// or the artifact listing; no partial report is produced
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        let report = match &request.subject {
            ReportSubject::Gav(gav) => self.report_for_gav(gav).await?,
            ReportSubject::Scm(scm) => self.report_for_scm(scm).await?,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Report complete: {} node(s), {} dependency(ies) without a best match",
            report.node_count(),
            report.not_built_dependencies()
        ));

        Ok(ReportResponse::new(
            report,
            MetadataGenerator::generate_default_metadata(),
        ))
    }

    /// Report tree for a single coordinate
    pub async fn report_for_gav(&self, gav: &Gav) -> Result<ArtifactReport> {
        self.progress_reporter
            .report(&format!("📊 Resolving dependency graph for {}", gav));
        let graph = self.graph_provider.graph_for_gav(gav).await?;
        self.build_report(&graph).await
    }

    /// Report tree for a project in source control
    pub async fn report_for_scm(&self, scm: &ScmLocator) -> Result<ArtifactReport> {
        self.progress_reporter
            .report(&format!("📊 Resolving dependency graph for {}", scm));
        let graph = self.graph_provider.graph_for_scm(scm).await?;
        self.build_report(&graph).await
    }

    /// Report tree for an already resolved graph
    pub async fn build_report(&self, graph: &DependencyGraph) -> Result<ArtifactReport> {
        self.progress_reporter.report(&format!(
            "🔍 Looking up built versions for {} node(s)...",
            graph.node_count()
        ));
        ReportTreeBuilder::new(&self.version_resolver, &self.artifact_listing)
            .build_report(graph)
            .await
    }
}
