use crate::application::dto::{AdvancedReportRequest, AdvancedReportResponse};
use crate::ports::outbound::{
    ArtifactListing, DependencyGraphProvider, ModuleBoundaryOracle, ProgressReporter,
    SourceRepository, VersionResolver,
};
use crate::reporting::domain::{AdvancedReport, ScmLocator};
use crate::reporting::policies::VersionProvenance;
use crate::reporting::services::{AdvancedReportClassifier, MetadataGenerator, ReportTreeBuilder};
use crate::shared::Result;

/// GenerateAdvancedReportUseCase - classifies a project's external
/// dependencies at its module boundaries
///
/// Builds the report tree from the project's dependency graph, fetches the
/// sources to learn which coordinates are the project's own modules, and
/// buckets everything else. The working copy is released before returning,
/// whether classification succeeded or not.
///
/// # Type Parameters
/// * `G` - DependencyGraphProvider implementation
/// * `V` - VersionResolver implementation
/// * `L` - ArtifactListing implementation
/// * `O` - ModuleBoundaryOracle implementation
/// * `S` - SourceRepository implementation
/// * `P` - VersionProvenance implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateAdvancedReportUseCase<G, V, L, O, S, P, PR> {
    graph_provider: G,
    version_resolver: V,
    artifact_listing: L,
    module_oracle: O,
    source_repository: S,
    provenance: P,
    progress_reporter: PR,
}

impl<G, V, L, O, S, P, PR> GenerateAdvancedReportUseCase<G, V, L, O, S, P, PR>
where
    G: DependencyGraphProvider,
    V: VersionResolver,
    L: ArtifactListing,
    O: ModuleBoundaryOracle,
    S: SourceRepository,
    P: VersionProvenance,
    PR: ProgressReporter,
{
    /// Creates a new GenerateAdvancedReportUseCase with injected dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        graph_provider: G,
        version_resolver: V,
        artifact_listing: L,
        module_oracle: O,
        source_repository: S,
        provenance: P,
        progress_reporter: PR,
    ) -> Self {
        Self {
            graph_provider,
            version_resolver,
            artifact_listing,
            module_oracle,
            source_repository,
            provenance,
            progress_reporter,
        }
    }

    pub async fn execute(&self, request: AdvancedReportRequest) -> Result<AdvancedReportResponse> {
        let advanced_report = self.advanced_report_for_scm(&request.scm).await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Advanced report complete: {} external artifact(s) classified, {} allowed, {} denied",
            advanced_report.classified_count(),
            advanced_report.allowed_artifacts().len(),
            advanced_report.denied_artifacts().len()
        ));

        Ok(AdvancedReportResponse::new(
            advanced_report,
            MetadataGenerator::generate_default_metadata(),
        ))
    }

    /// Report tree plus classification for the project at `scm`
    ///
    /// # Errors
    /// Propagates failures of every collaborator; a failed clone fails the
    /// whole report
    pub async fn advanced_report_for_scm(&self, scm: &ScmLocator) -> Result<AdvancedReport> {
        self.progress_reporter
            .report(&format!("📊 Resolving dependency graph for {}", scm));
        let graph = self.graph_provider.graph_for_scm(scm).await?;

        self.progress_reporter.report(&format!(
            "🔍 Looking up built versions for {} node(s)...",
            graph.node_count()
        ));
        let report = ReportTreeBuilder::new(&self.version_resolver, &self.artifact_listing)
            .build_report(&graph)
            .await?;

        self.progress_reporter
            .report(&format!("📥 Fetching sources of {}", scm));
        let working_copy = self.source_repository.clone_repository(scm).await?;

        self.progress_reporter
            .report("🧩 Classifying dependencies at module boundaries...");
        let classifier = AdvancedReportClassifier::new(
            &self.module_oracle,
            &self.artifact_listing,
            &self.provenance,
        );
        let advanced = classifier
            .build_advanced_report(report, working_copy.path())
            .await;

        drop(working_copy);
        advanced
    }
}
