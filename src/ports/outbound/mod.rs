/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the reporting core uses to talk
/// to the build-tracking service, the artifact lists, the dependency
/// analyzer, source control, the file system and the console.
pub mod artifact_listing;
pub mod dependency_graph_provider;
pub mod formatter;
pub mod module_boundary_oracle;
pub mod output_presenter;
pub mod progress_reporter;
pub mod source_repository;
pub mod version_resolver;

pub use artifact_listing::ArtifactListing;
pub use dependency_graph_provider::DependencyGraphProvider;
pub use formatter::ReportFormatter;
pub use module_boundary_oracle::ModuleBoundaryOracle;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use source_repository::{SourceRepository, WorkingCopy};
pub use version_resolver::VersionResolver;
