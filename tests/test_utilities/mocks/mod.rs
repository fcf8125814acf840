/// Mock implementations for testing
mod mock_artifact_listing;
mod mock_graph_provider;
mod mock_module_oracle;
mod mock_progress_reporter;
mod mock_source_repository;
mod mock_version_resolver;

pub use mock_artifact_listing::MockArtifactListing;
pub use mock_graph_provider::MockGraphProvider;
pub use mock_module_oracle::MockModuleOracle;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_source_repository::MockSourceRepository;
pub use mock_version_resolver::MockVersionResolver;
