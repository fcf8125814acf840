//! dep-analyzer - build-readiness reports for Maven projects
//!
//! This library tells which dependencies of a project already have rebuilt
//! artifacts in a build-tracking repository, following hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`reporting`): Report model, version provenance and the
//!   tree builder, classifier and batch lookup services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_analyzer::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let graph_provider = GraphFileReader::new(PathBuf::from("graph.json"));
//! let version_resolver = CachingVersionResolver::new(MavenMetadataResolver::new(
//!     "https://maven.example.com/rebuilt",
//!     BuildSuffixProvenance::default(),
//! )?);
//! let artifact_listing = StaticArtifactListing::default();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(
//!     graph_provider,
//!     version_resolver,
//!     artifact_listing,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ReportRequest::for_gav("org.acme:app:1.0".parse()?);
//! let response = use_case.execute(request).await?;
//!
//! // Format output
//! let formatter = JsonFormatter::new();
//! let output = formatter.format_report(&response.metadata, &response.report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod reporting;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemWriter, GraphFileReader, PomModuleOracle, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::listing::StaticArtifactListing;
    pub use crate::adapters::outbound::network::{CachingVersionResolver, MavenMetadataResolver};
    pub use crate::adapters::outbound::scm::{GitSourceRepository, LocalWorkingCopy};
    pub use crate::application::dto::{
        AdvancedReportRequest, AdvancedReportResponse, LookupRequest, LookupResponse,
        OutputFormat, ReportRequest, ReportResponse,
    };
    pub use crate::application::use_cases::{
        GenerateAdvancedReportUseCase, GenerateReportUseCase, LookupGavsUseCase,
    };
    pub use crate::ports::outbound::{
        ArtifactListing, DependencyGraphProvider, ModuleBoundaryOracle, OutputPresenter,
        ProgressReporter, ReportFormatter, SourceRepository, VersionResolver, WorkingCopy,
    };
    pub use crate::reporting::domain::{
        AdvancedReport, ArtifactReport, BatchLookupResult, DependencyGraph, Gav, GroupArtifact,
        LookupReport, ReportMetadata, ScmLocator, VersionLookupResult,
    };
    pub use crate::reporting::policies::{BuildSuffixProvenance, VersionProvenance};
    pub use crate::reporting::services::{
        AdvancedReportClassifier, BatchLookup, ReportTreeBuilder,
    };
    pub use crate::shared::Result;
}
