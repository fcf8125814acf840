pub mod advanced_report;
pub mod artifact_report;
pub mod dependency_graph;
pub mod gav;
pub mod lookup_report;
pub mod report_metadata;
pub mod scm_locator;
pub mod version_lookup;

pub use advanced_report::{AdvancedReport, CommunityBucket};
pub use artifact_report::ArtifactReport;
pub use dependency_graph::{DependencyGraph, NodeId};
pub use gav::{Gav, GroupArtifact};
pub use lookup_report::{BatchLookupResult, LookupFailure, LookupReport};
pub use report_metadata::ReportMetadata;
pub use scm_locator::ScmLocator;
pub use version_lookup::VersionLookupResult;
