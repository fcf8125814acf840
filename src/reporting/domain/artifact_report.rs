use super::{Gav, VersionLookupResult};
use serde::Serialize;

/// One node of the report tree: a coordinate enriched with what has already
/// been built for it and its allow/deny status.
///
/// Built bottom-up by the report tree builder and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactReport {
    gav: Gav,
    available_versions: Vec<String>,
    best_match_version: Option<String>,
    allowed: bool,
    denied: bool,
    dependencies: Vec<ArtifactReport>,
}

impl ArtifactReport {
    pub fn new(
        gav: Gav,
        lookup: VersionLookupResult,
        allowed: bool,
        denied: bool,
        dependencies: Vec<ArtifactReport>,
    ) -> Self {
        let (best_match_version, available_versions) = lookup.into_parts();
        Self {
            gav,
            available_versions,
            best_match_version,
            allowed,
            denied,
            dependencies,
        }
    }

    pub fn gav(&self) -> &Gav {
        &self.gav
    }

    pub fn version(&self) -> &str {
        self.gav.version()
    }

    pub fn available_versions(&self) -> &[String] {
        &self.available_versions
    }

    pub fn best_match_version(&self) -> Option<&str> {
        self.best_match_version.as_deref()
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        self.denied
    }

    pub fn dependencies(&self) -> &[ArtifactReport] {
        &self.dependencies
    }

    /// Number of report nodes in this subtree, this node included.
    pub fn node_count(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(ArtifactReport::node_count)
            .sum::<usize>()
    }

    /// True when every report node below this one has a best-match version.
    pub fn dependency_version_satisfied(&self) -> bool {
        self.dependencies
            .iter()
            .all(|dep| dep.best_match_version.is_some() && dep.dependency_version_satisfied())
    }

    /// Number of report nodes below this one without a best-match version.
    pub fn not_built_dependencies(&self) -> usize {
        self.dependencies
            .iter()
            .map(|dep| usize::from(dep.best_match_version.is_none()) + dep.not_built_dependencies())
            .sum()
    }
}
