use serde::{Deserialize, Serialize};

/// Result of asking the version resolver about one coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionLookupResult {
    best_match_version: Option<String>,
    available_versions: Vec<String>,
}

impl VersionLookupResult {
    /// Creates a lookup result. Duplicate versions are dropped, first
    /// occurrence wins.
    pub fn new(best_match_version: Option<String>, available_versions: Vec<String>) -> Self {
        let mut deduplicated: Vec<String> = Vec::with_capacity(available_versions.len());
        for version in available_versions {
            if !deduplicated.contains(&version) {
                deduplicated.push(version);
            }
        }
        Self {
            best_match_version,
            available_versions: deduplicated,
        }
    }

    /// Nothing built for the coordinate.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn best_match_version(&self) -> Option<&str> {
        self.best_match_version.as_deref()
    }

    pub fn available_versions(&self) -> &[String] {
        &self.available_versions
    }

    pub fn into_parts(self) -> (Option<String>, Vec<String>) {
        (self.best_match_version, self.available_versions)
    }
}
