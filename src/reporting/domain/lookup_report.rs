use super::{Gav, VersionLookupResult};
use serde::Serialize;

/// One row of a batch lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupReport {
    gav: Gav,
    best_match_version: Option<String>,
    available_versions: Vec<String>,
    allowed: bool,
    denied: bool,
}

impl LookupReport {
    pub fn new(gav: Gav, lookup: VersionLookupResult, allowed: bool, denied: bool) -> Self {
        let (best_match_version, available_versions) = lookup.into_parts();
        Self {
            gav,
            best_match_version,
            available_versions,
            allowed,
            denied,
        }
    }

    pub fn gav(&self) -> &Gav {
        &self.gav
    }

    pub fn best_match_version(&self) -> Option<&str> {
        self.best_match_version.as_deref()
    }

    pub fn available_versions(&self) -> &[String] {
        &self.available_versions
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn is_denied(&self) -> bool {
        self.denied
    }
}

/// A coordinate whose lookup failed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupFailure {
    pub gav: Gav,
    pub message: String,
}

/// Outcome of a batch lookup.
///
/// `success` is true only when every coordinate was looked up. On failure
/// the rows are partial and callers are expected to discard them; the
/// failures say which coordinates broke and why.
#[derive(Debug, Clone, Serialize)]
pub struct BatchLookupResult {
    pub rows: Vec<LookupReport>,
    pub success: bool,
    pub failures: Vec<LookupFailure>,
}

impl BatchLookupResult {
    pub fn new(rows: Vec<LookupReport>, failures: Vec<LookupFailure>) -> Self {
        Self {
            success: failures.is_empty(),
            rows,
            failures,
        }
    }
}
