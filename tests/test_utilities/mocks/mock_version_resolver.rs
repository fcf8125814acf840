use async_trait::async_trait;
use dep_analyzer::prelude::*;
use dep_analyzer::shared::error::AnalyzerError;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock VersionResolver answering from canned lookups
///
/// Unknown coordinates have nothing built. Coordinates marked as failing
/// return a communication error.
#[derive(Default)]
pub struct MockVersionResolver {
    lookups: HashMap<Gav, VersionLookupResult>,
    failing: HashSet<Gav>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockVersionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_built(mut self, gav: &str, best_match: Option<&str>, available: &[&str]) -> Self {
        self.lookups.insert(
            gav.parse().unwrap(),
            VersionLookupResult::new(
                best_match.map(String::from),
                available.iter().map(|v| v.to_string()).collect(),
            ),
        );
        self
    }

    pub fn with_failure(mut self, gav: &str) -> Self {
        self.failing.insert(gav.parse().unwrap());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionResolver for MockVersionResolver {
    async fn lookup_built_versions(&self, gav: &Gav) -> Result<VersionLookupResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(gav) {
            return Err(AnalyzerError::communication(
                "artifact repository",
                format!("lookup of {} timed out", gav),
            )
            .into());
        }
        Ok(self
            .lookups
            .get(gav)
            .cloned()
            .unwrap_or_else(VersionLookupResult::empty))
    }
}
