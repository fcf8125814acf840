use async_trait::async_trait;
use dep_analyzer::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock ArtifactListing with fixed lists that counts full-list fetches
#[derive(Default)]
pub struct MockArtifactListing {
    allowed: HashSet<Gav>,
    denied: HashSet<Gav>,
    all_allowed_calls: AtomicUsize,
}

#[allow(dead_code)]
impl MockArtifactListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allowed(mut self, gav: &str) -> Self {
        self.allowed.insert(gav.parse().unwrap());
        self
    }

    pub fn with_denied(mut self, gav: &str) -> Self {
        self.denied.insert(gav.parse().unwrap());
        self
    }

    pub fn all_allowed_calls(&self) -> usize {
        self.all_allowed_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ArtifactListing for MockArtifactListing {
    async fn is_allowed(&self, gav: &Gav) -> Result<bool> {
        Ok(self.allowed.contains(gav))
    }

    async fn is_denied(&self, gav: &Gav) -> Result<bool> {
        Ok(self.denied.contains(gav))
    }

    async fn all_allowed(&self) -> Result<HashSet<GroupArtifact>> {
        self.all_allowed_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.allowed.iter().map(Gav::group_artifact).collect())
    }
}
