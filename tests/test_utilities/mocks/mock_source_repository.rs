use async_trait::async_trait;
use dep_analyzer::prelude::*;
use dep_analyzer::shared::error::AnalyzerError;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Mock SourceRepository handing out empty temporary checkouts
#[derive(Default)]
pub struct MockSourceRepository {
    fail: bool,
    clones: AtomicUsize,
}

#[allow(dead_code)]
impl MockSourceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn clone_count(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SourceRepository for MockSourceRepository {
    async fn clone_repository(&self, scm: &ScmLocator) -> Result<WorkingCopy> {
        self.clones.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AnalyzerError::Scm {
                scm_url: scm.scm_url().to_string(),
                details: "repository not found".to_string(),
            }
            .into());
        }
        let dir = TempDir::new()?;
        let path = dir.path().to_path_buf();
        Ok(WorkingCopy::owned(dir, path))
    }
}
