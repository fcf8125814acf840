use crate::ports::outbound::{SourceRepository, WorkingCopy};
use crate::reporting::domain::ScmLocator;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// LocalWorkingCopy adapter handing out an already checked-out directory
///
/// Used when the sources are on disk, so no clone is needed. The directory
/// is never deleted.
pub struct LocalWorkingCopy {
    path: PathBuf,
}

impl LocalWorkingCopy {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl SourceRepository for LocalWorkingCopy {
    async fn clone_repository(&self, scm: &ScmLocator) -> Result<WorkingCopy> {
        if !self.path.is_dir() {
            return Err(AnalyzerError::Scm {
                scm_url: scm.scm_url().to_string(),
                details: format!("working copy {} is not a directory", self.path.display()),
            }
            .into());
        }
        Ok(WorkingCopy::borrowed(self.path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scm() -> ScmLocator {
        ScmLocator::new("https://git.example.com/app.git", None).unwrap()
    }

    #[tokio::test]
    async fn test_existing_directory() {
        let dir = TempDir::new().unwrap();
        let source = LocalWorkingCopy::new(dir.path().to_path_buf());

        let copy = source.clone_repository(&scm()).await.unwrap();
        assert_eq!(copy.path(), dir.path());
        drop(copy);
        assert!(dir.path().exists());
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let source = LocalWorkingCopy::new(PathBuf::from("/nonexistent/checkout"));
        assert!(source.clone_repository(&scm()).await.is_err());
    }
}
