use crate::reporting::domain::ScmLocator;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Checked-out source tree, scoped to one request.
///
/// A clone owned by the handle is deleted when the handle is dropped; a
/// borrowed directory is left alone.
#[derive(Debug)]
pub struct WorkingCopy {
    path: PathBuf,
    _checkout: Option<TempDir>,
}

impl WorkingCopy {
    /// Working copy that removes `checkout` on drop. `path` must lie inside it.
    pub fn owned(checkout: TempDir, path: PathBuf) -> Self {
        Self {
            path,
            _checkout: Some(checkout),
        }
    }

    /// Existing directory the caller keeps ownership of.
    pub fn borrowed(path: PathBuf) -> Self {
        Self {
            path,
            _checkout: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// SourceRepository port for fetching a project's sources
#[async_trait]
pub trait SourceRepository: Send + Sync {
    /// Clones `scm` (checking out its revision when given)
    ///
    /// # Errors
    /// Returns [`AnalyzerError::Scm`] when cloning or checkout fails
    ///
    /// [`AnalyzerError::Scm`]: crate::shared::error::AnalyzerError::Scm
    async fn clone_repository(&self, scm: &ScmLocator) -> Result<WorkingCopy>;
}
