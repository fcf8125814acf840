use crate::ports::outbound::{SourceRepository, WorkingCopy};
use crate::reporting::domain::ScmLocator;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tempfile::TempDir;
use tokio::process::Command;

const CHECKOUT_DIR: &str = "checkout";

/// GitSourceRepository adapter cloning sources with the `git` executable
///
/// Each clone goes to a fresh temporary directory owned by the returned
/// working copy, so it disappears when the working copy is dropped.
pub struct GitSourceRepository {
    git_program: String,
}

impl GitSourceRepository {
    pub fn new() -> Self {
        Self {
            git_program: "git".to_string(),
        }
    }

    /// Uses a specific git executable instead of the one on `PATH`
    pub fn with_program(git_program: impl Into<String>) -> Self {
        Self {
            git_program: git_program.into(),
        }
    }

    async fn run_git(&self, scm: &ScmLocator, args: &[&str], cwd: Option<&Path>) -> Result<()> {
        let mut command = Command::new(&self.git_program);
        command
            .args(args)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|e| AnalyzerError::Scm {
            scm_url: scm.scm_url().to_string(),
            details: format!("failed to run {}: {}", self.git_program, e),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnalyzerError::Scm {
                scm_url: scm.scm_url().to_string(),
                details: format!("git {} failed: {}", args[0], stderr.trim()),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for GitSourceRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SourceRepository for GitSourceRepository {
    async fn clone_repository(&self, scm: &ScmLocator) -> Result<WorkingCopy> {
        let temp_dir = TempDir::new().map_err(|e| AnalyzerError::Scm {
            scm_url: scm.scm_url().to_string(),
            details: format!("failed to create a temporary directory: {}", e),
        })?;
        let checkout = temp_dir.path().join(CHECKOUT_DIR);
        let checkout_arg = checkout.to_string_lossy().into_owned();

        // "--" keeps the URL from being read as an option
        self.run_git(
            scm,
            &["clone", "--quiet", "--", scm.scm_url(), &checkout_arg],
            None,
        )
        .await?;

        if let Some(revision) = scm.revision() {
            self.run_git(
                scm,
                &["checkout", "--quiet", "--detach", revision],
                Some(&checkout),
            )
            .await?;
        }

        Ok(WorkingCopy::owned(temp_dir, checkout))
    }
}
