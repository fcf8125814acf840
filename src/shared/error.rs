use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// CI pipelines use these to tell an incomplete lookup apart from a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report generated, or every batch lookup succeeded
    Success = 0,
    /// At least one coordinate of a batch lookup could not be resolved
    LookupIncomplete = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (communication, analysis, SCM, file I/O, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::LookupIncomplete => write!(f, "Lookup Incomplete (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failure kinds surfaced by report generation.
///
/// Errors travel as `anyhow::Error`; callers that need the kind use
/// `err.downcast_ref::<AnalyzerError>()`.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Communication with {service} failed\nDetails: {details}\n\n💡 Hint: Check that the service is reachable and the repository URL is correct")]
    Communication { service: String, details: String },

    #[error("Dependency analysis failed\nDetails: {details}\n\n💡 Hint: Re-export the dependency graph for this project and try again")]
    Analysis { details: String },

    #[error("Invalid input: {details}")]
    InvalidInput { details: String },

    #[error("Source control operation failed for {scm_url}\nDetails: {details}\n\n💡 Hint: Check the repository URL, the revision and your git credentials")]
    Scm { scm_url: String, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}

impl AnalyzerError {
    pub fn communication(service: impl Into<String>, details: impl fmt::Display) -> Self {
        Self::Communication {
            service: service.into(),
            details: details.to_string(),
        }
    }

    pub fn analysis(details: impl fmt::Display) -> Self {
        Self::Analysis {
            details: details.to_string(),
        }
    }

    pub fn invalid_input(details: impl fmt::Display) -> Self {
        Self::InvalidInput {
            details: details.to_string(),
        }
    }
}
