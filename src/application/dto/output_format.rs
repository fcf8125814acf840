use crate::shared::error::AnalyzerError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// Output format of a generated report
///
/// Named on the command line (`--format`) and in the configuration file
/// (`format:`); the formatter factory turns it into a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON with camelCase field names
    #[default]
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = AnalyzerError;

    /// Case-insensitive, accepting the same names as the command line
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s.trim(), true).map_err(|_| {
            AnalyzerError::invalid_input(format!(
                "Invalid format: '{}'. Please specify 'json' or 'markdown'",
                s
            ))
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
