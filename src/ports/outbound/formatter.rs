use crate::reporting::domain::{AdvancedReport, ArtifactReport, BatchLookupResult, ReportMetadata};
use crate::shared::Result;

/// ReportFormatter port for rendering reports
///
/// This port abstracts the output format (JSON, Markdown, ...) of the three
/// report kinds the tool produces.
pub trait ReportFormatter {
    /// Formats a report tree
    ///
    /// # Arguments
    /// * `metadata` - Generation metadata (timestamp, tool, report id)
    /// * `report` - Root of the report tree
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format_report(&self, metadata: &ReportMetadata, report: &ArtifactReport) -> Result<String>;

    /// Formats an advanced report (classification buckets plus its tree)
    fn format_advanced(&self, metadata: &ReportMetadata, report: &AdvancedReport)
        -> Result<String>;

    /// Formats the rows of a successful batch lookup
    fn format_lookup(&self, metadata: &ReportMetadata, result: &BatchLookupResult)
        -> Result<String>;
}
