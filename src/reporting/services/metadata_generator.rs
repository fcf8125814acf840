use crate::reporting::domain::ReportMetadata;
use chrono::Utc;
use uuid::Uuid;

/// Tool name recorded in report metadata
pub const TOOL_NAME: &str = "dep-analyzer";

/// MetadataGenerator stamps generated reports
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates report metadata with the current timestamp and a fresh id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> ReportMetadata {
        let timestamp = Utc::now().to_rfc3339();
        let report_id = format!("urn:uuid:{}", Uuid::new_v4());

        ReportMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
            report_id,
        )
    }

    /// Metadata naming this tool and its compile-time version
    pub fn generate_default_metadata() -> ReportMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
