use crate::reporting::domain::{AdvancedReport, ArtifactReport, BatchLookupResult, ReportMetadata};

/// ReportResponse - Internal response DTO from the report tree use case
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub report: ArtifactReport,
    /// Report metadata (timestamp, tool info, report id)
    pub metadata: ReportMetadata,
}

impl ReportResponse {
    pub fn new(report: ArtifactReport, metadata: ReportMetadata) -> Self {
        Self { report, metadata }
    }
}

/// AdvancedReportResponse - Internal response DTO from the advanced report use case
#[derive(Debug, Clone)]
pub struct AdvancedReportResponse {
    pub advanced_report: AdvancedReport,
    pub metadata: ReportMetadata,
}

impl AdvancedReportResponse {
    pub fn new(advanced_report: AdvancedReport, metadata: ReportMetadata) -> Self {
        Self {
            advanced_report,
            metadata,
        }
    }
}

/// LookupResponse - Internal response DTO from the batch lookup use case
///
/// Callers must check `result.success` before presenting the rows; a
/// failed batch is used for its failure list and the exit code only.
#[derive(Debug, Clone)]
pub struct LookupResponse {
    pub result: BatchLookupResult,
    pub metadata: ReportMetadata,
}

impl LookupResponse {
    pub fn new(result: BatchLookupResult, metadata: ReportMetadata) -> Self {
        Self { result, metadata }
    }
}
