use crate::ports::outbound::ReportFormatter;
use crate::reporting::domain::{
    AdvancedReport, ArtifactReport, BatchLookupResult, LookupReport, ReportMetadata,
};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TreeSummary {
    node_count: usize,
    not_built_dependencies: usize,
    dependency_version_satisfied: bool,
}

impl TreeSummary {
    fn of(report: &ArtifactReport) -> Self {
        Self {
            node_count: report.node_count(),
            not_built_dependencies: report.not_built_dependencies(),
            dependency_version_satisfied: report.dependency_version_satisfied(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    metadata: &'a ReportMetadata,
    summary: TreeSummary,
    report: &'a ArtifactReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AdvancedDocument<'a> {
    metadata: &'a ReportMetadata,
    summary: TreeSummary,
    advanced_report: &'a AdvancedReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupDocument<'a> {
    metadata: &'a ReportMetadata,
    results: &'a [LookupReport],
}

/// JsonFormatter adapter rendering reports as pretty-printed JSON
///
/// Field names are camelCase, so the output can be consumed by the same
/// tooling as other build-readiness reports.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_report(&self, metadata: &ReportMetadata, report: &ArtifactReport) -> Result<String> {
        let document = ReportDocument {
            metadata,
            summary: TreeSummary::of(report),
            report,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_advanced(
        &self,
        metadata: &ReportMetadata,
        report: &AdvancedReport,
    ) -> Result<String> {
        let document = AdvancedDocument {
            metadata,
            summary: TreeSummary::of(report.artifact_report()),
            advanced_report: report,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    fn format_lookup(
        &self,
        metadata: &ReportMetadata,
        result: &BatchLookupResult,
    ) -> Result<String> {
        let document = LookupDocument {
            metadata,
            results: &result.rows,
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
