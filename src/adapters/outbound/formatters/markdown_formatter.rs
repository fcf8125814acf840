use crate::ports::outbound::ReportFormatter;
use crate::reporting::domain::{
    AdvancedReport, ArtifactReport, BatchLookupResult, Gav, ReportMetadata,
};
use crate::shared::Result;
use std::collections::BTreeSet;

/// Markdown table header for lookup rows
const LOOKUP_TABLE_HEADER: &str =
    "| Artifact | Version | Best Match | Available Versions | Allowed | Denied |\n";

/// Markdown table separator line for lookup rows
const LOOKUP_TABLE_SEPARATOR: &str =
    "|----------|---------|------------|--------------------|---------|--------|\n";

/// Markdown table header for classified coordinates
const GAV_TABLE_HEADER: &str = "| Group | Artifact | Version |\n";

/// Markdown table separator line for classified coordinates
const GAV_TABLE_SEPARATOR: &str = "|-------|----------|---------|\n";

/// MarkdownFormatter adapter producing human-readable reports
///
/// Report trees are rendered as nested lists, advanced reports as one
/// table per bucket, and lookups as a single table.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn yes_no(flag: bool) -> &'static str {
        if flag {
            "yes"
        } else {
            "no"
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, title: &str, metadata: &ReportMetadata) {
        output.push_str(&format!("# {}\n\n", title));
        output.push_str(&format!(
            "*Generated by {} {} at {} ({})*\n\n",
            metadata.tool_name(),
            metadata.tool_version(),
            metadata.timestamp(),
            metadata.report_id()
        ));
    }

    fn render_summary(&self, output: &mut String, report: &ArtifactReport) {
        output.push_str("## Summary\n\n");
        output.push_str(&format!("- Project: `{}`\n", report.gav()));
        output.push_str(&format!("- Report nodes: {}\n", report.node_count()));
        output.push_str(&format!(
            "- Dependencies without a built version: {}\n",
            report.not_built_dependencies()
        ));
        output.push_str(&format!(
            "- All dependencies have a best match: {}\n\n",
            Self::yes_no(report.dependency_version_satisfied())
        ));
    }

    fn render_tree(&self, output: &mut String, report: &ArtifactReport) {
        output.push_str("## Dependency Tree\n\n");
        Self::render_tree_node(output, report, 0);
        output.push('\n');
    }

    fn render_tree_node(output: &mut String, report: &ArtifactReport, depth: usize) {
        let mut line = format!("{}- `{}`", "  ".repeat(depth), report.gav());
        match report.best_match_version() {
            Some(best) => line.push_str(&format!(" ✅ best match `{}`", best)),
            None if !report.available_versions().is_empty() => line.push_str(&format!(
                " 🔧 built: {}",
                report.available_versions().join(", ")
            )),
            None => line.push_str(" ❌ not built"),
        }
        if report.is_allowed() {
            line.push_str(" (allowed)");
        }
        if report.is_denied() {
            line.push_str(" (denied)");
        }
        output.push_str(&line);
        output.push('\n');

        for dependency in report.dependencies() {
            Self::render_tree_node(output, dependency, depth + 1);
        }
    }

    fn render_gav_section(
        &self,
        output: &mut String,
        title: &str,
        description: &str,
        gavs: &BTreeSet<Gav>,
    ) {
        output.push_str(&format!("## {} ({})\n\n", title, gavs.len()));
        output.push_str(description);
        output.push_str("\n\n");

        if gavs.is_empty() {
            output.push_str("*None*\n\n");
            return;
        }

        output.push_str(GAV_TABLE_HEADER);
        output.push_str(GAV_TABLE_SEPARATOR);
        for gav in gavs {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(gav.group_id()),
                Self::escape_markdown_table_cell(gav.artifact_id()),
                Self::escape_markdown_table_cell(gav.version())
            ));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format_report(&self, metadata: &ReportMetadata, report: &ArtifactReport) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, "Dependency Build Report", metadata);
        self.render_summary(&mut output, report);
        self.render_tree(&mut output, report);
        Ok(output)
    }

    fn format_advanced(
        &self,
        metadata: &ReportMetadata,
        report: &AdvancedReport,
    ) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, "Advanced Dependency Report", metadata);
        self.render_summary(&mut output, report.artifact_report());

        self.render_gav_section(
            &mut output,
            "Allowed Artifacts",
            "External dependencies on the allow-list.",
            report.allowed_artifacts(),
        );
        self.render_gav_section(
            &mut output,
            "Denied Artifacts",
            "External dependencies on the deny-list.",
            report.denied_artifacts(),
        );
        self.render_gav_section(
            &mut output,
            "Community Artifacts With Best Match",
            "A compatible rebuilt version already exists.",
            report.community_gavs_with_best_match_versions(),
        );
        self.render_gav_section(
            &mut output,
            "Community Artifacts With Built Versions",
            "Some other version of the artifact was rebuilt or allow-listed.",
            report.community_gavs_with_built_versions(),
        );
        self.render_gav_section(
            &mut output,
            "Community Artifacts",
            "Nothing rebuilt for these artifacts yet.",
            report.community_gavs(),
        );

        self.render_tree(&mut output, report.artifact_report());
        Ok(output)
    }

    fn format_lookup(
        &self,
        metadata: &ReportMetadata,
        result: &BatchLookupResult,
    ) -> Result<String> {
        let mut output = String::new();
        self.render_header(&mut output, "Artifact Lookup", metadata);

        output.push_str(LOOKUP_TABLE_HEADER);
        output.push_str(LOOKUP_TABLE_SEPARATOR);
        for row in &result.rows {
            let gav = row.gav();
            output.push_str(&format!(
                "| {}:{} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(gav.group_id()),
                Self::escape_markdown_table_cell(gav.artifact_id()),
                Self::escape_markdown_table_cell(gav.version()),
                row.best_match_version().unwrap_or("N/A"),
                if row.available_versions().is_empty() {
                    "N/A".to_string()
                } else {
                    Self::escape_markdown_table_cell(&row.available_versions().join(", "))
                },
                Self::yes_no(row.is_allowed()),
                Self::yes_no(row.is_denied())
            ));
        }
        Ok(output)
    }
}
