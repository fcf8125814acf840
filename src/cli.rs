use clap::{ArgGroup, Parser, Subcommand};
use dep_analyzer::application::dto::OutputFormat;
use std::path::PathBuf;

/// Check which dependencies of a Maven project already have rebuilt artifacts
#[derive(Parser, Debug)]
#[command(name = "dep-analyzer")]
#[command(version)]
#[command(
    about = "Check which dependencies of a Maven project already have rebuilt artifacts",
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: json or markdown [default: json]
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to ./dep-analyzer.config.yml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Maven repository holding the rebuilt artifacts
    #[arg(long, global = true, value_name = "URL")]
    pub repository_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Full report tree for one artifact or one project
    Report(ReportArgs),
    /// Classify a project's external dependencies at its module boundaries
    Advanced(AdvancedArgs),
    /// Look up built versions for a list of coordinates
    Lookup(LookupArgs),
}

#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("subject").required(true).args(["gav", "scm_url"])))]
pub struct ReportArgs {
    /// Exported dependency graph (JSON)
    #[arg(long, value_name = "FILE")]
    pub graph: PathBuf,

    /// Report on this coordinate (groupId:artifactId:version)
    #[arg(long, value_name = "G:A:V")]
    pub gav: Option<String>,

    /// Report on the project stored at this repository URL
    #[arg(long, value_name = "URL")]
    pub scm_url: Option<String>,

    /// Revision of the project (branch, tag or commit)
    #[arg(long, requires = "scm_url", value_name = "REV")]
    pub revision: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct AdvancedArgs {
    /// Exported dependency graph (JSON)
    #[arg(long, value_name = "FILE")]
    pub graph: PathBuf,

    /// Repository URL of the project
    #[arg(long, value_name = "URL")]
    pub scm_url: String,

    /// Revision of the project (branch, tag or commit)
    #[arg(long, value_name = "REV")]
    pub revision: Option<String>,

    /// Use this checkout instead of cloning the repository
    #[arg(long, value_name = "DIR")]
    pub working_copy: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Coordinates to look up (groupId:artifactId:version)
    #[arg(required = true, value_name = "G:A:V")]
    pub gavs: Vec<String>,

    /// Maximum number of lookups in flight
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub max_concurrent: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("dep-analyzer").chain(args.iter().copied()))
    }

    #[test]
    fn test_report_by_gav() {
        let args = parse(&["report", "--graph", "graph.json", "--gav", "g:a:1.0"]).unwrap();
        match args.command {
            Command::Report(report) => {
                assert_eq!(report.gav.as_deref(), Some("g:a:1.0"));
                assert!(report.scm_url.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(args.format.is_none());
    }

    #[test]
    fn test_report_requires_a_subject() {
        assert!(parse(&["report", "--graph", "graph.json"]).is_err());
    }

    #[test]
    fn test_report_rejects_two_subjects() {
        let result = parse(&[
            "report",
            "--graph",
            "graph.json",
            "--gav",
            "g:a:1.0",
            "--scm-url",
            "https://git.example.com/p.git",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_revision_requires_scm_url() {
        let result = parse(&[
            "report", "--graph", "graph.json", "--gav", "g:a:1.0", "--revision", "main",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&[
            "advanced",
            "--graph",
            "graph.json",
            "--scm-url",
            "https://git.example.com/p.git",
            "--format",
            "md",
            "-o",
            "out.md",
        ])
        .unwrap();
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output, Some(PathBuf::from("out.md")));
    }

    #[test]
    fn test_lookup_needs_coordinates() {
        assert!(parse(&["lookup"]).is_err());
        let args = parse(&["lookup", "g:a:1.0", "g:b:2.0", "--max-concurrent", "3"]).unwrap();
        match args.command {
            Command::Lookup(lookup) => {
                assert_eq!(lookup.gavs.len(), 2);
                assert_eq!(lookup.max_concurrent, Some(3));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_lookup_rejects_zero_concurrency() {
        assert!(parse(&["lookup", "g:a:1.0", "--max-concurrent", "0"]).is_err());
    }

    #[test]
    fn test_invalid_format() {
        assert!(parse(&["lookup", "g:a:1.0", "--format", "cyclonedx"]).is_err());
    }
}
