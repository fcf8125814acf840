mod cli;

use clap::Parser;
use cli::{AdvancedArgs, Args, Command, LookupArgs, ReportArgs};
use dep_analyzer::adapters::outbound::console::StderrProgressReporter;
use dep_analyzer::adapters::outbound::filesystem::{GraphFileReader, PomModuleOracle};
use dep_analyzer::adapters::outbound::listing::StaticArtifactListing;
use dep_analyzer::adapters::outbound::network::{
    CachingVersionResolver, MavenMetadataResolver, DEFAULT_REPOSITORY_URL,
};
use dep_analyzer::adapters::outbound::scm::{GitSourceRepository, LocalWorkingCopy};
use dep_analyzer::application::dto::{
    AdvancedReportRequest, LookupRequest, OutputFormat, ReportRequest,
};
use dep_analyzer::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_analyzer::application::use_cases::{
    GenerateAdvancedReportUseCase, GenerateReportUseCase, LookupGavsUseCase,
};
use dep_analyzer::config::{self, ConfigFile};
use dep_analyzer::ports::outbound::{ReportFormatter, SourceRepository};
use dep_analyzer::reporting::domain::{Gav, ScmLocator};
use dep_analyzer::reporting::policies::{BuildSuffixProvenance, DEFAULT_INTERNAL_SUFFIX};
use dep_analyzer::reporting::services::DEFAULT_MAX_CONCURRENT_LOOKUPS;
use dep_analyzer::shared::error::ExitCode;
use dep_analyzer::shared::Result;
use std::path::Path;
use std::process;

type Resolver = CachingVersionResolver<MavenMetadataResolver>;

/// Effective settings: command-line flags over the configuration file over
/// built-in defaults.
struct Settings {
    format: OutputFormat,
    repository_url: String,
    provenance: BuildSuffixProvenance,
    max_concurrent_lookups: usize,
    listing: StaticArtifactListing,
}

impl Settings {
    fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse()?,
            (None, None) => OutputFormat::default(),
        };
        let listing = StaticArtifactListing::new(config.allowed_gavs()?, config.denied_gavs()?);
        let provenance = BuildSuffixProvenance::new(
            config
                .internal_suffix
                .as_deref()
                .unwrap_or(DEFAULT_INTERNAL_SUFFIX),
        )?;

        Ok(Self {
            format,
            repository_url: args
                .repository_url
                .clone()
                .or(config.repository_url)
                .unwrap_or_else(|| DEFAULT_REPOSITORY_URL.to_string()),
            provenance,
            max_concurrent_lookups: config
                .max_concurrent_lookups
                .unwrap_or(DEFAULT_MAX_CONCURRENT_LOOKUPS),
            listing,
        })
    }

    fn resolver(&self) -> Result<Resolver> {
        let resolver = MavenMetadataResolver::new(&self.repository_url, self.provenance.clone())?;
        Ok(CachingVersionResolver::new(resolver))
    }
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version are reported through clap errors as well
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    match run(args).await {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(args.config.as_deref())?;
    let settings = Settings::resolve(&args, config)?;
    if settings.listing.allowed_count() + settings.listing.denied_count() > 0 {
        eprintln!(
            "📋 Loaded {} allow-listed and {} deny-listed artifact(s)",
            settings.listing.allowed_count(),
            settings.listing.denied_count()
        );
    }

    let formatter = FormatterFactory::create(settings.format);
    let presenter = PresenterFactory::create(PresenterType::from_output(args.output.clone()));

    let output = match args.command {
        Command::Report(ref report) => run_report(report, &settings, formatter.as_ref()).await?,
        Command::Advanced(ref advanced) => {
            match advanced.working_copy.clone() {
                Some(dir) => {
                    run_advanced(
                        advanced,
                        &settings,
                        LocalWorkingCopy::new(dir),
                        formatter.as_ref(),
                    )
                    .await?
                }
                None => {
                    run_advanced(
                        advanced,
                        &settings,
                        GitSourceRepository::new(),
                        formatter.as_ref(),
                    )
                    .await?
                }
            }
        }
        Command::Lookup(ref lookup) => {
            match run_lookup(lookup, &settings, formatter.as_ref()).await? {
                Some(output) => output,
                None => return Ok(ExitCode::LookupIncomplete),
            }
        }
    };

    presenter.present(&output)?;
    Ok(ExitCode::Success)
}

fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config = match explicit {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&std::env::current_dir()?)?,
    };
    Ok(config.unwrap_or_default())
}

async fn run_report(
    args: &ReportArgs,
    settings: &Settings,
    formatter: &dyn ReportFormatter,
) -> Result<String> {
    let request = match &args.gav {
        Some(gav) => ReportRequest::for_gav(gav.parse()?),
        None => ReportRequest::for_scm(ScmLocator::new(
            args.scm_url.clone().unwrap_or_default(),
            args.revision.clone(),
        )?),
    };

    let use_case = GenerateReportUseCase::new(
        GraphFileReader::new(args.graph.clone()),
        settings.resolver()?,
        settings.listing.clone(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(request).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    formatter.format_report(&response.metadata, &response.report)
}

async fn run_advanced<S: SourceRepository>(
    args: &AdvancedArgs,
    settings: &Settings,
    source_repository: S,
    formatter: &dyn ReportFormatter,
) -> Result<String> {
    let scm = ScmLocator::new(args.scm_url.as_str(), args.revision.clone())?;

    let use_case = GenerateAdvancedReportUseCase::new(
        GraphFileReader::new(args.graph.clone()),
        settings.resolver()?,
        settings.listing.clone(),
        PomModuleOracle::new(),
        source_repository,
        settings.provenance.clone(),
        StderrProgressReporter::new(),
    );
    let response = use_case.execute(AdvancedReportRequest::new(scm)).await?;

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    formatter.format_advanced(&response.metadata, &response.advanced_report)
}

/// Formatted lookup rows, or `None` when some lookup failed. The failures
/// have been reported by then and partial rows are not presented.
async fn run_lookup(
    args: &LookupArgs,
    settings: &Settings,
    formatter: &dyn ReportFormatter,
) -> Result<Option<String>> {
    let gavs = args
        .gavs
        .iter()
        .map(|gav| gav.parse::<Gav>())
        .collect::<Result<Vec<_>>>()?;
    let max_concurrent = args
        .max_concurrent
        .map(usize::from)
        .unwrap_or(settings.max_concurrent_lookups);

    let use_case = LookupGavsUseCase::new(
        settings.resolver()?,
        settings.listing.clone(),
        StderrProgressReporter::new(),
    );
    let response = use_case
        .execute(LookupRequest::new(gavs, max_concurrent))
        .await?;

    if !response.result.success {
        eprintln!(
            "\n❌ {} of {} lookup(s) failed; no rows were written.",
            response.result.failures.len(),
            args.gavs.len()
        );
        return Ok(None);
    }

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    formatter
        .format_lookup(&response.metadata, &response.result)
        .map(Some)
}
