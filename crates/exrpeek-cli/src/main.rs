use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand, ValueEnum};
use exrpeek_core::Header;
use glob::glob;
use serde::Serialize;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod report;

use report::HeaderReport;

/// Inputs examined when no path is given.
const DEFAULT_INPUTS: [&str; 2] = ["Balls.exr", "Ground.exr"];

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (commit ",
    env!("EXRPEEK_BUILD_COMMIT"),
    ", ",
    env!("EXRPEEK_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "exrpeek")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Inspect OpenEXR headers (version flags, attributes, channels) without decoding pixels.",
    long_about = None,
    after_help = "Examples:\n  exrpeek inspect Balls.exr Ground.exr\n  exrpeek inspect 'renders/*.exr' --format json --pretty\n  exrpeek examine - < image.exr"
)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode and print the header of each input file.
    #[command(alias = "examine")]
    Inspect {
        /// Files or glob patterns; `-` reads stdin [default: Balls.exr Ground.exr]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Suppress reports; errors are still printed
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any input failed
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Inspect {
            paths,
            format,
            pretty,
            quiet,
            strict,
        } => cmd_inspect(paths, format, pretty, quiet, strict),
    };

    result.map_or_else(|err| err.exit(), |()| ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "exrpeek=debug,exrpeek_core=debug"
    } else {
        "exrpeek=warn,exrpeek_core=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

const USAGE_EXIT_CODE: u8 = 2;

/// Failure of the whole invocation, as opposed to a single input.
#[derive(Debug)]
struct UsageError {
    message: String,
    hint: Option<String>,
}

impl UsageError {
    fn with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    fn exit(self) -> ExitCode {
        eprintln!("error: {}", self.message);
        if let Some(hint) = self.hint {
            eprintln!("hint: {hint}");
        }
        ExitCode::from(USAGE_EXIT_CODE)
    }
}

impl From<anyhow::Error> for UsageError {
    fn from(err: anyhow::Error) -> Self {
        Self {
            message: format!("{err:#}"),
            hint: None,
        }
    }
}

/// Result of examining one input; a failure never stops the batch.
struct FileOutcome {
    path: PathBuf,
    result: Result<Header>,
}

#[derive(Serialize)]
struct FileReport<'a> {
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<&'a Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn cmd_inspect(
    paths: Vec<PathBuf>,
    format: OutputFormat,
    pretty: bool,
    quiet: bool,
    strict: bool,
) -> Result<(), UsageError> {
    let inputs = if paths.is_empty() {
        DEFAULT_INPUTS.into_iter().map(PathBuf::from).collect()
    } else {
        paths
    };

    let mut outcomes = Vec::new();
    for input in &inputs {
        for target in resolve_input(input)? {
            let outcome = match target {
                Ok(path) => {
                    let result = inspect_file(&path);
                    FileOutcome { path, result }
                }
                Err(err) => FileOutcome {
                    path: input.clone(),
                    result: Err(err),
                },
            };
            match &outcome.result {
                Err(err) => eprintln!("error: {}: {:#}", outcome.path.display(), err),
                Ok(header) if format == OutputFormat::Text && !quiet => {
                    print!("{}", HeaderReport::new(&outcome.path, header));
                }
                Ok(_) => {}
            }
            outcomes.push(outcome);
        }
    }

    if format == OutputFormat::Json && !quiet {
        println!("{}", serialize_outcomes(&outcomes, pretty)?);
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    debug!(total = outcomes.len(), failed, "batch finished");
    if strict && failed > 0 {
        return Err(UsageError::with_hint(
            format!("{} of {} files failed", failed, outcomes.len()),
            "run without --strict to report failures without failing",
        ));
    }
    Ok(())
}

fn inspect_file(path: &Path) -> Result<Header> {
    let header = if path == Path::new("-") {
        exrpeek_core::parse_header(io::stdin().lock()).context("failed to read header from stdin")?
    } else {
        exrpeek_core::parse_header_file(path).context("failed to read header")?
    };
    if !header.has_expected_magic() {
        warn!(
            path = %path.display(),
            magic = header.magic(),
            "unexpected magic number; not an OpenEXR file?"
        );
    }
    Ok(header)
}

fn serialize_outcomes(outcomes: &[FileOutcome], pretty: bool) -> Result<String> {
    let reports: Vec<_> = outcomes
        .iter()
        .map(|outcome| FileReport {
            path: outcome.path.display().to_string(),
            header: outcome.result.as_ref().ok(),
            error: outcome.result.as_ref().err().map(|err| format!("{err:#}")),
        })
        .collect();
    let json = if pretty {
        serde_json::to_string_pretty(&reports)
    } else {
        serde_json::to_string(&reports)
    };
    json.context("JSON serialization failed")
}

/// Expand one input into the files to examine.
///
/// A pattern with no match yields a per-file failure; a pattern that does
/// not parse is a usage error.
fn resolve_input(input: &Path) -> Result<Vec<Result<PathBuf>>, UsageError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(vec![Ok(input.to_path_buf())]);
    }

    let paths = glob(&pattern).map_err(|err| {
        UsageError::with_hint(
            format!("invalid input pattern '{pattern}'"),
            format!("pattern error: {}", err.msg),
        )
    })?;

    let mut matches = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => matches.push(Ok(path)),
            Ok(_) => {}
            Err(err) => matches.push(Err(anyhow!("cannot read match: {}", err))),
        }
    }
    if matches.is_empty() {
        matches.push(Err(anyhow!("no files match pattern '{}'", pattern)));
    }
    Ok(matches)
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
