//! Command line surface for `mgen`
//!
//! ```text
//! mgen <ROOT> [--descriptions] [--sort] [--strict] [-o <FILE|->] [-c <FILE>] [-v...]
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use mgen_manifest::{
    DeploymentConfig, ErrorPolicy, FileSink, GenerationReport, GeneratorConfig, ManifestGenerator,
    ManifestResult, ManifestSink, Ordering, WriterSink, DEFAULT_OUTPUT,
};
use mgen_spec::FsSpecSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Output target meaning stdout
pub const STDOUT_TARGET: &str = "-";

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub root: PathBuf,
    pub output: String,
    pub config: Option<PathBuf>,
    pub descriptions: bool,
    pub sort: bool,
    pub strict: bool,
    pub verbosity: u8,
}

impl CliArgs {
    /// Extract from clap matches
    #[must_use]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            root: matches
                .get_one::<PathBuf>("root")
                .cloned()
                .unwrap_or_default(),
            output: matches
                .get_one::<String>("output")
                .cloned()
                .unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
            config: matches.get_one::<PathBuf>("config").cloned(),
            descriptions: matches.get_flag("descriptions"),
            sort: matches.get_flag("sort"),
            strict: matches.get_flag("strict"),
            verbosity: matches.get_count("verbose"),
        }
    }

    /// Generator configuration implied by the flags
    ///
    /// # Errors
    /// [`mgen_manifest::ManifestError::Config`] if `--config` names a file that cannot be
    /// loaded.
    pub fn generator_config(&self) -> ManifestResult<GeneratorConfig> {
        let deployment = match &self.config {
            Some(path) => DeploymentConfig::load(path)?,
            None => DeploymentConfig::default(),
        };

        Ok(GeneratorConfig::new()
            .with_deployment(deployment)
            .with_descriptions(self.descriptions)
            .with_policy(if self.strict {
                ErrorPolicy::Abort
            } else {
                ErrorPolicy::Skip
            })
            .with_ordering(if self.sort {
                Ordering::Sorted
            } else {
                Ordering::Insertion
            }))
    }
}

/// Build the clap command
#[must_use]
pub fn build_command() -> Command {
    Command::new("mgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a deployment manifest from a release's job specs")
        .arg(
            Arg::new("root")
                .required(true)
                .value_parser(value_parser!(PathBuf))
                .help("Release root containing a jobs/ directory"),
        )
        .arg(
            Arg::new("descriptions")
                .long("descriptions")
                .short('d')
                .action(ArgAction::SetTrue)
                .help("Emit property descriptions as comments"),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .action(ArgAction::SetTrue)
                .help("Sort properties by name instead of spec order"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .help("Abort on the first unreadable job spec instead of skipping it"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .default_value(DEFAULT_OUTPUT)
                .help("Output file, or - for stdout"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .help("Deployment scaffolding (.yml, .yaml or .toml)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count)
                .help("Increase log verbosity (repeatable)"),
        )
}

/// Install the global subscriber; `RUST_LOG` wins over `-v`
pub fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run one generation with the given arguments
///
/// # Errors
/// Config, source, sink and (with `--strict`) per-job failures.
pub fn run(args: &CliArgs) -> Result<GenerationReport> {
    let config = args.generator_config()?;
    let generator = ManifestGenerator::new(config);
    let source = FsSpecSource::new(&args.root);

    let mut sink: Box<dyn ManifestSink> = if args.output == STDOUT_TARGET {
        Box::new(WriterSink::new(std::io::stdout().lock(), "stdout"))
    } else {
        Box::new(FileSink::new(&args.output))
    };

    let report = generator
        .generate_into(&source, sink.as_mut())
        .with_context(|| format!("generating manifest from {}", args.root.display()))?;
    Ok(report)
}
