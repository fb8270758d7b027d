//! embed-media CLI
//!
//! Usage: embed-media [OUTPUT_DIR]
//!
//! Generates `media_data.h` and `media_data.cpp` from the media directory.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use embed_media::{embedder, EmbedConfig, EmbedError, Reporter};

/// Compile a directory of media files into C++ byte arrays and a lookup function
#[derive(Parser, Debug)]
#[command(name = "embed-media")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory for the generated files (default: build/ next to the tool)
    output_dir: Option<PathBuf>,

    /// Directory holding the media files (default: media/ next to the tool)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verify the generated files are up to date without writing
    #[arg(long)]
    check: bool,

    /// Output format for CI
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut reporter = Reporter::stdio(cli.json, cli.verbose);

    match run(&cli, &mut reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(io_err) = reporter.error(&err) {
                eprintln!("[ERROR] {}", err);
                eprintln!("[ERROR] failed to report error: {}", io_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run<O: Write, E: Write>(cli: &Cli, reporter: &mut Reporter<O, E>) -> Result<()> {
    let config = load_config(cli, reporter)?;

    if cli.check {
        reporter.start("check", &config)?;
        let report = embedder::check(&config)?;
        reporter.checked(&report, &config)?;
        if !report.is_up_to_date() {
            return Err(EmbedError::StaleOutput {
                paths: report.outdated_paths(),
            }
            .into());
        }
        return Ok(());
    }

    reporter.start("embed", &config)?;
    let report = embedder::embed(&config)?;
    reporter.embedded(&report, &config)?;
    Ok(())
}

/// Defaults, then the config file, then CLI flags
fn load_config<O: Write, E: Write>(
    cli: &Cli,
    reporter: &mut Reporter<O, E>,
) -> Result<EmbedConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, warnings) = EmbedConfig::load_with_warnings(path)?;
            reporter.warnings(&warnings)?;
            config
        }
        None => EmbedConfig::default(),
    };

    if let Some(source) = &cli.source {
        config = config.with_source_dir(source);
    }
    if let Some(output) = &cli.output_dir {
        config = config.with_output_dir(output);
    }
    Ok(config)
}
