//! Status output for the CLI
//!
//! Human mode prints the plain status lines build scripts grep for;
//! `--json` mode prints NDJSON events instead. Diagnostics and warnings go
//! to the error stream in human mode.

pub mod events;

use std::io::{self, Write};

use serde::Serialize;

use crate::codegen::OutputFile;
use crate::config::{ConfigWarning, EmbedConfig};
use crate::embedder::{CheckReport, EmbedReport};
use crate::error::EmbedError;
use crate::models::AssetSet;
use crate::writer::ArtifactStatus;

use events::{
    ArtifactEvent, AssetEvent, CheckEvent, CompleteEvent, ErrorEvent, StartEvent, WarningEvent,
};

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(event).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

/// Renders run progress to an output and an error stream
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    json: bool,
    verbose: u8,
}

impl Reporter<io::Stdout, io::Stderr> {
    /// Reporter bound to the process's stdout and stderr
    pub fn stdio(json: bool, verbose: u8) -> Self {
        Self::new(io::stdout(), io::stderr(), json, verbose)
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E, json: bool, verbose: u8) -> Self {
        Self {
            out,
            err,
            json,
            verbose,
        }
    }

    /// Give back the underlying streams
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }

    pub fn start(&mut self, command: &str, config: &EmbedConfig) -> io::Result<()> {
        if self.json {
            return write_event(
                &mut self.out,
                &StartEvent::new(
                    command,
                    config.source_dir.display().to_string(),
                    config.output_dir.display().to_string(),
                ),
            );
        }
        if self.verbose > 0 {
            writeln!(self.out, "Source: {}", config.source_dir.display())?;
            writeln!(self.out, "Output: {}", config.output_dir.display())?;
        }
        Ok(())
    }

    pub fn warnings(&mut self, warnings: &[ConfigWarning]) -> io::Result<()> {
        for warning in warnings {
            if self.json {
                write_event(&mut self.out, &WarningEvent::new(warning.to_string()))?;
            } else {
                writeln!(self.err, "[WARN] {}", warning)?;
            }
        }
        Ok(())
    }

    /// Per-asset lines, shown with `-v`
    fn assets(&mut self, assets: &AssetSet, config: &EmbedConfig) -> io::Result<()> {
        if self.verbose == 0 {
            return Ok(());
        }
        let table = assets.lookup_table(&config.logical_prefix, &config.symbol_prefix);
        for entry in table.entries() {
            if self.json {
                write_event(
                    &mut self.out,
                    &AssetEvent::new(&entry.path, &entry.symbol, entry.size),
                )?;
            } else {
                writeln!(
                    self.out,
                    "  {} ({} bytes) -> {}",
                    entry.path, entry.size, entry.symbol
                )?;
            }
        }
        Ok(())
    }

    fn artifact(&mut self, file: &OutputFile) -> io::Result<()> {
        if self.json {
            return write_event(
                &mut self.out,
                &ArtifactEvent::new(file.kind(), file.path().display().to_string(), file.hash()),
            );
        }
        writeln!(self.out, "Generated {}", file.path().display())?;
        if self.verbose > 0 {
            writeln!(self.out, "  {}", file.hash())?;
        }
        Ok(())
    }

    /// Report a completed embedding run
    pub fn embedded(&mut self, report: &EmbedReport, config: &EmbedConfig) -> io::Result<()> {
        self.assets(&report.assets, config)?;
        for file in report.artifacts.iter() {
            self.artifact(file)?;
        }
        if self.json {
            write_event(
                &mut self.out,
                &CompleteEvent::new(
                    "embed",
                    true,
                    report.file_count(),
                    report.assets.total_bytes(),
                ),
            )
        } else {
            writeln!(self.out, "Embedded {} files", report.file_count())
        }
    }

    /// Report a completed check run; with `-v` stale artifacts get a diff
    pub fn checked(&mut self, report: &CheckReport, config: &EmbedConfig) -> io::Result<()> {
        self.assets(&report.assets, config)?;
        for result in &report.results {
            let path = result.file.path().display().to_string();
            if self.json {
                write_event(
                    &mut self.out,
                    &CheckEvent::new(result.file.kind(), path, result.status),
                )?;
                continue;
            }
            let label = match result.status {
                ArtifactStatus::UpToDate => "Up to date",
                ArtifactStatus::Stale => "Stale",
                ArtifactStatus::Missing => "Missing",
            };
            writeln!(self.out, "{}: {}", label, path)?;
            if self.verbose > 0 {
                if let Some(existing) = &result.existing {
                    write!(
                        self.out,
                        "{}",
                        unified_diff(&path, existing, result.file.content())
                    )?;
                }
            }
        }
        if self.json {
            write_event(
                &mut self.out,
                &CompleteEvent::new(
                    "check",
                    report.is_up_to_date(),
                    report.assets.len(),
                    report.assets.total_bytes(),
                ),
            )
        } else {
            writeln!(self.out, "Checked {} files", report.assets.len())
        }
    }

    /// Report a fatal error
    ///
    /// The `[ERROR]` line always reaches the error stream; JSON mode adds
    /// an `error` event on the output stream.
    pub fn error(&mut self, err: &anyhow::Error) -> io::Result<()> {
        if self.json {
            let code = err
                .downcast_ref::<EmbedError>()
                .map(EmbedError::code)
                .unwrap_or("error");
            write_event(&mut self.out, &ErrorEvent::new(code, err.to_string()))?;
        }
        writeln!(self.err, "[ERROR] {}", err)
    }
}

/// Unified diff from the on-disk content to the generated content
pub fn unified_diff(path: &str, old: &str, new: &str) -> String {
    use similar::TextDiff;
    TextDiff::from_lines(old, new)
        .unified_diff()
        .header(&format!("a/{}", path), &format!("b/{}", path))
        .to_string()
}
