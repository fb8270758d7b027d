//! Embedding pipeline
//!
//! scan → generate → write. Every step that can reject the input runs
//! before the output directory is touched, so a failed precondition leaves
//! the filesystem unchanged.

use crate::codegen::{self, Artifacts, OutputFile};
use crate::config::EmbedConfig;
use crate::error::EmbedResult;
use crate::models::AssetSet;
use crate::scanner;
use crate::writer::{self, ArtifactStatus};

/// Outcome of a successful embedding run
#[derive(Debug, Clone)]
pub struct EmbedReport {
    pub assets: AssetSet,
    pub artifacts: Artifacts,
}

impl EmbedReport {
    pub fn file_count(&self) -> usize {
        self.assets.len()
    }
}

/// Result of comparing one artifact against disk
#[derive(Debug, Clone)]
pub struct ArtifactCheck {
    pub file: OutputFile,
    pub status: ArtifactStatus,
    /// Current on-disk content when it differs
    pub existing: Option<String>,
}

/// Outcome of a check run
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub assets: AssetSet,
    pub results: Vec<ArtifactCheck>,
}

impl CheckReport {
    pub fn is_up_to_date(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.status == ArtifactStatus::UpToDate)
    }

    /// Paths of artifacts that are stale or missing
    pub fn outdated_paths(&self) -> Vec<std::path::PathBuf> {
        self.results
            .iter()
            .filter(|r| r.status != ArtifactStatus::UpToDate)
            .map(|r| r.file.path().to_path_buf())
            .collect()
    }
}

/// Scan the source directory and render both artifacts in memory
pub fn prepare(config: &EmbedConfig) -> EmbedResult<(AssetSet, Artifacts)> {
    let assets = scanner::scan_directory(&config.source_dir)?;
    let artifacts = codegen::generate(&assets, config)?;
    Ok((assets, artifacts))
}

/// Regenerate both artifacts unconditionally
///
/// The header is written before the source; if the second write fails the
/// first stays in place.
pub fn embed(config: &EmbedConfig) -> EmbedResult<EmbedReport> {
    let (assets, artifacts) = prepare(config)?;

    writer::ensure_dir(&config.output_dir)?;
    for file in artifacts.iter() {
        writer::write_output(file)?;
    }

    Ok(EmbedReport { assets, artifacts })
}

/// Generate both artifacts and compare them with disk without writing
pub fn check(config: &EmbedConfig) -> EmbedResult<CheckReport> {
    let (assets, artifacts) = prepare(config)?;

    let mut results = Vec::new();
    for file in artifacts.iter() {
        let (status, existing) = writer::compare_output(file)?;
        results.push(ArtifactCheck {
            file: file.clone(),
            status,
            existing,
        });
    }

    Ok(CheckReport { assets, results })
}
