//! Artifact writer
//!
//! Writes go through a temporary file in the destination directory that is
//! renamed over the target, so readers never see a half-written artifact.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::codegen::OutputFile;
use crate::error::{EmbedError, EmbedResult};

/// Create `dir` and any missing parents; an existing directory is fine
pub fn ensure_dir(dir: &Path) -> EmbedResult<()> {
    fs::create_dir_all(dir).map_err(|source| EmbedError::WriteArtifact {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `content` to `path` atomically, replacing any existing file
pub fn atomic_write(path: &Path, content: &[u8]) -> EmbedResult<()> {
    let wrap = |source: std::io::Error| EmbedError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(content).map_err(wrap)?;
    tmp.as_file().sync_all().map_err(wrap)?;
    tmp.persist(path).map_err(|e| wrap(e.error))?;
    Ok(())
}

/// Write a generated artifact to its path
pub fn write_output(file: &OutputFile) -> EmbedResult<()> {
    atomic_write(file.path(), file.content().as_bytes())
}

/// State of an artifact on disk relative to freshly generated content
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStatus {
    UpToDate,
    Stale,
    Missing,
}

/// Compare a generated artifact with the file at its path
pub fn compare_output(file: &OutputFile) -> EmbedResult<(ArtifactStatus, Option<String>)> {
    match fs::read(file.path()) {
        Ok(existing) if existing == file.content().as_bytes() => {
            Ok((ArtifactStatus::UpToDate, None))
        }
        Ok(existing) => Ok((
            ArtifactStatus::Stale,
            Some(String::from_utf8_lossy(&existing).into_owned()),
        )),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok((ArtifactStatus::Missing, None)),
        Err(source) => Err(EmbedError::ReadArtifact {
            path: file.path().to_path_buf(),
            source,
        }),
    }
}
