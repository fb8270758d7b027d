//! A generated artifact, held in memory until written

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

/// Which of the two artifacts a file is
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Declaration artifact (`media_data.h`)
    Header,
    /// Definition artifact (`media_data.cpp`)
    Source,
}

/// Generated file content and its destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    path: PathBuf,
    content: String,
    kind: ArtifactKind,
}

impl OutputFile {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, kind: ArtifactKind) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    /// SHA-256 of the content, `sha256:`-prefixed
    pub fn hash(&self) -> String {
        format!("sha256:{:x}", Sha256::digest(self.content.as_bytes()))
    }
}
