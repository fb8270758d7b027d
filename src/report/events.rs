//! JSON event types for `--json` output.
//!
//! Every event carries an `event` field; one object per line.

use serde::Serialize;

use crate::codegen::ArtifactKind;
use crate::writer::ArtifactStatus;

/// Emitted once before any work.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
    pub source: String,
    pub output: String,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str, source: String, output: String) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
            source,
            output,
        }
    }
}

/// One embedded asset (verbose only).
#[derive(Debug, Clone, Serialize)]
pub struct AssetEvent<'a> {
    pub event: &'static str,
    pub path: &'a str,
    pub symbol: &'a str,
    pub size: usize,
}

impl<'a> AssetEvent<'a> {
    pub fn new(path: &'a str, symbol: &'a str, size: usize) -> Self {
        Self {
            event: "asset",
            path,
            symbol,
            size,
        }
    }
}

/// One written artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactEvent {
    pub event: &'static str,
    pub kind: ArtifactKind,
    pub path: String,
    pub hash: String,
}

impl ArtifactEvent {
    pub fn new(kind: ArtifactKind, path: String, hash: String) -> Self {
        Self {
            event: "artifact",
            kind,
            path,
            hash,
        }
    }
}

/// Result of comparing one artifact in check mode.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEvent {
    pub event: &'static str,
    pub kind: ArtifactKind,
    pub path: String,
    pub status: ArtifactStatus,
}

impl CheckEvent {
    pub fn new(kind: ArtifactKind, path: String, status: ArtifactStatus) -> Self {
        let event = if status == ArtifactStatus::UpToDate {
            "fresh"
        } else {
            "stale"
        };
        Self {
            event,
            kind,
            path,
            status,
        }
    }
}

/// Non-fatal warning.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub event: &'static str,
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            message: message.into(),
        }
    }
}

/// Emitted when a command finishes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    pub files: usize,
    pub bytes: usize,
}

impl<'a> CompleteEvent<'a> {
    pub fn new(command: &'a str, success: bool, files: usize, bytes: usize) -> Self {
        Self {
            event: "complete",
            command,
            success,
            files,
            bytes,
        }
    }
}

/// Emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }
}
