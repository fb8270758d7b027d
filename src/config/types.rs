//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EmbedError, EmbedResult};
use crate::identifier::is_c_identifier;

use super::loader;
use super::ConfigWarning;

/// Default input directory, relative to the tool directory
pub const DEFAULT_SOURCE_DIR: &str = "media";
/// Default output directory, relative to the tool directory
pub const DEFAULT_OUTPUT_DIR: &str = "build";

/// Directory the tool lives in; anchors the default paths
pub fn tool_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Settings for one embedding run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedConfig {
    /// Directory whose regular files are embedded
    pub source_dir: PathBuf,

    /// Directory the two artifacts are written to
    pub output_dir: PathBuf,

    /// Prefix of every logical lookup path
    pub logical_prefix: String,

    /// Prefix of every generated byte-array symbol
    pub symbol_prefix: String,

    /// File name of the declaration artifact
    pub header_name: String,

    /// File name of the definition artifact
    pub source_name: String,

    /// Name of the generated lookup function
    pub lookup_function: String,

    /// Byte values per emitted line
    pub bytes_per_line: usize,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            source_dir: tool_dir().join(DEFAULT_SOURCE_DIR),
            output_dir: tool_dir().join(DEFAULT_OUTPUT_DIR),
            logical_prefix: "media/".to_string(),
            symbol_prefix: "media_".to_string(),
            header_name: "media_data.h".to_string(),
            source_name: "media_data.cpp".to_string(),
            lookup_function: "findEmbeddedMedia".to_string(),
            bytes_per_line: 16,
        }
    }
}

impl EmbedConfig {
    /// Keys accepted in a config file
    pub const KEYS: &'static [&'static str] = &[
        "source_dir",
        "output_dir",
        "logical_prefix",
        "symbol_prefix",
        "header_name",
        "source_name",
        "lookup_function",
        "bytes_per_line",
    ];

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> EmbedResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> EmbedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Override the source directory
    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn header_path(&self) -> PathBuf {
        self.output_dir.join(&self.header_name)
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(&self.source_name)
    }

    /// Resolve relative directories against `base`
    pub(crate) fn resolve_relative_to(mut self, base: &Path) -> Self {
        if self.source_dir.is_relative() {
            self.source_dir = base.join(&self.source_dir);
        }
        if self.output_dir.is_relative() {
            self.output_dir = base.join(&self.output_dir);
        }
        self
    }

    /// Check values the generator relies on
    ///
    /// `file` names the configuration source in the error.
    pub fn validate(&self, file: &Path) -> EmbedResult<()> {
        let invalid = |message: String| EmbedError::InvalidConfig {
            file: file.to_path_buf(),
            message,
        };

        if self.bytes_per_line == 0 {
            return Err(invalid("bytes_per_line must be at least 1".to_string()));
        }
        // strcmp stops at the first NUL, so every path would compare equal
        if self.logical_prefix.contains('\0') {
            return Err(invalid(
                "logical_prefix must not contain a NUL character".to_string(),
            ));
        }
        if !self.symbol_prefix.is_empty() && !is_c_identifier(&self.symbol_prefix) {
            return Err(invalid(format!(
                "symbol_prefix '{}' is not a valid C identifier",
                self.symbol_prefix
            )));
        }
        if !is_c_identifier(&self.lookup_function) {
            return Err(invalid(format!(
                "lookup_function '{}' is not a valid C identifier",
                self.lookup_function
            )));
        }
        for (key, name) in [
            ("header_name", &self.header_name),
            ("source_name", &self.source_name),
        ] {
            if !is_bare_file_name(name) {
                return Err(invalid(format!("{key} '{name}' must be a plain file name")));
            }
        }
        if self.header_name == self.source_name {
            return Err(invalid(
                "header_name and source_name must differ".to_string(),
            ));
        }
        Ok(())
    }
}

fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('"')
        && !name.chars().any(char::is_control)
}
