//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EmbedError, EmbedResult};

use super::types::EmbedConfig;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative directories in the file resolve against the file's own
/// directory.
pub fn load_with_warnings(path: &Path) -> EmbedResult<(EmbedConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| EmbedError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: EmbedConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| EmbedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let config = config.resolve_relative_to(base);
    config.validate(path)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Line (1-based) where `key` is assigned, ignoring comments and values
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content.lines().enumerate().find_map(|(i, line)| {
        let (lhs, _) = line.split_once('=')?;
        (lhs.trim().trim_matches('"') == key).then_some(i + 1)
    })
}

/// Known key within edit distance 2 of `unknown`, closest first
fn suggest_key(unknown: &str) -> Option<String> {
    EmbedConfig::KEYS
        .iter()
        .map(|&key| (edit_distance(unknown, key), key))
        .filter(|&(dist, _)| dist <= 2)
        .min_by_key(|&(dist, _)| dist)
        .map(|(_, key)| key.to_string())
}

/// Levenshtein distance over chars, single-row
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
