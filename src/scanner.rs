//! Asset discovery
//!
//! Lists the regular files directly inside the source directory and reads
//! them into an [`AssetSet`].

use std::fs;
use std::path::Path;

use crate::error::{EmbedError, EmbedResult};
use crate::models::{Asset, AssetSet};

/// Read every regular file directly inside `dir`
///
/// Sub-directories, symlinks to directories and other non-regular entries
/// are skipped. Fails with `EmptyInput` when nothing is left.
pub fn scan_directory(dir: &Path) -> EmbedResult<AssetSet> {
    if !dir.is_dir() {
        return Err(EmbedError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut assets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        // Follows symlinks, like the regular-file test it replaces
        if !path.is_file() {
            continue;
        }

        let filename = entry
            .file_name()
            .into_string()
            .map_err(|_| EmbedError::InvalidFileName { path: path.clone() })?;

        let bytes = fs::read(&path).map_err(|source| EmbedError::ReadAsset {
            path: path.clone(),
            source,
        })?;

        assets.push(Asset::new(filename, bytes, &path));
    }

    if assets.is_empty() {
        return Err(EmbedError::EmptyInput {
            dir: dir.to_path_buf(),
        });
    }

    Ok(AssetSet::new(assets))
}
