//! Data models for embed-media
//!
//! Defines the discovered assets and the lookup table derived from them.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::identifier;

/// A single input file to embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Bare file name, no directory components
    pub filename: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
    /// Sanitized name used for the generated byte array
    pub identifier: String,
    /// Where the asset was read from
    pub source_path: PathBuf,
}

impl Asset {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>, source_path: impl AsRef<Path>) -> Self {
        let filename = filename.into();
        let identifier = identifier::sanitize(&filename);
        Self {
            filename,
            bytes,
            identifier,
            source_path: source_path.as_ref().to_path_buf(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Logical lookup path under `prefix`
    pub fn logical_path(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.filename)
    }
}

/// All assets of one run, ordered by file name
///
/// Ordering is byte-wise on the UTF-8 file name, so it does not depend on
/// locale or on the order the directory was listed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetSet {
    assets: Vec<Asset>,
}

impl AssetSet {
    pub fn new(mut assets: Vec<Asset>) -> Self {
        assets.sort_by(|a, b| a.filename.as_bytes().cmp(b.filename.as_bytes()));
        Self { assets }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Asset> {
        self.assets.iter()
    }

    pub fn total_bytes(&self) -> usize {
        self.assets.iter().map(Asset::len).sum()
    }

    /// Build the lookup table for this set
    pub fn lookup_table(&self, logical_prefix: &str, symbol_prefix: &str) -> LookupTable<'_> {
        LookupTable {
            entries: self
                .assets
                .iter()
                .map(|asset| LookupEntry {
                    path: asset.logical_path(logical_prefix),
                    symbol: format!("{}{}", symbol_prefix, asset.identifier),
                    size: asset.len(),
                    asset,
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AssetSet {
    type Item = &'a Asset;
    type IntoIter = std::slice::Iter<'a, Asset>;

    fn into_iter(self) -> Self::IntoIter {
        self.assets.iter()
    }
}

/// One row of the generated lookup table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupEntry<'a> {
    pub path: String,
    pub symbol: String,
    pub size: usize,
    #[serde(skip)]
    pub asset: &'a Asset,
}

impl LookupEntry<'_> {
    pub fn data(&self) -> &[u8] {
        &self.asset.bytes
    }
}

/// Ordered table mapping logical paths to embedded data
///
/// `find` behaves exactly like the generated C++ lookup function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable<'a> {
    entries: Vec<LookupEntry<'a>>,
}

impl<'a> LookupTable<'a> {
    pub fn entries(&self) -> &[LookupEntry<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Linear scan; first exact byte match wins
    pub fn find(&self, path: &str) -> Option<&[u8]> {
        self.entries
            .iter()
            .find(|entry| entry.path.as_bytes() == path.as_bytes())
            .map(LookupEntry::data)
    }
}
