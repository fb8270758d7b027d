//! C++ code generation
//!
//! Turns an [`AssetSet`] into the declaration and definition artifacts.
//! Generation is pure: same assets and config, same bytes out.

pub mod escaping;
mod header;
mod output_file;
mod source;

pub use header::{lookup_signature, render_header};
pub use output_file::{ArtifactKind, OutputFile};
pub use source::render_source;

use crate::config::EmbedConfig;
use crate::error::EmbedResult;
use crate::identifier;
use crate::models::AssetSet;

/// The two generated files of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub header: OutputFile,
    pub source: OutputFile,
}

impl Artifacts {
    /// Header first, then source; the order they are written in
    pub fn iter(&self) -> impl Iterator<Item = &OutputFile> {
        [&self.header, &self.source].into_iter()
    }
}

/// Check identifiers, then render both artifacts
///
/// Fails before producing anything if an identifier is invalid or two
/// file names share one.
pub fn generate(assets: &AssetSet, config: &EmbedConfig) -> EmbedResult<Artifacts> {
    for asset in assets {
        identifier::validate(&asset.filename, &asset.identifier, &config.symbol_prefix)?;
    }
    identifier::ensure_unique(
        assets
            .iter()
            .map(|a| (a.filename.as_str(), a.identifier.as_str())),
    )?;

    Ok(Artifacts {
        header: OutputFile::new(
            config.header_path(),
            render_header(config),
            ArtifactKind::Header,
        ),
        source: OutputFile::new(
            config.source_path(),
            render_source(assets, config),
            ArtifactKind::Source,
        ),
    })
}
