//! embed-media - compile media assets into C++ source
//!
//! Reads every regular file in a media directory and generates a header and
//! a source file holding the bytes as arrays plus a lookup function, so a
//! program can ship its assets inside the executable.

pub mod codegen;
pub mod config;
pub mod embedder;
pub mod error;
pub mod identifier;
pub mod models;
pub mod report;
pub mod scanner;
pub mod writer;

// Re-exports for convenience
pub use codegen::{generate, ArtifactKind, Artifacts, OutputFile};
pub use config::{ConfigWarning, EmbedConfig};
pub use embedder::{check, embed, CheckReport, EmbedReport};
pub use error::{EmbedError, EmbedResult};
pub use models::{Asset, AssetSet, LookupEntry, LookupTable};
pub use report::Reporter;
pub use scanner::scan_directory;
