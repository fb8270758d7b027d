//! Configuration module for embed-media
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Config file passed with `--config`
//! 3. Built-in defaults
//!
//! No environment variables are consulted.

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{tool_dir, EmbedConfig, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR};
