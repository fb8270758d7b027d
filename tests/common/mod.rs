//! Common test utilities for embed-media integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated media and output directories plus CLI helpers
//! - `GeneratedSource`: reads a generated `.cpp` back into a lookup table
//! - Fixtures: the sample asset set used across tests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use decoder::*;
pub use env::*;
pub use fixtures::*;
