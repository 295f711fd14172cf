//! CLI command handlers for QR Studio.
//!
//! This module provides headless, scriptable access to the rendering
//! pipeline for automation, testing, and CI integration.

pub mod common;
pub mod encode;
pub mod generate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use encode::EncodeArgs;
pub use generate::GenerateArgs;
