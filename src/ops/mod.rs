//! High-level operations.
//!
//! This module contains the implementation of the generator commands.

pub mod bundles_info;
pub mod config_ini;
pub mod generate;

pub use bundles_info::write_bundles_info;
pub use config_ini::write_config_ini;
pub use generate::{generate, launch_plan, resolve_bundles, GenerateOptions, GenerateResult};

/// The consuming launcher expects the platform line terminator.
#[cfg(windows)]
pub(crate) const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub(crate) const LINE_ENDING: &str = "\n";
