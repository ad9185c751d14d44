//! Equinox launch configuration generator.
//!
//! This crate resolves a set of binary OSGi bundle artifacts and generates
//! the two boot configuration files consumed by the Equinox launcher at
//! process start: `config.ini` and `bundles.info`. It is a build-time
//! generator, not a runtime service.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{
    bundle::Bundle, errors::LaunchSetError, errors::ManifestError, launch_set::LaunchSet,
    manifest::BundleManifest, start_levels::StartLevelPolicy,
};

pub use crate::ops::generate::{generate, GenerateOptions, GenerateResult};
