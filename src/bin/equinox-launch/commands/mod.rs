//! Command implementations

pub mod completions;
pub mod generate;
pub mod inspect;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use equinox_launch::util::LaunchConfig;
use equinox_launch::StartLevelPolicy;

/// Load the launch configuration: the explicit `--config` path, else
/// `./launch.toml` when present, else defaults.
pub(crate) fn load_launch_config(explicit: Option<&Path>) -> Result<LaunchConfig> {
    match explicit {
        Some(path) => LaunchConfig::load(path),
        None => {
            let default = Path::new("launch.toml");
            if default.is_file() {
                LaunchConfig::load(default)
            } else {
                Ok(LaunchConfig::default())
            }
        }
    }
}

/// CLI values win over file values; a non-empty CLI list replaces the
/// file's list entirely.
pub(crate) fn merged_paths(cli: Vec<PathBuf>, file: Vec<PathBuf>) -> Vec<PathBuf> {
    if cli.is_empty() {
        file
    } else {
        cli
    }
}

/// Build the start-level policy from CLI overrides or the config file's
/// table.
pub(crate) fn start_level_policy(
    cli: &[(String, i32)],
    config: &LaunchConfig,
) -> StartLevelPolicy {
    let overrides: BTreeMap<String, i32> = if cli.is_empty() {
        config.start_levels.clone()
    } else {
        cli.iter().cloned().collect()
    };
    StartLevelPolicy::with_overrides(overrides)
}
