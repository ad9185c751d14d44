//! Implementation of `equinox-launch generate`.
//!
//! One invocation resolves the caller's artifact list into a launch set and
//! writes the two boot configuration files. Every failure is fatal: there
//! is no partial-success mode, and partially written files are not cleaned
//! up.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::core::bundle::Bundle;
use crate::core::launch_set::LaunchSet;
use crate::core::start_levels::StartLevelPolicy;
use crate::ops::{bundles_info, config_ini};
use crate::util::fs::{ensure_dir, jar_files_in};

/// Options for generating the launch configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Artifact id of the project; names the output directory.
    pub artifact_id: String,

    /// Bundle artifact paths (directory-form bundles or jars).
    pub bundles: Vec<PathBuf>,

    /// Directories scanned for `*.jar` artifacts.
    pub bundle_dirs: Vec<PathBuf>,

    /// The project's own deployable bundle, when it packages one.
    pub project_bundle: Option<PathBuf>,

    /// Start-level policy applied to every bundle.
    pub policy: StartLevelPolicy,

    /// Root under which `<artifact-id>/configuration` is created.
    /// Defaults to the system temp directory.
    pub out_root: Option<PathBuf>,
}

/// Paths produced by a generate run.
#[derive(Debug)]
pub struct GenerateResult {
    /// The configuration directory.
    pub config_dir: PathBuf,

    /// The primary configuration file.
    pub config_ini: PathBuf,

    /// The bundle registry file.
    pub bundles_info: PathBuf,
}

/// One bundle in a `--plan` dump.
#[derive(Debug, Serialize)]
pub struct PlanEntry {
    pub symbolic_name: String,
    pub version: String,
    pub path: PathBuf,
    pub start_level: i32,
    pub auto_start: bool,
}

/// Resolve the full artifact list into a launch set.
///
/// Directory inputs are expanded to their `*.jar` contents first; the
/// project's own bundle, when present, is resolved last. The first
/// unreadable manifest aborts the resolution.
pub fn resolve_bundles(
    bundles: &[PathBuf],
    bundle_dirs: &[PathBuf],
    project_bundle: Option<&Path>,
    policy: &StartLevelPolicy,
) -> Result<LaunchSet> {
    let mut artifacts: Vec<PathBuf> = bundles.to_vec();
    for dir in bundle_dirs {
        artifacts.extend(jar_files_in(dir)?);
    }
    if let Some(project) = project_bundle {
        artifacts.push(project.to_path_buf());
    }

    let mut set = LaunchSet::new();
    for artifact in &artifacts {
        let bundle = Bundle::resolve(artifact, policy)?;
        tracing::debug!("resolved {} from {}", bundle, artifact.display());
        set.insert(bundle);
    }
    Ok(set)
}

/// Generate `config.ini` and `bundles.info` for the project.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateResult> {
    if opts.artifact_id.is_empty() {
        bail!("an artifact id is required to name the output directory");
    }

    let launch_set = resolve_bundles(
        &opts.bundles,
        &opts.bundle_dirs,
        opts.project_bundle.as_deref(),
        &opts.policy,
    )?;

    if launch_set.is_empty() {
        bail!("no bundle artifacts to resolve; supply --bundle, --bundle-dir, or a launch config");
    }

    // Both bootstrap bundles must be present before anything touches disk.
    launch_set.configurator()?;
    launch_set.framework()?;

    let config_dir = config_dir(opts);
    ensure_dir(&config_dir)
        .with_context(|| format!("failed to create configuration directory: {}", config_dir.display()))?;

    let bundles_info = bundles_info::write_bundles_info(&config_dir, &launch_set)?;
    let config_ini = config_ini::write_config_ini(&config_dir, &launch_set, &bundles_info)?;

    tracing::info!(
        "generated launch configuration for `{}` in {}",
        opts.artifact_id,
        config_dir.display()
    );

    Ok(GenerateResult {
        config_dir,
        config_ini,
        bundles_info,
    })
}

/// The launch set rendered as plan entries, sorted by symbolic name.
pub fn launch_plan(launch_set: &LaunchSet) -> Vec<PlanEntry> {
    let mut entries: Vec<PlanEntry> = launch_set
        .iter()
        .map(|b| PlanEntry {
            symbolic_name: b.symbolic_name().to_string(),
            version: b.version().to_string(),
            path: b.path().to_path_buf(),
            start_level: b.effective_start_level(),
            auto_start: b.auto_start(),
        })
        .collect();
    entries.sort_by(|a, b| {
        a.symbolic_name
            .cmp(&b.symbolic_name)
            .then_with(|| a.version.cmp(&b.version))
    });
    entries
}

fn config_dir(opts: &GenerateOptions) -> PathBuf {
    let out_root = opts
        .out_root
        .clone()
        .unwrap_or_else(std::env::temp_dir);
    out_root.join(&opts.artifact_id).join("configuration")
}
