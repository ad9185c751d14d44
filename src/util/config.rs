//! `launch.toml` configuration file support.
//!
//! The launch configuration carries the project identity, the artifact
//! list, and the start-level override table. Everything in it can also be
//! supplied on the command line; CLI values take precedence over file
//! values.
//!
//! ```toml
//! [project]
//! id = "com.example.app"
//! bundle = "target/app.jar"
//!
//! [launch]
//! bundles = ["libs/org.eclipse.osgi_3.18.0.jar"]
//! bundle-dirs = ["plugins"]
//! out-root = "/tmp/launch"
//!
//! [start-levels]
//! "com.example.core" = 2
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Parsed `launch.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LaunchConfig {
    /// Project identity.
    pub project: ProjectConfig,

    /// Artifact inputs and output location.
    pub launch: LaunchInputs,

    /// Start-level override table. A non-empty table replaces the builtin
    /// platform defaults entirely.
    pub start_levels: BTreeMap<String, i32>,
}

/// `[project]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ProjectConfig {
    /// Artifact id; names the output directory.
    pub id: Option<String>,

    /// The project's own deployable bundle, included in the launch set
    /// when the project packages one.
    pub bundle: Option<PathBuf>,
}

/// `[launch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LaunchInputs {
    /// Bundle artifact paths (directory-form bundles or jars).
    pub bundles: Vec<PathBuf>,

    /// Directories scanned for `*.jar` artifacts.
    pub bundle_dirs: Vec<PathBuf>,

    /// Root under which `<artifact-id>/configuration` is created.
    /// Defaults to the system temp directory.
    pub out_root: Option<PathBuf>,
}

impl LaunchConfig {
    /// Load a launch configuration from a file. Relative paths in the file
    /// are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read launch config: {}", path.display()))?;

        let mut config: LaunchConfig = toml::from_str(&contents)
            .with_context(|| format!("failed to parse launch config: {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        Ok(config)
    }

    /// Resolve relative paths against `base`.
    fn rebase(&mut self, base: &Path) {
        let rebase_one = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };

        if let Some(bundle) = self.project.bundle.as_mut() {
            rebase_one(bundle);
        }
        for path in self
            .launch
            .bundles
            .iter_mut()
            .chain(self.launch.bundle_dirs.iter_mut())
        {
            rebase_one(path);
        }
        if let Some(out_root) = self.launch.out_root.as_mut() {
            rebase_one(out_root);
        }
    }
}
