//! Bundle - a resolved OSGi bundle artifact.
//!
//! A `Bundle` combines the identity read from an artifact's manifest with
//! the start-level policy decision and the artifact's on-disk location.

use std::path::{Path, PathBuf};

use crate::core::errors::ManifestError;
use crate::core::manifest::BundleManifest;
use crate::core::start_levels::{StartLevelPolicy, DEFAULT_START_LEVEL};
use crate::util::fs::absolutize;

/// A deployable module with launch metadata. Immutable after construction.
///
/// Equality and hashing cover the full value tuple, so a launch set
/// collapses exact duplicates but keeps distinct artifacts that happen to
/// share a symbolic name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bundle {
    /// Unique identifier from `Bundle-SymbolicName`, directives stripped.
    symbolic_name: String,

    /// Raw `Bundle-Version` value; never parsed.
    version: String,

    /// The policy match; `None` for unmanaged bundles.
    start_level: Option<i32>,

    /// Absolute location of the backing directory or jar.
    path: PathBuf,
}

impl Bundle {
    /// Create a bundle from already-extracted metadata.
    pub fn new(
        symbolic_name: impl Into<String>,
        version: impl Into<String>,
        start_level: Option<i32>,
        path: PathBuf,
    ) -> Self {
        Bundle {
            symbolic_name: symbolic_name.into(),
            version: version.into(),
            start_level,
            path,
        }
    }

    /// Resolve an artifact into a bundle: read its manifest, derive
    /// identity, and apply the start-level policy.
    pub fn resolve(path: &Path, policy: &StartLevelPolicy) -> Result<Self, ManifestError> {
        let manifest = BundleManifest::load(path)?;
        let symbolic_name = manifest.symbolic_name()?;
        let version = manifest.version()?;
        let start_level = policy.resolve(&symbolic_name);

        Ok(Bundle {
            symbolic_name,
            version,
            start_level,
            path: absolutize(path),
        })
    }

    /// The bundle's symbolic name.
    pub fn symbolic_name(&self) -> &str {
        &self.symbolic_name
    }

    /// The raw version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The start-level policy match, if any.
    pub fn start_level(&self) -> Option<i32> {
        self.start_level
    }

    /// The level written to the bundle registry: the policy match, or the
    /// launcher default for unmanaged bundles.
    pub fn effective_start_level(&self) -> i32 {
        self.start_level.unwrap_or(DEFAULT_START_LEVEL)
    }

    /// Whether the launcher auto-starts this bundle. True iff a policy
    /// match existed.
    pub fn auto_start(&self) -> bool {
        self.start_level.is_some()
    }

    /// The artifact location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The launcher reference URL pointing at the on-disk artifact.
    ///
    /// Structural colons are backslash-escaped; a policy-managed bundle
    /// carries its start level between `@` and the `\:start` suffix.
    pub fn reference_url(&self) -> String {
        match self.start_level {
            Some(level) => format!(
                "reference\\:file\\:{}@{}\\:start",
                self.path.display(),
                level
            ),
            None => format!("reference\\:file\\:{}@start", self.path.display()),
        }
    }
}

impl std::fmt::Display for Bundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbolic_name, self.version)
    }
}
