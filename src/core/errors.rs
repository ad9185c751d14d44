//! Typed error kinds for bundle resolution and launch set assembly.
//!
//! Every error here is fatal to the run: the generator is a one-shot tool
//! with no partial-success mode, so callers abort with diagnostic context
//! (which artifact, which file) instead of recovering.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::launch_set::{CONFIGURATOR_BUNDLE, FRAMEWORK_BUNDLE};

/// Error reading a bundle manifest out of an artifact.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest from `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to open bundle archive `{path}`")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("no META-INF/MANIFEST.MF entry in `{path}`")]
    MissingEntry { path: PathBuf },

    #[error("manifest in `{path}` has no `{header}` header")]
    MissingHeader { path: PathBuf, header: &'static str },
}

impl ManifestError {
    /// The artifact the failure belongs to.
    pub fn path(&self) -> &PathBuf {
        match self {
            ManifestError::Read { path, .. }
            | ManifestError::Archive { path, .. }
            | ManifestError::MissingEntry { path }
            | ManifestError::MissingHeader { path, .. } => path,
        }
    }
}

/// Error locating the mandatory bootstrap bundles in a launch set.
#[derive(Debug, Error)]
pub enum LaunchSetError {
    /// The launcher format only supports configurator-based bootstrap.
    #[error("unsupported launcher: only `{CONFIGURATOR_BUNDLE}` bootstrap is supported, and it is not in the resolved bundle set")]
    UnsupportedLauncher,

    /// The framework bundle hosting the module system is absent.
    #[error("framework bundle `{FRAMEWORK_BUNDLE}` is not in the resolved bundle set")]
    FrameworkMissing,
}
