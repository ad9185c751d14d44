//! Start-level policy resolution.
//!
//! A bundle's start level decides the framework boot phase in which it is
//! activated. The policy is a two-tier lookup: a caller-supplied override
//! table, when non-empty, fully replaces the builtin defaults for the
//! standard platform bundles. Bundles matched by neither tier are
//! "unmanaged": they are installed at the default level but not
//! auto-started.

use std::collections::BTreeMap;

/// Start level recorded for bundles with no policy match, and the
/// launcher's `osgi.bundles.defaultStartLevel`.
pub const DEFAULT_START_LEVEL: i32 = 4;

/// Default levels for the standard platform bundles.
const BUILTIN_START_LEVELS: &[(&str, i32)] = &[
    ("org.eclipse.core.runtime", 4),
    ("org.eclipse.equinox.common", 2),
    ("org.eclipse.equinox.ds", 2),
    ("org.eclipse.equinox.event", 2),
    ("org.eclipse.equinox.simpleconfigurator", 1),
    ("org.eclipse.osgi", -1),
];

/// Maps a bundle's symbolic name to its start level.
///
/// Passed explicitly into bundle resolution; there is no process-wide
/// policy state.
#[derive(Debug, Clone, Default)]
pub struct StartLevelPolicy {
    overrides: BTreeMap<String, i32>,
}

impl StartLevelPolicy {
    /// A policy using only the builtin platform defaults.
    pub fn builtin() -> Self {
        StartLevelPolicy::default()
    }

    /// A policy with a caller-supplied override table.
    ///
    /// A non-empty table replaces the builtin defaults entirely: any
    /// symbolic name it does not list resolves as unmanaged, including the
    /// standard platform bundles.
    pub fn with_overrides(overrides: BTreeMap<String, i32>) -> Self {
        StartLevelPolicy { overrides }
    }

    /// The configured override table.
    pub fn overrides(&self) -> &BTreeMap<String, i32> {
        &self.overrides
    }

    /// Resolve a symbolic name to its start level, or `None` for an
    /// unmanaged bundle.
    pub fn resolve(&self, symbolic_name: &str) -> Option<i32> {
        if !self.overrides.is_empty() {
            return self.overrides.get(symbolic_name).copied();
        }

        BUILTIN_START_LEVELS
            .iter()
            .find(|(name, _)| *name == symbolic_name)
            .map(|(_, level)| *level)
    }
}
