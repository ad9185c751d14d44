//! Launch set assembly and bootstrap bundle lookup.
//!
//! The launch set is the full collection of bundles for one project
//! assembly. Iteration order is insertion order; uniqueness is checked
//! against the full bundle value tuple, so exact duplicates collapse while
//! distinct artifacts sharing a symbolic name are both kept.

use std::collections::HashSet;

use crate::core::bundle::Bundle;
use crate::core::errors::LaunchSetError;

/// Symbolic name of the bootstrap component that reads the bundle registry
/// and installs/starts the listed bundles.
pub const CONFIGURATOR_BUNDLE: &str = "org.eclipse.equinox.simpleconfigurator";

/// Symbolic name of the framework implementation hosting the module system.
pub const FRAMEWORK_BUNDLE: &str = "org.eclipse.osgi";

/// The set of all bundles for one project assembly.
#[derive(Debug, Default)]
pub struct LaunchSet {
    bundles: Vec<Bundle>,
    seen: HashSet<Bundle>,
}

impl LaunchSet {
    pub fn new() -> Self {
        LaunchSet::default()
    }

    /// Collect bundles into a launch set, collapsing exact duplicates.
    pub fn assemble(bundles: impl IntoIterator<Item = Bundle>) -> Self {
        let mut set = LaunchSet::new();
        for bundle in bundles {
            set.insert(bundle);
        }
        set
    }

    /// Add a bundle. Returns false if an identical bundle is already
    /// present.
    pub fn insert(&mut self, bundle: Bundle) -> bool {
        if !self.seen.insert(bundle.clone()) {
            return false;
        }
        self.bundles.push(bundle);
        true
    }

    /// Bundles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.iter()
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// First bundle with the given symbolic name.
    pub fn find(&self, symbolic_name: &str) -> Option<&Bundle> {
        self.bundles
            .iter()
            .find(|b| b.symbolic_name() == symbolic_name)
    }

    /// The configurator bundle. Its absence means this launcher format
    /// cannot bootstrap the assembly at all, so there is no fallback.
    pub fn configurator(&self) -> Result<&Bundle, LaunchSetError> {
        self.find(CONFIGURATOR_BUNDLE)
            .ok_or(LaunchSetError::UnsupportedLauncher)
    }

    /// The framework bundle named by `osgi.framework`.
    pub fn framework(&self) -> Result<&Bundle, LaunchSetError> {
        self.find(FRAMEWORK_BUNDLE)
            .ok_or(LaunchSetError::FrameworkMissing)
    }
}

impl IntoIterator for LaunchSet {
    type Item = Bundle;
    type IntoIter = std::vec::IntoIter<Bundle>;

    fn into_iter(self) -> Self::IntoIter {
        self.bundles.into_iter()
    }
}
