//! Bundle registry file (`bundles.info`) generation.
//!
//! The configurator bundle reads this file at boot and installs/starts the
//! listed bundles. The framework bundle itself is excluded: the launcher
//! loads it through `osgi.framework`, not through the registry.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::bundle::Bundle;
use crate::core::launch_set::{LaunchSet, CONFIGURATOR_BUNDLE, FRAMEWORK_BUNDLE};
use crate::ops::LINE_ENDING;
use crate::util::fs::write_string;

const FILE_NAME: &str = "bundles.info";

/// Write `bundles.info` under
/// `<configDir>/org.eclipse.equinox.simpleconfigurator/`, creating the
/// directory if absent and truncating any existing file.
pub fn write_bundles_info(config_dir: &Path, launch_set: &LaunchSet) -> Result<PathBuf> {
    let path = config_dir.join(CONFIGURATOR_BUNDLE).join(FILE_NAME);
    write_string(&path, &render(launch_set))?;

    tracing::debug!("wrote {} ({} bundles)", path.display(), launch_set.len());
    Ok(path)
}

/// Render the registry: the two-line header, then one line per bundle,
/// sorted by symbolic name for deterministic output.
pub fn render(launch_set: &LaunchSet) -> String {
    let mut bundles: Vec<&Bundle> = launch_set
        .iter()
        .filter(|b| b.symbolic_name() != FRAMEWORK_BUNDLE)
        .collect();
    bundles.sort_by(|a, b| {
        a.symbolic_name()
            .cmp(b.symbolic_name())
            .then_with(|| a.version().cmp(b.version()))
    });

    let mut out = String::new();
    out.push_str("#encoding=UTF-8");
    out.push_str(LINE_ENDING);
    out.push_str("#version=1");
    out.push_str(LINE_ENDING);

    for bundle in bundles {
        out.push_str(&format!(
            "{},{},file:{},{},{}",
            bundle.symbolic_name(),
            bundle.version(),
            bundle.path().display(),
            bundle.effective_start_level(),
            bundle.auto_start(),
        ));
        out.push_str(LINE_ENDING);
    }

    out
}
