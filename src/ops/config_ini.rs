//! Primary launcher configuration (`config.ini`) generation.
//!
//! The launcher reads exactly these keys at boot. The line order is fixed;
//! it is neither configurable nor sorted, so reruns over an unchanged
//! artifact set are byte-identical.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::bundle::Bundle;
use crate::core::launch_set::LaunchSet;
use crate::core::start_levels::DEFAULT_START_LEVEL;
use crate::ops::LINE_ENDING;
use crate::util::fs::write_string;

const FILE_NAME: &str = "config.ini";

/// Write `config.ini` into the configuration directory, creating the
/// directory tree if absent and truncating any existing file.
pub fn write_config_ini(
    config_dir: &Path,
    launch_set: &LaunchSet,
    bundles_info: &Path,
) -> Result<PathBuf> {
    let configurator = launch_set.configurator()?;
    let framework = launch_set.framework()?;

    let path = config_dir.join(FILE_NAME);
    write_string(&path, &render(config_dir, configurator, framework, bundles_info))?;

    tracing::debug!("wrote {}", path.display());
    Ok(path)
}

/// Render the seven fixed lines.
pub fn render(
    config_dir: &Path,
    configurator: &Bundle,
    framework: &Bundle,
    bundles_info: &Path,
) -> String {
    let install_area = config_dir
        .parent()
        .unwrap_or(config_dir)
        .join("install");

    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push_str(LINE_ENDING);
    };

    line(format!("osgi.bundles={}", configurator.reference_url()));
    line(format!("osgi.bundles.defaultStartLevel={DEFAULT_START_LEVEL}"));
    line(format!("osgi.install.area=file:{}", install_area.display()));
    line(format!("osgi.framework=file:{}", framework.path().display()));
    line("eclipse.p2.data.area=@config.dir/.p2".to_string());
    line(format!(
        "org.eclipse.equinox.simpleconfigurator.configUrl=file:{}",
        bundles_info.display()
    ));
    line("osgi.configuration.cascaded=false".to_string());

    out
}
