//! `equinox-launch inspect` command

use anyhow::Result;

use crate::cli::InspectArgs;
use equinox_launch::ops::generate::resolve_bundles;

use super::{load_launch_config, merged_paths, start_level_policy};

pub fn execute(args: InspectArgs) -> Result<()> {
    let config = load_launch_config(args.config.as_deref())?;

    let policy = start_level_policy(&args.start_levels, &config);
    let bundles = merged_paths(args.bundles, config.launch.bundles);
    let bundle_dirs = merged_paths(args.bundle_dirs, config.launch.bundle_dirs);

    let launch_set = resolve_bundles(
        &bundles,
        &bundle_dirs,
        config.project.bundle.as_deref(),
        &policy,
    )?;

    let mut resolved: Vec<_> = launch_set.iter().collect();
    resolved.sort_by(|a, b| a.symbolic_name().cmp(b.symbolic_name()));

    println!(
        "{:<48} {:<16} {:>5}  {:<10} PATH",
        "SYMBOLIC NAME", "VERSION", "LEVEL", "AUTOSTART"
    );
    for bundle in resolved {
        println!(
            "{:<48} {:<16} {:>5}  {:<10} {}",
            bundle.symbolic_name(),
            bundle.version(),
            bundle.effective_start_level(),
            bundle.auto_start(),
            bundle.path().display()
        );
    }

    Ok(())
}
