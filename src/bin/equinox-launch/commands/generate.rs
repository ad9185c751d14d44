//! `equinox-launch generate` command

use anyhow::{bail, Result};

use crate::cli::GenerateArgs;
use equinox_launch::ops::generate::{generate, launch_plan, resolve_bundles, GenerateOptions};

use super::{load_launch_config, merged_paths, start_level_policy};

pub fn execute(args: GenerateArgs) -> Result<()> {
    let config = load_launch_config(args.config.as_deref())?;

    let policy = start_level_policy(&args.start_levels, &config);
    let bundles = merged_paths(args.bundles, config.launch.bundles);
    let bundle_dirs = merged_paths(args.bundle_dirs, config.launch.bundle_dirs);
    let project_bundle = args.project_bundle.or(config.project.bundle);
    let out_root = args.out_root.or(config.launch.out_root);

    if args.plan {
        let launch_set = resolve_bundles(
            &bundles,
            &bundle_dirs,
            project_bundle.as_deref(),
            &policy,
        )?;
        launch_set.configurator()?;
        launch_set.framework()?;

        let plan = launch_plan(&launch_set);
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let Some(artifact_id) = args.project_id.or(config.project.id) else {
        bail!(
            "a project id is required\n\
             help: pass --project-id or set `project.id` in launch.toml"
        );
    };

    let opts = GenerateOptions {
        artifact_id,
        bundles,
        bundle_dirs,
        project_bundle,
        policy,
        out_root,
    };

    let result = generate(&opts)?;

    eprintln!("wrote {}", result.config_ini.display());
    eprintln!("wrote {}", result.bundles_info.display());

    Ok(())
}
