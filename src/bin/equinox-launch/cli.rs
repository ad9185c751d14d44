//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Generates Equinox launcher boot configuration from resolved OSGi bundles
#[derive(Parser)]
#[command(name = "equinox-launch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate config.ini and bundles.info for a project
    Generate(GenerateArgs),

    /// Show the resolved launch metadata without writing anything
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Launch configuration file (defaults to ./launch.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bundle artifact: a jar or a directory-form bundle (repeatable)
    #[arg(long = "bundle", value_name = "PATH")]
    pub bundles: Vec<PathBuf>,

    /// Directory scanned for *.jar artifacts (repeatable)
    #[arg(long = "bundle-dir", value_name = "DIR")]
    pub bundle_dirs: Vec<PathBuf>,

    /// Start-level override; any override replaces the builtin defaults
    #[arg(long = "start-level", value_name = "NAME=LEVEL", value_parser = parse_start_level)]
    pub start_levels: Vec<(String, i32)>,

    /// Project artifact id; names the output directory
    #[arg(long)]
    pub project_id: Option<String>,

    /// The project's own deployable bundle, included in the launch set
    #[arg(long)]
    pub project_bundle: Option<PathBuf>,

    /// Root under which <artifact-id>/configuration is created
    /// (defaults to the system temp directory)
    #[arg(long)]
    pub out_root: Option<PathBuf>,

    /// Print the resolved launch set as JSON instead of writing files
    #[arg(long)]
    pub plan: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    /// Launch configuration file (defaults to ./launch.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bundle artifact: a jar or a directory-form bundle (repeatable)
    #[arg(long = "bundle", value_name = "PATH")]
    pub bundles: Vec<PathBuf>,

    /// Directory scanned for *.jar artifacts (repeatable)
    #[arg(long = "bundle-dir", value_name = "DIR")]
    pub bundle_dirs: Vec<PathBuf>,

    /// Start-level override; any override replaces the builtin defaults
    #[arg(long = "start-level", value_name = "NAME=LEVEL", value_parser = parse_start_level)]
    pub start_levels: Vec<(String, i32)>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}

fn parse_start_level(s: &str) -> Result<(String, i32), String> {
    let (name, level) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=LEVEL, got `{s}`"))?;
    let level = level
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid start level in `{s}`: {e}"))?;
    Ok((name.trim().to_string(), level))
}
