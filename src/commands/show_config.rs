//! Show-config command handler.

use super::load_config;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the show-config command.
#[derive(Args, Clone, Debug)]
pub struct ShowConfigArgs {
    /// Path to config YAML file (built-in configuration when omitted)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Render the effective configuration as YAML.
pub fn run_show_config(args: &ShowConfigArgs) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    Ok(config.to_yaml()?)
}
