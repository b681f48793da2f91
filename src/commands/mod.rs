//! Command handlers.
//!
//! This module contains handlers for the generate, inspect and show-config commands.

pub mod generate;
pub mod inspect;
pub mod show_config;

use anyhow::Context;
use std::path::Path;
use textgen_core::GenerationConfig;

/// Load the config file at `path`, or the built-in configuration when `None`.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GenerationConfig> {
    match path {
        Some(path) => GenerationConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {path:?}")),
        None => Ok(GenerationConfig::default()),
    }
}
