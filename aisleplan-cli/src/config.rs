//! Configuration file loading for aisleplan.
//!
//! Discovers and loads `aisleplan.toml` from the data file's directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use aisleplan_types::catalog::{Selection, SelectionEntry};
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "aisleplan.toml";

/// Top-level configuration from aisleplan.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AisleplanConfig {
    /// Output settings.
    pub output: OutputConfig,

    /// Default recipe selection, `NAME` or `NAME=MULTIPLIER` entries.
    pub selection: SelectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the build artifacts land in.
    pub dir: Utf8PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: Utf8PathBuf::from("lists"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub recipes: Vec<String>,
}

/// Discover the aisleplan.toml config file next to the data file.
pub fn discover_config(data_dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = data_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<AisleplanConfig> {
    let config: AisleplanConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from the data dir, or return default if not found.
pub fn load_or_default(data_dir: &Utf8Path) -> anyhow::Result<AisleplanConfig> {
    match discover_config(data_dir) {
        Some(path) => {
            let contents =
                fs::read_to_string(&path).with_context(|| format!("read config file {}", path))?;
            parse_config(&contents).with_context(|| format!("parse config file {}", path))
        }
        None => Ok(AisleplanConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    /// Output directory for build artifacts.
    pub out_dir: Utf8PathBuf,

    /// Recipe specs to build, `NAME` or `NAME=MULTIPLIER`.
    pub recipes: Vec<String>,
}

impl AisleplanConfig {
    /// Merge with build command CLI arguments.
    ///
    /// A non-empty CLI recipe list *replaces* the config selection (a
    /// selection describes one run, it does not accumulate); the CLI out-dir
    /// overrides the config one when given.
    pub fn merge_build_args(
        self,
        cli_out_dir: Option<Utf8PathBuf>,
        cli_recipes: &[String],
    ) -> MergedConfig {
        let recipes = if cli_recipes.is_empty() {
            self.selection.recipes
        } else {
            cli_recipes.to_vec()
        };

        MergedConfig {
            out_dir: cli_out_dir.unwrap_or(self.output.dir),
            recipes,
        }
    }
}

/// Parse `NAME` / `NAME=MULTIPLIER` specs into a selection.
///
/// Names are resolved against recipe ids later; the multiplier must be a
/// positive number when present.
pub fn parse_recipe_specs(specs: &[String]) -> anyhow::Result<Selection> {
    let mut entries = Vec::new();
    for spec in specs {
        let (name, multiplier) = match spec.split_once('=') {
            Some((name, mult)) => {
                let multiplier: f64 = mult
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid multiplier in '{}'", spec))?;
                anyhow::ensure!(
                    multiplier > 0.0,
                    "multiplier in '{}' must be positive",
                    spec
                );
                (name, multiplier)
            }
            None => (spec.as_str(), 1.0),
        };

        let name = name.trim();
        anyhow::ensure!(!name.is_empty(), "empty recipe name in '{}'", spec);

        entries.push(SelectionEntry {
            recipe_id: name.to_string(),
            multiplier,
        });
    }
    Ok(Selection { entries })
}
