use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "paperpile2vault";
const ENV_PREFIX: &str = "PAPERPILE2VAULT";

pub const DEFAULT_OUTPUT_DIR: &str = "./obsidian/paperpile_import";
pub const DEFAULT_LOG_FILE: &str = "script_log.txt";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Settings {
    /// Defaults, then `paperpile2vault.toml` if present, then `PAPERPILE2VAULT_*` env vars.
    pub fn load() -> Result<Self> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self> {
        builder
            .set_default("output_dir", DEFAULT_OUTPUT_DIR)?
            .set_default("log_file", DEFAULT_LOG_FILE)?
            .build()
            .context("Failed to load settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    /// CLI flags win over every other layer.
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, log_file: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.output_dir = dir;
        }
        if let Some(file) = log_file {
            self.log_file = file;
        }
        self
    }
}

// ── Tests ──
