use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

use super::cli::CliArgs;

/// Values for one run; whatever is missing gets asked for interactively.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default)]
    pub amount: Option<u64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub manual: Option<Vec<Vec<i64>>>,
    #[serde(default)]
    pub winning: Option<Vec<i64>>,
    #[serde(default)]
    pub bonus: Option<i64>,
}

impl RunConfig {
    /// Load a run file
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read run file: {}", config_path.display()))?;

        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse run file: {}", config_path.display()))?;
        log::debug!("Loaded run file from: {}", config_path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Run file named by `--config`, with command line values on top.
    pub fn from_cli(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.override_with(args);
        Ok(config)
    }

    /// Command line values take priority over the run file
    pub fn override_with(&mut self, args: &CliArgs) {
        if args.amount.is_some() {
            self.amount = args.amount;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
    }
}
