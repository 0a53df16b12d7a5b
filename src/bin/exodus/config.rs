use std::path::Path;

use anyhow::{Context, Result};
use exodus_calendar::{MarsClock, TimeConvention, parse_earth};
use serde::Deserialize;

/// Top-level exodus configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExodusConfig {
    /// Earth instant at which the Mars calendar starts, RFC 3339.
    #[serde(default = "default_epoch")]
    pub epoch: String,

    /// Show Mars time of day in Mars seconds.
    #[serde(default)]
    pub mtc: bool,
}

impl Default for ExodusConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            mtc:   false,
        }
    }
}

fn default_epoch() -> String {
    "1970-01-01T00:00:00Z".to_string()
}

impl ExodusConfig {
    /// Loads the config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Builds the clock; `mtc` from the command line wins over a `false` in the file.
    pub fn clock(&self, mtc: bool) -> Result<MarsClock> {
        let epoch = parse_earth(&self.epoch).context("invalid epoch in config")?;
        let convention = TimeConvention::from_mtc(mtc || self.mtc);
        Ok(MarsClock::new(epoch, convention))
    }
}
