//! Demo configuration
//!
//! Sleep lengths for the two demo runs. Defaults come first, then
//! environment variables, then command line flags.

#[cfg(feature = "toml-config")]
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::cli::Cli;

pub const DEFAULT_MANUAL_SECS: f64 = 1.2;
pub const DEFAULT_BLOCK_SECS: f64 = 1.5;

pub const ENV_MANUAL_SECS: &str = "TIMERPRO_MANUAL_SECS";
pub const ENV_BLOCK_SECS: &str = "TIMERPRO_BLOCK_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Sleep inside the manually started timer (seconds)
    pub manual_secs: f64,

    /// Sleep inside the scoped timer (seconds)
    pub block_secs: f64,

    pub run_manual: bool,
    pub run_block: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            manual_secs: DEFAULT_MANUAL_SECS,
            block_secs: DEFAULT_BLOCK_SECS,
            run_manual: true,
            run_block: true,
        }
    }
}

impl DemoConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unusable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(secs) = lookup(ENV_MANUAL_SECS).and_then(|v| parse_secs(&v).ok()) {
            config.manual_secs = secs;
        }
        if let Some(secs) = lookup(ENV_BLOCK_SECS).and_then(|v| parse_secs(&v).ok()) {
            config.block_secs = secs;
        }
        config
    }

    /// Load configuration from TOML file
    #[cfg(feature = "toml-config")]
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: DemoConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file (stub when toml feature is disabled)
    #[cfg(not(feature = "toml-config"))]
    pub fn from_file(_path: &Path) -> anyhow::Result<Self> {
        anyhow::bail!("TOML support not enabled. Enable the 'toml-config' feature.")
    }

    /// Apply command line flags (flags take precedence)
    pub fn merge_with_args(mut self, cli: &Cli) -> Self {
        if let Some(secs) = cli.manual_secs {
            self.manual_secs = secs;
        }
        if let Some(secs) = cli.block_secs {
            self.block_secs = secs;
        }
        if cli.skip_manual {
            self.run_manual = false;
        }
        if cli.skip_block {
            self.run_block = false;
        }
        self
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (key, secs) in [("manual_secs", self.manual_secs), ("block_secs", self.block_secs)] {
            if !secs.is_finite() || secs < 0.0 {
                anyhow::bail!("{key} must be a non-negative number of seconds, got {secs}");
            }
        }
        Ok(())
    }
}

/// Parse a non-negative, finite number of seconds.
pub fn parse_secs(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("`{value}` is not a number"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("`{value}` must be a non-negative number of seconds"));
    }
    Ok(secs)
}
