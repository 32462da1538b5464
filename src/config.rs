//! Environment-driven defaults for the command-line tool

use std::env;
use std::path::PathBuf;

use crate::config_error;
use crate::error::Result;
use crate::types::EXPORT_FILE_NAME;

/// Ceiling on projected output unless overridden
pub const DEFAULT_MAX_OUTPUT: u128 = 10_000_000;

/// Environment variable holding the output ceiling (`0` disables it)
pub const MAX_OUTPUT_VAR: &str = "PATTERN_EMAIL_MAX_OUTPUT";

/// Environment variable holding the default output path
pub const OUTPUT_VAR: &str = "PATTERN_EMAIL_OUTPUT";

/// Defaults read from the environment (and `.env`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDefaults {
    pub max_output: Option<u128>,
    pub output: PathBuf,
}

impl Default for EnvDefaults {
    fn default() -> Self {
        Self {
            max_output: Some(DEFAULT_MAX_OUTPUT),
            output: PathBuf::from(EXPORT_FILE_NAME),
        }
    }
}

impl EnvDefaults {
    /// Read defaults from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read defaults through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut defaults = Self::default();

        if let Some(value) = lookup(MAX_OUTPUT_VAR) {
            defaults.max_output = parse_limit(&value).map_err(|_| {
                config_error!("{} must be a non-negative integer, got '{}'", MAX_OUTPUT_VAR, value)
            })?;
        }

        if let Some(value) = lookup(OUTPUT_VAR).filter(|v| !v.trim().is_empty()) {
            defaults.output = PathBuf::from(value.trim());
        }

        Ok(defaults)
    }
}

/// Parse an output ceiling; `0` means unbounded
pub fn parse_limit(value: &str) -> std::result::Result<Option<u128>, std::num::ParseIntError> {
    let limit: u128 = value.trim().parse()?;
    Ok(if limit == 0 { None } else { Some(limit) })
}
