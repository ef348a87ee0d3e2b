use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    // Logging
    pub log_dir: String,
    pub log_file: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            log_file: "attendease.log".to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads every setting through `lookup`, falling back to the defaults for
    /// missing keys. Present but malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            log_dir: lookup("ATTENDEASE_LOG_DIR").unwrap_or(defaults.log_dir),
            log_file: lookup("ATTENDEASE_LOG_FILE").unwrap_or(defaults.log_file),
            log_level: parse_or(&lookup, "ATTENDEASE_LOG_LEVEL", defaults.log_level)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
