use crate::utils::constants::DEFAULT_TIMEOUT_SECS;

use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("TOKEN is not set")]
    MissingToken,

    #[error("invalid value for {name}: {value}")]
    InvalidTimeout { name: &'static str, value: String },
}

/// Bot token plus the HTTP read/write timeouts, all sourced from the
/// environment (a `.env` file is loaded before this runs).
#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub token: String,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        let token = env::var("TOKEN").map_err(|_| ConfigError::MissingToken)?;
        Ok(Self {
            token,
            read_timeout: timeout_from_env("READ_TIMEOUT")?,
            write_timeout: timeout_from_env("WRITE_TIMEOUT")?,
        })
    }
}

fn timeout_from_env(name: &'static str) -> Result<u64, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout { name, value }),
        Err(_) => Ok(DEFAULT_TIMEOUT_SECS),
    }
}
