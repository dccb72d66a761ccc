//! Connection settings read from the environment.
//!
//! The hosted database publishes its credentials as the lowercase keys
//! `host`, `port`, `user`, `password`, and `dbName`; those exact names are
//! kept here so the same `.env` works unchanged.

use crate::error::{CoreError, CoreResult};
use std::env;

/// Environment key for the database host.
pub const ENV_HOST: &str = "host";
/// Environment key for the database port.
pub const ENV_PORT: &str = "port";
/// Environment key for the database user.
pub const ENV_USER: &str = "user";
/// Environment key for the database password.
pub const ENV_PASSWORD: &str = "password";
/// Environment key for the database name.
pub const ENV_DBNAME: &str = "dbName";
/// Environment key for the per-statement timeout override (seconds).
pub const ENV_STATEMENT_TIMEOUT: &str = "statementTimeoutSecs";

/// Default per-statement timeout in seconds.
pub const DEFAULT_STATEMENT_TIMEOUT_SECS: u64 = 30;

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DbSettings {
    /// Database host
    pub host: String,

    /// Database port
    pub port: u16,

    /// Database name
    pub dbname: String,

    /// Database user
    pub user: String,

    /// Database password
    pub password: String,

    /// Per-statement timeout in seconds
    pub statement_timeout_secs: u64,
}

impl DbSettings {
    /// Read connection settings from the environment.
    ///
    /// Fails with the first missing key; `port` and
    /// `statementTimeoutSecs` must parse as integers.
    pub fn from_env() -> CoreResult<Self> {
        let host = require(ENV_HOST)?;
        let port = parse_u16(ENV_PORT, &require(ENV_PORT)?)?;
        let user = require(ENV_USER)?;
        let password = require(ENV_PASSWORD)?;
        let dbname = require(ENV_DBNAME)?;

        let statement_timeout_secs = match env::var(ENV_STATEMENT_TIMEOUT) {
            Ok(raw) => parse_u64(ENV_STATEMENT_TIMEOUT, &raw)?,
            Err(_) => DEFAULT_STATEMENT_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            dbname,
            user,
            password,
            statement_timeout_secs,
        })
    }
}

fn require(key: &str) -> CoreResult<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(CoreError::EnvMissing {
            key: key.to_string(),
        }),
    }
}

fn parse_u16(key: &str, raw: &str) -> CoreResult<u16> {
    raw.parse::<u16>().map_err(|e| CoreError::EnvInvalid {
        key: key.to_string(),
        message: format!("{e}: {raw:?}"),
    })
}

fn parse_u64(key: &str, raw: &str) -> CoreResult<u64> {
    raw.parse::<u64>().map_err(|e| CoreError::EnvInvalid {
        key: key.to_string(),
        message: format!("{e}: {raw:?}"),
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
