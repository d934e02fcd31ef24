use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_TOKEN: &str = "mysecrettoken";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_token: String,
    pub protect_list_users: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_token = lookup("API_TOKEN").unwrap_or_else(|| {
            warn!("API_TOKEN not set, using the built in development token");
            DEFAULT_API_TOKEN.to_string()
        });
        if api_token.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "API_TOKEN",
                value: api_token,
                reason: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            host: try_load(&lookup, "HOST", "0.0.0.0")?,
            port: try_load(&lookup, "PORT", "3000")?,
            api_token,
            protect_list_users: try_load(&lookup, "PROTECT_LIST_USERS", "false")?,
        })
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });
    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
