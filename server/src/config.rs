use std::env;
use std::net::SocketAddr;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("COOKBOOK_BIND_ADDR is not a socket address: {0}")]
    BindAddr(String),

    #[error("COOKBOOK_SEED must be one of 1, true, 0, false; got {0}")]
    Seed(String),
}

/// Startup settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_url: Option<String>,
    pub seed: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("COOKBOOK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError::BindAddr(bind))?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let seed = match lookup("COOKBOOK_SEED") {
            None => true,
            Some(value) => parse_flag(&value).ok_or(ConfigError::Seed(value))?,
        };

        Ok(Self {
            bind_addr,
            database_url,
            seed,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
