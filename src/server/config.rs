use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, Error};

/// Default address the HTTP & WebSocket server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Server configuration read from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// `DATABASE_URL` - connection string for the tavern database
    pub database_url: String,
    /// `BIND_ADDRESS` - socket address to listen on, defaults to [`DEFAULT_BIND_ADDRESS`]
    pub bind_address: SocketAddr,
    /// `SEED_DEFAULTS` - seed the default rooms, bartenders and items into an empty database
    pub seed_defaults: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let seed_defaults = match lookup("SEED_DEFAULTS").as_deref() {
            None | Some("") => true,
            Some("1") | Some("true") | Some("yes") => true,
            Some("0") | Some("false") | Some("no") => false,
            Some(other) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "SEED_DEFAULTS".to_string(),
                    reason: format!("expected true or false, got {:?}", other),
                }
                .into())
            }
        };

        Ok(Self {
            database_url,
            bind_address,
            seed_defaults,
        })
    }
}
