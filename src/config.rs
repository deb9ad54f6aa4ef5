use dotenv::dotenv;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const ADDR_VAR: &str = "PAGEPULSE_ADDR";
pub const DELAY_VAR: &str = "PAGEPULSE_ANALYSIS_DELAY_MS";

const DEFAULT_ADDR: &str = "0.0.0.0:3043";
const DEFAULT_DELAY_MS: u64 = 2000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a socket address like 0.0.0.0:3043, got `{value}`")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var} must be a whole number of milliseconds, got `{value}`")]
    InvalidDelay { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    /// How long the stub analysis pretends to wait on the network.
    pub analysis_delay: Duration,
}

impl Config {
    /// Reads `.env` (if present) and then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_value.clone(),
            })?;

        let analysis_delay = match lookup(DELAY_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay {
                    var: DELAY_VAR,
                    value,
                })?,
            None => Duration::from_millis(DEFAULT_DELAY_MS),
        };

        Ok(Config {
            addr,
            analysis_delay,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            addr: SocketAddr::from(([0, 0, 0, 0], 3043)),
            analysis_delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }
}
