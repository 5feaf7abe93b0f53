use reqwest::Url;
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CALORIE_API_BASE is not a valid URL ({value}): {reason}")]
    InvalidApiBase { value: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base: Url,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("CALORIE_API_BASE").ok(), env::var("PORT").ok())
    }

    pub fn from_values(api_base: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let value = api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&value)
            .map_err(|err| ConfigError::InvalidApiBase {
                reason: err.to_string(),
                value,
            })?;

        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self { api_base, port })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
