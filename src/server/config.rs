use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://holonet.db?mode=rwc";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Whether the session cookie is only sent over HTTPS.
    pub session_secure: bool,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Every variable is optional; unset variables fall back to local development
    /// defaults. Values that are set but unparseable are rejected.
    ///
    /// # Returns
    /// - `Ok(Config)` - Loaded configuration
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `PORT` or `SESSION_SECURE` could not be parsed
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_env_or("PORT", DEFAULT_PORT)?,
            session_secure: parse_env_or("SESSION_SECURE", false)?,
        })
    }
}

fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
