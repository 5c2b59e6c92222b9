//! Host configuration from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` (default `0.0.0.0`) and `PORT` (default 3000).
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::InvalidEnv`] when `PORT` is set but not a port
    /// number, or `HOST` is set but blank.
    pub fn from_env() -> Result<Self, ServerError> {
        let host = match std::env::var("HOST") {
            Ok(raw) if raw.trim().is_empty() => return Err(ServerError::InvalidEnv { var: "HOST", value: raw }),
            Ok(raw) => raw.trim().to_owned(),
            Err(_) => DEFAULT_HOST.to_owned(),
        };
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ServerError::InvalidEnv { var: "PORT", value: raw })?,
            Err(_) => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
