//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `TIENDA_HOST` - Bind address (default: 127.0.0.1)
//! - `TIENDA_PORT` - Listen port (default: 8000)
//! - `TIENDA_SESSION_TTL_SECS` - Session token lifetime (default: 86400)
//! - `TIENDA_CATALOG_PATH` - JSON file seeding products and sliders
//! - `TIENDA_MANAGER_EMAIL` / `TIENDA_MANAGER_PASSWORD` - When both are
//!   set, a manager account is registered at startup so role-gated
//!   operations are reachable on a fresh store.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use tienda_core::Email;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Lifetime of issued session tokens, in seconds.
    pub session_ttl_secs: i64,
    /// Optional JSON file with the product catalog and slider seed.
    pub catalog_path: Option<PathBuf>,
    /// Optional bootstrap manager email.
    pub manager_email: Option<Email>,
    /// Optional bootstrap manager password.
    pub manager_password: Option<SecretString>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            session_ttl_secs: 86_400,
            catalog_path: None,
            manager_email: None,
            manager_password: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is present but
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = parse_env("TIENDA_HOST", defaults.host)?;
        let port = parse_env("TIENDA_PORT", defaults.port)?;
        let session_ttl_secs = parse_env("TIENDA_SESSION_TTL_SECS", defaults.session_ttl_secs)?;

        let catalog_path = std::env::var("TIENDA_CATALOG_PATH").ok().map(PathBuf::from);

        let manager_email = match std::env::var("TIENDA_MANAGER_EMAIL") {
            Ok(raw) => Some(Email::parse(&raw).map_err(|e| {
                ConfigError::InvalidEnvVar("TIENDA_MANAGER_EMAIL".to_owned(), e.to_string())
            })?),
            Err(_) => None,
        };
        let manager_password = std::env::var("TIENDA_MANAGER_PASSWORD")
            .ok()
            .map(SecretString::from);

        Ok(Self {
            host,
            port,
            session_ttl_secs,
            catalog_path,
            manager_email,
            manager_password,
        })
    }

    /// The socket address to bind the listener to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Session token lifetime as a `chrono` duration.
    #[must_use]
    pub fn session_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.session_ttl_secs)
    }
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(name.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8000");
        assert_eq!(config.session_ttl(), chrono::Duration::hours(24));
        assert!(config.catalog_path.is_none());
        assert!(config.manager_email.is_none());
    }
}
