use std::env;
use tracing::{error, warn};

use crate::config::ConfigError;

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    /// Load listener configuration from environment variables
    ///
    /// Expected environment variables:
    /// - APP_HOST: Bind address (defaults to 127.0.0.1)
    /// - APP_PORT: Bind port (defaults to 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();

        let host = env::var("APP_HOST").unwrap_or_else(|_| {
            warn!("APP_HOST not set, using default: {}", defaults.host);
            defaults.host
        });

        let port = match env::var("APP_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                error!("Invalid APP_PORT value");
                ConfigError::InvalidValue("Invalid APP_PORT value".to_string())
            })?,
            Err(_) => {
                warn!("APP_PORT not set, using default: {}", defaults.port);
                defaults.port
            }
        };

        let config = AppConfig { host, port };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.parse::<std::net::IpAddr>().is_err() {
            error!("App host is not a valid IP address: {}", self.host);
            return Err(ConfigError::ValidationError("App host must be a valid IP address".to_string()));
        }
        if self.port == 0 {
            error!("App port is 0");
            return Err(ConfigError::ValidationError("App port must be greater than 0".to_string()));
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_ip_host() {
        let mut config = AppConfig::default();
        config.host = "localhost".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.port = 0;
        assert!(config.validate().is_err());
    }
}
