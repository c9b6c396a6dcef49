use serde::{Deserialize, Serialize};
use std::env;
use tracing::{error, info, warn};

use crate::config::ConfigError;

/// Revolut Merchant API configuration.
///
/// The quote-maker requests hosted checkout links for deposit payments from
/// the Revolut orders endpoint. Only the deposit flow is covered; webhooks
/// and capture are handled elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevolutConfig {
    /// Base URL of the orders endpoint
    pub api_url: String,
    /// Merchant API secret key
    pub api_key: String,
    /// ISO currency code used for deposits
    pub currency: String,
}

impl RevolutConfig {
    /// Load Revolut configuration from environment variables
    ///
    /// Expected environment variables:
    /// - REVOLUT_API_URL: Orders endpoint URL (required)
    /// - REVOLUT_API_KEY: Merchant API secret key (required)
    /// - REVOLUT_CURRENCY: Currency code (defaults to EUR)
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading Revolut configuration from environment variables");

        let api_url = env::var("REVOLUT_API_URL").map_err(|_| {
            error!("REVOLUT_API_URL environment variable not found");
            ConfigError::EnvVarNotFound("REVOLUT_API_URL".to_string())
        })?;

        let api_key = env::var("REVOLUT_API_KEY").map_err(|_| {
            error!("REVOLUT_API_KEY environment variable not found");
            ConfigError::EnvVarNotFound("REVOLUT_API_KEY".to_string())
        })?;

        let currency = env::var("REVOLUT_CURRENCY").unwrap_or_else(|_| {
            warn!("REVOLUT_CURRENCY not set, using default: EUR");
            "EUR".to_string()
        });

        let config = RevolutConfig {
            api_url,
            api_key,
            currency,
        };

        config.validate()?;
        info!("Revolut configuration loaded successfully");
        Ok(config)
    }

    /// Create RevolutConfig for testing
    pub fn from_test_env() -> Self {
        RevolutConfig {
            api_url: "https://sandbox-merchant.revolut.com/api/orders".to_string(),
            api_key: "sk_test_key".to_string(),
            currency: "EUR".to_string(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_url.is_empty() {
            error!("Revolut API URL is empty");
            return Err(ConfigError::ValidationError("Revolut API URL cannot be empty".to_string()));
        }
        if !self.api_url.starts_with("http") {
            return Err(ConfigError::ValidationError("Revolut API URL must be an http(s) URL".to_string()));
        }
        if self.api_key.is_empty() {
            error!("Revolut API key is empty");
            return Err(ConfigError::ValidationError("Revolut API key cannot be empty".to_string()));
        }
        if self.currency.len() != 3 {
            return Err(ConfigError::ValidationError("Revolut currency must be a 3-letter ISO code".to_string()));
        }
        Ok(())
    }
}

impl Default for RevolutConfig {
    fn default() -> Self {
        RevolutConfig {
            api_url: "https://merchant.revolut.com/api/orders".to_string(),
            api_key: String::new(),
            currency: "EUR".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_config_is_valid() {
        let config = RevolutConfig::from_test_env();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency, "EUR");
    }

    #[test]
    fn test_validate_empty_key() {
        let mut config = RevolutConfig::from_test_env();
        config.api_key = "".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_url() {
        let mut config = RevolutConfig::from_test_env();
        config.api_url = "merchant.revolut.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_currency() {
        let mut config = RevolutConfig::from_test_env();
        config.currency = "EURO".to_string();
        assert!(config.validate().is_err());
    }
}
