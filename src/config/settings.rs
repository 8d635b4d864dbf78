//! Application settings and configuration
//!
//! This module provides configuration management for the application,
//! loading settings from environment variables with sensible defaults.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Application environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local backend instance (DynamoDB Local / LocalStack) with static credentials
    Local,
    #[value(alias = "dev")]
    Development,
    #[value(alias = "prod")]
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Local => write!(f, "local"),
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl std::str::FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => anyhow::bail!(
                "Invalid environment: {}. Expected: local, development, or production",
                s
            ),
        }
    }
}

impl Environment {
    /// Check whether static credentials and an endpoint override should be used
    pub fn is_local(&self) -> bool {
        matches!(self, Environment::Local)
    }
}

/// Main application settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    // App settings
    pub app_name: String,
    pub app_version: String,
    pub environment: Environment,
    pub log_level: String,

    // Server settings
    pub host: String,
    pub port: u16,

    // AWS settings
    pub aws_region: String,
    #[serde(skip_serializing)]
    pub aws_access_key_id: Option<String>,
    #[serde(skip_serializing)]
    pub aws_secret_access_key: Option<String>,
    pub dynamodb_endpoint_url: Option<String>,

    // DynamoDB table name
    pub dynamodb_items_table: String,
}

impl Settings {
    /// Load settings from environment variables with defaults
    ///
    /// The `.env` file is required: a missing or unreadable file is a fatal
    /// configuration error and no requests are ever served.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().context("Error loading .env file")?;

        let settings = Self {
            app_name: env_or_default("APP_NAME", "item-service"),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: env_or_default("APP_ENV", "development")
                .parse()
                .unwrap_or_default(),
            log_level: env_or_default("LOG_LEVEL", "info"),

            host: env_or_default("HOST", "0.0.0.0"),
            port: env_or_default("PORT", "8080")
                .parse()
                .context("Invalid PORT value")?,

            aws_region: env_or_default("AWS_REGION", "us-east-1"),
            aws_access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
            aws_secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
            dynamodb_endpoint_url: env::var("DYNAMODB_ENDPOINT_URL").ok(),

            dynamodb_items_table: env_or_default("DYNAMODB_TABLE", "Items"),
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate settings
    fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("Port cannot be 0");
        }

        if self.dynamodb_items_table.is_empty() {
            anyhow::bail!("DYNAMODB_TABLE cannot be empty");
        }

        if self.environment.is_local() && self.dynamodb_endpoint_url.is_none() {
            tracing::warn!(
                "Running in local mode without DYNAMODB_ENDPOINT_URL; \
                 requests will go to the real AWS endpoint"
            );
        }

        Ok(())
    }

    /// Check if running in local mode
    pub fn is_local(&self) -> bool {
        self.environment.is_local()
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Get the server address string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "item-service".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            environment: Environment::Development,
            log_level: "info".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            aws_region: "us-east-1".to_string(),
            aws_access_key_id: None,
            aws_secret_access_key: None,
            dynamodb_endpoint_url: None,
            dynamodb_items_table: "Items".to_string(),
        }
    }
}

/// Helper function to get environment variable with default
fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.app_name, "item-service");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.dynamodb_items_table, "Items");
        assert!(!settings.is_local());
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!(
            "development".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(
            "dev".parse::<Environment>().unwrap(),
            Environment::Development
        );
        assert_eq!(
            "prod".parse::<Environment>().unwrap(),
            Environment::Production
        );
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_server_addr() {
        let settings = Settings::default();
        assert_eq!(settings.server_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_validate_rejects_empty_table() {
        let settings = Settings {
            dynamodb_items_table: String::new(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_port_zero() {
        let settings = Settings {
            port: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }
}
