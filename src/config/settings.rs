//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use std::path::Path;
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `EXPOADMIN__API__BASE_URL`
pub const ENV_PREFIX: &str = "EXPOADMIN";

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub api: ApiConfig,
    pub media: MediaConfig,
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

/// Hosts whose asset URLs may be rendered
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Exact hostnames or `*.suffix` wildcard patterns
    pub allowed_hosts: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    /// Directory for daily-rolling JSON logs; stdout only when unset
    pub file_path: Option<String>,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::builder(config::File::with_name("config").required(false))?
            .build()?
            .try_deserialize()
    }

    /// Load settings from an explicit TOML file, still honouring environment overrides
    pub fn from_file(path: &Path) -> Result<Self, config::ConfigError> {
        let source = config::File::from(path)
            .format(config::FileFormat::Toml)
            .required(true);

        Self::builder(source)?.build()?.try_deserialize()
    }

    fn builder(
        file: config::File<config::FileSourceFile, config::FileFormat>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        Ok(config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("media.allowed_hosts")
                    .try_parsing(true),
            ))
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ExpoAdminError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:8000".to_string(),
                timeout_seconds: 15,
                user_agent: format!("ExpoAdmin/{}", env!("CARGO_PKG_VERSION")),
            },
            media: MediaConfig {
                allowed_hosts: vec![
                    "igtf-media.s3.us-east-2.amazonaws.com".to_string(),
                    "*.s3.amazonaws.com".to_string(),
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: None,
            },
        }
    }
}
