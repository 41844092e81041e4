//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::services::media::HostPattern;
use crate::utils::errors::{ExpoAdminError, Result};
use crate::utils::helpers::normalize_base_url;
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_api_config(&settings.api)?;
    validate_media_config(&settings.media)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate backend API configuration
fn validate_api_config(config: &super::ApiConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(ExpoAdminError::Config(
            "API base URL is required".to_string()
        ));
    }

    normalize_base_url(&config.base_url).map_err(|e| {
        ExpoAdminError::Config(format!("Invalid API base URL '{}': {}", config.base_url, e))
    })?;

    if config.timeout_seconds == 0 {
        return Err(ExpoAdminError::Config(
            "API timeout must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate media host allow-list
fn validate_media_config(config: &super::MediaConfig) -> Result<()> {
    for host in &config.allowed_hosts {
        HostPattern::parse(host).map_err(|reason| {
            ExpoAdminError::Config(format!("Invalid media host pattern '{}': {}", host, reason))
        })?;
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ExpoAdminError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ExpoAdminError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(validate_settings(&Settings::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut settings = Settings::default();
        settings.api.timeout_seconds = 0;
        assert_matches!(validate_settings(&settings), Err(ExpoAdminError::Config(_)));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let mut settings = Settings::default();
        settings.api.base_url = "localhost without scheme".to_string();
        assert_matches!(validate_settings(&settings), Err(ExpoAdminError::Config(_)));
    }

    #[test]
    fn test_rejects_inner_wildcard_host() {
        let mut settings = Settings::default();
        settings.media.allowed_hosts.push("media.*.example.com".to_string());
        assert_matches!(validate_settings(&settings), Err(ExpoAdminError::Config(_)));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(ExpoAdminError::Config(_)));
    }
}
