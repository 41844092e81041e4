//! Error handling for ExpoAdmin
//!
//! This module defines the main error types used throughout the crate.
//! Store operations never return these to callers: `ApiError` values are
//! caught at the store boundary and turned into user-facing messages.

use thiserror::Error;

/// Main error type for ExpoAdmin
#[derive(Error, Debug)]
pub enum ExpoAdminError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration loading error: {0}")]
    ConfigLoad(#[from] config::ConfigError),

    #[error("Backend API error: {0}")]
    Api(#[from] ApiError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Backend API errors, one variant per failure class a store distinguishes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("No credential available for the request")]
    MissingCredential,

    #[error("Request did not complete: {0}")]
    Network(String),

    #[error("Request rejected as unauthorized (HTTP {0})")]
    Unauthorized(u16),

    #[error("Request failed (HTTP {status}): {detail}")]
    Failed { status: u16, detail: String },

    #[error("Response body is not valid JSON: {0}")]
    Parse(String),

    #[error("Request payload could not be encoded: {0}")]
    InvalidPayload(String),

    #[error("Invalid endpoint: {0}")]
    Endpoint(String),
}

impl ApiError {
    /// Whether this failure means the credential was missing or rejected
    pub fn is_authorization(&self) -> bool {
        matches!(self, ApiError::MissingCredential | ApiError::Unauthorized(_))
    }
}

/// Result type alias for ExpoAdmin operations
pub type Result<T> = std::result::Result<T, ExpoAdminError>;

/// Result type alias for backend API calls
pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ExpoAdminError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ExpoAdminError::Config(_) => false,
            ExpoAdminError::ConfigLoad(_) => false,
            ExpoAdminError::Api(e) => !e.is_authorization(),
            ExpoAdminError::Http(_) => true,
            ExpoAdminError::Authentication(_) => false,
            ExpoAdminError::Token(_) => false,
            ExpoAdminError::Serialization(_) => false,
            ExpoAdminError::Io(_) => true,
            ExpoAdminError::UrlParse(_) => false,
            ExpoAdminError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ExpoAdminError::Config(_) => ErrorSeverity::Critical,
            ExpoAdminError::ConfigLoad(_) => ErrorSeverity::Critical,
            ExpoAdminError::Authentication(_) => ErrorSeverity::Warning,
            ExpoAdminError::Token(_) => ErrorSeverity::Warning,
            ExpoAdminError::Api(e) if e.is_authorization() => ErrorSeverity::Warning,
            ExpoAdminError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
