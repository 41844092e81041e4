//! ExpoAdmin staff console
//!
//! Core of the role-gated administrative console for expo staff. This library
//! provides the resource stores that own fetch, create and delete lifecycles
//! against the backend API, the role router that decides which tabs a role
//! sees, and the headless dashboard shell and management panels built on them.

#![allow(non_snake_case)]

pub mod config;
pub mod dashboard;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ExpoAdminError, ApiError, Result};

// Re-export main components for easy access
pub use dashboard::{DashboardShell, ManagementPanel, RoleRouter};
pub use services::{ApiClient, AuthContext, MediaPolicy, SessionClient};
pub use store::{OpOutcome, ResourceStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
