//! Services module
//!
//! This module contains the session, transport and media services the
//! stores and dashboard are built on.

pub mod api;
pub mod auth;
pub mod media;
pub mod session;

// Re-export commonly used services
pub use api::{ApiClient, RequestBody, MultipartBody, AssetPart};
pub use auth::{AuthContext, Credential, Session};
pub use media::{MediaPolicy, HostPattern};
pub use session::SessionClient;
