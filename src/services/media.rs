//! Media host allow-list
//!
//! Uploaded images are served from external object storage. Only URLs whose
//! host is on the configured allow-list are handed to presentation code.

use url::Url;
use crate::config::MediaConfig;
use crate::utils::errors::{ExpoAdminError, Result};

/// An exact host or a `*.suffix` pattern matching exactly one extra label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostPattern {
    Exact(String),
    Subdomain(String),
}

impl HostPattern {
    pub fn parse(raw: &str) -> std::result::Result<Self, String> {
        let raw = raw.trim().to_ascii_lowercase();
        if raw.is_empty() {
            return Err("empty host".to_string());
        }

        if let Some(suffix) = raw.strip_prefix("*.") {
            if suffix.is_empty() || suffix.contains('*') {
                return Err("wildcard must be a single leading label".to_string());
            }
            return Ok(HostPattern::Subdomain(suffix.to_string()));
        }

        if raw.contains('*') {
            return Err("wildcard must be a single leading label".to_string());
        }
        Ok(HostPattern::Exact(raw))
    }

    pub fn matches(&self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        match self {
            HostPattern::Exact(expected) => host == *expected,
            HostPattern::Subdomain(suffix) => host
                .strip_suffix(suffix.as_str())
                .and_then(|prefix| prefix.strip_suffix('.'))
                .map(|label| !label.is_empty() && !label.contains('.'))
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MediaPolicy {
    patterns: Vec<HostPattern>,
}

impl MediaPolicy {
    pub fn from_config(config: &MediaConfig) -> Result<Self> {
        let patterns = config
            .allowed_hosts
            .iter()
            .map(|host| {
                HostPattern::parse(host).map_err(|reason| {
                    ExpoAdminError::Config(format!("Invalid media host pattern '{}': {}", host, reason))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Parse `raw` and return it only if it is an https URL on an allowed host
    pub fn renderable(&self, raw: &str) -> Option<Url> {
        let url = Url::parse(raw).ok()?;
        if url.scheme() != "https" {
            return None;
        }
        let host = url.host_str()?;
        if self.patterns.iter().any(|pattern| pattern.matches(host)) {
            Some(url)
        } else {
            None
        }
    }
}
