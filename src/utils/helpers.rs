//! Helper functions
//!
//! Small string and URL utilities shared by the services and the dashboard.

use url::Url;
use crate::utils::errors::{ExpoAdminError, Result};

/// Parse the configured base URL, making sure relative joins keep its path
pub fn normalize_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExpoAdminError::Config("API base URL is empty".to_string()));
    }

    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&with_slash)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ExpoAdminError::Config(format!("Unsupported API scheme: {}", other))),
    }
}

/// Join an endpoint path onto a normalized base URL
pub fn join_endpoint(base: &Url, path: &str) -> std::result::Result<Url, url::ParseError> {
    base.join(path.trim_start_matches('/'))
}

/// Turn a tab identifier like `manage-team` into `Manage Team`
pub fn display_label(identifier: &str) -> String {
    identifier
        .split(|c| c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check that an email address has the basic `local@domain.tld` shape
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_keeps_path() {
        let base = normalize_base_url("https://backend.example.com/v1").unwrap();
        assert_eq!(base.as_str(), "https://backend.example.com/v1/");
        let joined = join_endpoint(&base, "/api/team/list/").unwrap();
        assert_eq!(joined.as_str(), "https://backend.example.com/v1/api/team/list/");
    }

    #[test]
    fn test_normalize_base_url_rejects_bad_input() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("ftp://example.com").is_err());
        assert!(normalize_base_url("not a url").is_err());
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("manage-team"), "Manage Team");
        assert_eq!(display_label("gallery"), "Gallery");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_plausible_email("a@x.com"));
        assert!(!is_plausible_email("a@x"));
        assert!(!is_plausible_email("@x.com"));
        assert!(!is_plausible_email("a b@x.com"));
    }
}
