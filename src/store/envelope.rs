//! List response normalization
//!
//! List endpoints answer either with a bare JSON array or with a paginated
//! envelope carrying the items under `results`. Both shapes are parsed once at
//! the store boundary and collapsed into a plain `Vec`.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Enveloped { results: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Enveloped { results } => results,
        }
    }

    pub fn is_enveloped(&self) -> bool {
        matches!(self, ListEnvelope::Enveloped { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamMember;

    const ITEMS: &str = r#"[{"id":1,"name":"A","email":"a@x.com","role":"sales"}]"#;

    #[test]
    fn test_bare_and_enveloped_normalize_identically() {
        let bare: ListEnvelope<TeamMember> = serde_json::from_str(ITEMS).unwrap();
        let wrapped: ListEnvelope<TeamMember> = serde_json::from_str(&format!(
            r#"{{"count":1,"next":null,"previous":null,"results":{}}}"#,
            ITEMS
        ))
        .unwrap();

        assert!(!bare.is_enveloped());
        assert!(wrapped.is_enveloped());
        assert_eq!(bare.into_items(), wrapped.into_items());
    }

    #[test]
    fn test_other_shapes_are_rejected() {
        assert!(serde_json::from_str::<ListEnvelope<TeamMember>>(r#"{"items":[]}"#).is_err());
        assert!(serde_json::from_str::<ListEnvelope<TeamMember>>(r#""nope""#).is_err());
    }
}
