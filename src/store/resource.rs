//! Resource descriptors
//!
//! A `Resource` ties an entity type to its draft type, its endpoints, and the
//! way a draft is encoded for the create request. `ResourceStore` and
//! `ManagementPanel` are generic over it.

use std::fmt::Debug;
use serde::de::DeserializeOwned;
use crate::services::api::RequestBody;

/// Endpoint paths of one resource, relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub list: String,
    pub create: String,
    /// The item id and a trailing slash are appended to this
    pub delete_prefix: String,
}

impl Endpoints {
    /// `{name}/list/`, `{name}/create/`, `{name}/delete/{id}/`
    pub fn explicit(name: &str) -> Self {
        Self {
            list: format!("{}/list/", name),
            create: format!("{}/create/", name),
            delete_prefix: format!("{}/delete/", name),
        }
    }

    /// Collection routes: list and create share a path, delete is `{list}{id}/`
    pub fn collection(name: &str) -> Self {
        let list = format!("{}/", name);
        Self {
            create: list.clone(),
            delete_prefix: list.clone(),
            list,
        }
    }

    pub fn delete(&self, id: i64) -> String {
        format!("{}{}/", self.delete_prefix, id)
    }
}

pub trait Resource: Send + Sync + 'static {
    type Item: DeserializeOwned + Clone + Debug + Send + Sync;
    type Draft: Default + Clone + Debug + Send + Sync;

    /// Singular noun used in messages, e.g. `category`
    const SINGULAR: &'static str;
    /// Plural noun used in messages, e.g. `categories`
    const PLURAL: &'static str;

    fn endpoints() -> Endpoints;

    fn item_id(item: &Self::Item) -> i64;

    /// Encode a draft for the create request
    fn body(draft: &Self::Draft) -> RequestBody;

    /// Form-level checks applied by the add modal before submitting
    fn validate(_draft: &Self::Draft) -> Result<(), String> {
        Ok(())
    }

    /// Asset URL to render for an item, if the resource has one
    fn asset_url(_item: &Self::Item) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_endpoints() {
        let endpoints = Endpoints::explicit("api/team");
        assert_eq!(endpoints.list, "api/team/list/");
        assert_eq!(endpoints.create, "api/team/create/");
        assert_eq!(endpoints.delete(7), "api/team/delete/7/");
    }

    #[test]
    fn test_collection_endpoints() {
        let endpoints = Endpoints::collection("api/categories");
        assert_eq!(endpoints.list, "api/categories/");
        assert_eq!(endpoints.create, "api/categories/");
        assert_eq!(endpoints.delete(12), "api/categories/12/");
    }
}
