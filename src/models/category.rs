//! Category model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::asset::Asset;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Absolute URL into object storage
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub icon: String,
    pub description: String,
    pub image: Option<Asset>,
}
