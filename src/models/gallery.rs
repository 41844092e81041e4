//! Gallery image model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::asset::Asset;

/// Where a gallery image is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Carousel,
    Banner,
    #[default]
    Gallery,
    Exhibitor,
}

impl GalleryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryKind::Carousel => "carousel",
            GalleryKind::Banner => "banner",
            GalleryKind::Gallery => "gallery",
            GalleryKind::Exhibitor => "exhibitor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: GalleryKind,
    #[serde(default = "default_display_order")]
    pub display_order: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_display_order() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateGalleryImageRequest {
    pub title: String,
    pub description: String,
    pub kind: GalleryKind,
    pub display_order: u32,
    pub image: Option<Asset>,
}

impl Default for CreateGalleryImageRequest {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            kind: GalleryKind::default(),
            display_order: default_display_order(),
            image: None,
        }
    }
}
