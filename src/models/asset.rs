//! Binary asset attached to a create request

use std::fmt;
use std::path::Path;
use crate::utils::errors::{ExpoAdminError, Result};

/// File uploaded alongside structured fields; bytes are passed through untouched
#[derive(Clone, PartialEq, Eq)]
pub struct Asset {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Asset {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).map(str::to_string);
        Self { file_name, content_type, bytes }
    }

    /// Read an asset from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ExpoAdminError::InvalidInput(format!("Not a file path: {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }
}

impl fmt::Debug for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Asset")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let extension = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match extension.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_extension() {
        assert_eq!(Asset::new("logo.PNG", vec![]).content_type.as_deref(), Some("image/png"));
        assert_eq!(Asset::new("photo.jpeg", vec![]).content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(Asset::new("README", vec![]).content_type, None);
    }

    #[tokio::test]
    async fn test_from_path_reads_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("banner.webp");
        std::fs::write(&path, b"RIFF").unwrap();

        let asset = Asset::from_path(&path).await.unwrap();
        assert_eq!(asset.file_name, "banner.webp");
        assert_eq!(asset.bytes, b"RIFF".to_vec());
        assert_eq!(asset.content_type.as_deref(), Some("image/webp"));
    }
}
