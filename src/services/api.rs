//! Backend API client
//!
//! This service wraps the HTTP client used by every resource store. It joins
//! endpoint paths onto the configured base URL, attaches the bearer credential
//! from the shared `AuthContext`, encodes JSON or multipart bodies, and maps
//! transport failures and HTTP statuses onto `ApiError`.

use std::time::{Duration, Instant};
use reqwest::header::CONTENT_TYPE;
use reqwest::{multipart, Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;
use crate::config::ApiConfig;
use crate::models::Asset;
use crate::services::auth::AuthContext;
use crate::utils::errors::{ApiError, ApiResult, Result};
use crate::utils::helpers::{join_endpoint, normalize_base_url};
use crate::utils::logging::{log_api_error, log_request};

/// Body of a create request
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(MultipartBody),
}

/// Structured text fields plus at most one binary part
#[derive(Debug, Clone, Default)]
pub struct MultipartBody {
    pub fields: Vec<(String, String)>,
    pub asset: Option<AssetPart>,
}

/// Binary part of a multipart body under a fixed field name
#[derive(Debug, Clone)]
pub struct AssetPart {
    pub field: &'static str,
    pub asset: Asset,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: impl ToString) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    /// Attach the asset under `field`; a `None` asset leaves the body text-only
    pub fn asset(mut self, field: &'static str, asset: Option<&Asset>) -> Self {
        self.asset = asset.map(|asset| AssetPart { field, asset: asset.clone() });
        self
    }

    fn into_form(self) -> ApiResult<multipart::Form> {
        let mut form = multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }

        if let Some(AssetPart { field, asset }) = self.asset {
            let mut part = multipart::Part::bytes(asset.bytes).file_name(asset.file_name);
            if let Some(content_type) = asset.content_type.as_deref() {
                part = part
                    .mime_str(content_type)
                    .map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
            }
            form = form.part(field, part);
        }

        Ok(form)
    }
}

/// Authenticated client for the backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    auth: AuthContext,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig, auth: AuthContext) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;
        let base_url = normalize_base_url(&config.base_url)?;

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    /// Resolve an endpoint path against the base URL
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        join_endpoint(&self.base_url, path).map_err(|e| ApiError::Endpoint(format!("{}: {}", path, e)))
    }

    /// Authenticated GET returning a parsed JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.send(Method::GET, path, None).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            log_api_error("backend", &e.to_string(), Some(path));
            ApiError::Parse(e.to_string())
        })
    }

    /// Authenticated POST; the response body is not inspected
    pub async fn post(&self, path: &str, body: RequestBody) -> ApiResult<()> {
        self.send(Method::POST, path, Some(body)).await.map(|_| ())
    }

    /// Authenticated DELETE; the response body is not inspected
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(Method::DELETE, path, None).await.map(|_| ())
    }

    async fn send(&self, method: Method, path: &str, body: Option<RequestBody>) -> ApiResult<Response> {
        let credential = self.auth.credential().ok_or(ApiError::MissingCredential)?;
        let url = self.endpoint(path)?;

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .bearer_auth(credential.expose());

        request = match body {
            Some(RequestBody::Json(value)) => {
                let bytes = serde_json::to_vec(&value)
                    .map_err(|e| ApiError::InvalidPayload(e.to_string()))?;
                request.header(CONTENT_TYPE, "application/json").body(bytes)
            }
            // reqwest sets multipart/form-data with the boundary itself
            Some(RequestBody::Multipart(body)) => request.multipart(body.into_form()?),
            None => request,
        };

        debug!(method = %method, url = %url, "Sending backend request");
        let started = Instant::now();

        let response = request.send().await.map_err(|e| {
            log_api_error("backend", &e.to_string(), Some(url.as_str()));
            ApiError::Network(e.to_string())
        })?;

        let status = response.status();
        log_request(
            method.as_str(),
            url.as_str(),
            status.as_u16(),
            started.elapsed().as_millis() as u64,
        );

        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ApiError::Unauthorized(status.as_u16()));
        }

        let detail = failure_detail(response).await;
        Err(ApiError::Failed {
            status: status.as_u16(),
            detail,
        })
    }
}

/// Pull a readable reason out of an error response
pub(crate) async fn failure_detail(response: Response) -> String {
    let text = response.text().await.unwrap_or_default();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
    }

    text.chars().take(200).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_endpoint_joins_relative_to_base_path() {
        let mut settings = Settings::default();
        settings.api.base_url = "https://backend.example.com/staging".to_string();
        let client = ApiClient::new(&settings.api, AuthContext::new()).unwrap();

        let url = client.endpoint("api/categories/").unwrap();
        assert_eq!(url.as_str(), "https://backend.example.com/staging/api/categories/");
    }

    #[tokio::test]
    async fn test_missing_credential_short_circuits() {
        let client = ApiClient::new(&Settings::default().api, AuthContext::new()).unwrap();
        let result: ApiResult<serde_json::Value> = client.get_json("api/team/list/").await;
        assert_eq!(result.unwrap_err(), ApiError::MissingCredential);
    }

    #[test]
    fn test_multipart_body_builder() {
        let asset = Asset::new("a.png", vec![1, 2, 3]);
        let body = MultipartBody::new()
            .text("name", "Textiles")
            .text("display_order", 3)
            .asset("image", Some(&asset));

        assert_eq!(body.fields, vec![
            ("name".to_string(), "Textiles".to_string()),
            ("display_order".to_string(), "3".to_string()),
        ]);
        assert_eq!(body.asset.as_ref().map(|part| part.field), Some("image"));
        assert!(body.into_form().is_ok());
    }
}
