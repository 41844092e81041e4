//! Mock backend API server for testing
//!
//! Simulates the list, create, delete and login endpoints of the backend with
//! wiremock, and gives access to the requests the console actually sent.

use serde_json::Value;
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

/// Mock backend server for testing
pub struct BackendMockServer {
    pub server: MockServer,
}

impl BackendMockServer {
    /// Start a new mock backend
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answer GET `list_path` with `body`
    pub async fn mock_list(&self, list_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(list_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Answer GET `list_path` with `body` exactly once, after `delay_ms`
    pub async fn mock_list_once(&self, list_path: &str, body: Value, delay_ms: Option<u64>) {
        let mut response = ResponseTemplate::new(200).set_body_json(body);
        if let Some(delay) = delay_ms {
            response = response.set_delay(Duration::from_millis(delay));
        }

        Mock::given(method("GET"))
            .and(path(list_path))
            .respond_with(response)
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// Answer GET `list_path` with a raw status and body
    pub async fn mock_list_raw(&self, list_path: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(list_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Answer GET `list_path` with `body`, expecting exactly `times` calls
    pub async fn expect_list(&self, list_path: &str, body: Value, times: u64) {
        Mock::given(method("GET"))
            .and(path(list_path))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Answer POST `create_path` with `status`
    pub async fn mock_create(&self, create_path: &str, status: u16) {
        Mock::given(method("POST"))
            .and(path(create_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({"id": 99})))
            .mount(&self.server)
            .await;
    }

    /// Answer DELETE `delete_path` with `status`, expecting exactly `times` calls
    pub async fn expect_delete(&self, delete_path: &str, status: u16, times: u64) {
        Mock::given(method("DELETE"))
            .and(path(delete_path))
            .respond_with(ResponseTemplate::new(status))
            .expect(times)
            .mount(&self.server)
            .await;
    }

    /// Answer POST `login_path` with `status` and `body`
    pub async fn mock_login(&self, login_path: &str, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(login_path))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Every request received so far
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests received for `method_name` on `request_path`
    pub async fn requests_to(&self, method_name: &str, request_path: &str) -> Vec<Request> {
        self.requests()
            .await
            .into_iter()
            .filter(|request| request.method.as_str() == method_name && request.url.path() == request_path)
            .collect()
    }
}

/// Content type header of a received request
pub fn content_type(request: &Request) -> String {
    request
        .headers
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// Authorization header of a received request
pub fn authorization(request: &Request) -> String {
    request
        .headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
