//! Test data helpers
//!
//! Builders for signed-in API clients and sample backend payloads.

use serde_json::{json, Value};
use ExpoAdmin::config::Settings;
use ExpoAdmin::services::{ApiClient, AuthContext, Credential, MediaPolicy, Session};

pub const TEST_TOKEN: &str = "test-access-token";

/// Route test logs through the test writer
pub fn init_test_env() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

/// API client against `base_url` with nobody signed in
pub fn anonymous_client(base_url: &str) -> ApiClient {
    let mut settings = Settings::default();
    settings.api.base_url = base_url.to_string();
    settings.api.timeout_seconds = 5;
    ApiClient::new(&settings.api, AuthContext::new()).expect("api client")
}

/// API client against `base_url` signed in as `role`
pub fn signed_in_client(base_url: &str, role: &str) -> ApiClient {
    let api = anonymous_client(base_url);
    api.auth().login(Session::new(Credential::new(TEST_TOKEN), role));
    api
}

pub fn default_media() -> MediaPolicy {
    MediaPolicy::from_config(&Settings::default().media).expect("media policy")
}

pub fn team_member_json(id: i64, name: &str, role: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@expo.test", name.to_lowercase()),
        "role": role,
        "status": "active"
    })
}

pub fn category_json(id: i64, name: &str, image: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "icon": "🧵",
        "description": format!("{} suppliers", name),
        "image": image,
        "created_at": "2025-01-10T09:30:00Z"
    })
}

pub fn exhibitor_json(id: i64, company: &str) -> Value {
    json!({
        "id": id,
        "company_name": company,
        "contact_person": "Priya Shah",
        "designation": "Director",
        "email": "priya@example.com",
        "contact_number": "+1 555 0100",
        "product": "Looms",
        "address": "12 Mill Road",
        "company_logo": null,
        "status": "pending",
        "created_at": "2025-02-01T12:00:00Z"
    })
}

pub fn visitor_json(id: i64, first_name: &str) -> Value {
    json!({
        "id": id,
        "first_name": first_name,
        "last_name": "Doe",
        "company": "Acme",
        "email": format!("{}@acme.test", first_name.to_lowercase()),
        "phone": "555-0101",
        "industry_interest": "Textiles"
    })
}
