//! Session service
//!
//! Signs staff members in against the backend and initialises the shared
//! `AuthContext`. Admins authenticate with username and password and receive
//! a JWT pair whose `role` claim names their role; team members (manager and
//! sales) use the team login endpoint, which returns the role alongside the
//! tokens. Invited team members first set their password through the
//! invitation token and an emailed one-time code.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use crate::services::api::{failure_detail, ApiClient};
use crate::services::auth::{Credential, Session};
use crate::utils::errors::{ExpoAdminError, Result};

const ADMIN_TOKEN_PATH: &str = "api/token/";
const TEAM_LOGIN_PATH: &str = "api/team/login/";
const SEND_OTP_PATH: &str = "api/password/send-otp/";
const VERIFY_OTP_PATH: &str = "api/password/verify-otp/";
const CREATE_PASSWORD_PATH: &str = "api/password/create/";

#[derive(Debug, Serialize)]
struct AdminLoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct TeamLoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct SendOtpRequest<'a> {
    email: &'a str,
    token: &'a str,
}

#[derive(Debug, Serialize)]
struct VerifyOtpRequest<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Debug, Serialize)]
struct CreatePasswordRequest<'a> {
    email: &'a str,
    otp: &'a str,
    password: &'a str,
    token: &'a str,
}

/// Acknowledgement returned by the password setup endpoints
#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

/// Token pair returned by the admin token endpoint
#[derive(Debug, Deserialize)]
struct TokenPair {
    access: String,
    refresh: Option<String>,
}

/// Response of the team login endpoint
#[derive(Debug, Deserialize)]
struct TeamLoginResponse {
    access: String,
    refresh: Option<String>,
    role: String,
    name: Option<String>,
    email: Option<String>,
}

/// Claims the console reads from an access token
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    pub role: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<i64>,
}

/// Read the claims of an access token without verifying its signature.
///
/// The backend verifies every request; the console only needs the role to
/// pick the dashboard.
pub fn read_claims(token: &str) -> Result<TokenClaims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let data = decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)?;
    Ok(data.claims)
}

/// Logs staff in and out
#[derive(Debug, Clone)]
pub struct SessionClient {
    api: ApiClient,
}

impl SessionClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Sign in as the Django admin; the role comes from the token's claims
    pub async fn login_admin(&self, username: &str, password: &str) -> Result<Session> {
        let body = AdminLoginRequest { username, password };
        let pair: TokenPair = self.post_credentials(ADMIN_TOKEN_PATH, &body).await?;

        let claims = read_claims(&pair.access)?;
        let role = claims.role.ok_or_else(|| {
            ExpoAdminError::Authentication("Access token carries no role claim".to_string())
        })?;

        let session = Session {
            access: Credential::new(pair.access),
            refresh: pair.refresh.map(Credential::new),
            role,
            name: claims.username,
            email: None,
        };

        self.api.auth().login(session.clone());
        Ok(session)
    }

    /// Sign in as a manager or sales team member
    pub async fn login_team(&self, email: &str, password: &str) -> Result<Session> {
        let body = TeamLoginRequest { email, password };
        let response: TeamLoginResponse = self.post_credentials(TEAM_LOGIN_PATH, &body).await?;

        let session = Session {
            access: Credential::new(response.access),
            refresh: response.refresh.map(Credential::new),
            role: response.role,
            name: response.name,
            email: response.email,
        };

        self.api.auth().login(session.clone());
        Ok(session)
    }

    /// End the current session
    pub fn logout(&self) {
        self.api.auth().logout();
    }

    /// Email a one-time code to an invited team member; `token` comes from the invitation link
    pub async fn send_otp(&self, email: &str, token: &str) -> Result<String> {
        let body = SendOtpRequest { email, token };
        let response: MessageResponse = self.post_credentials(SEND_OTP_PATH, &body).await?;
        info!(email = email, "One-time code sent");
        Ok(response.message)
    }

    /// Check a one-time code before asking for the new password
    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<String> {
        let body = VerifyOtpRequest { email, otp };
        let response: MessageResponse = self.post_credentials(VERIFY_OTP_PATH, &body).await?;
        Ok(response.message)
    }

    /// Set the password of an invited team member; `login_team` works afterwards
    pub async fn create_password(&self, email: &str, otp: &str, password: &str, token: &str) -> Result<String> {
        let body = CreatePasswordRequest { email, otp, password, token };
        let response: MessageResponse = self.post_credentials(CREATE_PASSWORD_PATH, &body).await?;
        info!(email = email, "Team member password created");
        Ok(response.message)
    }

    async fn post_credentials<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize,
        T: for<'de> Deserialize<'de>,
    {
        let url = self.api.endpoint(path)?;
        info!(url = %url, "Posting credentials");

        let response = self.api.http().post(url).json(body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let detail = failure_detail(response).await;
            warn!(url = path, status = status.as_u16(), detail = %detail, "Credentials rejected");
            return Err(ExpoAdminError::Authentication(if detail.is_empty() {
                format!("Request failed with HTTP {}", status.as_u16())
            } else {
                detail
            }));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
