//! Client wrappers for the auth endpoints. These are the only calls made
//! without a stored token; on success the returned session is what gets
//! persisted. The token itself stays opaque.

use crate::api::{ApiClient, ApiError};
use crate::features::auth::types::{LoginRequest, RegisterRequest};
use crate::session::Session;
use serde_json::Value;

/// Minimum password length accepted before a signup request is sent.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Sign in and return the session to persist.
///
/// # Errors
/// Propagates the API client's failure surface; a response without a token
/// is a missing-field failure.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<Session, ApiError> {
    let value = client.post("/auth/login", request).await?.into_value();
    session_from_value(value)
}

/// Create an account and return the session to persist.
///
/// # Errors
/// Propagates the API client's failure surface; a response without a token
/// is a missing-field failure.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<Session, ApiError> {
    let value = client.post("/auth/register", request).await?.into_value();
    session_from_value(value)
}

/// Pre-submit password checks, mirroring the signup form.
///
/// # Errors
/// Returns a user-facing message when the password is too short or the
/// confirmation does not match.
pub fn validate_password(password: &str, confirm: Option<&str>) -> Result<(), String> {
    if let Some(confirm) = confirm {
        if confirm != password {
            return Err("Passwords do not match".to_string());
        }
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    Ok(())
}

fn session_from_value(value: Value) -> Result<Session, ApiError> {
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .ok_or(ApiError::MissingField("token"))?
        .to_string();

    let name = value
        .pointer("/user/name")
        .and_then(Value::as_str)
        .map(ToString::to_string);
    let email = value
        .pointer("/user/email")
        .and_then(Value::as_str)
        .map(ToString::to_string);

    Ok(Session { token, name, email })
}
