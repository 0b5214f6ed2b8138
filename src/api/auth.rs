//! Auth Endpoints
//!
//! Login and register are the only unauthenticated calls.

use serde::Serialize;

use super::{api_base, ApiError};
use crate::models::ApiMessage;
use crate::session::AuthSession;

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(serde::Deserialize)]
struct LoginResponse {
    token: String,
    user_id: u32,
}

/// Confirm-password check, run before any network call.
pub fn validate_registration(password: &str, confirm: &str) -> Result<(), ApiError> {
    if password != confirm {
        return Err(ApiError::PasswordMismatch);
    }
    Ok(())
}

pub async fn login(username: String, password: String) -> Result<AuthSession, ApiError> {
    let req = gloo_net::http::Request::post(&format!("{}/login", api_base()))
        .json(&LoginRequest {
            username: &username,
            password: &password,
        })
        .map_err(ApiError::decode)?;
    let resp = req.send().await.map_err(ApiError::network)?;
    if !resp.ok() {
        let status = resp.status();
        let message = resp
            .json::<ApiMessage>()
            .await
            .map(|m| m.message)
            .unwrap_or_default();
        return Err(ApiError::Server { status, message });
    }
    let body = resp.json::<LoginResponse>().await.map_err(ApiError::decode)?;
    Ok(AuthSession {
        token: body.token,
        user_id: body.user_id,
    })
}

pub async fn register(
    username: String,
    email: String,
    password: String,
    confirm: String,
) -> Result<(), ApiError> {
    validate_registration(&password, &confirm)?;

    let req = gloo_net::http::Request::post(&format!("{}/register", api_base()))
        .json(&RegisterRequest {
            username: &username,
            email: &email,
            password: &password,
        })
        .map_err(ApiError::decode)?;
    let resp = req.send().await.map_err(ApiError::network)?;
    if !resp.ok() {
        let status = resp.status();
        let message = resp
            .json::<ApiMessage>()
            .await
            .map(|m| m.message)
            .unwrap_or_default();
        return Err(ApiError::Server { status, message });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_fail_before_any_request() {
        assert_eq!(
            validate_registration("hunter2", "hunter3"),
            Err(ApiError::PasswordMismatch)
        );
    }

    #[test]
    fn matching_passwords_pass_local_validation() {
        assert!(validate_registration("hunter2", "hunter2").is_ok());
    }
}
