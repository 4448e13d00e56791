use contracts::shared::BaseResponse;
use contracts::system::user::{LoginUser, UserLoginRequest, UserRegisterRequest};
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;

/// Fetch the current session's identity. A recognized but logged-out
/// session still succeeds, with a `notLogin` role in the payload.
pub async fn get_login_user() -> Result<LoginUser, String> {
    let response = Request::get(&api_url("/api/user/get/login"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get login user failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<LoginUser>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !body.is_ok() {
        return Err(format!(
            "Get login user failed: {}",
            body.message.unwrap_or_else(|| body.code.to_string())
        ));
    }
    body.data
        .ok_or_else(|| "Get login user failed: empty response".to_string())
}

/// Login with account and password; returns the established identity.
pub async fn login(user_account: String, user_password: String) -> Result<LoginUser, String> {
    let request = UserLoginRequest {
        user_account,
        user_password,
    };

    let response = Request::post(&api_url("/api/user/login"))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<LoginUser>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !body.is_ok() {
        return Err(format!(
            "Login failed: {}",
            body.message.unwrap_or_else(|| body.code.to_string())
        ));
    }
    body.data.ok_or_else(|| "Login failed: empty response".to_string())
}

/// Register a new account; returns the new user id.
pub async fn register(
    user_account: String,
    user_password: String,
    check_password: String,
) -> Result<i64, String> {
    let request = UserRegisterRequest {
        user_account,
        user_password,
        check_password,
    };

    let response = Request::post(&api_url("/api/user/register"))
        .credentials(RequestCredentials::Include)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Register failed: {}", response.status()));
    }

    let body = response
        .json::<BaseResponse<i64>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    if !body.is_ok() {
        return Err(format!(
            "Register failed: {}",
            body.message.unwrap_or_else(|| body.code.to_string())
        ));
    }
    body.data
        .ok_or_else(|| "Register failed: empty response".to_string())
}

/// Logout (drop the server-side session).
pub async fn logout() -> Result<(), String> {
    let response = Request::post(&api_url("/api/user/logout"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}
