use contracts::system::auth::{LoginRequest, LoginResponse, SessionInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/system/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Err("Invalid username or password".to_string());
    }
    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Close the server-side session
pub async fn logout(access_token: &str) -> Result<(), String> {
    let response = Request::post(&api_url("/api/system/auth/logout"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

/// Session behind `access_token`; `Ok(None)` when the server no longer knows it.
pub async fn get_current_session(access_token: &str) -> Result<Option<SessionInfo>, String> {
    let response = Request::get(&api_url("/api/system/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 401 {
        return Ok(None);
    }
    if !response.ok() {
        return Err(format!("Get current session failed: {}", response.status()));
    }

    response
        .json::<SessionInfo>()
        .await
        .map(Some)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
