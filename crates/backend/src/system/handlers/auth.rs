use axum::{
    extract::{Json, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use contracts::system::auth::{LoginRequest, LoginResponse, SessionInfo};

use crate::shared::{error::ApiError, state::AppState};
use crate::system::auth::bearer_token;
use crate::system::auth::extractor::CurrentSession;

/// POST /api/system/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (access_token, session) =
        state
            .sessions
            .login(&request.username, &request.password, Utc::now())?;

    Ok(Json(LoginResponse {
        access_token,
        session,
    }))
}

/// POST /api/system/auth/logout
///
/// Always succeeds: an unknown or missing token means there is nothing to close.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        if !state.sessions.logout(token) {
            tracing::debug!("logout for an unknown session");
        }
    }
    StatusCode::OK
}

/// GET /api/system/auth/me (protected by middleware)
pub async fn current_session(CurrentSession(session): CurrentSession) -> Json<SessionInfo> {
    Json(session.info)
}
