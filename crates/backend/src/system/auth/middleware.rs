use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use super::{bearer_token, extractor::AuthenticatedSession};
use crate::shared::{error::ApiError, state::AppState};

/// Middleware that requires a live session
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers())
        .ok_or(ApiError::MissingToken)?
        .to_string();

    let info = state.sessions.current(&token, Utc::now())?;

    // Handlers read it back through `CurrentSession`
    req.extensions_mut()
        .insert(AuthenticatedSession { token, info });

    Ok(next.run(req).await)
}
