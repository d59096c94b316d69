use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use contracts::system::auth::SessionInfo;

/// Session placed into request extensions by `require_auth`.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub token: String,
    pub info: SessionInfo,
}

/// Extractor for the current session.
/// Usage in handlers: `async fn handler(CurrentSession(session): CurrentSession)`
pub struct CurrentSession(pub AuthenticatedSession);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedSession>()
            .cloned()
            .map(CurrentSession)
            .ok_or(StatusCode::UNAUTHORIZED)
    }
}
