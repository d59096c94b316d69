use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::shared::state::AppState;
use crate::{handlers, system};

/// All API routes of the portal
pub fn configure_routes(state: AppState) -> Router {
    let auth_state = state.clone();
    let require_auth = move || {
        middleware::from_fn_with_state(auth_state.clone(), system::auth::middleware::require_auth)
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout),
        )
        // System auth routes (protected)
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_session).layer(require_auth()),
        )
        // ========================================
        // MANAGEMENT ROUTES (protected)
        // ========================================
        .route(
            "/api/banks",
            get(handlers::a001_bank::list).layer(require_auth()),
        )
        .with_state(state)
}
