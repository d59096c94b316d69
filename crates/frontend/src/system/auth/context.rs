use contracts::system::auth::SessionInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub session: Option<SessionInfo>,
}

/// Authentication collaborator of the portal.
///
/// Created once by `App` and provided via context.
#[derive(Clone, Copy)]
pub struct AuthService {
    state: RwSignal<AuthState>,
}

impl AuthService {
    /// Picks up a token saved by a previous visit; [`restore`](Self::restore)
    /// validates it.
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(AuthState {
                access_token: storage::get_access_token(),
                session: None,
            }),
        }
    }

    /// Validate the stored token and load its session.
    pub fn restore(&self) {
        let Some(token) = self.state.with_untracked(|s| s.access_token.clone()) else {
            return;
        };

        let state = self.state;
        spawn_local(async move {
            match api::get_current_session(&token).await {
                Ok(Some(session)) => {
                    state.update(|s| s.session = Some(session));
                }
                Ok(None) => {
                    log::info!("Stored session is no longer valid");
                    storage::clear_access_token();
                    state.set(AuthState::default());
                }
                Err(e) => {
                    // Keep the token: the server may just be unreachable.
                    log::warn!("Session restore failed: {}", e);
                }
            }
        });
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.access_token.is_some())
    }

    pub fn current_user(&self) -> Option<SessionInfo> {
        self.state.with(|s| s.session.clone())
    }

    pub fn access_token_untracked(&self) -> Option<String> {
        self.state.with_untracked(|s| s.access_token.clone())
    }

    pub async fn login(&self, username: String, password: String) -> Result<(), String> {
        let response = api::login(username, password).await?;

        storage::save_access_token(&response.access_token);
        self.state.set(AuthState {
            access_token: Some(response.access_token),
            session: Some(response.session),
        });

        Ok(())
    }

    /// Clear the session. Local state is cleared even when the server call
    /// fails; the error is returned for reporting.
    pub async fn logout(&self) -> Result<(), String> {
        let result = match self.access_token_untracked() {
            Some(token) => api::logout(&token).await,
            None => Ok(()),
        };

        storage::clear_access_token();
        self.state.set(AuthState::default());

        result
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}
