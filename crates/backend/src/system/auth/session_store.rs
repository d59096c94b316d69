use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use chrono::{DateTime, Duration, Utc};
use contracts::system::auth::SessionInfo;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::shared::config::UserConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("unknown session")]
    UnknownSession,

    #[error("session expired")]
    Expired,

    #[error("cannot hash password of '{username}': {reason}")]
    Hashing { username: String, reason: String },
}

#[derive(Debug, Clone)]
struct UserAccount {
    user_id: String,
    username: String,
    password_hash: String,
    display_name: String,
}

#[derive(Debug, Clone)]
struct StoredSession {
    info: SessionInfo,
    expires_at: DateTime<Utc>,
}

/// In-memory session registry keyed by token hash.
///
/// Passwords are kept as salted argon2 hashes. Tokens are opaque UUIDs
/// handed to the client; only their SHA-256 digest is kept here.
pub struct SessionStore {
    users: Vec<UserAccount>,
    sessions: RwLock<HashMap<String, StoredSession>>,
    ttl: Duration,
    hasher: Argon2<'static>,
}

impl SessionStore {
    pub fn new(users: &[UserConfig], ttl: Duration) -> Result<Self, AuthError> {
        Self::with_hasher(users, ttl, Argon2::default())
    }

    pub fn with_hasher(
        users: &[UserConfig],
        ttl: Duration,
        hasher: Argon2<'static>,
    ) -> Result<Self, AuthError> {
        let users = users
            .iter()
            .map(|u| {
                let salt = SaltString::generate(&mut OsRng);
                let password_hash = hasher
                    .hash_password(u.password.as_bytes(), &salt)
                    .map_err(|e| AuthError::Hashing {
                        username: u.username.clone(),
                        reason: e.to_string(),
                    })?
                    .to_string();

                Ok(UserAccount {
                    user_id: uuid::Uuid::new_v4().to_string(),
                    username: u.username.clone(),
                    password_hash,
                    display_name: u.display_name.clone(),
                })
            })
            .collect::<Result<Vec<_>, AuthError>>()?;

        Ok(Self {
            users,
            sessions: RwLock::new(HashMap::new()),
            ttl,
            hasher,
        })
    }

    /// Verify credentials and open a session. Returns the raw token.
    pub fn login(
        &self,
        username: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<(String, SessionInfo), AuthError> {
        let user = self
            .users
            .iter()
            .find(|u| u.username == username)
            .filter(|u| self.verify_password(password, &u.password_hash))
            .ok_or(AuthError::InvalidCredentials)?;

        let token = uuid::Uuid::new_v4().to_string();
        let info = SessionInfo {
            user_id: user.user_id.clone(),
            display_name: user.display_name.clone(),
            session_started_at: now,
        };

        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        // Sessions nobody asks about again are dropped here.
        sessions.retain(|_, s| s.expires_at > now);
        sessions.insert(
            hash_secret(&token),
            StoredSession {
                info: info.clone(),
                expires_at: now + self.ttl,
            },
        );
        drop(sessions);

        tracing::info!("User '{}' logged in", user.username);
        Ok((token, info))
    }

    /// Session for `token`. Expired sessions are dropped on lookup.
    pub fn current(&self, token: &str, now: DateTime<Utc>) -> Result<SessionInfo, AuthError> {
        let key = hash_secret(token);
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);

        let session = sessions
            .get(&key)
            .cloned()
            .ok_or(AuthError::UnknownSession)?;
        if session.expires_at <= now {
            sessions.remove(&key);
            return Err(AuthError::Expired);
        }
        Ok(session.info)
    }

    /// Close the session. Returns false when the token was not known.
    pub fn logout(&self, token: &str) -> bool {
        let removed = self
            .sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&hash_secret(token));

        if let Some(session) = &removed {
            tracing::info!("Session of '{}' closed", session.info.display_name);
        }
        removed.is_some()
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl SessionStore {
    fn verify_password(&self, password: &str, stored: &str) -> bool {
        match PasswordHash::new(stored) {
            Ok(parsed) => self
                .hasher
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::error!("Stored password hash is unreadable: {}", e);
                false
            }
        }
    }
}

/// Digest of a session token. Tokens are random, so no salt is needed.
fn hash_secret(secret: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn store() -> SessionStore {
        // Minimal argon2 cost keeps the tests fast.
        let params = argon2::Params::new(8, 1, 1, None).unwrap();
        SessionStore::with_hasher(
            &[UserConfig {
                username: "admin".into(),
                password: "secret".into(),
                display_name: "Administrator".into(),
            }],
            Duration::hours(2),
            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        )
        .unwrap()
    }

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, h, m, 0).unwrap()
    }

    #[test]
    fn login_opens_session() {
        let store = store();
        let (token, info) = store.login("admin", "secret", at(9, 5)).unwrap();
        assert_eq!(info.display_name, "Administrator");
        assert_eq!(info.session_started_at, at(9, 5));
        assert_eq!(store.current(&token, at(10, 0)).unwrap(), info);
    }

    #[test]
    fn wrong_password_is_rejected() {
        let store = store();
        assert_eq!(
            store.login("admin", "nope", at(9, 0)).unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(store.active_sessions(), 0);
    }

    #[test]
    fn session_expires_after_ttl() {
        let store = store();
        let (token, _) = store.login("admin", "secret", at(9, 0)).unwrap();
        assert_eq!(store.current(&token, at(11, 0)).unwrap_err(), AuthError::Expired);
        assert_eq!(
            store.current(&token, at(11, 1)).unwrap_err(),
            AuthError::UnknownSession
        );
    }

    #[test]
    fn logout_removes_session() {
        let store = store();
        let (token, _) = store.login("admin", "secret", at(9, 0)).unwrap();
        assert!(store.logout(&token));
        assert!(!store.logout(&token));
        assert_eq!(
            store.current(&token, at(9, 1)).unwrap_err(),
            AuthError::UnknownSession
        );
    }

    #[test]
    fn raw_token_is_not_stored() {
        let store = store();
        let (token, _) = store.login("admin", "secret", at(9, 0)).unwrap();
        let sessions = store.sessions.read().unwrap();
        assert!(!sessions.contains_key(&token));
        assert!(sessions.contains_key(&hash_secret(&token)));
    }

    #[test]
    fn unknown_user_is_rejected() {
        let store = store();
        assert_eq!(
            store.login("root", "secret", at(9, 0)).unwrap_err(),
            AuthError::InvalidCredentials
        );
    }

    #[test]
    fn password_is_stored_salted() {
        let store = store();
        let hash = &store.users[0].password_hash;
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("secret"));
    }

    #[test]
    fn login_sweeps_expired_sessions() {
        let store = store();
        for _ in 0..3 {
            store.login("admin", "secret", at(9, 0)).unwrap();
        }
        assert_eq!(store.active_sessions(), 3);

        // ttl is two hours; these were never looked up again
        store.login("admin", "secret", at(11, 30)).unwrap();
        assert_eq!(store.active_sessions(), 1);
    }

    #[test]
    fn live_sessions_survive_the_sweep() {
        let store = store();
        let (early, _) = store.login("admin", "secret", at(9, 0)).unwrap();
        store.login("admin", "secret", at(10, 0)).unwrap();
        assert_eq!(store.active_sessions(), 2);
        assert!(store.current(&early, at(10, 30)).is_ok());
    }
}
