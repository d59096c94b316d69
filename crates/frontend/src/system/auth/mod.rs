pub mod api;
pub mod context;
pub mod storage;

pub use context::{AuthService, AuthState};

/// Route of the login page. Not part of the portal route table.
pub const LOGIN_PATH: &str = "/login";
