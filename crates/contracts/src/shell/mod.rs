//! Portal shell core: navigation tree, route synthesis, header and layout state.
//!
//! Everything here is target-independent so it can be unit-tested natively
//! and shared between the WASM frontend and the backend.

pub mod layout;
pub mod menu;
pub mod routes;
pub mod session;

pub use layout::UiLayoutState;
pub use menu::{MenuError, MenuNode, MenuNodeConfig, MenuTree};
pub use routes::{
    ConfigurationError, Resolution, RouteBinding, RouteSynthesizer, RouteTable, Synthesis, ViewKey,
};
pub use session::SessionHeader;
