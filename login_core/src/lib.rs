//! Common code across all login clients (TUI, WASM in the browser)

/// The username/password pair sent to the server.
pub mod credentials;
pub use credentials::Credentials;

/// Talking to the login endpoint.
pub mod api;

/// The login form handler and the capabilities it runs against.
pub mod handler;
pub use handler::{LoginFormHandler, Outcome, DASHBOARD_PATH};
