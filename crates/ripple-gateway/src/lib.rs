//! HTTP front of Ripple: request reflector endpoints and `/ln/<code>`
//! short-link redirects.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod refresh;
pub mod state;

pub use app::App;
pub use refresh::spawn_refresh;
pub use state::AppState;
