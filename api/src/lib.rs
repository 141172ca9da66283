//! HTTP surface of the Prown auth backend
//!
//! Exposes signup, signin and profile endpoints for service providers and
//! customers on top of `prown_core`'s `AccountService`.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::create_app;
pub use routes::AppState;
