//! API module for the HTTP rendering surface
//!
//! Exposes the diagnostic log's read and control operations to a single
//! debugging panel over REST.

pub mod http;
pub mod rest;
pub mod state;

pub use http::create_router;
pub use state::AppState;
