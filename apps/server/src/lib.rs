//! Leadfolio HTTP API server library.
//!
//! Exposed as a library so integration tests can build the router without
//! binding a socket.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
