//! Dashboard HTTP service for the art rotation
//!
//! Exposes the curator's rotating artwork pools over a small JSON API for
//! ambient displays.

pub mod config;
pub mod error;
pub mod server;
pub mod state;
pub mod types;
pub mod web;

// Re-export main types
pub use config::DashboardArgs;
pub use error::{DashboardError, DashboardResult};
pub use server::{build_router, DashboardServer};
pub use state::DashboardState;
pub use types::*;
