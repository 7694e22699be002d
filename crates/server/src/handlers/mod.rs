//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `prodesc-server`.

pub mod general;
pub mod generation_handlers;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use general::*;
pub use generation_handlers::*;

// Shared items used by the handler modules.
use super::{errors::AppError, state::AppState};
