//! Web layer for the check-in tracker.
//!
//! Provides the JSON API: nearby-place search and check-in CRUD.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::{AppState, SharedPlaces};
