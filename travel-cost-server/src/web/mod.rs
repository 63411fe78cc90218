//! Web layer for the travel cost calculator.
//!
//! Serves the calculator form and a JSON API over the same calculation.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
