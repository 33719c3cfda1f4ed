//! HTTP API module for the Due Date Engine.
//!
//! This module provides the REST endpoint for computing loan repayment
//! due dates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DateInput};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
