//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for computing payroll from
//! job rates and time punches.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiErrorResponse, PayrollResponse};
pub use state::AppState;
