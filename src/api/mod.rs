//! HTTP API module for the salary engine.
//!
//! This module provides the REST API endpoint for calculating a payslip
//! from an employee and a pay scheme.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, SchemeRequest};
pub use response::ApiError;
pub use state::AppState;
