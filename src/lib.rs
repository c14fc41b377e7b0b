//! Salary calculation engine with interchangeable pay policies.
//!
//! An [`models::Employee`] holds a [`policy::SalaryPolicy`] chosen at
//! construction time; the salary calculation is delegated entirely to that
//! policy, so new pay schemes plug in without touching the employee. The
//! [`hierarchy`] module keeps the contrasting form where each employee type
//! owns its own calculation.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod models;
pub mod policy;
