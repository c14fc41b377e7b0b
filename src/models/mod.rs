//! Core data models for the salary engine.

mod employee;
mod payslip;

pub use employee::Employee;
pub use payslip::Payslip;
