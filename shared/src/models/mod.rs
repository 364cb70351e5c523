//! Backend contract models
//!
//! Field names match the backend schema exactly (`ShiftIn`,
//! `/employees`, `/allowed/{id}`, `/shifts_list/...`, `/v1/payroll/daily`).

pub mod employee;
pub mod payroll;
pub mod shift;

pub use employee::{AllowedAssignment, Employee};
pub use payroll::{DailyPayroll, PayrollShift};
pub use shift::{ShiftCreated, ShiftDraft, ShiftRow};
