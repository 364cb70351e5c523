//! Shared types for the EZTIME client
//!
//! Wire DTOs for the EZTIME backend contract: employees, allowed
//! role/subsidiary assignments, shift records, and the computed daily
//! payroll summary. Pure data; all business logic lives in the backend
//! service this client talks to.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorBody, ShiftRejection};
pub use models::{
    AllowedAssignment, DailyPayroll, Employee, PayrollShift, ShiftCreated, ShiftDraft, ShiftRow,
};
