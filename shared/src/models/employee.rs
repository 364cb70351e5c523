//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee record (`GET /employees`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    /// Standard working day in hours (deficit baseline)
    pub daily_standard: f64,
}

/// Role/subsidiary combination an employee may work (`GET /allowed/{employee_id}`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowedAssignment {
    pub role: String,
    pub subsidiary: String,
    pub hourly_rate: f64,
}
