//! Daily payroll summary (read-only)
//!
//! Computed entirely by the backend's `/v1/payroll/daily` endpoint; this
//! client consumes the summary and never produces one. The hour-tier
//! split, night rule and max-rate simulation are backend-owned rules and
//! are reproduced here only as field documentation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-shift detail inside a [`DailyPayroll`] (`include_shifts=true`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollShift {
    pub shift_id: i64,
    pub subsidiary: String,
    pub role: String,
    pub start_time: String,
    pub end_time: String,
    pub hours: f64,
    /// Rate of the (subsidiary, role) assignment, if one is on file
    pub hourly_rate: Option<f64>,
    pub cross_midnight: bool,
}

/// Computed daily summary (`GET /v1/payroll/daily`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPayroll {
    pub employee_id: String,
    pub employee_name: String,
    /// Work date, `YYYY-MM-DD`
    pub date: String,

    /// Overtime threshold in hours (7 when the night rule is active, else 8)
    pub overtime_threshold: f64,
    /// Hours overlapping the 22:00–06:00 night window
    pub night_hours_in_window: f64,
    pub night_rule_active: bool,

    pub total_hours: f64,
    pub hours_100: f64,
    pub hours_125: f64,
    pub hours_150: f64,

    pub daily_standard: f64,
    /// `max(0, daily_standard - total_hours)`
    pub daily_deficit: f64,

    /// Highest hourly rate among today's assignments
    pub max_rate: f64,
    pub salary_simulation: f64,

    /// ISO-8601 computation timestamp (backend local time)
    pub calculated_at: String,

    /// Present when `include_breakdown=true`
    #[serde(default)]
    pub hours_by_subsidiary: BTreeMap<String, f64>,
    #[serde(default)]
    pub hours_by_role: BTreeMap<String, f64>,

    /// Present when `include_shifts=true`
    #[serde(default)]
    pub shifts: Vec<PayrollShift>,
}
