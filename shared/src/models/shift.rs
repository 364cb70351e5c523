//! Shift Model

use serde::{Deserialize, Serialize};

use crate::util::{is_valid_date, is_valid_hhmm};

/// Create shift payload (`POST /shifts`)
///
/// Built fresh from current form state on every submission attempt;
/// never persisted locally. All fields are required by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDraft {
    pub employee_id: String,
    /// Work date, `YYYY-MM-DD`
    pub date: String,
    pub subsidiary: String,
    pub role: String,
    /// Shift start, `HH:MM`
    pub start_time: String,
    /// Shift end, `HH:MM` (an end at or before start crosses midnight)
    pub end_time: String,
}

impl ShiftDraft {
    /// Whether every required field is non-empty after trimming.
    ///
    /// Submission must not reach the network while this is false.
    pub fn is_complete(&self) -> bool {
        !(self.employee_id.trim().is_empty()
            || self.date.trim().is_empty()
            || self.subsidiary.trim().is_empty()
            || self.role.trim().is_empty()
            || self.start_time.trim().is_empty()
            || self.end_time.trim().is_empty())
    }

    /// Stricter check: complete and the date/time fields parse.
    pub fn is_well_formed(&self) -> bool {
        self.is_complete()
            && is_valid_date(&self.date)
            && is_valid_hhmm(&self.start_time)
            && is_valid_hhmm(&self.end_time)
    }
}

/// Shift creation response (`POST /shifts`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCreated {
    pub status: String,
    pub message: String,
    /// Set when the shift was stored but overlaps an existing one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ShiftCreated {
    /// Soft-success: the shift exists, but with a caveat worth showing.
    pub fn has_warning(&self) -> bool {
        self.warning.is_some()
    }
}

/// Persisted shift row (`GET /shifts_list/{employee_id}/{date}`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRow {
    pub id: i64,
    pub subsidiary: String,
    pub role: String,
    pub start_time: String,
    pub end_time: String,
    /// Duration computed server-side (midnight-crossing aware)
    pub hours: f64,
}
