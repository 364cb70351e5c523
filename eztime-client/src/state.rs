//! Session state snapshot
//!
//! The original UI kept form selections, the last scan result and the
//! fetched data in ambient component state; here they live in one
//! explicit snapshot owned by the [`Session`](crate::session::Session)
//! and readable by any presentation layer. Mutation goes through the
//! session's operations.

use crate::notice::{Notice, NoticeLevel};
use crate::scan::ScanError;
use shared::models::{AllowedAssignment, DailyPayroll, Employee, ShiftDraft, ShiftRow};
use shared::util::today;

/// Monotonic sequence token guarding against out-of-order refresh
/// completions: a response is applied only while its token is still
/// the latest one handed out.
///
/// Today [`Session`](crate::session::Session) operations take
/// `&mut self` and run to completion, so refreshes cannot actually
/// interleave and the guard never fires through the session itself.
/// The token exists for callers that drive refreshes concurrently
/// (e.g. a UI selecting futures against shared state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshSeq(u64);

impl RefreshSeq {
    /// Start a new refresh, invalidating every earlier token
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `token` belongs to the most recent refresh
    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

/// Form selections plus fetched backend data
#[derive(Debug, Clone, Default)]
pub struct AppState {
    // ========== Form selections ==========
    pub employee_id: String,
    /// Work date, `YYYY-MM-DD`; defaults to today
    pub date: String,
    pub subsidiary: String,
    pub role: String,
    pub start_time: String,
    pub end_time: String,

    // ========== Scan simulation ==========
    pub scan_text: String,
    /// Inline parse error of the last applied scan, if any
    pub scan_error: Option<ScanError>,

    // ========== Loaded data ==========
    pub employees: Vec<Employee>,
    pub allowed: Vec<AllowedAssignment>,
    pub payroll: Option<DailyPayroll>,
    pub shifts: Vec<ShiftRow>,

    notice: Option<Notice>,
    pub(crate) refresh_seq: RefreshSeq,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            date: today(),
            start_time: "08:00".to_string(),
            end_time: "17:00".to_string(),
            ..Self::default()
        }
    }

    /// Sorted, de-duplicated subsidiaries the selected employee may work
    pub fn subsidiaries(&self) -> Vec<String> {
        let mut subs: Vec<String> = self.allowed.iter().map(|a| a.subsidiary.clone()).collect();
        subs.sort();
        subs.dedup();
        subs
    }

    /// Sorted roles allowed within the currently selected subsidiary
    pub fn roles_for_subsidiary(&self) -> Vec<String> {
        let mut roles: Vec<String> = self
            .allowed
            .iter()
            .filter(|a| a.subsidiary == self.subsidiary)
            .map(|a| a.role.clone())
            .collect();
        roles.sort();
        roles
    }

    pub fn selected_employee(&self) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == self.employee_id)
    }

    /// Build a submission draft from the current selections.
    ///
    /// Constructed fresh per attempt; completeness is checked by the
    /// session before anything reaches the network.
    pub fn draft(&self) -> ShiftDraft {
        ShiftDraft {
            employee_id: self.employee_id.clone(),
            date: self.date.clone(),
            subsidiary: self.subsidiary.clone(),
            role: self.role.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }

    /// The live banner notice, if it has not auto-dismissed yet
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired())
    }

    pub(crate) fn raise(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice::new(level, text));
    }
}
