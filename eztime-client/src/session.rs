//! Shift submission orchestrator
//!
//! Drives the whole interactive flow against the backend: loading
//! employees and allowed assignments, applying scans, validating and
//! submitting shift drafts, deleting shifts and refreshing the daily
//! payroll summary. Single-operator and event-driven: operations run
//! one at a time and no in-flight request is cancelled; a refresh that
//! finishes after a newer one began is dropped via [`RefreshSeq`]
//! instead of overwriting fresher state.
//!
//! [`RefreshSeq`]: crate::state::RefreshSeq

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::notice::NoticeLevel;
use crate::scan::parse_scan_payload;
use crate::state::AppState;
use shared::models::ShiftCreated;

const MSG_FILL_FIELDS: &str = "Please fill in: employee, date, subsidiary, role, start & end time.";
const MSG_SELECT_FIRST: &str = "Select employee and date first.";
const MSG_SHIFT_ADDED: &str = "Shift added successfully.";
const MSG_ADD_FAILED: &str = "Error adding shift.";
const MSG_PAYROLL_DONE: &str = "Daily payroll calculated.";
const MSG_PAYROLL_FAILED: &str = "Failed to calculate daily payroll.";
const MSG_EMPLOYEES_FAILED: &str = "Failed to load employees.";
const MSG_ALLOWED_FAILED: &str = "Failed to load allowed roles.";
const MSG_NFC_SIMULATED: &str = "NFC simulated. Click 'Apply Scan' to use it.";

/// One operator's interactive session against the EZTIME backend
#[derive(Debug)]
pub struct Session {
    client: HttpClient,
    state: AppState,
}

impl Session {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: config.build_http_client(),
            state: AppState::new(),
        }
    }

    /// Read-only view of the current state snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    // ========== Form field edits ==========

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.state.date = date.into();
    }

    pub fn set_times(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.state.start_time = start.into();
        self.state.end_time = end.into();
    }

    /// Select a subsidiary; the role selection depends on it and resets
    pub fn select_subsidiary(&mut self, subsidiary: impl Into<String>) {
        self.state.subsidiary = subsidiary.into();
        self.state.role.clear();
    }

    pub fn select_role(&mut self, role: impl Into<String>) {
        self.state.role = role.into();
    }

    pub fn set_scan_text(&mut self, text: impl Into<String>) {
        self.state.scan_text = text.into();
    }

    // ========== Data loading ==========

    /// Load the employee list (`GET /employees`); done once at startup
    pub async fn load_employees(&mut self) -> ClientResult<()> {
        match self.client.employees().await {
            Ok(employees) => {
                self.state.employees = employees;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("employee list load failed: {e}");
                self.state.raise(NoticeLevel::Error, MSG_EMPLOYEES_FAILED);
                Err(e)
            }
        }
    }

    /// Select an employee and refresh their allowed assignments.
    ///
    /// Subsidiary and role selections depend on the employee and are
    /// reset either way; an empty id clears the selection entirely.
    pub async fn select_employee(&mut self, employee_id: impl Into<String>) -> ClientResult<()> {
        let employee_id = employee_id.into();
        self.state.subsidiary.clear();
        self.state.role.clear();

        if employee_id.is_empty() {
            self.state.employee_id.clear();
            self.state.allowed.clear();
            return Ok(());
        }

        match self.client.allowed(&employee_id).await {
            Ok(allowed) => {
                self.state.employee_id = employee_id;
                self.state.allowed = allowed;
                Ok(())
            }
            Err(e) => {
                tracing::warn!("allowed assignments load failed: {e}");
                self.state.raise(NoticeLevel::Error, MSG_ALLOWED_FAILED);
                Err(e)
            }
        }
    }

    // ========== Scan actions (QR/NFC simulation) ==========

    /// Parse the scan text and map it onto the subsidiary/role fields.
    ///
    /// A parse failure stays inline next to the scan field
    /// ([`AppState::scan_error`]); it never raises a banner.
    pub fn apply_scan(&mut self) {
        match parse_scan_payload(&self.state.scan_text) {
            Ok(scan) => {
                self.state.scan_error = None;
                self.state.subsidiary = scan.subsidiary;
                self.state.role = scan.role;
                let text = format!(
                    "Scan applied: subsidiary='{}', role='{}'",
                    self.state.subsidiary, self.state.role
                );
                tracing::debug!("{text}");
                self.state.raise(NoticeLevel::Ok, text);
            }
            Err(e) => {
                self.state.scan_error = Some(e);
            }
        }
    }

    /// Compose a typical NFC tag payload from the first known
    /// subsidiary/role and stage it as scan text
    pub fn simulate_nfc_tap(&mut self) {
        let subsidiary = self
            .state
            .subsidiaries()
            .into_iter()
            .next()
            .unwrap_or_else(|| "Subsidiary A".to_string());
        let role = self
            .state
            .roles_for_subsidiary()
            .into_iter()
            .next()
            .unwrap_or_else(|| "Role A".to_string());
        self.state.scan_text = format!("subsidiary={subsidiary};role={role}");
        self.state.scan_error = None;
        self.state.raise(NoticeLevel::Warn, MSG_NFC_SIMULATED);
    }

    // ========== Shift CRUD ==========

    /// Validate the current selections and submit a shift record.
    ///
    /// Any empty required field blocks the submission before a network
    /// call is made. A success, with or without an overlap warning,
    /// refreshes the payroll summary and the persisted shift list.
    pub async fn add_shift(&mut self) -> ClientResult<ShiftCreated> {
        let draft = self.state.draft();
        if !draft.is_complete() {
            self.state.raise(NoticeLevel::Error, MSG_FILL_FIELDS);
            return Err(ClientError::Validation(MSG_FILL_FIELDS.to_string()));
        }

        let created = match self.client.add_shift(&draft).await {
            Ok(created) => created,
            Err(e) => {
                let text = match &e {
                    ClientError::Rejected(detail) | ClientError::NotFound(detail) => detail.clone(),
                    _ => MSG_ADD_FAILED.to_string(),
                };
                tracing::warn!("shift submission failed: {e}");
                self.state.raise(NoticeLevel::Error, text);
                return Err(e);
            }
        };

        match &created.warning {
            Some(warning) => self.state.raise(NoticeLevel::Warn, warning.clone()),
            None => self.state.raise(NoticeLevel::Ok, MSG_SHIFT_ADDED),
        }

        // Reflect the latest persisted state; a refresh failure does not
        // undo the submission and raises its own notice.
        if let Err(e) = self.calculate_daily().await {
            tracing::warn!("post-submit refresh failed: {e}");
        }

        Ok(created)
    }

    /// Delete a persisted shift, then refresh payroll and the shift
    /// list regardless of the delete outcome.
    ///
    /// Intent confirmation is the caller's job. A failed DELETE is
    /// logged but not surfaced; the follow-up refresh shows whatever
    /// the backend still has.
    pub async fn delete_shift(&mut self, shift_id: i64) -> ClientResult<()> {
        if let Err(e) = self.client.delete_shift(shift_id).await {
            tracing::warn!("shift {shift_id} delete failed, refreshing anyway: {e}");
        }
        if let Err(e) = self.calculate_daily().await {
            tracing::warn!("post-delete refresh failed: {e}");
        }
        Ok(())
    }

    /// Refresh the persisted shift list for the current employee/date
    pub async fn load_shifts_list(&mut self) -> ClientResult<()> {
        if self.state.employee_id.is_empty() || self.state.date.is_empty() {
            return Ok(());
        }
        self.state.shifts = self
            .client
            .shifts_list(&self.state.employee_id, &self.state.date)
            .await?;
        Ok(())
    }

    // ========== Payroll /v1 API ==========

    /// Fetch the computed daily payroll summary, then refresh the shift
    /// list.
    ///
    /// A failure clears the local payroll and shift-list state and
    /// surfaces the server's structured message when one exists. Stale
    /// completions (a newer refresh began meanwhile) are dropped.
    pub async fn calculate_daily(&mut self) -> ClientResult<()> {
        if self.state.employee_id.is_empty() || self.state.date.is_empty() {
            self.state.raise(NoticeLevel::Error, MSG_SELECT_FIRST);
            return Err(ClientError::Validation(MSG_SELECT_FIRST.to_string()));
        }

        let token = self.state.refresh_seq.begin();
        let result = self
            .client
            .payroll_daily(&self.state.employee_id, &self.state.date)
            .await;

        if !self.state.refresh_seq.is_current(token) {
            tracing::debug!("stale payroll refresh dropped (token {token})");
            return Ok(());
        }

        match result {
            Ok(payroll) => {
                self.state.payroll = Some(payroll);
                self.load_shifts_list().await?;
                self.state.raise(NoticeLevel::Ok, MSG_PAYROLL_DONE);
                Ok(())
            }
            Err(e) => {
                let text = match &e {
                    ClientError::Api { message, .. } => message.clone(),
                    _ => MSG_PAYROLL_FAILED.to_string(),
                };
                tracing::warn!("payroll refresh failed: {e}");
                self.state.raise(NoticeLevel::Error, text);
                self.state.payroll = None;
                self.state.shifts.clear();
                Err(e)
            }
        }
    }
}
