//! HTTP client for the EZTIME backend API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shared::error::{ApiErrorBody, ShiftRejection};
use shared::models::{AllowedAssignment, DailyPayroll, Employee, ShiftCreated, ShiftDraft, ShiftRow};

/// HTTP client for making network requests to the EZTIME backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the bearer token used by the /v1 API
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build an endpoint URL from path segments.
    ///
    /// Each segment is percent-encoded, so an employee id containing
    /// `/`, `?`, `#` or a space stays a single path segment instead of
    /// rerouting the request.
    fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::Invalid(format!("invalid base URL '{}': {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ClientError::Invalid(format!("base URL '{}' cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Handle a legacy-endpoint response; errors carry `{"detail": "..."}`
    async fn handle_legacy<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let detail = match serde_json::from_str::<ShiftRejection>(&text) {
                Ok(body) => body.detail,
                Err(_) => text,
            };
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(detail)),
                StatusCode::BAD_REQUEST => Err(ClientError::Rejected(detail)),
                _ => Err(ClientError::Internal(detail)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle a /v1 response; errors carry `{"error": {"code", "message"}}`
    async fn handle_v1<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match serde_json::from_str::<ApiErrorBody>(&text) {
                Ok(body) => Err(ClientError::Api {
                    code: body.error.code,
                    message: body.error.message,
                }),
                Err(_) => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Employee API ==========

    /// List all employees (`GET /employees`)
    pub async fn employees(&self) -> ClientResult<Vec<Employee>> {
        let response = self.client.get(self.endpoint(&["employees"])?).send().await?;
        Self::handle_legacy(response).await
    }

    /// List the role/subsidiary assignments an employee may work
    /// (`GET /allowed/{employee_id}`)
    pub async fn allowed(&self, employee_id: &str) -> ClientResult<Vec<AllowedAssignment>> {
        let response = self
            .client
            .get(self.endpoint(&["allowed", employee_id])?)
            .send()
            .await?;
        Self::handle_legacy(response).await
    }

    // ========== Shift API ==========

    /// Submit a shift record (`POST /shifts`)
    ///
    /// A rejected draft surfaces the server's `detail` message via
    /// [`ClientError::Rejected`]; an accepted draft may still carry an
    /// overlap warning in [`ShiftCreated::warning`].
    pub async fn add_shift(&self, draft: &ShiftDraft) -> ClientResult<ShiftCreated> {
        let response = self
            .client
            .post(self.endpoint(&["shifts"])?)
            .json(draft)
            .send()
            .await?;
        Self::handle_legacy(response).await
    }

    /// List persisted shifts for one employee/date
    /// (`GET /shifts_list/{employee_id}/{date}`)
    pub async fn shifts_list(&self, employee_id: &str, date: &str) -> ClientResult<Vec<ShiftRow>> {
        let response = self
            .client
            .get(self.endpoint(&["shifts_list", employee_id, date])?)
            .send()
            .await?;
        Self::handle_legacy(response).await
    }

    /// Delete a persisted shift (`DELETE /shifts/{shift_id}`)
    pub async fn delete_shift(&self, shift_id: i64) -> ClientResult<()> {
        let response = self
            .client
            .delete(self.endpoint(&["shifts", &shift_id.to_string()])?)
            .send()
            .await?;
        let _: serde_json::Value = Self::handle_legacy(response).await?;
        Ok(())
    }

    // ========== Payroll /v1 API ==========

    /// Fetch the computed daily payroll summary
    /// (`GET /v1/payroll/daily`, bearer-authenticated)
    pub async fn payroll_daily(&self, employee_id: &str, date: &str) -> ClientResult<DailyPayroll> {
        let mut request = self.client.get(self.endpoint(&["v1", "payroll", "daily"])?).query(&[
            ("employee_id", employee_id),
            ("date", date),
            ("include_shifts", "true"),
            ("include_breakdown", "true"),
        ]);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_v1(response).await
    }
}
