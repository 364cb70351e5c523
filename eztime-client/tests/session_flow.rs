// eztime-client/tests/session_flow.rs
// Integration tests driving the real client against an in-process mock backend.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    routing::{delete, get, post},
};
use eztime_client::{ClientConfig, ClientError, NoticeLevel, Session};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct Hits {
    shift_posts: AtomicUsize,
    payroll_gets: AtomicUsize,
    list_gets: AtomicUsize,
    deletes: AtomicUsize,
}

/// Mock EZTIME backend; per-test behavior is configured up front.
#[derive(Clone)]
struct Backend {
    hits: Arc<Hits>,
    shift_post_status: StatusCode,
    shift_post_body: Arc<Value>,
    delete_status: StatusCode,
}

impl Backend {
    fn accepting() -> Self {
        Self {
            hits: Arc::new(Hits::default()),
            shift_post_status: StatusCode::OK,
            shift_post_body: Arc::new(json!({"status": "ok", "message": "Shift added."})),
            delete_status: StatusCode::OK,
        }
    }

    fn with_shift_response(mut self, status: StatusCode, body: Value) -> Self {
        self.shift_post_status = status;
        self.shift_post_body = Arc::new(body);
        self
    }

    fn with_delete_status(mut self, status: StatusCode) -> Self {
        self.delete_status = status;
        self
    }
}

async fn employees(State(_b): State<Backend>) -> Json<Value> {
    Json(json!([
        {"id": "E001", "name": "Dana", "daily_standard": 8.0},
        {"id": "E002", "name": "Omri", "daily_standard": 9.0}
    ]))
}

async fn allowed(State(_b): State<Backend>, Path(employee_id): Path<String>) -> Json<Value> {
    // "a/b c" arrives percent-encoded and must still be one segment.
    assert!(employee_id == "E001" || employee_id == "a/b c", "unexpected id {employee_id}");
    Json(json!([
        {"role": "Driver", "subsidiary": "Subsidiary B", "hourly_rate": 55.0},
        {"role": "Security", "subsidiary": "Subsidiary A", "hourly_rate": 62.5}
    ]))
}

async fn add_shift(State(b): State<Backend>, Json(draft): Json<Value>) -> (StatusCode, Json<Value>) {
    b.hits.shift_posts.fetch_add(1, Ordering::SeqCst);
    for field in ["employee_id", "date", "subsidiary", "role", "start_time", "end_time"] {
        assert!(draft.get(field).is_some(), "draft missing {field}");
    }
    (b.shift_post_status, Json((*b.shift_post_body).clone()))
}

async fn shifts_list(
    State(b): State<Backend>,
    Path((employee_id, _date)): Path<(String, String)>,
) -> Json<Value> {
    b.hits.list_gets.fetch_add(1, Ordering::SeqCst);
    assert_eq!(employee_id, "E001");
    Json(json!([
        {"id": 7, "subsidiary": "Subsidiary A", "role": "Security",
         "start_time": "08:00", "end_time": "17:00", "hours": 9.0}
    ]))
}

async fn delete_shift(State(b): State<Backend>, Path(shift_id): Path<i64>) -> (StatusCode, Json<Value>) {
    b.hits.deletes.fetch_add(1, Ordering::SeqCst);
    assert_eq!(shift_id, 7);
    if b.delete_status.is_success() {
        (b.delete_status, Json(json!({"status": "ok"})))
    } else {
        (b.delete_status, Json(json!({"detail": "delete failed"})))
    }
}

async fn payroll_daily(
    State(b): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    b.hits.payroll_gets.fetch_add(1, Ordering::SeqCst);

    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if auth != "Bearer demo-token" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"code": "UNAUTHORIZED", "message": "Invalid or missing API token"}})),
        );
    }

    assert_eq!(params.get("employee_id").map(String::as_str), Some("E001"));
    assert_eq!(params.get("include_shifts").map(String::as_str), Some("true"));
    assert_eq!(params.get("include_breakdown").map(String::as_str), Some("true"));
    let date = params.get("date").cloned().unwrap_or_default();

    (
        StatusCode::OK,
        Json(json!({
            "employee_id": "E001",
            "employee_name": "Dana",
            "date": date,
            "overtime_threshold": 8.0,
            "night_hours_in_window": 0.0,
            "night_rule_active": false,
            "total_hours": 9.0,
            "hours_100": 8.0,
            "hours_125": 1.0,
            "hours_150": 0.0,
            "daily_standard": 8.0,
            "daily_deficit": 0.0,
            "max_rate": 62.5,
            "salary_simulation": 578.125,
            "calculated_at": "2025-06-01T18:00:00+03:00",
            "hours_by_subsidiary": {"Subsidiary A": 9.0},
            "hours_by_role": {"Security": 9.0},
            "shifts": []
        })),
    )
}

async fn spawn(backend: Backend) -> String {
    let app = Router::new()
        .route("/employees", get(employees))
        .route("/allowed/{employee_id}", get(allowed))
        .route("/shifts", post(add_shift))
        .route("/shifts_list/{employee_id}/{date}", get(shifts_list))
        .route("/shifts/{shift_id}", delete(delete_shift))
        .route("/v1/payroll/daily", get(payroll_daily))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}

/// Session with employee E001 and a valid form selected.
async fn ready_session(base_url: &str) -> Session {
    let config = ClientConfig::new(base_url);
    let mut session = Session::new(&config);
    session.load_employees().await.unwrap();
    session.select_employee("E001").await.unwrap();
    session.select_subsidiary("Subsidiary A");
    session.select_role("Security");
    session.set_times("08:00", "17:00");
    session
}

#[tokio::test]
async fn submit_flow_refreshes_payroll_and_shift_list() {
    init_tracing();
    let backend = Backend::accepting();
    let hits = backend.hits.clone();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    assert_eq!(session.state().employees.len(), 2);
    assert_eq!(session.state().subsidiaries(), vec!["Subsidiary A", "Subsidiary B"]);

    let created = session.add_shift().await.unwrap();
    assert_eq!(created.status, "ok");
    assert!(!created.has_warning());

    let state = session.state();
    assert!(state.payroll.is_some());
    assert_eq!(state.shifts.len(), 1);
    assert_eq!(state.shifts[0].id, 7);

    let notice = state.notice().expect("live notice");
    assert_eq!(notice.level, NoticeLevel::Ok);
    assert_eq!(notice.text, "Daily payroll calculated.");

    assert_eq!(hits.shift_posts.load(Ordering::SeqCst), 1);
    assert_eq!(hits.payroll_gets.load(Ordering::SeqCst), 1);
    assert_eq!(hits.list_gets.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn overlap_warning_is_soft_success_and_still_refreshes() {
    init_tracing();
    let backend = Backend::accepting().with_shift_response(
        StatusCode::OK,
        json!({
            "status": "ok",
            "message": "Shift added.",
            "warning": "Warning: shift overlaps with existing shift 08:00–17:00"
        }),
    );
    let hits = backend.hits.clone();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    let created = session.add_shift().await.unwrap();

    assert!(created.has_warning());
    assert!(created.warning.unwrap().contains("overlaps"));
    // The shift counts as created: payroll and list were refreshed.
    assert_eq!(hits.payroll_gets.load(Ordering::SeqCst), 1);
    assert_eq!(hits.list_gets.load(Ordering::SeqCst), 1);
    assert!(session.state().payroll.is_some());
}

#[tokio::test]
async fn incomplete_form_blocks_before_any_network_call() {
    init_tracing();
    let backend = Backend::accepting();
    let hits = backend.hits.clone();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    session.set_times("08:00", "");

    let err = session.add_shift().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    let notice = session.state().notice().expect("live notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.text.starts_with("Please fill in:"));

    assert_eq!(hits.shift_posts.load(Ordering::SeqCst), 0);
    assert_eq!(hits.payroll_gets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn server_rejection_surfaces_detail_and_skips_refresh() {
    init_tracing();
    let detail = "Combination subsidiary='Subsidiary A' / role='Security' not allowed for this employee.";
    let backend = Backend::accepting()
        .with_shift_response(StatusCode::BAD_REQUEST, json!({"detail": detail}));
    let hits = backend.hits.clone();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    let err = session.add_shift().await.unwrap_err();
    assert!(matches!(err, ClientError::Rejected(_)));

    let notice = session.state().notice().expect("live notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, detail);

    assert_eq!(hits.shift_posts.load(Ordering::SeqCst), 1);
    assert_eq!(hits.payroll_gets.load(Ordering::SeqCst), 0);
    assert_eq!(hits.list_gets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn payroll_fetch_sends_bearer_token_and_fills_state() {
    init_tracing();
    let backend = Backend::accepting();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    session.calculate_daily().await.unwrap();

    let state = session.state();
    let payroll = state.payroll.as_ref().expect("payroll state");
    assert_eq!(payroll.employee_name, "Dana");
    assert_eq!(payroll.hours_125, 1.0);
    assert_eq!(payroll.hours_by_subsidiary["Subsidiary A"], 9.0);
    assert_eq!(state.shifts.len(), 1);
    assert_eq!(state.notice().unwrap().text, "Daily payroll calculated.");
}

#[tokio::test]
async fn payroll_auth_failure_surfaces_message_and_clears_state() {
    init_tracing();
    let backend = Backend::accepting();
    let base_url = spawn(backend).await;

    let config = ClientConfig::new(&base_url).with_token("wrong-token");
    let mut session = Session::new(&config);
    session.select_employee("E001").await.unwrap();

    let err = session.calculate_daily().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { .. }));
    if let ClientError::Api { code, message } = err {
        assert_eq!(code, "UNAUTHORIZED");
        assert_eq!(message, "Invalid or missing API token");
    }

    let state = session.state();
    assert!(state.payroll.is_none());
    assert!(state.shifts.is_empty());
    let notice = state.notice().expect("live notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "Invalid or missing API token");
}

#[tokio::test]
async fn calculate_without_selection_is_blocked_locally() {
    init_tracing();
    let backend = Backend::accepting();
    let hits = backend.hits.clone();
    let base_url = spawn(backend).await;

    let mut session = Session::new(&ClientConfig::new(&base_url));
    let err = session.calculate_daily().await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert_eq!(session.state().notice().unwrap().text, "Select employee and date first.");
    assert_eq!(hits.payroll_gets.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn delete_failure_still_triggers_refresh_pair() {
    init_tracing();
    let backend = Backend::accepting().with_delete_status(StatusCode::INTERNAL_SERVER_ERROR);
    let hits = backend.hits.clone();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    session.delete_shift(7).await.unwrap();

    assert_eq!(hits.deletes.load(Ordering::SeqCst), 1);
    assert_eq!(hits.payroll_gets.load(Ordering::SeqCst), 1);
    assert_eq!(hits.list_gets.load(Ordering::SeqCst), 1);
    assert!(session.state().payroll.is_some());
}

#[tokio::test]
async fn applied_scan_feeds_the_submission_form() {
    init_tracing();
    let backend = Backend::accepting();
    let hits = backend.hits.clone();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    session.select_subsidiary("");

    session.set_scan_text(r#"{"subsidiary":"Subsidiary A","role":"Security"}"#);
    session.apply_scan();

    let state = session.state();
    assert!(state.scan_error.is_none());
    assert_eq!(state.subsidiary, "Subsidiary A");
    assert_eq!(state.role, "Security");
    assert!(state.notice().unwrap().text.starts_with("Scan applied:"));

    session.add_shift().await.unwrap();
    assert_eq!(hits.shift_posts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bad_scan_stays_inline_and_leaves_selections_alone() {
    init_tracing();
    let backend = Backend::accepting();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    session.set_scan_text("{not json}");
    session.apply_scan();

    let state = session.state();
    assert!(state.scan_error.is_some());
    assert_eq!(state.subsidiary, "Subsidiary A");
    assert_eq!(state.role, "Security");
}

#[tokio::test]
async fn nfc_simulation_stages_a_kv_payload() {
    init_tracing();
    let backend = Backend::accepting();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    session.simulate_nfc_tap();

    let state = session.state();
    assert_eq!(state.scan_text, "subsidiary=Subsidiary A;role=Security");
    assert_eq!(state.notice().unwrap().level, NoticeLevel::Warn);

    session.apply_scan();
    assert_eq!(session.state().subsidiary, "Subsidiary A");
}

#[tokio::test]
async fn slash_bearing_employee_id_stays_one_path_segment() {
    init_tracing();
    let backend = Backend::accepting();
    let base_url = spawn(backend).await;

    let mut session = Session::new(&ClientConfig::new(&base_url));
    // Without per-segment encoding this would route as /allowed/a/b%20c
    // and miss the handler entirely.
    session.select_employee("a/b c").await.unwrap();
    assert_eq!(session.state().allowed.len(), 2);
}

#[tokio::test]
async fn reselecting_employee_resets_dependent_selections() {
    init_tracing();
    let backend = Backend::accepting();
    let base_url = spawn(backend).await;

    let mut session = ready_session(&base_url).await;
    assert_eq!(session.state().subsidiary, "Subsidiary A");

    session.select_employee("E001").await.unwrap();
    let state = session.state();
    assert!(state.subsidiary.is_empty());
    assert!(state.role.is_empty());
    assert_eq!(state.allowed.len(), 2);

    session.select_employee("").await.unwrap();
    assert!(session.state().allowed.is_empty());
}
