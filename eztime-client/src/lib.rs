//! EZTIME Client - scan resolver and shift submitter
//!
//! Client-side logic for the EZTIME shift/attendance backend: parses
//! operator scan payloads (QR/NFC) into a subsidiary/role pair, merges
//! them with form selections, submits shift records over REST and pulls
//! the computed daily payroll summary. All payroll business rules live
//! in the backend; this crate only mirrors its wire contract.

pub mod config;
pub mod error;
pub mod http;
pub mod notice;
pub mod scan;
pub mod session;
pub mod state;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use notice::{Notice, NoticeLevel};
pub use scan::{ResolvedScan, ScanError, parse_scan_payload};
pub use session::Session;
pub use state::{AppState, RefreshSeq};

// Re-export shared types for convenience
pub use shared::{
    AllowedAssignment, DailyPayroll, Employee, PayrollShift, ShiftCreated, ShiftDraft, ShiftRow,
};
