//! Transient user-facing notices
//!
//! Every user-visible outcome (validation failure, server rejection,
//! soft warning, success) goes through the same banner mechanism and
//! auto-dismisses after a fixed delay. No notice is fatal; the session
//! always stays interactive.

use std::time::{Duration, Instant};

/// Default time a notice stays visible
pub const DEFAULT_TTL: Duration = Duration::from_secs(5);

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Operation succeeded
    Ok,
    /// Soft warning (operation still succeeded)
    Warn,
    /// Operation failed; state unchanged or cleared
    Error,
}

/// A transient banner message
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self::with_ttl(level, text, DEFAULT_TTL)
    }

    pub fn with_ttl(level: NoticeLevel, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            level,
            text: text.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn ok(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Ok, text)
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warn, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, text)
    }

    /// Whether the auto-dismiss deadline has passed
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}
