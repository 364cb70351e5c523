//! Scan payload resolver (QR/NFC simulation)
//!
//! An operator scan delivers one of three text serializations, tried in
//! a fixed priority order (first matching format wins):
//!
//! 1. JSON:  `{"subsidiary":"Subsidiary A","role":"Security"}`
//! 2. KV:    `subsidiary=Subsidiary A;role=Security` (`&` also splits)
//! 3. CSV:   `Subsidiary A,Security`
//!
//! The ordering matters: a JSON-looking string is never mis-parsed as
//! CSV, and a KV string containing a comma in a value is still KV
//! because the `=` check precedes the `,` check.
//!
//! Only `subsidiary` and `role` are resolved, the only scan-derived
//! fields the backend persists.

use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

/// Subsidiary/role pair resolved from a scan payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScan {
    pub subsidiary: String,
    pub role: String,
}

/// Scan payload parse error
///
/// Display strings are the exact inline messages shown next to the
/// scan field; they are never raised as notices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("Empty scan payload.")]
    Empty,

    #[error("Invalid JSON payload.")]
    InvalidJson,

    #[error("JSON is missing 'subsidiary' or 'role'.")]
    JsonMissingFields,

    #[error("KV payload is missing subsidiary/role.")]
    KvMissingFields,

    #[error("CSV payload must be 'Subsidiary,Role'.")]
    CsvShape,

    #[error("Unsupported payload format. Use JSON or 'subsidiary=...;role=...' or 'Subsidiary,Role'.")]
    Unsupported,
}

/// Parse a raw scan payload into a subsidiary/role pair.
///
/// Pure function; see the module docs for the format priority order.
pub fn parse_scan_payload(raw: &str) -> Result<ResolvedScan, ScanError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ScanError::Empty);
    }

    if text.starts_with('{') && text.ends_with('}') {
        return parse_json(text);
    }

    if text.contains('=') {
        return parse_kv(text);
    }

    if text.contains(',') {
        return parse_csv(text);
    }

    Err(ScanError::Unsupported)
}

fn parse_json(text: &str) -> Result<ResolvedScan, ScanError> {
    let value: Value = serde_json::from_str(text).map_err(|_| ScanError::InvalidJson)?;
    let obj = value.as_object().ok_or(ScanError::InvalidJson)?;

    // `company` is a legacy alias used by older tag encodings.
    let subsidiary = json_field(obj, "subsidiary").or_else(|| json_field(obj, "company"));
    let role = json_field(obj, "role");

    match (subsidiary, role) {
        (Some(subsidiary), Some(role)) => Ok(ResolvedScan { subsidiary, role }),
        _ => Err(ScanError::JsonMissingFields),
    }
}

/// Extract a trimmed, non-empty string field from a JSON object
fn json_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_kv(text: &str) -> Result<ResolvedScan, ScanError> {
    let mut kv: HashMap<String, String> = HashMap::new();
    for segment in text.split([';', '&']) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        // Split on the first '=' only; values may themselves contain '='.
        let Some((key, value)) = segment.split_once('=') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            continue;
        }
        // Later duplicate keys overwrite earlier ones.
        kv.insert(key, value.trim().to_string());
    }

    let subsidiary = kv_field(&kv, "subsidiary").or_else(|| kv_field(&kv, "company"));
    let role = kv_field(&kv, "role");

    match (subsidiary, role) {
        (Some(subsidiary), Some(role)) => Ok(ResolvedScan { subsidiary, role }),
        _ => Err(ScanError::KvMissingFields),
    }
}

fn kv_field(kv: &HashMap<String, String>, key: &str) -> Option<String> {
    kv.get(key).filter(|v| !v.is_empty()).cloned()
}

fn parse_csv(text: &str) -> Result<ResolvedScan, ScanError> {
    let Some((subsidiary, role)) = text.split_once(',') else {
        return Err(ScanError::CsvShape);
    };
    let subsidiary = subsidiary.trim();
    let role = role.trim();
    if subsidiary.is_empty() || role.is_empty() {
        return Err(ScanError::CsvShape);
    }
    Ok(ResolvedScan {
        subsidiary: subsidiary.to_string(),
        role: role.to_string(),
    })
}
