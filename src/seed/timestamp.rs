// created_at parsing for seed users

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::AppError;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601-like timestamp.
///
/// Missing or blank input yields `fallback`. A trailing `Z` means UTC.
/// Timestamps without an offset are read as UTC, and a bare date as
/// midnight UTC.
pub fn parse_timestamp(raw: Option<&str>, fallback: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
    let Some(raw) = raw else {
        return Ok(fallback);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(fallback);
    }

    let value = match value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        Some(stripped) => format!("{}+00:00", stripped),
        None => value.to_string(),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(&value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    // RFC 3339 wants a 'T'; accept the space form with an offset too
    if let Ok(parsed) = DateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(&value, format) {
            return Ok(parsed.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(AppError::Usage(format!("Invalid created_at timestamp: {}", raw)))
}
