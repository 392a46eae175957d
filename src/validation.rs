// Validation functions for command-line input
// Every failure here is an AppError::Usage, reported before any side effect

use crate::error::AppError;
use url::Url;

/// Validate that a base URL is absolute and uses http or https
///
/// Returns the URL with any trailing '/' removed
pub fn validate_base_url(raw: &str) -> Result<String, AppError> {
    let url = raw
        .trim()
        .parse::<Url>()
        .map_err(|_| AppError::Usage(format!("Invalid base URL: {}", raw)))?;

    let scheme = url.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(AppError::Usage(
            "Only http:// and https:// base URLs are allowed".to_string(),
        ));
    }

    if url.host_str().is_none() {
        return Err(AppError::Usage("Base URL must have a host".to_string()));
    }

    Ok(raw.trim().trim_end_matches('/').to_string())
}

/// Join a base URL and an endpoint path, adding the leading '/' if missing
pub fn join_endpoint(base_url: &str, endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{}{}", base_url, endpoint)
    } else {
        format!("{}/{}", base_url, endpoint)
    }
}

/// Validate that a probability lies in [0, 1]
pub fn validate_rate(flag: &str, value: f64) -> Result<(), AppError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(AppError::Usage(format!("{} must be between 0 and 1.", flag)));
    }
    Ok(())
}

/// Parse a comma-separated list of integers, skipping blank entries
///
/// At least one value is required
pub fn parse_int_list(raw: &str, label: &str) -> Result<Vec<i64>, AppError> {
    let mut values = Vec::new();
    for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let value = part
            .parse::<i64>()
            .map_err(|_| AppError::Usage(format!("Invalid {} value: {}", label, part)))?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(AppError::Usage(format!(
            "At least one {} value is required.",
            label
        )));
    }
    Ok(values)
}

/// Parse a comma-separated list of strings, skipping blank entries
///
/// At least one value is required
pub fn parse_string_list(raw: &str, label: &str) -> Result<Vec<String>, AppError> {
    let values: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if values.is_empty() {
        return Err(AppError::Usage(format!(
            "At least one {} is required.",
            label
        )));
    }
    Ok(values)
}
