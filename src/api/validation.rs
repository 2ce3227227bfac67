use super::ApiError;
use crate::constants::isbn::MAX_LEN;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn isbn_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9-]+$").expect("Invalid regex"))
}

pub fn validate_isbn(isbn: &str) -> Result<&str, ApiError> {
    if isbn.is_empty() {
        return Err(ApiError::validation("ISBN cannot be empty"));
    }

    if isbn.len() > MAX_LEN {
        return Err(ApiError::validation(format!(
            "ISBN must be {MAX_LEN} characters or less"
        )));
    }

    if !isbn_pattern().is_match(isbn) {
        return Err(ApiError::validation(
            "ISBN can only contain digits and hyphens",
        ));
    }

    Ok(isbn)
}

pub fn validate_required<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(value)
}

/// Parses a `YYYY-MM-DD` form value. Blank means no date.
pub fn parse_issue_date(raw: Option<&str>) -> Result<Option<NaiveDate>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                ApiError::validation(format!(
                    "Invalid issue_date: {s}. Expected YYYY-MM-DD"
                ))
            }),
    }
}

/// Parses an integer form value. Blank means no price.
pub fn parse_price(raw: Option<&str>) -> Result<Option<i32>, ApiError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ApiError::validation(format!("Invalid price: {s}. Expected an integer"))),
    }
}

pub fn validate_limit(limit: u64) -> Result<u64, ApiError> {
    const MAX_LIMIT: u64 = 1000;

    if limit > MAX_LIMIT {
        return Err(ApiError::validation(format!(
            "Invalid limit: {}. Limit must be at most {}",
            limit, MAX_LIMIT
        )));
    }
    Ok(limit)
}

/// Offsets are bound as signed 64-bit integers by the database driver.
pub fn validate_skip(skip: u64) -> Result<u64, ApiError> {
    if i64::try_from(skip).is_err() {
        return Err(ApiError::validation(format!(
            "Invalid skip: {}. Skip must be at most {}",
            skip,
            i64::MAX
        )));
    }
    Ok(skip)
}
