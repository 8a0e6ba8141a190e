//! Client-side form validation.
//!
//! Forms run these checks before any request is sent; a failure is shown
//! inline and the REST call is skipped.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must be a valid email address")]
    InvalidEmail(&'static str),

    #[error("{0} must be a time in HH:MM format")]
    InvalidTime(&'static str),

    #[error("End time must be after start time")]
    TimeRange,

    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("End date must be after start date")]
    DateRange,

    #[error("{0} must contain at least one entry")]
    Empty(&'static str),

    #[error("{0} must be unique")]
    Duplicate(&'static str),

    #[error("{0}")]
    Rule(String),
}

pub type ValidationResult = Result<(), ValidationError>;

/// Non-blank string check
pub fn require(value: &str, field: &'static str) -> ValidationResult {
    if value.trim().is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(())
    }
}

/// Lightweight email shape check: one `@`, non-empty local part, dotted domain.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn require_email(value: &str, field: &'static str) -> ValidationResult {
    require(value, field)?;
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(field))
    }
}

/// Optional email: blank is fine, anything else must look like an email.
pub fn optional_email(value: Option<&str>, field: &'static str) -> ValidationResult {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) if !is_valid_email(v) => Err(ValidationError::InvalidEmail(field)),
        _ => Ok(()),
    }
}

/// Parse `HH:MM` (24h) into minutes since midnight.
pub fn parse_hhmm(value: &str) -> Option<u32> {
    let (h, m) = value.trim().split_once(':')?;
    if h.len() != 2 || m.len() != 2 {
        return None;
    }
    let h: u32 = h.parse().ok()?;
    let m: u32 = m.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

pub fn require_time(value: &str, field: &'static str) -> Result<u32, ValidationError> {
    parse_hhmm(value).ok_or(ValidationError::InvalidTime(field))
}

pub fn non_negative(value: f64, field: &'static str) -> ValidationResult {
    if value < 0.0 || value.is_nan() {
        Err(ValidationError::Negative(field))
    } else {
        Ok(())
    }
}

pub fn in_range(value: f64, min: i64, max: i64, field: &'static str) -> ValidationResult {
    if value.is_nan() || value < min as f64 || value > max as f64 {
        Err(ValidationError::OutOfRange { field, min, max })
    } else {
        Ok(())
    }
}

/// Accepts absolute http(s) URLs and site-relative paths.
pub fn is_valid_url(value: &str) -> bool {
    let v = value.trim();
    (v.starts_with("https://") && v.len() > "https://".len())
        || (v.starts_with("http://") && v.len() > "http://".len())
        || (v.starts_with('/') && v.len() > 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert!(require("abc", "Name").is_ok());
        assert_eq!(require("   ", "Name"), Err(ValidationError::Required("Name")));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("jo@shop.example"));
        assert!(!is_valid_email("jo@shop"));
        assert!(!is_valid_email("@shop.com"));
        assert!(!is_valid_email("jo@@shop.com"));
        assert!(!is_valid_email("jo smith@shop.com"));
        assert_eq!(
            require_email("nope", "Email"),
            Err(ValidationError::InvalidEmail("Email"))
        );
        assert!(optional_email(None, "Billing email").is_ok());
        assert!(optional_email(Some("  "), "Billing email").is_ok());
        assert!(optional_email(Some("x"), "Billing email").is_err());
    }

    #[test]
    fn test_parse_hhmm() {
        assert_eq!(parse_hhmm("08:30"), Some(510));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
        assert_eq!(parse_hhmm("24:00"), None);
        assert_eq!(parse_hhmm("8:30"), None);
        assert_eq!(parse_hhmm("08-30"), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Required("Reason").to_string(), "Reason is required");
        assert_eq!(
            ValidationError::OutOfRange { field: "Discount", min: 0, max: 100 }.to_string(),
            "Discount must be between 0 and 100"
        );
    }

    #[test]
    fn test_url() {
        assert!(is_valid_url("https://cdn.example.com/a.jpg"));
        assert!(is_valid_url("/uploads/a.jpg"));
        assert!(!is_valid_url("ftp://x"));
        assert!(!is_valid_url("https://"));
    }
}
