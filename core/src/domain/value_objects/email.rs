//! Email value object with eager validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

// Basic local@domain.tld shape; full RFC validation is the backend's job
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validated email address
///
/// Construction fails on anything not matching a `local@domain.tld` shape.
/// Equality compares the normalized (lowercased) value while `value()`
/// preserves the original casing.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    /// Creates a validated email from raw input (trimmed before validation)
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(DomainError::Validation {
                message: "Invalid email format. Please provide a valid email address".to_string(),
            });
        }
        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// The email address as entered (trimmed)
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Normalized form used for comparisons
    pub fn normalized(&self) -> String {
        self.value.to_lowercase()
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.normalized() == other.normalized()
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(&value).map_err(|e| e.to_string())
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        for value in [
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.co.uk",
        ] {
            assert!(Email::new(value).is_ok(), "expected {} to be valid", value);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for value in ["not-an-email", "missing@tld", "@example.com", "a b@c.com", ""] {
            assert!(Email::new(value).is_err(), "expected {} to be invalid", value);
        }
    }

    #[test]
    fn test_trims_input() {
        let email = Email::new("  john@example.com  ").unwrap();
        assert_eq!(email.value(), "john@example.com");
    }

    #[test]
    fn test_equality_is_case_insensitive() {
        let a = Email::new("John@Example.com").unwrap();
        let b = Email::new("john@example.com").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.value(), "John@Example.com"); // Original casing preserved
    }

    #[test]
    fn test_serde_round_trip() {
        let email = Email::new("john@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"john@example.com\"");

        let parsed: Email = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, email);

        assert!(serde_json::from_str::<Email>("\"broken\"").is_err());
    }
}
