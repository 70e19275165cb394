//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex: leading +, 7 to 15 digits total
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").unwrap());

/// Normalize a phone number by removing common formatting characters
///
/// Keeps digits and a leading `+`; spaces, dashes, parentheses and any
/// other characters are stripped.
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid international format after normalization
pub fn is_valid_international_phone(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    INTERNATIONAL_PHONE_REGEX.is_match(&normalized)
}

/// Mask a phone number for display (e.g., +336****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 8 {
        format!(
            "{}****{}",
            &normalized[0..4],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
