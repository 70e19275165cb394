//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string is non-blank after trimming
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Count the satisfied password character classes among
    /// {uppercase, lowercase, digit, special}
    pub fn password_class_count(password: &str) -> u8 {
        let mut count = 0;
        if password.chars().any(|c| c.is_ascii_uppercase()) {
            count += 1;
        }
        if password.chars().any(|c| c.is_ascii_lowercase()) {
            count += 1;
        }
        if password.chars().any(|c| c.is_ascii_digit()) {
            count += 1;
        }
        if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("value"));
        assert!(!not_blank(""));
        assert!(!not_blank("   "));
    }

    #[test]
    fn test_password_class_count() {
        assert_eq!(password_class_count("password"), 1); // lowercase only
        assert_eq!(password_class_count("PASSWORD"), 1); // uppercase only
        assert_eq!(password_class_count("12345678"), 1); // digits only
        assert_eq!(password_class_count("Password"), 2);
        assert_eq!(password_class_count("Password1"), 3);
        assert_eq!(password_class_count("Password1!"), 4);
        assert_eq!(password_class_count("Secure1!"), 4);
    }
}
