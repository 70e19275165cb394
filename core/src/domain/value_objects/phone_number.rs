//! Phone number value object with normalization and eager validation.

use serde::{Deserialize, Serialize};

use agro_shared::utils::phone::{is_valid_international_phone, normalize_phone_number};

use crate::errors::DomainError;

/// Validated international phone number
///
/// Raw input is normalized (formatting characters stripped) before being
/// checked against the international pattern: leading `+` and 7 to 15
/// digits. The stored value is the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber {
    value: String,
}

impl PhoneNumber {
    /// Creates a validated phone number from raw input
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let normalized = normalize_phone_number(raw);
        if !is_valid_international_phone(&normalized) {
            return Err(DomainError::Validation {
                message:
                    "Invalid phone number format. Please use international format (e.g., +33612345678)"
                        .to_string(),
            });
        }
        Ok(Self { value: normalized })
    }

    /// The normalized phone number
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PhoneNumber::new(&value).map_err(|e| e.to_string())
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.value
    }
}
