//! Address value object for shipping destinations.

use serde::{Deserialize, Serialize};

use agro_shared::utils::validation::validators::not_blank;

use crate::errors::DomainError;

/// Raw address fields as entered in a form or received on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressProps {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Validated postal address
///
/// All four fields are required; construction names the first field that
/// is blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    street: String,
    city: String,
    postal_code: String,
    country: String,
}

impl Address {
    /// Creates a validated address from its individual fields
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Self::from_props(AddressProps {
            street: street.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        })
    }

    /// Creates a validated address from raw props
    pub fn from_props(props: AddressProps) -> Result<Self, DomainError> {
        let required = [
            ("Street", &props.street),
            ("City", &props.city),
            ("Postal code", &props.postal_code),
            ("Country", &props.country),
        ];
        for (name, value) in required {
            if !not_blank(value) {
                return Err(DomainError::Validation {
                    message: format!("{} is required", name),
                });
            }
        }

        Ok(Self {
            street: props.street.trim().to_string(),
            city: props.city.trim().to_string(),
            postal_code: props.postal_code.trim().to_string(),
            country: props.country.trim().to_string(),
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} {}, {}",
            self.street, self.postal_code, self.city, self.country
        )
    }
}
