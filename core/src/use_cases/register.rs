//! Registration use case with the ordered validation pipeline.

use std::sync::Arc;

use agro_shared::utils::validation::validators::{not_blank, password_class_count};

use crate::domain::entities::user::UserRole;
use crate::domain::value_objects::{Address, Email, PhoneNumber};
use crate::dto::RegisterRequest;
use crate::errors::{DomainError, DomainResult};
use crate::providers::AuthProvider;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum number of satisfied password character classes
pub const MIN_PASSWORD_CLASSES: u8 = 3;

/// Registration use case
///
/// Runs a fixed, ordered sequence of validation rules over the raw request
/// and fails fast with a precise message at the first violation. Only after
/// every rule passes is the unmodified request forwarded to the auth
/// provider; no side effects occur before delegation. The use case holds no
/// state and is safely reusable per call.
pub struct RegisterUseCase {
    provider: Arc<dyn AuthProvider>,
}

impl RegisterUseCase {
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self { provider }
    }

    /// Validate the request, then delegate registration to the provider
    pub async fn execute(
        &self,
        request: RegisterRequest,
    ) -> DomainResult<crate::domain::value_objects::AuthSession> {
        Self::validate(&request)?;
        self.provider.register(request).await
    }

    /// The ordered validation pipeline, exposed for the workflow's
    /// final pre-submission check
    pub fn validate(request: &RegisterRequest) -> DomainResult<()> {
        // 1. Required fields, in declaration order
        let required = [
            ("email", &request.email),
            ("password", &request.password),
            ("confirmPassword", &request.confirm_password),
            ("firstName", &request.first_name),
            ("lastName", &request.last_name),
            ("phone", &request.phone),
        ];
        for (field, value) in required {
            if !not_blank(value) {
                return Err(DomainError::validation(format!("{} is required", field)));
            }
        }

        // 2. Email format
        Email::new(&request.email)?;

        // 3. Password confirmation (exact equality, no trimming)
        if request.password != request.confirm_password {
            return Err(DomainError::validation("Passwords do not match"));
        }

        // 4. Password minimum length
        if request.password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::validation(
                "Password must be at least 8 characters long",
            ));
        }

        // 5. Password strength: 3 of 4 character classes
        if password_class_count(&request.password) < MIN_PASSWORD_CLASSES {
            return Err(DomainError::validation(
                "Password must contain at least 3 of the following: uppercase letters, \
                 lowercase letters, numbers, special characters",
            ));
        }

        // 6. Phone format
        PhoneNumber::new(&request.phone)?;

        // 7. Account type allow-list: admins cannot self-register
        if !matches!(
            request.account_type,
            UserRole::Farmer | UserRole::Buyer | UserRole::Transporter
        ) {
            return Err(DomainError::validation(
                "Invalid account type for registration",
            ));
        }

        // 8. Role-conditional required fields
        match request.account_type {
            UserRole::Farmer => {
                if request.business_type.is_none() {
                    return Err(DomainError::validation(
                        "Business type is required for farmer accounts",
                    ));
                }
                if let Some(farm_size) = request.farm_size {
                    if farm_size <= 0.0 {
                        return Err(DomainError::validation(
                            "Farm size must be a positive number",
                        ));
                    }
                }
            }
            UserRole::Transporter => {
                if request.business_type.is_none() {
                    return Err(DomainError::validation(
                        "Business type is required for transporter accounts",
                    ));
                }
                if request.logistics_specialization.is_none() {
                    return Err(DomainError::validation(
                        "Logistics specialization is required for transporter accounts",
                    ));
                }
            }
            _ => {}
        }

        // 9. Terms acceptance
        if !request.accept_terms {
            return Err(DomainError::validation(
                "You must accept the terms and conditions to register",
            ));
        }

        // 10. Optional shipping address
        if let Some(props) = &request.default_shipping_address {
            Address::from_props(props.clone()).map_err(|err| {
                DomainError::validation(format!("Invalid address: {}", err))
            })?;
        }

        Ok(())
    }
}
