//! Three-step registration wizard state machine.
//!
//! Linear `Credentials -> Profile -> Terms` progression with no branching
//! or skipping. Validity polling is split from side-effecting validation:
//! `is_valid_step` re-derives validity from current data with no mutation
//! (for enabling/disabling navigation), while the `validate_step*` methods
//! additionally set the held error message for display.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::user::{
    BusinessType, FarmerSpecialization, LogisticsSpecialization, UserRole,
};
use crate::domain::value_objects::{AddressProps, AuthSession};
use crate::dto::RegisterRequest;
use crate::errors::{DomainError, DomainResult, ErrorHandler, UserFacingError};
use crate::providers::AuthProvider;
use crate::use_cases::register::MIN_PASSWORD_LENGTH;
use crate::use_cases::RegisterUseCase;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RegistrationStep {
    /// Step 1: account credentials
    Credentials,
    /// Step 2: profile information
    Profile,
    /// Step 3: terms and preferences
    Terms,
}

impl RegistrationStep {
    /// 1-based step number for display
    pub fn number(self) -> u8 {
        match self {
            RegistrationStep::Credentials => 1,
            RegistrationStep::Profile => 2,
            RegistrationStep::Terms => 3,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            RegistrationStep::Credentials => Some(RegistrationStep::Profile),
            RegistrationStep::Profile => Some(RegistrationStep::Terms),
            RegistrationStep::Terms => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            RegistrationStep::Credentials => None,
            RegistrationStep::Profile => Some(RegistrationStep::Credentials),
            RegistrationStep::Terms => Some(RegistrationStep::Profile),
        }
    }
}

/// Step 1: account credentials
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step1Data {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Step 2: profile information
#[derive(Debug, Clone, PartialEq)]
pub struct Step2Data {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub account_type: UserRole,
    pub business_type: Option<BusinessType>,
    pub farm_size: Option<f64>,
    pub farmer_specialization: Option<FarmerSpecialization>,
    pub logistics_specialization: Option<LogisticsSpecialization>,
}

impl Default for Step2Data {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            account_type: UserRole::Buyer,
            business_type: None,
            farm_size: None,
            farmer_specialization: None,
            logistics_specialization: None,
        }
    }
}

/// Step 3: terms and preferences
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step3Data {
    pub accept_terms: bool,
    pub newsletter_subscribed: bool,
    pub default_shipping_address: Option<AddressProps>,
}

/// Multi-step registration workflow
///
/// Holds partial form state per step and drives the final submission
/// through the registration use case.
pub struct RegistrationWorkflow {
    use_case: RegisterUseCase,
    current_step: RegistrationStep,
    step1: Step1Data,
    step2: Step2Data,
    step3: Step3Data,
    error: Option<String>,
    notice: Option<String>,
    last_failure: Option<UserFacingError>,
}

impl RegistrationWorkflow {
    /// Create a workflow submitting through the given auth provider
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            use_case: RegisterUseCase::new(provider),
            current_step: RegistrationStep::Credentials,
            step1: Step1Data::default(),
            step2: Step2Data::default(),
            step3: Step3Data::default(),
            error: None,
            notice: None,
            last_failure: None,
        }
    }

    pub fn current_step(&self) -> RegistrationStep {
        self.current_step
    }

    pub fn step1_data(&self) -> &Step1Data {
        &self.step1
    }

    pub fn step2_data(&self) -> &Step2Data {
        &self.step2
    }

    pub fn step3_data(&self) -> &Step3Data {
        &self.step3
    }

    /// Error message from the last side-effecting validation or submission
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Success notification from the last submission
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// User-facing translation of the last submission failure
    pub fn last_failure(&self) -> Option<&UserFacingError> {
        self.last_failure.as_ref()
    }

    /// Merge changes into step 1's data; clears any held error
    pub fn update_step1(&mut self, apply: impl FnOnce(&mut Step1Data)) {
        self.error = None;
        apply(&mut self.step1);
    }

    /// Merge changes into step 2's data; clears any held error
    pub fn update_step2(&mut self, apply: impl FnOnce(&mut Step2Data)) {
        self.error = None;
        apply(&mut self.step2);
    }

    /// Merge changes into step 3's data; clears any held error
    pub fn update_step3(&mut self, apply: impl FnOnce(&mut Step3Data)) {
        self.error = None;
        apply(&mut self.step3);
    }

    /// Pure validity check over the given step's current data
    ///
    /// No mutation, no error-setting: callers may poll freely, e.g. to
    /// enable a "Next" button.
    pub fn is_valid_step(&self, step: RegistrationStep) -> bool {
        match step {
            RegistrationStep::Credentials => {
                !self.step1.email.is_empty()
                    && !self.step1.password.is_empty()
                    && !self.step1.confirm_password.is_empty()
                    && self.step1.password == self.step1.confirm_password
                    && self.step1.password.len() >= MIN_PASSWORD_LENGTH
            }
            RegistrationStep::Profile => {
                if self.step2.first_name.is_empty()
                    || self.step2.last_name.is_empty()
                    || self.step2.phone.is_empty()
                {
                    return false;
                }
                match self.step2.account_type {
                    UserRole::Farmer => self.step2.business_type.is_some(),
                    UserRole::Transporter => {
                        self.step2.business_type.is_some()
                            && self.step2.logistics_specialization.is_some()
                    }
                    _ => true,
                }
            }
            RegistrationStep::Terms => self.step3.accept_terms,
        }
    }

    /// Validate step 1, setting the held error message on failure
    pub fn validate_step1(&mut self) -> bool {
        if self.step1.email.is_empty()
            || self.step1.password.is_empty()
            || self.step1.confirm_password.is_empty()
        {
            self.error = Some("All fields are required".to_string());
            return false;
        }
        if self.step1.password != self.step1.confirm_password {
            self.error = Some("Passwords do not match".to_string());
            return false;
        }
        if self.step1.password.len() < MIN_PASSWORD_LENGTH {
            self.error = Some("Password must be at least 8 characters long".to_string());
            return false;
        }
        self.error = None;
        true
    }

    /// Validate step 2, setting the held error message on failure
    pub fn validate_step2(&mut self) -> bool {
        if self.step2.first_name.is_empty()
            || self.step2.last_name.is_empty()
            || self.step2.phone.is_empty()
        {
            self.error = Some("All required fields must be filled".to_string());
            return false;
        }
        match self.step2.account_type {
            UserRole::Farmer if self.step2.business_type.is_none() => {
                self.error = Some("Business type is required for farmer accounts".to_string());
                return false;
            }
            UserRole::Transporter
                if self.step2.business_type.is_none()
                    || self.step2.logistics_specialization.is_none() =>
            {
                self.error = Some(
                    "Business type and specialization are required for transporter accounts"
                        .to_string(),
                );
                return false;
            }
            _ => {}
        }
        self.error = None;
        true
    }

    /// Validate step 3, setting the held error message on failure
    pub fn validate_step3(&mut self) -> bool {
        if !self.step3.accept_terms {
            self.error =
                Some("You must accept the terms and conditions to continue".to_string());
            return false;
        }
        self.error = None;
        true
    }

    /// Advance to the next step, only if the current step validates
    ///
    /// On an invalid step the cursor does not move and no error is forced;
    /// showing inline validation is the caller's responsibility.
    pub fn next_step(&mut self) {
        if self.is_valid_step(self.current_step) {
            if let Some(next) = self.current_step.next() {
                self.current_step = next;
            }
        }
    }

    /// Return to the previous step; always succeeds unless already at step 1
    pub fn previous_step(&mut self) {
        if let Some(previous) = self.current_step.previous() {
            self.current_step = previous;
            self.error = None;
        }
    }

    pub fn can_go_next(&self) -> bool {
        self.is_valid_step(self.current_step)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_step != RegistrationStep::Credentials
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == RegistrationStep::Terms
    }

    /// Submit the registration
    ///
    /// Re-validates all three steps (setting the error message on the
    /// first failure), merges the step data into one request and runs it
    /// through the registration use case. On success a welcome notice is
    /// held; on failure the error is translated through the user-facing
    /// category table, recorded, and re-raised.
    pub async fn register(&mut self) -> DomainResult<AuthSession> {
        if !self.validate_step1() || !self.validate_step2() || !self.validate_step3() {
            let message = self
                .error
                .clone()
                .unwrap_or_else(|| "Veuillez remplir tous les champs requis".to_string());
            return Err(DomainError::validation(message));
        }

        self.notice = None;
        self.last_failure = None;

        let request = self.to_request();
        debug!(step = self.current_step.number(), "Submitting registration");

        match self.use_case.execute(request).await {
            Ok(session) => {
                self.notice = Some(format!(
                    "Bienvenue, {} ! Votre compte a été créé avec succès.",
                    session.user.first_name
                ));
                Ok(session)
            }
            Err(err) => {
                let friendly = ErrorHandler::to_user_friendly(&err);
                self.error = Some(friendly.message.clone());
                self.last_failure = Some(friendly);
                Err(err)
            }
        }
    }

    /// Reset the wizard to its initial state
    pub fn reset(&mut self) {
        self.current_step = RegistrationStep::Credentials;
        self.step1 = Step1Data::default();
        self.step2 = Step2Data::default();
        self.step3 = Step3Data::default();
        self.error = None;
        self.notice = None;
        self.last_failure = None;
    }

    fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.step1.email.clone(),
            password: self.step1.password.clone(),
            confirm_password: self.step1.confirm_password.clone(),
            first_name: self.step2.first_name.clone(),
            last_name: self.step2.last_name.clone(),
            phone: self.step2.phone.clone(),
            account_type: self.step2.account_type,
            business_type: self.step2.business_type,
            farm_size: self.step2.farm_size,
            farmer_specialization: self.step2.farmer_specialization,
            logistics_specialization: self.step2.logistics_specialization,
            default_shipping_address: self.step3.default_shipping_address.clone(),
            accept_terms: self.step3.accept_terms,
            newsletter_subscribed: Some(self.step3.newsletter_subscribed),
        }
    }
}
