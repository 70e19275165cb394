//! Registration request payload.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{
    BusinessType, FarmerSpecialization, LogisticsSpecialization, UserRole,
};
use crate::domain::value_objects::AddressProps;

/// Raw registration input combining credentials, profile and consent
///
/// Fields stay unvalidated strings; the register use case runs the ordered
/// validation pipeline over them before anything leaves the client. The
/// request has no persistent identity until the provider assigns one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    // Account credentials
    pub email: String,
    pub password: String,
    pub confirm_password: String,

    // Profile
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    // Sent to the gateway under its wire name
    #[serde(rename = "role")]
    pub account_type: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<BusinessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farm_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub farmer_specialization: Option<FarmerSpecialization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logistics_specialization: Option<LogisticsSpecialization>,

    // Optional shipping address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_address: Option<AddressProps>,

    // Consent
    pub accept_terms: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletter_subscribed: Option<bool>,
}

impl RegisterRequest {
    /// Minimal valid request for the given role, handy for tests and demos
    pub fn minimal(
        email: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
        account_type: UserRole,
    ) -> Self {
        let password = password.into();
        Self {
            email: email.into(),
            password: password.clone(),
            confirm_password: password,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
            account_type,
            business_type: None,
            farm_size: None,
            farmer_specialization: None,
            logistics_specialization: None,
            default_shipping_address: None,
            accept_terms: true,
            newsletter_subscribed: None,
        }
    }
}
