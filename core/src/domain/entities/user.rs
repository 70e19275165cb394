//! User entity representing a registered account on the AgroLogistic platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{Address, Email, PhoneNumber};

/// Role of an account on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// A farmer selling produce and renting out equipment
    Farmer,
    /// A buyer purchasing produce on the marketplace
    Buyer,
    /// A transporter moving goods between parties
    Transporter,
    /// A platform administrator (cannot self-register)
    Admin,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Farmer => write!(f, "farmer"),
            UserRole::Buyer => write!(f, "buyer"),
            UserRole::Transporter => write!(f, "transporter"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Legal structure of a farmer or transporter business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    FamilyFarm,
    Cooperative,
    Gaec,
    Sarl,
    Sas,
    Independent,
}

/// Production focus of a farmer account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FarmerSpecialization {
    Cereals,
    Livestock,
    Dairy,
    Vegetables,
    Fruits,
    Viticulture,
    Mixed,
}

/// Fleet specialization of a transporter account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsSpecialization {
    Refrigerated,
    Bulk,
    Livestock,
    Containers,
    General,
}

/// User aggregate holding identity and profile fields
///
/// The identity is opaque: either generated locally at creation or assigned
/// by the backend during hydration. It is set exactly once and never
/// mutated afterwards, which is why the field is private behind an accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, set once at construction
    id: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Validated email address
    pub email: Email,

    /// Account role
    pub role: UserRole,

    /// Optional validated phone number
    pub phone: Option<PhoneNumber>,

    /// Optional default shipping address
    pub address: Option<Address>,

    /// Optional profile biography
    pub bio: Option<String>,

    /// Optional avatar URL
    pub avatar_url: Option<String>,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a generated identity
    ///
    /// Stamps `created_at` and `updated_at` with the current time.
    pub fn create(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Email,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            role,
            phone: None,
            address: None,
            bio: None,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuilds a User from a backend payload with its assigned identity
    pub fn hydrate(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: Email,
        role: UserRole,
        avatar_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            role,
            phone: None,
            address: None,
            bio: None,
            avatar_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Opaque identity, assigned exactly once at construction
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Attach a validated phone number
    pub fn with_phone(mut self, phone: PhoneNumber) -> Self {
        self.phone = Some(phone);
        self
    }

    /// Attach a default shipping address
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Updates the profile fields and bumps `updated_at`
    pub fn update_profile(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        bio: Option<String>,
    ) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        if bio.is_some() {
            self.bio = bio;
        }
        self.updated_at = Utc::now();
    }

    /// Changes the avatar and bumps `updated_at`
    pub fn change_avatar(&mut self, url: impl Into<String>) {
        self.avatar_url = Some(url.into());
        self.updated_at = Utc::now();
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks if the account is a farmer
    pub fn is_farmer(&self) -> bool {
        matches!(self.role, UserRole::Farmer)
    }

    /// Checks if the account is a transporter
    pub fn is_transporter(&self) -> bool {
        matches!(self.role, UserRole::Transporter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> Email {
        Email::new(value).unwrap()
    }

    #[test]
    fn test_create_user() {
        let user = User::create("John", "Doe", email("john@example.com"), UserRole::Farmer);

        assert!(!user.id().is_empty());
        assert_eq!(user.first_name, "John");
        assert_eq!(user.last_name, "Doe");
        assert_eq!(user.email.value(), "john@example.com");
        assert_eq!(user.role, UserRole::Farmer);
        assert!(user.phone.is_none());
        assert!(user.bio.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_hydrate_keeps_backend_id() {
        let user = User::hydrate(
            "farmer-001",
            "Pierre",
            "Dupont",
            email("pierre@agrologistic.com"),
            UserRole::Farmer,
            Some("https://cdn.example.com/avatar.png".to_string()),
        );

        assert_eq!(user.id(), "farmer-001");
        assert_eq!(
            user.avatar_url.as_deref(),
            Some("https://cdn.example.com/avatar.png")
        );
    }

    #[test]
    fn test_update_profile_bumps_updated_at() {
        let mut user = User::create("John", "Doe", email("john@example.com"), UserRole::Buyer);
        let created = user.created_at;

        user.update_profile("Jane", "Doe", Some("Organic produce buyer".to_string()));

        assert_eq!(user.first_name, "Jane");
        assert_eq!(user.bio.as_deref(), Some("Organic produce buyer"));
        assert!(user.updated_at >= created);
    }

    #[test]
    fn test_change_avatar() {
        let mut user = User::create("John", "Doe", email("john@example.com"), UserRole::Buyer);

        user.change_avatar("https://cdn.example.com/new.png");

        assert_eq!(
            user.avatar_url.as_deref(),
            Some("https://cdn.example.com/new.png")
        );
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(
            serde_json::to_string(&UserRole::Farmer).unwrap(),
            "\"farmer\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Transporter).unwrap(),
            "\"transporter\""
        );
        assert_eq!(
            serde_json::to_string(&BusinessType::FamilyFarm).unwrap(),
            "\"family_farm\""
        );
        assert_eq!(
            serde_json::to_string(&LogisticsSpecialization::Refrigerated).unwrap(),
            "\"refrigerated\""
        );
    }
}
