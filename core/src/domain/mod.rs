//! Domain layer: entities and value objects.

pub mod entities;
pub mod value_objects;

pub use entities::user::{
    BusinessType, FarmerSpecialization, LogisticsSpecialization, User, UserRole,
};
pub use value_objects::{Address, AddressProps, AuthSession, Email, PhoneNumber};
