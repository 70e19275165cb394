//! Domain entities.

pub mod user;

pub use user::{BusinessType, FarmerSpecialization, LogisticsSpecialization, User, UserRole};
