//! Value objects validating and encapsulating primitive business values.

pub mod address;
pub mod auth_session;
pub mod email;
pub mod phone_number;

pub use address::{Address, AddressProps};
pub use auth_session::AuthSession;
pub use email::Email;
pub use phone_number::PhoneNumber;
