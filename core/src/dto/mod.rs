//! Request data transfer objects for the auth use cases.

pub mod login_request;
pub mod register_request;

pub use login_request::LoginRequest;
pub use register_request::RegisterRequest;
