//! Application use cases orchestrating validation and provider delegation.

pub mod login;
pub mod register;

#[cfg(test)]
mod tests;

pub use login::LoginUseCase;
pub use register::RegisterUseCase;
