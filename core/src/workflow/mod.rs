//! Client-side multi-step registration workflow.

pub mod registration;

#[cfg(test)]
mod tests;

pub use registration::{
    RegistrationStep, RegistrationWorkflow, Step1Data, Step2Data, Step3Data,
};
