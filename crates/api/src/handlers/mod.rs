//! Request handlers, one module per resource.

pub mod onboarding;
pub mod profile;
