//! Person aggregate: form fields and their validation rules

pub mod aggregate;
pub mod rules;

pub use aggregate::{Person, PersonField, UnknownFieldError, ValidationError};
pub use rules::{PersonErrors, PersonRules};
