//! Validation logic for contact cards.
//!
//! Validation is advisory: it reports problems a user can fix but never
//! prevents serialization.

pub mod contact;
pub mod support;

pub use contact::{ValidationError, ValidationReport, validate_contact};
pub use support::{ContactField, unsupported_fields};
