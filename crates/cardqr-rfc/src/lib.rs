//! Contact card formats: the contact record model, vCard 2.1/3.0/4.0 and
//! MECARD serialization, and per-format field validation.

pub mod error;
pub mod rfc;
