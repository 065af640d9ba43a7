//! Contact card core types.
//!
//! - [`ContactRecord`] - Contact fields shared by every format
//! - [`MecardRecord`] - Contact plus the MECARD-only nickname
//! - [`FormatVersion`] - vCard 2.1/3.0/4.0 or MECARD
//! - [`PhoneType`], [`EmailType`], [`Gender`] - Closed property tags

mod record;
mod tags;
mod version;

pub use record::{CardRecord, ContactRecord, MecardRecord};
pub use tags::{EmailType, Gender, PhoneType};
pub use version::FormatVersion;
