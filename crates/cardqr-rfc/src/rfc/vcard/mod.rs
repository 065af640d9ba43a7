//! Contact cards: vCard (2.1, 3.0, 4.0) and MECARD.
//!
//! ## Overview
//!
//! A [`ContactRecord`] holds what a user typed into a contact form. It is
//! rendered into one of four text formats for embedding in a QR code:
//!
//! - vCard 2.1, 3.0 (RFC 2426) and 4.0 (RFC 6350), one line per property
//!   joined with `\n`
//! - MECARD, a single `;`-delimited line with a narrower field set
//!
//! ## Usage
//!
//! ```rust
//! use cardqr_rfc::rfc::vcard::{ContactRecord, MecardRecord, serialize_mecard};
//!
//! let record = MecardRecord {
//!     contact: ContactRecord {
//!         last_name: Some("Doe".to_string()),
//!         first_name: Some("John".to_string()),
//!         phone: "555".to_string(),
//!         birthday: Some("1990-01-02".to_string()),
//!         ..ContactRecord::default()
//!     },
//!     nickname: Some("Johnny".to_string()),
//! };
//!
//! assert_eq!(
//!     serialize_mecard(&record),
//!     "MECARD:N:Doe,John;TEL:555;NICKNAME:Johnny;BDAY:19900102;;"
//! );
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Record, tag, and version types
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;

// Re-export commonly used types
pub use build::{Clock, FixedClock, Serializer, SystemClock, serialize, serialize_mecard};
pub use core::{
    CardRecord, ContactRecord, EmailType, FormatVersion, Gender, MecardRecord, PhoneType,
};
