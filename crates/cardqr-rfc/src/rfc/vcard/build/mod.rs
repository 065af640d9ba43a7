//! Contact card serialization.
//!
//! ## Usage
//!
//! ```rust
//! use cardqr_rfc::rfc::vcard::{ContactRecord, FormatVersion, serialize};
//!
//! let record = ContactRecord {
//!     first_name: Some("John".to_string()),
//!     last_name: Some("Doe".to_string()),
//!     ..ContactRecord::default()
//! };
//!
//! let output = serialize(&record, FormatVersion::V21);
//! assert_eq!(output, "BEGIN:VCARD\nVERSION:2.1\nN:Doe;John;;;\nFN:John Doe\nEND:VCARD");
//! ```
//!
//! ## Features
//!
//! - vCard 2.1, 3.0 and 4.0 driven by a per-version [`VcardDialect`] table
//! - Compact MECARD output
//! - Injectable [`Clock`] for the `REV` timestamp
//!
//! Values are written verbatim: no escaping and no line folding.

mod clock;
mod dialect;
mod mecard;
mod serializer;

pub use clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use dialect::{TypeParam, VCARD_21, VCARD_30, VCARD_40, VcardDialect};

use crate::rfc::vcard::core::{CardRecord, FormatVersion};

/// Transcodes a display date (`YYYY-MM-DD`) to wire form (`YYYYMMDD`).
#[must_use]
pub fn wire_date(display: &str) -> String {
    display.replace('-', "")
}

/// Card serializer bound to a time source.
#[derive(Debug, Clone, Default)]
pub struct Serializer<C = SystemClock> {
    clock: C,
}

impl Serializer<SystemClock> {
    #[must_use]
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Serializer<C> {
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Renders a record in the requested format.
    ///
    /// A plain [`ContactRecord`](crate::rfc::vcard::core::ContactRecord)
    /// rendered as MECARD simply has no nickname.
    #[must_use]
    pub fn serialize<R: CardRecord + ?Sized>(&self, record: &R, version: FormatVersion) -> String {
        match VcardDialect::for_version(version) {
            Some(dialect) => {
                serializer::serialize_vcard(record.contact(), dialect, || self.clock.now())
            }
            None => mecard::serialize_mecard(record.contact(), record.nickname()),
        }
    }
}

/// Renders a record in the requested format using the system clock.
#[must_use]
pub fn serialize<R: CardRecord + ?Sized>(record: &R, version: FormatVersion) -> String {
    Serializer::new().serialize(record, version)
}

/// Renders a record as a MECARD.
#[must_use]
pub fn serialize_mecard<R: CardRecord + ?Sized>(record: &R) -> String {
    mecard::serialize_mecard(record.contact(), record.nickname())
}
