//! Target card format.

use serde::{Deserialize, Serialize};

use crate::error::{RfcError, RfcResult};

/// Output format for a contact card.
///
/// The three vCard versions share one serializer driven by a dialect table;
/// MECARD has its own compact serializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FormatVersion {
    /// vCard 2.1.
    #[serde(rename = "2.1")]
    V21,
    /// vCard 3.0 (RFC 2426).
    #[default]
    #[serde(rename = "3.0")]
    V30,
    /// vCard 4.0 (RFC 6350).
    #[serde(rename = "4.0")]
    V40,
    /// MECARD compact format.
    #[serde(rename = "mecard")]
    Mecard,
}

impl FormatVersion {
    /// All formats, in the order they are offered to users.
    pub const ALL: [Self; 4] = [Self::V21, Self::V30, Self::V40, Self::Mecard];

    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V21 => "2.1",
            Self::V30 => "3.0",
            Self::V40 => "4.0",
            Self::Mecard => "mecard",
        }
    }

    /// Returns a human-readable label for format pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::V21 => "vCard 2.1 (Maximum Compatibility)",
            Self::V30 => "vCard 3.0 (Recommended)",
            Self::V40 => "vCard 4.0 (Latest Standard)",
            Self::Mecard => "MECARD (Compact Format)",
        }
    }

    /// Returns a reader-compatibility notice, if the format has one.
    #[must_use]
    pub const fn compatibility_notice(self) -> Option<&'static str> {
        match self {
            Self::V40 => Some(
                "vCard 4.0 is the latest standard but may not be supported by all older devices and QR code scanners.",
            ),
            Self::V21 | Self::V30 | Self::Mecard => None,
        }
    }
}

impl core::str::FromStr for FormatVersion {
    type Err = RfcError;

    fn from_str(s: &str) -> RfcResult<Self> {
        match s.trim() {
            "2.1" => Ok(Self::V21),
            "3.0" => Ok(Self::V30),
            "4.0" => Ok(Self::V40),
            m if m.eq_ignore_ascii_case("mecard") => Ok(Self::Mecard),
            other => Err(RfcError::UnknownFormatVersion(other.to_string())),
        }
    }
}

impl core::fmt::Display for FormatVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
