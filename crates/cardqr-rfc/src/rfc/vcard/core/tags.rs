//! Enumerated property tags (TEL/EMAIL type and GENDER sex).

use serde::{Deserialize, Serialize};

use crate::error::{RfcError, RfcResult};

/// Telephone type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum PhoneType {
    /// Mobile phone.
    #[default]
    Cell,
    /// Work phone.
    Work,
    /// Home phone.
    Home,
    /// Fax line.
    Fax,
}

impl PhoneType {
    /// Returns the upper-case wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cell => "CELL",
            Self::Work => "WORK",
            Self::Home => "HOME",
            Self::Fax => "FAX",
        }
    }
}

impl core::str::FromStr for PhoneType {
    type Err = RfcError;

    fn from_str(s: &str) -> RfcResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CELL" => Ok(Self::Cell),
            "WORK" => Ok(Self::Work),
            "HOME" => Ok(Self::Home),
            "FAX" => Ok(Self::Fax),
            _ => Err(RfcError::UnknownTag {
                kind: "phone type",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for PhoneType {
    type Error = RfcError;

    fn try_from(value: String) -> RfcResult<Self> {
        value.parse()
    }
}

/// Email type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum EmailType {
    /// Work address.
    #[default]
    Work,
    /// Personal address.
    Home,
}

impl EmailType {
    /// Returns the upper-case wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Home => "HOME",
        }
    }
}

impl core::str::FromStr for EmailType {
    type Err = RfcError;

    fn from_str(s: &str) -> RfcResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WORK" => Ok(Self::Work),
            "HOME" => Ok(Self::Home),
            _ => Err(RfcError::UnknownTag {
                kind: "email type",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for EmailType {
    type Error = RfcError;

    fn try_from(value: String) -> RfcResult<Self> {
        value.parse()
    }
}

/// Sex component of the vCard 4.0 GENDER property (RFC 6350 §6.2.7).
///
/// Deserializes from the single-letter tag; any other tag is rejected with
/// the same message the validator reports for a bad gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Gender {
    /// Male.
    #[serde(rename = "M")]
    Male,
    /// Female.
    #[serde(rename = "F")]
    Female,
    /// Other.
    #[serde(rename = "O")]
    Other,
    /// None or not applicable.
    #[serde(rename = "N")]
    None,
    /// Unknown.
    #[serde(rename = "U")]
    Unknown,
}

impl Gender {
    /// Parses from single character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Self::Male),
            'F' => Some(Self::Female),
            'O' => Some(Self::Other),
            'N' => Some(Self::None),
            'U' => Some(Self::Unknown),
            _ => Option::None,
        }
    }

    /// Returns the single-character representation.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Other => 'O',
            Self::None => 'N',
            Self::Unknown => 'U',
        }
    }
}

impl core::str::FromStr for Gender {
    type Err = RfcError;

    fn from_str(s: &str) -> RfcResult<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), Option::None) => {
                Self::from_char(c).ok_or_else(|| RfcError::InvalidGender(s.to_string()))
            }
            _ => Err(RfcError::InvalidGender(s.to_string())),
        }
    }
}

impl TryFrom<String> for Gender {
    type Error = RfcError;

    fn try_from(value: String) -> RfcResult<Self> {
        value.parse()
    }
}
