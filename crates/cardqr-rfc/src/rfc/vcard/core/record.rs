//! Contact records fed to the card serializers.

use serde::{Deserialize, Deserializer, Serialize};

use super::tags::{EmailType, Gender, PhoneType};

/// A contact as entered by the user.
///
/// Absent and empty strings are both treated as blank. Dates are kept in
/// their display form (`YYYY-MM-DD`); serializers transcode them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,

    pub organization: Option<String>,
    pub org_unit: Option<String>,
    pub title: Option<String>,

    pub phone: String,
    pub phone_type: PhoneType,
    pub email: String,
    pub email_type: EmailType,
    pub url: String,

    pub note: Option<String>,

    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,

    pub birthday: Option<String>,
    #[serde(deserialize_with = "blank_gender")]
    pub gender: Option<Gender>,
    pub anniversary: Option<String>,
}

/// Reads a gender tag, treating an empty or whitespace-only tag as absent.
fn blank_gender<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Gender>, D::Error> {
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(tag) => tag.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Returns the field's text, or `""` when absent.
fn text(field: Option<&String>) -> &str {
    field.map_or("", String::as_str)
}

/// Returns the field's text when it is present and non-empty.
fn non_blank(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}

impl ContactRecord {
    /// Structured name components: family, given, additional, prefix, suffix.
    #[must_use]
    pub fn name_components(&self) -> [&str; 5] {
        [
            text(self.last_name.as_ref()),
            text(self.first_name.as_ref()),
            text(self.middle_name.as_ref()),
            text(self.prefix.as_ref()),
            text(self.suffix.as_ref()),
        ]
    }

    /// Returns whether any structured name component is non-blank.
    #[must_use]
    pub fn has_name(&self) -> bool {
        self.name_components().iter().any(|s| !s.is_empty())
    }

    /// Returns whether the first or last name is non-blank.
    #[must_use]
    pub fn has_first_or_last_name(&self) -> bool {
        self.first_name().is_some() || self.last_name().is_some()
    }

    /// Formats the display name: prefix, given, middle, family, suffix.
    #[must_use]
    pub fn display_name(&self) -> String {
        let [family, given, additional, prefix, suffix] = self.name_components();
        [prefix, given, additional, family, suffix]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Address components: street, locality, region, postal code, country.
    #[must_use]
    pub fn address_components(&self) -> [&str; 5] {
        [
            text(self.street_address.as_ref()),
            text(self.city.as_ref()),
            text(self.state.as_ref()),
            text(self.postal_code.as_ref()),
            text(self.country.as_ref()),
        ]
    }

    /// Returns whether any address component is non-blank.
    #[must_use]
    pub fn has_address(&self) -> bool {
        self.address_components().iter().any(|s| !s.is_empty())
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        non_blank(self.first_name.as_ref())
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        non_blank(self.last_name.as_ref())
    }

    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        non_blank(self.organization.as_ref())
    }

    #[must_use]
    pub fn org_unit(&self) -> Option<&str> {
        non_blank(self.org_unit.as_ref())
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        non_blank(self.title.as_ref())
    }

    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        Some(self.phone.as_str()).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        Some(self.url.as_str()).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        non_blank(self.note.as_ref())
    }

    #[must_use]
    pub fn birthday(&self) -> Option<&str> {
        non_blank(self.birthday.as_ref())
    }

    #[must_use]
    pub fn anniversary(&self) -> Option<&str> {
        non_blank(self.anniversary.as_ref())
    }
}

/// A contact plus the MECARD-only nickname.
///
/// The MECARD birthday is the contact's own `birthday`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MecardRecord {
    #[serde(flatten)]
    pub contact: ContactRecord,
    pub nickname: Option<String>,
}

impl MecardRecord {
    #[must_use]
    pub fn nickname(&self) -> Option<&str> {
        non_blank(self.nickname.as_ref())
    }
}

impl From<ContactRecord> for MecardRecord {
    fn from(contact: ContactRecord) -> Self {
        Self {
            contact,
            nickname: None,
        }
    }
}

impl core::ops::Deref for MecardRecord {
    type Target = ContactRecord;

    fn deref(&self) -> &ContactRecord {
        &self.contact
    }
}

/// Anything the card serializers can render.
pub trait CardRecord {
    /// The contact fields shared by every format.
    fn contact(&self) -> &ContactRecord;

    /// The MECARD nickname; vCard output never includes it.
    fn nickname(&self) -> Option<&str> {
        None
    }
}

impl CardRecord for ContactRecord {
    fn contact(&self) -> &ContactRecord {
        self
    }
}

impl CardRecord for MecardRecord {
    fn contact(&self) -> &ContactRecord {
        &self.contact
    }

    fn nickname(&self) -> Option<&str> {
        MecardRecord::nickname(self)
    }
}
