//! Which contact fields each format can carry.

use crate::rfc::vcard::core::{FormatVersion, MecardRecord};

/// A user-editable contact field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    MiddleName,
    Prefix,
    Suffix,
    OrgUnit,
    Title,
    PhoneType,
    EmailType,
    Gender,
    Anniversary,
    Nickname,
}

impl ContactField {
    /// Returns the form label for this field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MiddleName => "Middle Name",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
            Self::OrgUnit => "Department",
            Self::Title => "Title",
            Self::PhoneType => "Phone Type",
            Self::EmailType => "Email Type",
            Self::Gender => "Gender",
            Self::Anniversary => "Anniversary",
            Self::Nickname => "Nickname",
        }
    }

    /// Returns whether `version` has a representation for this field.
    #[must_use]
    pub const fn is_supported_by(self, version: FormatVersion) -> bool {
        match version {
            FormatVersion::V21 | FormatVersion::V30 => {
                !matches!(self, Self::Gender | Self::Anniversary | Self::Nickname)
            }
            FormatVersion::V40 => !matches!(self, Self::EmailType | Self::Nickname),
            FormatVersion::Mecard => matches!(self, Self::Nickname),
        }
    }
}

/// ## Summary
/// Lists the populated fields that `version` will silently drop.
///
/// Type tags only count when the phone or email they qualify is present.
#[must_use]
pub fn unsupported_fields(record: &MecardRecord, version: FormatVersion) -> Vec<ContactField> {
    let populated = |value: Option<&String>| value.is_some_and(|s| !s.is_empty());

    [
        (ContactField::MiddleName, populated(record.middle_name.as_ref())),
        (ContactField::Prefix, populated(record.prefix.as_ref())),
        (ContactField::Suffix, populated(record.suffix.as_ref())),
        (ContactField::OrgUnit, record.organization().is_some() && record.org_unit().is_some()),
        (ContactField::Title, record.title().is_some()),
        (ContactField::PhoneType, record.phone().is_some()),
        (ContactField::EmailType, record.email().is_some()),
        (ContactField::Gender, record.gender.is_some()),
        (ContactField::Anniversary, record.anniversary().is_some()),
        (ContactField::Nickname, record.nickname().is_some()),
    ]
    .into_iter()
    .filter(|&(field, present)| present && !field.is_supported_by(version))
    .map(|(field, _)| field)
    .collect()
}
