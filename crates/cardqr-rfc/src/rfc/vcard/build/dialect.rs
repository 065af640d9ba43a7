//! Per-version vCard rules.

use crate::rfc::vcard::core::FormatVersion;

/// How a TEL or EMAIL type tag is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeParam {
    /// `TEL;CELL:` (vCard 2.1).
    Bare,
    /// `TEL;TYPE=CELL:` (vCard 3.0).
    Typed,
    /// `TEL;TYPE=cell:` (vCard 4.0).
    TypedLowercase,
    /// No type parameter at all.
    Omitted,
}

impl TypeParam {
    /// Writes `NAME[;param]:value`.
    #[must_use]
    pub fn property(self, name: &str, tag: &str, value: &str) -> String {
        match self {
            Self::Bare => format!("{name};{tag}:{value}"),
            Self::Typed => format!("{name};TYPE={tag}:{value}"),
            Self::TypedLowercase => format!("{name};TYPE={}:{value}", tag.to_lowercase()),
            Self::Omitted => format!("{name}:{value}"),
        }
    }
}

/// The rule set that distinguishes one vCard version from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VcardDialect {
    /// Value of the `VERSION` property.
    pub version: &'static str,
    /// Separator between `N` and `ADR` components.
    pub component_separator: char,
    /// TEL type parameter style.
    pub tel_type: TypeParam,
    /// EMAIL type parameter style.
    pub email_type: TypeParam,
    /// Whether `REV` is written.
    pub revision: bool,
    /// Whether `GENDER` and `ANNIVERSARY` are written.
    pub v4_properties: bool,
}

pub const VCARD_21: VcardDialect = VcardDialect {
    version: "2.1",
    component_separator: ';',
    tel_type: TypeParam::Bare,
    email_type: TypeParam::Bare,
    revision: false,
    v4_properties: false,
};

pub const VCARD_30: VcardDialect = VcardDialect {
    version: "3.0",
    component_separator: ';',
    tel_type: TypeParam::Typed,
    email_type: TypeParam::Typed,
    revision: true,
    v4_properties: false,
};

pub const VCARD_40: VcardDialect = VcardDialect {
    version: "4.0",
    component_separator: ',',
    tel_type: TypeParam::TypedLowercase,
    email_type: TypeParam::Omitted,
    revision: true,
    v4_properties: true,
};

impl VcardDialect {
    /// Returns the dialect for a vCard version, or `None` for MECARD.
    #[must_use]
    pub fn for_version(version: FormatVersion) -> Option<&'static Self> {
        match version {
            FormatVersion::V21 => Some(&VCARD_21),
            FormatVersion::V30 => Some(&VCARD_30),
            FormatVersion::V40 => Some(&VCARD_40),
            FormatVersion::Mecard => None,
        }
    }

    /// Joins structured value components with this dialect's separator.
    #[must_use]
    pub fn join_components(&self, components: &[&str]) -> String {
        let mut sep = [0u8; 4];
        components.join(self.component_separator.encode_utf8(&mut sep))
    }
}
