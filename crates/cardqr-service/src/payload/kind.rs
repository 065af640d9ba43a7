//! Content-kind selector.

use serde::{Deserialize, Serialize};

/// What a QR code carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PayloadKind {
    /// A contact card (vCard or MECARD).
    #[default]
    Vcard,
    /// Plain text.
    Text,
    /// A web address.
    Url,
    /// A `mailto:` link.
    Email,
    /// An `sms:` link.
    Sms,
}

impl PayloadKind {
    /// Parses a selector, falling back to [`PayloadKind::Vcard`] for anything
    /// unrecognized.
    #[must_use]
    pub fn from_selector(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "vcard" => Self::Vcard,
            "text" => Self::Text,
            "url" => Self::Url,
            "email" => Self::Email,
            "sms" => Self::Sms,
            other => {
                tracing::debug!(selector = other, "Unrecognized payload kind, using vcard");
                Self::Vcard
            }
        }
    }

    /// Returns the selector string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vcard => "vcard",
            Self::Text => "text",
            Self::Url => "url",
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

impl From<String> for PayloadKind {
    fn from(value: String) -> Self {
        Self::from_selector(&value)
    }
}

impl From<&str> for PayloadKind {
    fn from(value: &str) -> Self {
        Self::from_selector(value)
    }
}
