//! ## Summary
//! Field validation for contact records, tuned per target format.
//!
//! Every rule is evaluated; all violations are collected in order.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::rfc::vcard::core::{ContactRecord, FormatVersion};

/// A single user-facing validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("At least First Name or Last Name is required")]
    NameRequired,

    #[error("Birthday must be in YYYY-MM-DD format")]
    BirthdayFormat,

    #[error("Anniversary must be in YYYY-MM-DD format")]
    AnniversaryFormat,

    #[error("Email must be in valid format")]
    EmailFormat,

    #[error("URL must start with http:// or https://")]
    UrlScheme,
}

/// ## Summary
/// Outcome of validating a contact record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Returns true if no rule was violated
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the user-facing message for each violation
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

#[expect(clippy::expect_used)]
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

#[expect(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[expect(clippy::expect_used)]
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("url pattern is valid"));

/// ## Summary
/// Validates a contact record against the rules of a target format.
///
/// Gender needs no check here: [`Gender`](crate::rfc::vcard::core::Gender)
/// is a closed enum, so an invalid tag is rejected when the record is built.
#[must_use]
pub fn validate_contact(record: &ContactRecord, version: FormatVersion) -> ValidationReport {
    let mut errors = Vec::new();

    if !record.has_first_or_last_name() {
        errors.push(ValidationError::NameRequired);
    }

    if version == FormatVersion::V40 {
        if record.birthday().is_some_and(|d| !DATE_PATTERN.is_match(d)) {
            errors.push(ValidationError::BirthdayFormat);
        }
        if record.anniversary().is_some_and(|d| !DATE_PATTERN.is_match(d)) {
            errors.push(ValidationError::AnniversaryFormat);
        }
    }

    if record.email().is_some_and(|e| !EMAIL_PATTERN.is_match(e)) {
        errors.push(ValidationError::EmailFormat);
    }

    if record.url().is_some_and(|u| !URL_PATTERN.is_match(u)) {
        errors.push(ValidationError::UrlScheme);
    }

    tracing::debug!(%version, violations = errors.len(), "Validated contact record");

    ValidationReport { errors }
}
