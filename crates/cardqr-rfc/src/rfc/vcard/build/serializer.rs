//! vCard 2.1/3.0/4.0 serialization.

use chrono::{DateTime, Utc};

use super::clock::format_timestamp;
use super::dialect::VcardDialect;
use super::wire_date;
use crate::rfc::vcard::core::ContactRecord;

/// Renders a contact as a vCard in the given dialect.
///
/// `revised` is only read when the dialect writes `REV`.
pub(super) fn serialize_vcard(
    record: &ContactRecord,
    dialect: &VcardDialect,
    revised: impl FnOnce() -> DateTime<Utc>,
) -> String {
    let mut lines = vec!["BEGIN:VCARD".to_string(), format!("VERSION:{}", dialect.version)];

    if record.has_name() {
        lines.push(format!(
            "N:{}",
            dialect.join_components(&record.name_components())
        ));

        let display_name = record.display_name();
        if !display_name.is_empty() {
            lines.push(format!("FN:{display_name}"));
        }
    }

    if let Some(organization) = record.organization() {
        match record.org_unit() {
            Some(unit) => lines.push(format!("ORG:{organization};{unit}")),
            None => lines.push(format!("ORG:{organization}")),
        }
    }

    if let Some(title) = record.title() {
        lines.push(format!("TITLE:{title}"));
    }

    if let Some(phone) = record.phone() {
        lines.push(
            dialect
                .tel_type
                .property("TEL", record.phone_type.as_str(), phone),
        );
    }

    if let Some(email) = record.email() {
        lines.push(
            dialect
                .email_type
                .property("EMAIL", record.email_type.as_str(), email),
        );
    }

    if let Some(url) = record.url() {
        lines.push(format!("URL:{url}"));
    }

    if record.has_address() {
        // PO box and extended address are never collected
        let [street, locality, region, postal_code, country] = record.address_components();
        let components = ["", "", street, locality, region, postal_code, country];
        lines.push(format!("ADR:{}", dialect.join_components(&components)));
    }

    if let Some(birthday) = record.birthday() {
        lines.push(format!("BDAY:{}", wire_date(birthday)));
    }

    if dialect.v4_properties {
        if let Some(gender) = record.gender {
            lines.push(format!("GENDER:{}", gender.as_char()));
        }
        if let Some(anniversary) = record.anniversary() {
            lines.push(format!("ANNIVERSARY:{}", wire_date(anniversary)));
        }
    }

    if let Some(note) = record.note() {
        lines.push(format!("NOTE:{note}"));
    }

    if dialect.revision {
        lines.push(format!("REV:{}", format_timestamp(revised())));
    }

    lines.push("END:VCARD".to_string());

    tracing::trace!(version = dialect.version, lines = lines.len(), "Serialized vCard");

    lines.join("\n")
}
