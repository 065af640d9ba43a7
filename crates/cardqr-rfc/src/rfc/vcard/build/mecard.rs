//! MECARD serialization.

use super::wire_date;
use crate::rfc::vcard::core::ContactRecord;

/// Renders a contact as a MECARD.
///
/// Fields MECARD cannot carry (prefix, suffix, org unit, title, type tags,
/// gender, anniversary) are skipped. The result always ends in `;;`.
pub(super) fn serialize_mecard(record: &ContactRecord, nickname: Option<&str>) -> String {
    let mut parts = Vec::new();

    let name: Vec<&str> = [record.last_name(), record.first_name()]
        .into_iter()
        .flatten()
        .collect();
    if !name.is_empty() {
        parts.push(format!("N:{}", name.join(",")));
    }

    if let Some(phone) = record.phone() {
        parts.push(format!("TEL:{phone}"));
    }
    if let Some(email) = record.email() {
        parts.push(format!("EMAIL:{email}"));
    }
    if let Some(organization) = record.organization() {
        parts.push(format!("ORG:{organization}"));
    }
    if let Some(url) = record.url() {
        parts.push(format!("URL:{url}"));
    }
    if let Some(note) = record.note() {
        parts.push(format!("NOTE:{note}"));
    }
    if let Some(nickname) = nickname.filter(|s| !s.is_empty()) {
        parts.push(format!("NICKNAME:{nickname}"));
    }
    if let Some(birthday) = record.birthday() {
        parts.push(format!("BDAY:{}", wire_date(birthday)));
    }

    // Unlike vCard ADR, blank components are dropped
    let address: Vec<&str> = record
        .address_components()
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !address.is_empty() {
        parts.push(format!("ADR:{}", address.join(",")));
    }

    tracing::trace!(fields = parts.len(), "Serialized MECARD");

    format!("MECARD:{};;", parts.join(";"))
}
