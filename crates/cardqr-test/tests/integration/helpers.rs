//! Shared fixtures.

use chrono::{DateTime, TimeZone, Utc};
use cardqr_test::component::payload::Dispatcher;
use cardqr_test::component::vcard::{
    ContactRecord, EmailType, FixedClock, MecardRecord, PhoneType, Serializer,
};

pub const FIXED_REV: &str = "20240102T030405Z";

pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5)
        .single()
        .expect("valid instant")
}

pub fn serializer() -> Serializer<FixedClock> {
    Serializer::with_clock(FixedClock(fixed_instant()))
}

pub fn dispatcher() -> Dispatcher<FixedClock> {
    Dispatcher::with_clock(FixedClock(fixed_instant()))
}

/// The John Doe contact used throughout the examples.
pub fn john_doe() -> ContactRecord {
    ContactRecord {
        last_name: Some("Doe".to_string()),
        first_name: Some("John".to_string()),
        phone: "+1234567890".to_string(),
        phone_type: PhoneType::Cell,
        email: "john@example.com".to_string(),
        email_type: EmailType::Work,
        organization: Some("Acme".to_string()),
        url: "https://acme.com".to_string(),
        note: Some("Hi".to_string()),
        ..ContactRecord::default()
    }
}

pub fn phone_only(phone: &str, phone_type: PhoneType) -> ContactRecord {
    ContactRecord {
        phone: phone.to_string(),
        phone_type,
        ..ContactRecord::default()
    }
}

pub fn johnny() -> MecardRecord {
    MecardRecord {
        contact: ContactRecord {
            last_name: Some("Doe".to_string()),
            first_name: Some("John".to_string()),
            phone: "555".to_string(),
            birthday: Some("1990-01-02".to_string()),
            ..ContactRecord::default()
        },
        nickname: Some("Johnny".to_string()),
    }
}

/// Replaces the `REV` value with a placeholder.
pub fn mask_rev(card: &str) -> String {
    card.lines()
        .map(|line| {
            if line.starts_with("REV:") {
                "REV:<timestamp>"
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
