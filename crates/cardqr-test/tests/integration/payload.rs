//! Dispatcher properties.

use cardqr_test::component::payload::{PayloadKind, PayloadRequest, build_payload};
use cardqr_test::component::vcard::{FormatVersion, MecardRecord};

use crate::helpers::{dispatcher, john_doe, johnny};

fn url_request(url: &str) -> PayloadRequest {
    PayloadRequest {
        kind: PayloadKind::Url,
        url: url.to_string(),
        ..PayloadRequest::default()
    }
}

#[test]
fn url_scheme_handling() {
    assert_eq!(build_payload(&url_request("example.com")), "https://example.com");
    assert_eq!(build_payload(&url_request("http://x")), "http://x");
}

#[test_log::test]
fn bogus_kind_equals_vcard() {
    let vcard = PayloadRequest {
        kind: PayloadKind::Vcard,
        contact: MecardRecord::from(john_doe()),
        vcard_version: FormatVersion::V30,
        ..PayloadRequest::default()
    };
    let bogus = PayloadRequest {
        kind: PayloadKind::from_selector("bogus-kind"),
        ..vcard.clone()
    };

    assert_eq!(dispatcher().build(&bogus), dispatcher().build(&vcard));
}

#[test]
fn bogus_kind_from_json_equals_vcard() {
    let parse = |kind: &str| {
        serde_json::from_str::<PayloadRequest>(&format!(
            r#"{{"kind": "{kind}", "vcardVersion": "mecard", "contact": {{"lastName": "Doe", "firstName": "John", "phone": "555", "nickname": "Johnny", "birthday": "1990-01-02"}}}}"#
        ))
        .expect("valid request")
    };

    let expected = "MECARD:N:Doe,John;TEL:555;NICKNAME:Johnny;BDAY:19900102;;";
    assert_eq!(dispatcher().build(&parse("vcard")), expected);
    assert_eq!(dispatcher().build(&parse("qr-wifi")), expected);
    assert_eq!(parse("vcard").contact, johnny());
}

#[test]
fn simple_kinds() {
    let request = PayloadRequest {
        text: "Hello, scan me!".to_string(),
        email: "ian@example.com".to_string(),
        sms: "+639178888888".to_string(),
        ..PayloadRequest::default()
    };

    let with_kind = |kind| PayloadRequest {
        kind,
        ..request.clone()
    };

    assert_eq!(build_payload(&with_kind(PayloadKind::Text)), "Hello, scan me!");
    assert_eq!(build_payload(&with_kind(PayloadKind::Email)), "mailto:ian@example.com");
    assert_eq!(build_payload(&with_kind(PayloadKind::Sms)), "sms:+639178888888");
}
