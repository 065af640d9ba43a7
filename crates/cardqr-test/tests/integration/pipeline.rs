//! Binary pipeline: configuration defaults → request document → payload.

use cardqr_test::component::app::render::render;
use cardqr_test::component::app::request::{OutputDefaults, RequestDocument};
use cardqr_test::component::config::Settings;
use cardqr_test::component::payload::{ErrorCorrectionLevel, PayloadKind};
use cardqr_test::component::validation::ContactField;
use cardqr_test::component::vcard::FormatVersion;

use crate::helpers::{FIXED_REV, dispatcher};

fn default_output() -> OutputDefaults {
    let settings = Settings::defaults()
        .and_then(|builder| Ok(builder.build()?.try_deserialize::<Settings>()?))
        .expect("defaults should deserialize");
    OutputDefaults::from_config(&settings.output).expect("defaults should parse")
}

#[test_log::test]
fn configured_defaults_are_v3_vcard_at_high() {
    let defaults = default_output();

    assert_eq!(defaults.kind, PayloadKind::Vcard);
    assert_eq!(defaults.version, FormatVersion::V30);
    assert_eq!(defaults.error_correction, ErrorCorrectionLevel::High);
}

/// The contact form's initial state, blank fields included.
const INITIAL_FORM_STATE: &str = r#"{
    "firstName": "Ian",
    "lastName": "Delairre",
    "middleName": "",
    "prefix": "",
    "suffix": "",
    "organization": "Legacy Immortal",
    "orgUnit": "",
    "title": "CTO",
    "phone": "+639178888888",
    "phoneType": "CELL",
    "email": "ian@legacyimmortal.com",
    "emailType": "WORK",
    "url": "https://legacyimmortal.com",
    "note": "Scan to connect!",
    "streetAddress": "",
    "city": "",
    "state": "",
    "postalCode": "",
    "country": "",
    "birthday": "",
    "gender": "",
    "anniversary": ""
}"#;

fn form_state_document(selectors: &str) -> RequestDocument {
    RequestDocument::parse(&format!(
        r#"{{{selectors} "contact": {INITIAL_FORM_STATE}}}"#
    ))
    .expect("initial form state is a valid request")
}

#[test_log::test]
fn form_state_renders_with_defaults() {
    let rendered = render(&dispatcher(), form_state_document(""), &default_output());

    assert_eq!(
        rendered.payload.text,
        format!(
            "BEGIN:VCARD\n\
             VERSION:3.0\n\
             N:Delairre;Ian;;;\n\
             FN:Ian Delairre\n\
             ORG:Legacy Immortal\n\
             TITLE:CTO\n\
             TEL;TYPE=CELL:+639178888888\n\
             EMAIL;TYPE=WORK:ian@legacyimmortal.com\n\
             URL:https://legacyimmortal.com\n\
             NOTE:Scan to connect!\n\
             REV:{FIXED_REV}\n\
             END:VCARD"
        )
    );
    assert_eq!(rendered.payload.error_correction, ErrorCorrectionLevel::High);
    assert!(rendered.report.is_some_and(|report| report.is_valid()));
    assert!(rendered.dropped.is_empty());
}

#[test_log::test]
fn form_state_with_blank_v4_fields_renders_at_v4() {
    let rendered = render(
        &dispatcher(),
        form_state_document(r#""vcardVersion": "4.0","#),
        &default_output(),
    );

    assert_eq!(
        rendered.payload.text,
        format!(
            "BEGIN:VCARD\n\
             VERSION:4.0\n\
             N:Delairre,Ian,,,\n\
             FN:Ian Delairre\n\
             ORG:Legacy Immortal\n\
             TITLE:CTO\n\
             TEL;TYPE=cell:+639178888888\n\
             EMAIL:ian@legacyimmortal.com\n\
             URL:https://legacyimmortal.com\n\
             NOTE:Scan to connect!\n\
             REV:{FIXED_REV}\n\
             END:VCARD"
        )
    );
    assert!(rendered.report.is_some_and(|report| report.is_valid()));
    assert_eq!(rendered.dropped, vec![ContactField::EmailType]);
}

#[test]
fn v4_request_reports_dropped_email_type() {
    let document = RequestDocument::parse(
        r#"{"vcardVersion": "4.0", "errorCorrection": "L",
            "contact": {"firstName": "Ian", "email": "ian@example.com", "gender": "M"}}"#,
    )
    .expect("valid document");

    let rendered = render(&dispatcher(), document, &default_output());

    assert!(rendered.payload.text.contains("\nEMAIL:ian@example.com\nGENDER:M\n"));
    assert_eq!(rendered.payload.error_correction, ErrorCorrectionLevel::Low);
    assert_eq!(rendered.dropped, vec![ContactField::EmailType]);
}

#[test]
fn url_request_skips_contact_checks() {
    let document = RequestDocument::parse(r#"{"kind": "url", "url": "legacyimmortal.com"}"#)
        .expect("valid document");

    let rendered = render(&dispatcher(), document, &default_output());

    assert_eq!(rendered.payload.text, "https://legacyimmortal.com");
    assert!(rendered.report.is_none());
}
