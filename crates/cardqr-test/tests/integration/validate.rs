//! Validator properties.

use cardqr_test::component::validation::{ValidationError, validate_contact};
use cardqr_test::component::vcard::{ContactRecord, FormatVersion};

use crate::helpers::{john_doe, serializer};

#[test]
fn blank_names_fail_in_every_version() {
    let record = ContactRecord {
        first_name: Some(String::new()),
        last_name: Some(String::new()),
        ..ContactRecord::default()
    };

    for version in FormatVersion::ALL {
        let report = validate_contact(&record, version);
        assert!(!report.is_valid());
        assert!(report.errors.contains(&ValidationError::NameRequired));
    }
}

#[test]
fn malformed_email_fails_v3() {
    let record = ContactRecord {
        email: "not-an-email".to_string(),
        ..john_doe()
    };
    let report = validate_contact(&record, FormatVersion::V30);

    assert!(!report.is_valid());
    assert_eq!(report.messages(), vec!["Email must be in valid format".to_string()]);
}

#[test]
fn john_doe_is_valid_everywhere() {
    for version in FormatVersion::ALL {
        assert!(validate_contact(&john_doe(), version).is_valid(), "{version}");
    }
}

#[test]
fn validation_is_advisory() {
    let record = ContactRecord {
        url: "acme.com".to_string(),
        ..ContactRecord::default()
    };

    assert!(!validate_contact(&record, FormatVersion::V30).is_valid());
    assert!(
        serializer()
            .serialize(&record, FormatVersion::V30)
            .contains("\nURL:acme.com\n")
    );
}

#[test]
fn invalid_gender_is_rejected_at_construction() {
    let err = serde_json::from_str::<ContactRecord>(r#"{"firstName": "A", "gender": "Z"}"#)
        .expect_err("Z is not a gender tag");
    assert!(err.to_string().contains("Gender must be one of: M, F, O, N, U"));
}
