//! Golden tests for field-name parsing.
//!
//! These verify the accepted form-input and submit-selector shapes against
//! known cases, including the malformed names that must be rejected.

use std::str::FromStr;

use patient_desk_core::field::{ContactField, FieldError, FieldSelector};

/// One field-name case: `expected` is `None` when parsing must fail.
struct GoldenCase {
    id: &'static str,
    input: &'static str,
    expected: Option<FieldSelector>,
}

fn get_golden_cases() -> Vec<GoldenCase> {
    vec![
        GoldenCase {
            id: "plain-name",
            input: "name",
            expected: Some(FieldSelector::Name),
        },
        GoldenCase {
            id: "plain-age",
            input: "age",
            expected: Some(FieldSelector::Age),
        },
        GoldenCase {
            id: "plain-gender",
            input: "gender",
            expected: Some(FieldSelector::Gender),
        },
        GoldenCase {
            id: "bracketed-address",
            input: "otherFields[address]",
            expected: Some(FieldSelector::Contact(ContactField::Address)),
        },
        GoldenCase {
            id: "bracketed-email",
            input: "otherFields[email]",
            expected: Some(FieldSelector::Contact(ContactField::Email)),
        },
        GoldenCase {
            id: "bracketed-phone",
            input: "otherFields[phone]",
            expected: Some(FieldSelector::Contact(ContactField::Phone)),
        },
        GoldenCase {
            id: "dotted-address",
            input: "otherFields.address",
            expected: Some(FieldSelector::Contact(ContactField::Address)),
        },
        GoldenCase {
            id: "dotted-email",
            input: "otherFields.email",
            expected: Some(FieldSelector::Contact(ContactField::Email)),
        },
        GoldenCase {
            id: "dotted-phone",
            input: "otherFields.phone",
            expected: Some(FieldSelector::Contact(ContactField::Phone)),
        },
        GoldenCase {
            id: "unknown-top-level",
            input: "dob",
            expected: None,
        },
        GoldenCase {
            id: "unknown-contact-key",
            input: "otherFields[ssn]",
            expected: None,
        },
        GoldenCase {
            id: "missing-closing-bracket",
            input: "otherFields[email",
            expected: None,
        },
        GoldenCase {
            id: "empty-brackets",
            input: "otherFields[]",
            expected: None,
        },
        GoldenCase {
            id: "trailing-junk",
            input: "otherFields[email]x",
            expected: None,
        },
        GoldenCase {
            id: "bare-container",
            input: "otherFields",
            expected: None,
        },
        GoldenCase {
            id: "dotted-empty-key",
            input: "otherFields.",
            expected: None,
        },
        GoldenCase {
            id: "empty-string",
            input: "",
            expected: None,
        },
        GoldenCase {
            id: "case-sensitive",
            input: "Name",
            expected: None,
        },
    ]
}

#[test]
fn golden_field_names() {
    for case in get_golden_cases() {
        let parsed = FieldSelector::from_str(case.input);
        match case.expected {
            Some(selector) => {
                assert_eq!(parsed.ok(), Some(selector), "case {}", case.id);
            }
            None => assert!(parsed.is_err(), "case {} should be rejected", case.id),
        }
    }
}

#[test]
fn rejected_names_carry_the_offending_input() {
    assert_eq!(
        FieldSelector::from_str("dob"),
        Err(FieldError::UnknownField("dob".into()))
    );
    assert_eq!(
        FieldSelector::from_str("otherFields[ssn]"),
        Err(FieldError::UnknownContactField("ssn".into()))
    );
    assert_eq!(
        FieldSelector::from_str("otherFields[email"),
        Err(FieldError::MalformedName("otherFields[email".into()))
    );
}

#[test]
fn display_and_parse_roundtrip() {
    let mut selectors = vec![FieldSelector::Name, FieldSelector::Age, FieldSelector::Gender];
    selectors.extend(ContactField::ALL.map(FieldSelector::Contact));
    for selector in selectors {
        let rendered = selector.to_string();
        assert_eq!(FieldSelector::from_str(&rendered), Ok(selector), "{}", rendered);
    }
}
