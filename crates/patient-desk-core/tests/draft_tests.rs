//! Draft editing and payload integration tests.

use patient_desk_core::{
    ContactDetails, ContactField, DraftRecord, FieldEdit, FieldSelector, Gender, PatientRecord,
    UpdatePayload,
};
use proptest::prelude::*;
use serde_json::json;

fn make_record(other_fields: Option<ContactDetails>) -> PatientRecord {
    PatientRecord {
        name: "Alice".into(),
        age: 30,
        gender: Gender::Female,
        other_fields,
    }
}

#[test]
fn loading_without_contact_defaults_every_key_to_empty() {
    let record: PatientRecord =
        serde_json::from_str(r#"{"name":"Alice","age":30,"gender":"Female"}"#).unwrap();
    let draft = DraftRecord::from_record(&record);

    assert_eq!(draft.name, "Alice");
    assert_eq!(draft.age, 30);
    assert_eq!(draft.gender, Gender::Female);
    assert_eq!(
        draft.contact,
        ContactDetails {
            address: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    );
}

#[test]
fn editing_address_then_submitting_sends_the_full_contact_object() {
    let mut draft = DraftRecord::from_record(&make_record(None));
    draft.apply(FieldEdit::Contact(ContactField::Address, "1 Main St".into()));

    let payload =
        UpdatePayload::for_field(FieldSelector::Contact(ContactField::Address), &draft);
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"otherFields": {"address": "1 Main St", "email": "", "phone": ""}})
    );
}

#[test]
fn submitting_phone_changes_only_phone_relative_to_the_loaded_record() {
    let loaded = ContactDetails {
        address: "1 Main St".into(),
        email: "a@b.com".into(),
        phone: "555-0101".into(),
    };
    let mut draft = DraftRecord::from_record(&make_record(Some(loaded.clone())));
    draft.apply(FieldEdit::Contact(ContactField::Phone, "555-0202".into()));

    let payload = UpdatePayload::for_field(FieldSelector::Contact(ContactField::Phone), &draft);
    match payload {
        UpdatePayload::OtherFields(sent) => {
            assert_eq!(sent.address, loaded.address);
            assert_eq!(sent.email, loaded.email);
            assert_eq!(sent.phone, "555-0202");
        }
        other => panic!("expected a contact payload, got {:?}", other),
    }
}

#[test]
fn submitting_a_top_level_field_sends_exactly_that_field() {
    let mut draft = DraftRecord::from_record(&make_record(None));
    draft.apply(FieldEdit::Name("Bob".into()));

    let payload = UpdatePayload::for_field(FieldSelector::Name, &draft);
    assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"name": "Bob"}));
}

proptest! {
    #[test]
    fn contact_edits_never_touch_sibling_fields(value in ".*") {
        let mut draft = DraftRecord::from_record(&make_record(Some(ContactDetails {
            address: "1 Main St".into(),
            email: "a@b.com".into(),
            phone: "555-0101".into(),
        })));
        let before = draft.clone();

        draft.apply(FieldEdit::Contact(ContactField::Email, value.clone()));

        prop_assert_eq!(&draft.contact.email, &value);
        prop_assert_eq!(&draft.contact.address, &before.contact.address);
        prop_assert_eq!(&draft.contact.phone, &before.contact.phone);
        prop_assert_eq!(&draft.name, &before.name);
        prop_assert_eq!(draft.age, before.age);
        prop_assert_eq!(draft.gender, before.gender);
    }

    #[test]
    fn age_edits_touch_only_age(age in any::<u32>()) {
        let mut draft = DraftRecord::from_record(&make_record(None));
        let before = draft.clone();

        draft.apply(FieldEdit::Age(age));

        prop_assert_eq!(draft.age, age);
        prop_assert_eq!(&draft.name, &before.name);
        prop_assert_eq!(draft.gender, before.gender);
        prop_assert_eq!(&draft.contact, &before.contact);
    }

    #[test]
    fn name_payload_always_mirrors_the_draft(name in ".*") {
        let mut draft = DraftRecord::from_record(&make_record(None));
        draft.apply(FieldEdit::Name(name.clone()));

        let payload = UpdatePayload::for_field(FieldSelector::Name, &draft);
        prop_assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"name": name})
        );
    }
}
