//! Repository behavior over the in-memory store
//!
//! Covers the contract of every repository operation: search filtering,
//! CRUD round trips, timestamp refresh, no-op behavior on absent ids, and
//! history prepend semantics.

use medrec::types::{
    Gender, MedicalRecordDraft, Patient, PatientDraft, PatientUpdate, RecordType,
    sample_patients,
};
use medrec::{MemoryStore, PatientRepository};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

fn seeded_repo() -> PatientRepository {
    PatientRepository::new(Arc::new(MemoryStore::new()))
}

fn sample_date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// === Search ===

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_search_returns_everything_in_order(#[case] query: &str) {
    let repo = seeded_repo();
    assert_eq!(repo.search(query), repo.all());
}

#[test]
fn search_by_first_name_is_case_insensitive() {
    let repo = seeded_repo();
    let hits = repo.search("sarah");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].full_name(), "Sarah Johnson");

    assert_eq!(repo.search("SARAH"), hits);
}

#[test]
fn search_by_phone_matches_all_samples() {
    let repo = seeded_repo();
    // Every sample phone number carries the 555 exchange
    let hits = repo.search("555");
    assert_eq!(hits.len(), 4);
    // Original order is preserved
    assert_eq!(hits, repo.all());
}

#[test]
fn search_with_no_match_is_empty() {
    let repo = seeded_repo();
    assert!(repo.search("nonexistent-zz").is_empty());
}

#[test]
fn search_by_email_fragment() {
    let repo = seeded_repo();
    let hits = repo.search("robert.williams@");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].last_name, "Williams");
}

#[test]
fn search_by_birth_date_fragment() {
    let repo = seeded_repo();
    let hits = repo.search("1990-07");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "Sarah");
}

#[test]
fn phone_search_is_literal() {
    let repo = seeded_repo();
    let hits = repo.search("(555) 123");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].first_name, "John");
}

#[test]
fn search_ignores_patients_missing_the_field() {
    let repo = seeded_repo();
    repo.add(PatientDraft::new("Blank", "Fields"));
    // A patient without phone, email, or birth date can still match by name
    assert_eq!(repo.search("blank").len(), 1);
    assert_eq!(repo.search("555").len(), 4);
}

// === Add / find ===

#[test]
fn add_appends_and_is_findable() {
    let repo = seeded_repo();
    let before = repo.len();

    let draft = PatientDraft {
        gender: Some(Gender::Other),
        phone: Some("(555) 999-1234".to_string()),
        email: Some("a.turing@email.com".to_string()),
        date_of_birth: Some(sample_date(1912, 6, 23)),
        ..PatientDraft::new("Alan", "Turing")
    };
    let added = repo.add(draft.clone());

    assert_eq!(repo.len(), before + 1);
    // The new record lands at the end of the collection
    assert_eq!(repo.all().last().map(|p| p.id.clone()), Some(added.id.clone()));

    let found = repo.find_by_id(&added.id).unwrap();
    assert_eq!(found, added);
    assert_eq!(found.first_name, draft.first_name);
    assert_eq!(found.email, draft.email);
    assert_eq!(found.created_at, found.updated_at);
}

#[test]
fn find_by_id_on_absent_id_is_none() {
    let repo = seeded_repo();
    assert!(repo.find_by_id("no-such-id").is_none());
}

// === Update ===

#[test]
fn update_replaces_named_fields_and_refreshes_timestamp() {
    let repo = seeded_repo();
    let before = repo.find_by_id("1").unwrap();

    repo.update("1", PatientUpdate::new().with_first_name("Jonathan"));

    let after = repo.find_by_id("1").unwrap();
    assert_eq!(after.first_name, "Jonathan");
    assert!(after.updated_at >= before.updated_at);
    // Everything else survives untouched
    assert_eq!(after.last_name, before.last_name);
    assert_eq!(after.phone, before.phone);
    assert_eq!(after.medical_info, before.medical_info);
    assert_eq!(after.medical_history, before.medical_history);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn update_on_absent_id_changes_nothing() {
    let repo = seeded_repo();
    let before = repo.all();

    repo.update("no-such-id", PatientUpdate::new().with_first_name("X"));

    assert_eq!(repo.all(), before);
}

#[test]
fn update_can_clear_an_optional_field() {
    let repo = seeded_repo();
    repo.update(
        "2",
        PatientUpdate {
            email: Some(None),
            ..PatientUpdate::default()
        },
    );
    assert_eq!(repo.find_by_id("2").unwrap().email, None);
}

// === Delete ===

#[test]
fn delete_removes_exactly_one() {
    let repo = seeded_repo();
    repo.delete("3");
    assert_eq!(repo.len(), 3);
    assert!(repo.find_by_id("3").is_none());
    assert!(repo.find_by_id("1").is_some());
}

#[test]
fn delete_on_absent_id_changes_nothing() {
    let repo = seeded_repo();
    let before = repo.all();
    repo.delete("no-such-id");
    assert_eq!(repo.all(), before);
}

// === Medical history ===

#[test]
fn add_medical_record_prepends() {
    let repo = seeded_repo();
    let before = repo.find_by_id("4").unwrap();

    let record = repo
        .add_medical_record(
            "4",
            MedicalRecordDraft {
                // Dated before every existing entry; insertion order still wins
                date: sample_date(2020, 1, 1),
                record_type: RecordType::Test,
                description: "Spirometry".to_string(),
                notes: None,
                practitioner: Some("Dr. Rodriguez".to_string()),
            },
        )
        .unwrap();

    let after = repo.find_by_id("4").unwrap();
    assert_eq!(after.medical_history.len(), before.medical_history.len() + 1);
    assert_eq!(after.medical_history[0], record);
    assert_eq!(&after.medical_history[1..], &before.medical_history[..]);
    assert!(after.updated_at >= before.updated_at);
}

#[test]
fn add_medical_record_on_absent_patient_is_none() {
    let repo = seeded_repo();
    let before = repo.all();

    let result = repo.add_medical_record(
        "no-such-id",
        MedicalRecordDraft {
            date: sample_date(2024, 1, 1),
            record_type: RecordType::Visit,
            description: "Checkup".to_string(),
            notes: None,
            practitioner: None,
        },
    );

    assert!(result.is_none());
    assert_eq!(repo.all(), before);
}

// === Serialization ===

#[test]
fn collection_round_trips_through_json() {
    let patients = sample_patients();
    let json = serde_json::to_string(&patients).unwrap();
    let back: Vec<Patient> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, patients);
}
