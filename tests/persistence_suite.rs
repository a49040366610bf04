mod common;

use std::fs;

use common::two_helper_record;
use intake_core::{
    core::IntakeSession,
    domain::{Field, FormRecord},
    locale::Language,
    storage::{FormStorage, JsonFormStore, FORM_FILE_NAME},
};
use tempfile::tempdir;

#[test]
fn record_survives_a_save_and_reload() {
    let dir = tempdir().unwrap();
    let store = JsonFormStore::new(Some(dir.path().to_path_buf()));
    let record = two_helper_record();
    store.save(&record).unwrap();

    assert_eq!(store.path(), dir.path().join(FORM_FILE_NAME));
    assert_eq!(store.load().unwrap(), Some(record));
    assert!(!dir.path().join(format!("{FORM_FILE_NAME}.tmp")).exists());
}

#[test]
fn saved_file_uses_camel_case_keys() {
    let dir = tempdir().unwrap();
    let store = JsonFormStore::new(Some(dir.path().to_path_buf()));
    store.save(&two_helper_record()).unwrap();

    let json = fs::read_to_string(store.path()).unwrap();
    assert!(json.contains("\"hasOtherHelpers\": \"Yes\""));
    assert!(json.contains("\"oldHelpers\""));
    assert!(json.contains("\"visaExpiry\": \"2025-06-30\""));
}

#[test]
fn partial_legacy_blob_fills_missing_fields() {
    let dir = tempdir().unwrap();
    let store = JsonFormStore::new(Some(dir.path().to_path_buf()));
    fs::write(
        store.path(),
        r#"{"employerName":"Wong","familyMembers":[{"id":"1700000000000","name":"Kit"}]}"#,
    )
    .unwrap();

    let record = store.load().unwrap().unwrap();
    assert_eq!(record.employer_name, "Wong");
    assert_eq!(record.family_members[0].id, "1700000000000");
    assert!(record.family_members[0].relation.is_empty());
    assert!(record.remarks.is_empty());
}

#[test]
fn corrupt_file_falls_back_to_an_empty_record() {
    let dir = tempdir().unwrap();
    let store = JsonFormStore::new(Some(dir.path().to_path_buf()));
    fs::write(store.path(), "{ not json").unwrap();

    assert!(store.load().is_err());
    assert_eq!(store.load_or_default(), FormRecord::default());
}

#[test]
fn session_restores_answers_across_runs() {
    let dir = tempdir().unwrap();
    {
        let store = JsonFormStore::new(Some(dir.path().to_path_buf()));
        let mut session = IntakeSession::open(Box::new(store), Language::Zh, None);
        session.set_field(Field::EmployerName, "陳大文").unwrap();
    }

    let store = JsonFormStore::new(Some(dir.path().to_path_buf()));
    let session = IntakeSession::open(Box::new(store), Language::En, None);
    assert_eq!(session.record().employer_name, "陳大文");
    assert_eq!(session.language(), Language::En);
}

#[test]
fn clearing_twice_is_harmless() {
    let dir = tempdir().unwrap();
    let store = JsonFormStore::new(Some(dir.path().to_path_buf()));
    store.save(&two_helper_record()).unwrap();
    store.clear().unwrap();
    store.clear().unwrap();
    assert!(store.load().unwrap().is_none());
}
