use give_cli::credentials::{CredentialStore, FileCredentialStore};
use tempfile::tempdir;

#[test]
fn test_file_store_round_trip() {
    let dir = tempdir().unwrap();
    let store = FileCredentialStore::with_path(dir.path().join("credentials.json"));

    assert_eq!(store.token(), None);

    store.store("session-token").unwrap();
    assert_eq!(store.token(), Some("session-token".to_string()));
    assert!(dir.path().join("credentials.json").exists());

    store.clear().unwrap();
    assert_eq!(store.token(), None);
    assert!(!dir.path().join("credentials.json").exists());
}

#[test]
fn test_missing_file_reads_as_logged_out() {
    let dir = tempdir().unwrap();
    let store = FileCredentialStore::with_path(dir.path().join("nowhere.json"));
    assert_eq!(store.token(), None);
}

#[test]
fn test_malformed_file_reads_as_logged_out() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = FileCredentialStore::with_path(path);
    assert_eq!(store.token(), None);
}

#[test]
fn test_clear_is_idempotent() {
    let dir = tempdir().unwrap();
    let store = FileCredentialStore::with_path(dir.path().join("credentials.json"));

    store.clear().unwrap();
    store.store("tok").unwrap();
    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.token(), None);
}

#[test]
fn test_stored_token_survives_reopen() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("credentials.json");

    let store = FileCredentialStore::with_path(path.clone());
    store.store("persisted").unwrap();
    drop(store);

    let reopened = FileCredentialStore::with_path(path);
    assert_eq!(reopened.token(), Some("persisted".to_string()));
}
