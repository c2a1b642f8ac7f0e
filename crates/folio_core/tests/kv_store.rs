use folio_core::db::migrations::latest_version;
use folio_core::db::{open_db, open_db_in_memory};
use folio_core::{KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StoreError};
use rusqlite::Connection;

#[test]
fn sqlite_store_get_set_remove_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKeyValueStore::try_new(&conn).unwrap();

    assert_eq!(store.get("adminData").unwrap(), None);

    store.set("adminData", "{\"name\":\"Ada\"}").unwrap();
    assert_eq!(
        store.get("adminData").unwrap().as_deref(),
        Some("{\"name\":\"Ada\"}")
    );

    store.set("adminData", "{}").unwrap();
    assert_eq!(store.get("adminData").unwrap().as_deref(), Some("{}"));

    store.remove("adminData").unwrap();
    assert_eq!(store.get("adminData").unwrap(), None);
}

#[test]
fn removing_an_absent_key_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKeyValueStore::try_new(&conn).unwrap();
    store.remove("never-set").unwrap();

    let mut memory = MemoryKeyValueStore::new();
    memory.remove("never-set").unwrap();
    assert!(memory.is_empty());
}

#[test]
fn keys_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let mut store = SqliteKeyValueStore::try_new(&conn).unwrap();

    store.set("adminData", "record").unwrap();
    store.set("profilePhoto", "data:image/png;base64,AAAA").unwrap();
    store.remove("adminData").unwrap();

    assert_eq!(store.get("adminData").unwrap(), None);
    assert_eq!(
        store.get("profilePhoto").unwrap().as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[test]
fn sqlite_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folio.db");

    {
        let conn = open_db(&path).unwrap();
        let mut store = SqliteKeyValueStore::try_new(&conn).unwrap();
        store.set("adminData", "persisted").unwrap();
    }

    let conn = open_db(&path).unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    assert_eq!(store.get("adminData").unwrap().as_deref(), Some("persisted"));
}

#[test]
fn store_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteKeyValueStore::try_new(&conn) {
        Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn store_rejects_connection_without_local_store_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteKeyValueStore::try_new(&conn);
    assert!(matches!(
        result,
        Err(StoreError::MissingRequiredTable("local_store"))
    ));
}

#[test]
fn memory_store_tracks_len() {
    let mut store = MemoryKeyValueStore::new();
    assert!(store.is_empty());

    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    assert_eq!(store.len(), 2);

    store.remove("a").unwrap();
    assert_eq!(store.len(), 1);
}
