use plumeo_core::db::migrations::latest_version;
use plumeo_core::db::{open_db, open_db_in_memory, DbError};
use plumeo_core::{KeyValueStore, SqliteKeyValueStore, StorageError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn reopening_database_keeps_values_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plumeo.db");

    let store = SqliteKeyValueStore::open(&path).unwrap();
    store.set("greeting", "hello").unwrap();
    drop(store);

    let reopened = SqliteKeyValueStore::open(&path).unwrap();
    assert_eq!(schema_version(reopened.connection()), latest_version());
    assert_eq!(reopened.get("greeting").unwrap().as_deref(), Some("hello"));
}

#[test]
fn set_replaces_the_whole_value() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();
    store.set("slot", r#"["s1","s2"]"#).unwrap();
    store.set("slot", r#"["s3"]"#).unwrap();

    assert_eq!(store.get("slot").unwrap().as_deref(), Some(r#"["s3"]"#));
    let rows: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let store_err = SqliteKeyValueStore::open(&path).err().unwrap();
    assert!(matches!(
        store_err,
        StorageError::Db(DbError::UnsupportedSchemaVersion { .. })
    ));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
