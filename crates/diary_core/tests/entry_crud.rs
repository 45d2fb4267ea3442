use diary_core::db::migrations::latest_version;
use diary_core::db::open_db_in_memory;
use diary_core::{
    DiaryEntry, DiaryService, EntryListQuery, EntryRepository, RepoError, SqliteEntryRepository,
};
use rusqlite::Connection;
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip_of_blank_entry() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let entry = DiaryEntry::new();
    let id = repo.create_entry(&entry).unwrap();

    let loaded = repo.get_entry(id).unwrap().unwrap();
    assert_eq!(loaded.uuid, entry.uuid);
    assert_eq!(loaded.title, None);
    assert_eq!(loaded.body, None);
    assert_eq!(loaded.created_at, entry.created_at);
}

#[test]
fn update_overwrites_title_body_and_timestamp() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let mut entry = DiaryEntry::new();
    repo.create_entry(&entry).unwrap();

    entry.title = Some("Monday".to_string());
    entry.body = Some("y rained all day".to_string());
    entry.created_at += 1;
    repo.update_entry(&entry).unwrap();

    let loaded = repo.get_entry(entry.uuid).unwrap().unwrap();
    assert_eq!(loaded.title.as_deref(), Some("Monday"));
    assert_eq!(loaded.body.as_deref(), Some("y rained all day"));
    assert_eq!(loaded.created_at, entry.created_at);
}

#[test]
fn update_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let mut entry = DiaryEntry::new();
    repo.create_entry(&entry).unwrap();
    entry.title = Some("same".to_string());
    entry.body = Some("e data".to_string());

    repo.update_entry(&entry).unwrap();
    let first = repo.get_entry(entry.uuid).unwrap().unwrap();

    repo.update_entry(&entry).unwrap();
    let second = repo.get_entry(entry.uuid).unwrap().unwrap();

    assert_eq!(first, second);
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let mut entry = DiaryEntry::new();
    entry.title = Some("missing".to_string());
    entry.body = Some("g entry".to_string());

    let err = repo.update_entry(&entry).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == entry.uuid));
}

#[test]
fn list_orders_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let oldest = complete_entry("00000000-0000-4000-8000-000000000001", 1_000);
    let middle = complete_entry("00000000-0000-4000-8000-000000000002", 2_000);
    let newest = complete_entry("00000000-0000-4000-8000-000000000003", 3_000);
    repo.create_entry(&middle).unwrap();
    repo.create_entry(&newest).unwrap();
    repo.create_entry(&oldest).unwrap();

    let listed = repo.list_entries(&EntryListQuery::default()).unwrap();
    let ids: Vec<_> = listed.iter().map(|entry| entry.uuid).collect();
    assert_eq!(ids, vec![newest.uuid, middle.uuid, oldest.uuid]);
}

#[test]
fn list_pagination_with_limit_and_offset_is_stable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let entry_a = complete_entry("00000000-0000-4000-8000-000000000001", 3_000);
    let entry_b = complete_entry("00000000-0000-4000-8000-000000000002", 2_000);
    let entry_c = complete_entry("00000000-0000-4000-8000-000000000003", 1_000);
    repo.create_entry(&entry_c).unwrap();
    repo.create_entry(&entry_a).unwrap();
    repo.create_entry(&entry_b).unwrap();

    let query = EntryListQuery {
        limit: Some(2),
        offset: 1,
    };
    let page = repo.list_entries(&query).unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page[0].uuid, entry_b.uuid);
    assert_eq!(page[1].uuid, entry_c.uuid);
}

#[test]
fn delete_removes_exactly_one_entry() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let kept = complete_entry("00000000-0000-4000-8000-000000000001", 1_000);
    let doomed = complete_entry("00000000-0000-4000-8000-000000000002", 2_000);
    repo.create_entry(&kept).unwrap();
    repo.create_entry(&doomed).unwrap();

    repo.delete_entry(doomed.uuid).unwrap();

    let listed = repo.list_entries(&EntryListQuery::default()).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].uuid, kept.uuid);
    assert!(repo.get_entry(doomed.uuid).unwrap().is_none());

    let err = repo.delete_entry(doomed.uuid).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == doomed.uuid));
}

#[test]
fn purge_incomplete_removes_only_bodyless_entries() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let complete = complete_entry("00000000-0000-4000-8000-000000000001", 1_000);
    let blank = DiaryEntry::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
        2_000,
    );
    let mut title_only = DiaryEntry::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000003").unwrap(),
        3_000,
    );
    title_only.title = Some("never finished".to_string());
    repo.create_entry(&complete).unwrap();
    repo.create_entry(&blank).unwrap();
    repo.create_entry(&title_only).unwrap();

    let removed = repo.purge_incomplete().unwrap();
    assert_eq!(removed, 2);

    let listed = repo.list_entries(&EntryListQuery::default()).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].uuid, complete.uuid);
}

#[test]
fn validation_failure_blocks_create_and_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    let mut invalid = DiaryEntry::new();
    invalid.body = Some("body without a title".to_string());

    let create_err = repo.create_entry(&invalid).unwrap_err();
    assert!(matches!(create_err, RepoError::Validation(_)));

    let mut valid = DiaryEntry::new();
    repo.create_entry(&valid).unwrap();
    valid.body = Some("orphan".to_string());
    let update_err = repo.update_entry(&valid).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
}

#[test]
fn read_back_rejects_invalid_persisted_state() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();

    conn.execute(
        "INSERT INTO entries (uuid, title, body, created_at)
         VALUES ('00000000-0000-4000-8000-000000000009', NULL, 'orphan body', 1000);",
        [],
    )
    .unwrap();

    let id = Uuid::parse_str("00000000-0000-4000-8000-000000000009").unwrap();
    let err = repo.get_entry(id).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEntryRepository::try_new(&conn).unwrap();
    let service = DiaryService::new(repo);

    let mut entry = service.start_entry().unwrap();
    entry.title = Some("from service".to_string());
    entry.body = Some("e text".to_string());
    service.save_entry(&entry).unwrap();

    let fetched = service.get_entry(entry.uuid).unwrap().unwrap();
    assert_eq!(fetched.title.as_deref(), Some("from service"));

    service.delete_entry(entry.uuid).unwrap();
    assert!(service.get_entry(entry.uuid).unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteEntryRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_entries_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteEntryRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("entries"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE entries (
            uuid TEXT PRIMARY KEY NOT NULL,
            title TEXT,
            body TEXT
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteEntryRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "entries",
            column: "created_at"
        })
    ));
}

#[test]
fn entry_serializes_with_stable_field_names() {
    let entry = complete_entry("00000000-0000-4000-8000-000000000001", 1_000);
    let json = serde_json::to_value(&entry).unwrap();

    assert_eq!(
        json["uuid"],
        serde_json::json!("00000000-0000-4000-8000-000000000001")
    );
    assert_eq!(json["title"], serde_json::json!("day one"));
    assert_eq!(json["created_at"], serde_json::json!(1_000));
}

fn complete_entry(id: &str, created_at: i64) -> DiaryEntry {
    let mut entry = DiaryEntry::with_id(Uuid::parse_str(id).unwrap(), created_at);
    entry.title = Some("day one".to_string());
    entry.body = Some("e went fine".to_string());
    entry
}
