//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `diary_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use diary_core::db::open_db_in_memory;
use diary_core::{DiaryService, EntryListQuery, SaveOutcome, SqliteEntryRepository};

fn main() {
    println!("diary_core version={}", diary_core::core_version());

    match smoke_roundtrip() {
        Ok(count) => println!("diary_core smoke entries={count}"),
        Err(err) => eprintln!("diary_core smoke failed: {err}"),
    }
}

// One create/save/list pass against an in-memory store, enough to prove the
// core crate wires up without touching any real database file.
fn smoke_roundtrip() -> Result<usize, Box<dyn std::error::Error>> {
    let conn = open_db_in_memory()?;
    let repo = SqliteEntryRepository::try_new(&conn)?;
    let service = DiaryService::new(repo);

    let mut entry = service.start_entry()?;
    entry.title = Some("smoke".to_string());
    entry.body = Some(" probe".to_string());
    if service.save_entry(&entry)? != SaveOutcome::Saved {
        return Err("smoke entry was not persisted".into());
    }

    Ok(service.list_entries(&EntryListQuery::default())?.len())
}
