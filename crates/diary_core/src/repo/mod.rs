//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for diary entries.
//! - Isolate SQLite query details from service/editor orchestration.
//!
//! # Invariants
//! - Repository writes enforce `DiaryEntry::validate()` before persistence.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.
//! - The store handle is injected explicitly; there is no global singleton.

pub mod entry_repo;
