//! Domain model for diary records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, editor and service.
//!
//! # Invariants
//! - Every record is identified by a stable `EntryId`.
//! - A body is never present without a title; the editor assigns the title
//!   before any body text exists.

pub mod entry;
