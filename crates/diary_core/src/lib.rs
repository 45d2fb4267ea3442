//! Core domain logic for the diary engine.
//! This crate is the single source of truth for diary business invariants.

pub mod db;
pub mod editor;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use editor::session::EditorSession;
pub use editor::splitter::{TextLayout, TextSplitter, TitleBodySplit};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{DiaryEntry, EntryId, EntryValidationError};
pub use repo::entry_repo::{
    EntryListQuery, EntryRepository, RepoError, RepoResult, SqliteEntryRepository,
};
pub use service::entry_service::{
    derive_list_preview, DiaryService, DiaryServiceError, SaveOutcome,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
