//! Diary use-case service.
//!
//! # Responsibility
//! - Provide create/save/list/get/delete/share entry points for callers.
//! - Garbage-collect incomplete entries before every list.
//! - Derive the one-line body preview shown by list consumers.
//!
//! # Invariants
//! - Saving an incomplete entry is "nothing to do": the skip is logged and
//!   reported as a value, never as an error.
//! - Listing never returns an entry whose body is null.

use crate::model::entry::{DiaryEntry, EntryId};
use crate::repo::entry_repo::{EntryListQuery, EntryRepository, RepoError, RepoResult};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const PREVIEW_MAX_CHARS: usize = 100;

/// Service error for diary use-cases.
#[derive(Debug)]
pub enum DiaryServiceError {
    /// Target entry does not exist.
    EntryNotFound(EntryId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for DiaryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EntryNotFound(id) => write!(f, "diary entry not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent entry state: {details}"),
        }
    }
}

impl Error for DiaryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for DiaryServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::EntryNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Result of an end-of-edit save request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The entry was complete and has been persisted.
    Saved,
    /// Title or body was missing; nothing was persisted.
    SkippedIncomplete,
}

/// Diary service facade over an injected repository.
pub struct DiaryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> DiaryService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a blank entry with a fresh id and the current timestamp.
    pub fn start_entry(&self) -> Result<DiaryEntry, DiaryServiceError> {
        let entry = DiaryEntry::new();
        self.repo.create_entry(&entry)?;
        self.repo
            .get_entry(entry.uuid)?
            .ok_or(DiaryServiceError::InconsistentState(
                "created entry not found in read-back",
            ))
    }

    /// Persists an edited entry.
    ///
    /// An entry still missing its title or body is not an error: the save
    /// is skipped silently and the caller is told via [`SaveOutcome`].
    pub fn save_entry(&self, entry: &DiaryEntry) -> Result<SaveOutcome, DiaryServiceError> {
        if !entry.is_complete() {
            info!(
                "event=save_skipped module=service status=ok entry={} reason=incomplete",
                entry.uuid
            );
            return Ok(SaveOutcome::SkippedIncomplete);
        }

        self.repo.update_entry(entry)?;
        info!(
            "event=entry_saved module=service status=ok entry={}",
            entry.uuid
        );
        Ok(SaveOutcome::Saved)
    }

    /// Lists entries newest-first, removing incomplete ones beforehand.
    pub fn list_entries(
        &self,
        query: &EntryListQuery,
    ) -> Result<Vec<DiaryEntry>, DiaryServiceError> {
        let purged = self.repo.purge_incomplete()?;
        if purged > 0 {
            info!("event=entries_purged module=service status=ok count={purged}");
        }
        Ok(self.repo.list_entries(query)?)
    }

    /// Gets one entry by stable id.
    pub fn get_entry(&self, id: EntryId) -> RepoResult<Option<DiaryEntry>> {
        self.repo.get_entry(id)
    }

    /// Deletes one entry by stable id.
    pub fn delete_entry(&self, id: EntryId) -> Result<(), DiaryServiceError> {
        self.repo.delete_entry(id)?;
        info!("event=entry_deleted module=service status=ok entry={id}");
        Ok(())
    }

    /// Composes the shareable text for one entry.
    ///
    /// The payload is the same `title + body` concatenation that seeds the
    /// editor; presenting it (share sheet etc.) is the caller's concern.
    pub fn share_text(&self, id: EntryId) -> Result<String, DiaryServiceError> {
        let entry = self
            .repo
            .get_entry(id)?
            .ok_or(DiaryServiceError::EntryNotFound(id))?;

        let mut text = String::new();
        if let Some(title) = entry.title.as_deref() {
            text.push_str(title);
        }
        if let Some(body) = entry.body.as_deref() {
            text.push_str(body);
        }

        info!("event=entry_shared module=service status=ok entry={id}");
        Ok(text)
    }
}

/// Derives the one-line preview list consumers show under the title.
///
/// Whitespace runs (including newlines) collapse to single spaces and the
/// result is capped at 100 characters. Returns `None` for blank bodies.
pub fn derive_list_preview(body: &str) -> Option<String> {
    let normalized = WHITESPACE_RE.replace_all(body, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}
