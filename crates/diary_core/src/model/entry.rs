//! Diary entry domain model.
//!
//! # Responsibility
//! - Define the canonical diary record persisted by the store.
//! - Provide lifecycle helpers for the create/edit/save flow.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another entry.
//! - `title` and `body` are nullable only transiently during creation; an
//!   entry with a null body is incomplete and is removed by the next list.
//! - A body without a title is invalid state and fails validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a diary entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// One diary record: free-form text split into title and body, plus the
/// creation timestamp used for list ordering and the date label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Stable global ID used for lookup, update and deletion.
    pub uuid: EntryId,
    /// First visual line(s) of the editor text. Null only while the entry
    /// has never been typed into.
    pub title: Option<String>,
    /// Remainder of the editor text. Null until the text spans a second
    /// visual line; a null body marks the entry as incomplete.
    pub body: Option<String>,
    /// Creation time in Unix epoch milliseconds.
    pub created_at: i64,
}

/// Validation failure for a diary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// A body exists but no title does; the editor never produces this.
    BodyWithoutTitle(EntryId),
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BodyWithoutTitle(id) => {
                write!(f, "entry {id} has a body without a title")
            }
        }
    }
}

impl Error for EntryValidationError {}

impl DiaryEntry {
    /// Creates a blank entry with a generated stable ID and the current
    /// timestamp. Title and body start empty and are filled in by the
    /// editor session.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4(), Utc::now().timestamp_millis())
    }

    /// Creates a blank entry with a caller-provided ID and timestamp.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(uuid: EntryId, created_at: i64) -> Self {
        Self {
            uuid,
            title: None,
            body: None,
            created_at,
        }
    }

    /// Returns whether both title and body are present. Only complete
    /// entries are persisted at end-of-edit.
    pub fn is_complete(&self) -> bool {
        self.title.is_some() && self.body.is_some()
    }

    /// Formatted creation date, used as the detail title in consumers.
    ///
    /// Falls back to the raw millisecond value when the timestamp is out of
    /// chrono's representable range.
    pub fn created_label(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.created_at)
            .map(|moment| moment.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.created_at.to_string())
    }

    /// Checks entry consistency before persistence or after read-back.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.body.is_some() && self.title.is_none() {
            return Err(EntryValidationError::BodyWithoutTitle(self.uuid));
        }
        Ok(())
    }
}

impl Default for DiaryEntry {
    fn default() -> Self {
        Self::new()
    }
}
