//! Edit session over one diary entry.
//!
//! # Responsibility
//! - Seed the editor with the entry's combined text.
//! - Apply the splitter to the entry on every keystroke.
//!
//! # Invariants
//! - While the text stays under 2 estimated lines, only the title changes.
//! - Once the text spans 2 or more lines, only the body changes; the title
//!   keeps its frozen character length.

use crate::editor::splitter::{TextLayout, TextSplitter};
use crate::model::entry::DiaryEntry;

/// Keystroke-driven editing state for one entry.
///
/// The session mutates the entry in memory only; persistence happens at
/// end-of-edit through [`crate::service::entry_service::DiaryService`].
#[derive(Debug, Clone)]
pub struct EditorSession {
    entry: DiaryEntry,
    splitter: TextSplitter,
}

impl EditorSession {
    /// Opens a session on an entry with the editing view's metrics.
    pub fn open(entry: DiaryEntry, layout: TextLayout) -> Self {
        Self {
            entry,
            splitter: TextSplitter::new(layout),
        }
    }

    /// The combined `title + body` text used to seed the editor view.
    ///
    /// Absent parts contribute nothing, so a fresh entry seeds an empty
    /// editor instead of failing a presence check.
    pub fn full_text(&self) -> String {
        let mut text = String::new();
        if let Some(title) = self.entry.title.as_deref() {
            text.push_str(title);
        }
        if let Some(body) = self.entry.body.as_deref() {
            text.push_str(body);
        }
        text
    }

    /// Applies the splitter to the entry for the current editor text.
    ///
    /// Called on every text change. Under 2 estimated lines the whole text
    /// becomes the title and an existing body is left alone; at 2 or more
    /// lines the body is rewritten while the title stays frozen.
    pub fn text_changed(&mut self, text: &str) {
        let frozen = self.entry.title.as_deref().map(|title| title.chars().count());
        let split = self.splitter.split(frozen, text);

        match split.body {
            None => self.entry.title = Some(split.title),
            Some(body) => {
                if self.entry.title.is_none() {
                    self.entry.title = Some(split.title);
                }
                self.entry.body = Some(body);
            }
        }
    }

    /// Read access to the entry being edited.
    pub fn entry(&self) -> &DiaryEntry {
        &self.entry
    }

    /// Consumes the session, yielding the edited entry for persistence.
    pub fn into_entry(self) -> DiaryEntry {
        self.entry
    }
}
