//! Title/body splitting heuristic over single-field editor text.
//!
//! # Responsibility
//! - Estimate how many visual lines a text occupies in the editing view.
//! - Derive title and body from the full text and the frozen title length.
//!
//! # Invariants
//! - Under 2 estimated lines the whole text is the title and no body is
//!   produced.
//! - At 2 or more lines the body is the text from character index
//!   `frozen - 1` onward, so body and title overlap by one character.
//!
//! The line estimate divides the view width by the font point size to get a
//! column budget per line. It is approximate and font-dependent; wide (CJK)
//! glyphs are counted as two columns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rendering metrics of the editing view, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    content_width: f32,
    font_point_size: f32,
}

impl TextLayout {
    pub fn new(content_width: f32, font_point_size: f32) -> Self {
        Self {
            content_width,
            font_point_size,
        }
    }

    /// Column budget of one visual line. Never less than 1, so degenerate
    /// metrics cannot divide by zero or produce empty lines.
    pub fn columns_per_line(&self) -> usize {
        if self.content_width <= 0.0 || self.font_point_size <= 0.0 {
            return 1;
        }
        ((self.content_width / self.font_point_size) as usize).max(1)
    }
}

/// Title/body projection of one editor text snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBodySplit {
    /// Title text. Equals the full text while it fits on one line.
    pub title: String,
    /// Body text, present once the text spans a second visual line.
    pub body: Option<String>,
}

/// Splits free-form editor input into title and body by estimated visual
/// line count.
#[derive(Debug, Clone, Copy)]
pub struct TextSplitter {
    layout: TextLayout,
}

impl TextSplitter {
    pub fn new(layout: TextLayout) -> Self {
        Self { layout }
    }

    /// Estimates the number of visual lines the text occupies.
    ///
    /// Hard newlines always start a new line; within a paragraph the display
    /// width is wrapped against the layout's column budget. Empty text
    /// counts as one line.
    pub fn estimated_lines(&self, text: &str) -> usize {
        let columns = self.layout.columns_per_line();
        text.split('\n')
            .map(|paragraph| {
                let width = UnicodeWidthStr::width(paragraph);
                width.div_ceil(columns).max(1)
            })
            .sum()
    }

    /// Computes the title/body projection for the current text.
    ///
    /// `frozen_title_chars` is the character length of the previously
    /// assigned title; it is what keeps the title fixed once a body exists.
    /// When absent (multi-line paste into an empty editor), the first visual
    /// line's character count is used instead. The frozen length is clamped
    /// to the current text length when the text has shrunk.
    pub fn split(&self, frozen_title_chars: Option<usize>, text: &str) -> TitleBodySplit {
        if self.estimated_lines(text) < 2 {
            return TitleBodySplit {
                title: text.to_string(),
                body: None,
            };
        }

        let total_chars = text.chars().count();
        let frozen = frozen_title_chars
            .filter(|&chars| chars > 0)
            .unwrap_or_else(|| self.first_line_chars(text))
            .min(total_chars);

        let title = text.chars().take(frozen).collect();
        // The body keeps the original off-by-one: it is the trailing
        // `total - frozen + 1` characters, re-reading the title's last one.
        let body = text.chars().skip(frozen.saturating_sub(1)).collect();

        TitleBodySplit {
            title,
            body: Some(body),
        }
    }

    /// Character count of the first visual line, used as a fallback frozen
    /// length when no title was assigned yet.
    fn first_line_chars(&self, text: &str) -> usize {
        let columns = self.layout.columns_per_line();
        let mut used_columns = 0usize;
        let mut chars = 0usize;

        for ch in text.chars() {
            if ch == '\n' {
                break;
            }
            let char_columns = UnicodeWidthChar::width(ch).unwrap_or(0);
            if used_columns + char_columns > columns {
                break;
            }
            used_columns += char_columns;
            chars += 1;
        }

        chars.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::{TextLayout, TextSplitter, TitleBodySplit};

    // 10 columns per line: 170pt wide view at 17pt font.
    fn narrow_splitter() -> TextSplitter {
        TextSplitter::new(TextLayout::new(170.0, 17.0))
    }

    #[test]
    fn empty_text_occupies_one_line() {
        assert_eq!(narrow_splitter().estimated_lines(""), 1);
    }

    #[test]
    fn hard_newline_starts_a_new_line() {
        let splitter = narrow_splitter();
        assert_eq!(splitter.estimated_lines("one\ntwo"), 2);
        assert_eq!(splitter.estimated_lines("tail\n"), 2);
    }

    #[test]
    fn long_paragraph_wraps_by_column_budget() {
        let splitter = narrow_splitter();
        assert_eq!(splitter.estimated_lines("abcdefghij"), 1);
        assert_eq!(splitter.estimated_lines("abcdefghijk"), 2);
    }

    #[test]
    fn wide_glyphs_count_as_two_columns() {
        let splitter = narrow_splitter();
        // Five CJK characters fill the ten-column line; six overflow it.
        assert_eq!(splitter.estimated_lines("일기장일기"), 1);
        assert_eq!(splitter.estimated_lines("일기장일기장"), 2);
    }

    #[test]
    fn short_text_is_all_title() {
        let split = narrow_splitter().split(None, "hello");
        assert_eq!(
            split,
            TitleBodySplit {
                title: "hello".to_string(),
                body: None,
            }
        );
    }

    #[test]
    fn overflow_splits_at_frozen_length_with_one_char_overlap() {
        let splitter = narrow_splitter();
        let split = splitter.split(Some(10), "abcdefghijklmn");

        assert_eq!(split.title, "abcdefghij");
        // Body starts one character early, re-reading the title's last char.
        assert_eq!(split.body.as_deref(), Some("jklmn"));
    }

    #[test]
    fn missing_title_falls_back_to_first_visual_line() {
        let splitter = narrow_splitter();
        let split = splitter.split(None, "first line\nrest of it");

        assert_eq!(split.title, "first line");
        assert_eq!(split.body.as_deref(), Some("e\nrest of it"));
    }

    #[test]
    fn frozen_length_clamps_when_text_shrinks() {
        let splitter = narrow_splitter();
        let split = splitter.split(Some(50), "ab\ncd");

        assert_eq!(split.title, "ab\ncd");
        assert_eq!(split.body.as_deref(), Some("d"));
    }

    #[test]
    fn split_counts_characters_not_bytes() {
        let splitter = narrow_splitter();
        let split = splitter.split(Some(5), "일기장일기장");

        assert_eq!(split.title, "일기장일기");
        assert_eq!(split.body.as_deref(), Some("기장"));
    }

    #[test]
    fn degenerate_layout_still_has_one_column() {
        let layout = TextLayout::new(0.0, 17.0);
        assert_eq!(layout.columns_per_line(), 1);
    }
}
