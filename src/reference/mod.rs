//! Scripture reference recognition.
//!
//! [`scan`] walks free text and returns every reference it can validate, in
//! document order. The pipeline is split the same way the work is:
//! - [`scanner`]: the combined matcher and the line-scoped book context
//! - [`validate`]: chapter/verse bounds against the registry
//! - [`boundary`]: span decisions around existing Markdown links

pub mod boundary;
pub mod scanner;
pub mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use scanner::scan;
pub use validate::is_valid_reference;

/// A validated scripture reference found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptureRef {
    /// Canonical book name (e.g. "Genesis", "1 John").
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Starting verse; `None` for a whole chapter.
    pub verse_start: Option<u32>,
    /// End chapter of a cross-chapter range.
    pub chapter_end: Option<u32>,
    /// Ending verse of a range.
    pub verse_end: Option<u32>,
    /// The matched reference text exactly as written.
    pub raw_text: String,
    /// Byte offset where the reported span starts.
    pub start: usize,
    /// Byte offset where the reported span ends (exclusive).
    pub end: usize,
}

impl ScriptureRef {
    /// Reference to a whole chapter, detached from any source text.
    pub fn chapter(book: impl Into<String>, chapter: u32) -> Self {
        let book = book.into();
        let raw_text = format!("{book} {chapter}");
        Self {
            end: raw_text.len(),
            book,
            chapter,
            verse_start: None,
            chapter_end: None,
            verse_end: None,
            raw_text,
            start: 0,
        }
    }

    /// Reference to a single verse, detached from any source text.
    pub fn verse(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        let mut r = Self::chapter(book, chapter);
        r.verse_start = Some(verse);
        r.refresh_raw_text();
        r
    }

    /// Same-chapter verse range, detached from any source text.
    pub fn range(book: impl Into<String>, chapter: u32, start: u32, end: u32) -> Self {
        let mut r = Self::verse(book, chapter, start);
        r.verse_end = Some(end);
        r.refresh_raw_text();
        r
    }

    /// Cross-chapter range, detached from any source text.
    pub fn cross_chapter(
        book: impl Into<String>,
        (chapter, verse): (u32, u32),
        (chapter_end, verse_end): (u32, u32),
    ) -> Self {
        let mut r = Self::verse(book, chapter, verse);
        r.chapter_end = Some(chapter_end);
        r.verse_end = Some(verse_end);
        r.refresh_raw_text();
        r
    }

    /// True when the range ends in a later chapter.
    pub const fn is_cross_chapter(&self) -> bool {
        self.chapter_end.is_some()
    }

    fn refresh_raw_text(&mut self) {
        self.raw_text = format_display(self);
        self.start = 0;
        self.end = self.raw_text.len();
    }
}

impl fmt::Display for ScriptureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;

        let Some(verse_start) = self.verse_start else {
            return Ok(());
        };
        write!(f, ":{verse_start}")?;

        match (self.chapter_end, self.verse_end) {
            (Some(chapter_end), Some(verse_end)) => write!(f, "-{chapter_end}:{verse_end}"),
            (Some(chapter_end), None) => write!(f, "-{chapter_end}"),
            (None, Some(verse_end)) if verse_end != verse_start => write!(f, "-{verse_end}"),
            _ => Ok(()),
        }
    }
}

/// Canonical display form, e.g. "John 3:16", "Genesis 1:1-3" or
/// "John 3:36-4:1".
pub fn format_display(reference: &ScriptureRef) -> String {
    reference.to_string()
}

/// First reference in `text`, if any.
pub fn parse_reference(text: &str) -> Option<ScriptureRef> {
    scan(text).into_iter().next()
}
