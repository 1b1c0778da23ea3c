//! Bible book registry and chapter/verse bounds.
//!
//! The book table is static. Lookups go through a [`BookIndex`] snapshot that
//! is built on first use and shared behind an `Arc`; [`clear_caches`] drops the
//! snapshot so the next lookup rebuilds it from scratch.

mod data;
mod pattern;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;

pub use data::BIBLE_BOOKS;

/// One canonical book of the Bible.
#[derive(Debug, PartialEq, Eq)]
pub struct BookDescriptor {
    /// Canonical display name, e.g. `1 Samuel`.
    pub name: &'static str,
    /// Logos book code used in `ref.ly` URLs, e.g. `1Sa`.
    pub short_code: &'static str,
    /// Bolls Bible book number (1..=66).
    pub external_id: u8,
    /// Lowercase, period-free spellings that resolve to this book.
    pub abbreviations: &'static [&'static str],
    /// Verse count of each chapter, in order.
    pub verses_per_chapter: &'static [u16],
}

impl BookDescriptor {
    /// Number of chapters in the book.
    pub fn chapter_count(&self) -> u32 {
        u32::try_from(self.verses_per_chapter.len()).unwrap_or(u32::MAX)
    }

    /// Number of verses in `chapter` (1-based), or `None` when the chapter
    /// does not exist.
    pub fn verses_in(&self, chapter: u32) -> Option<u32> {
        let idx = usize::try_from(chapter.checked_sub(1)?).ok()?;
        self.verses_per_chapter.get(idx).map(|&v| u32::from(v))
    }
}

/// Derived lookup tables over [`BIBLE_BOOKS`].
#[derive(Debug)]
pub struct BookIndex {
    by_abbreviation: HashMap<String, &'static BookDescriptor>,
    pattern: String,
}

impl BookIndex {
    fn build() -> Self {
        let mut by_abbreviation = HashMap::new();
        for book in BIBLE_BOOKS {
            by_abbreviation.insert(book.name.to_lowercase(), book);
            for abbrev in book.abbreviations {
                by_abbreviation.insert((*abbrev).to_string(), book);
            }
        }

        let pattern = pattern::build_pattern(BIBLE_BOOKS);
        tracing::debug!(
            "Built book index: {} spellings, pattern of {} bytes",
            by_abbreviation.len(),
            pattern.len()
        );

        Self { by_abbreviation, pattern }
    }

    /// Look up an already-normalized spelling.
    pub fn get(&self, normalized: &str) -> Option<&'static BookDescriptor> {
        self.by_abbreviation.get(normalized).copied()
    }

    /// Regex alternation of every name and abbreviation, longest first.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

lazy_static! {
    static ref INDEX: RwLock<Option<Arc<BookIndex>>> = RwLock::new(None);
}

/// Current book index, building it on first use.
pub fn index() -> Arc<BookIndex> {
    if let Some(index) = INDEX.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Arc::clone(index);
    }

    let mut slot = INDEX.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(slot.get_or_insert_with(|| Arc::new(BookIndex::build())))
}

/// Drop the cached index (and with it the compiled reference matcher).
pub fn clear_caches() {
    *INDEX.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Normalize user input for lookup: lowercase, no periods, trimmed.
pub fn normalize(input: &str) -> String {
    input.to_lowercase().replace('.', "").trim().to_string()
}

/// Resolve a book name or abbreviation such as `Gen.`, `1 Sam` or `jn`.
pub fn find_book(input: &str) -> Option<&'static BookDescriptor> {
    index().get(&normalize(input))
}

/// Number of chapters in the named book.
pub fn chapter_count(book: &str) -> Option<u32> {
    find_book(book).map(BookDescriptor::chapter_count)
}

/// Number of verses in `chapter` of the named book.
pub fn verse_count(book: &str, chapter: u32) -> Option<u32> {
    find_book(book)?.verses_in(chapter)
}

/// Regex alternation of all book spellings (see [`BookIndex::pattern`]).
pub fn book_pattern() -> String {
    index().pattern().to_string()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_66_books_with_contiguous_ids() {
        assert_eq!(BIBLE_BOOKS.len(), 66);
        for (i, book) in BIBLE_BOOKS.iter().enumerate() {
            assert_eq!(usize::from(book.external_id), i + 1, "{}", book.name);
        }
    }

    #[test]
    fn names_and_codes_are_unique() {
        let names: HashSet<_> = BIBLE_BOOKS.iter().map(|b| b.name).collect();
        let codes: HashSet<_> = BIBLE_BOOKS.iter().map(|b| b.short_code).collect();
        assert_eq!(names.len(), 66);
        assert_eq!(codes.len(), 66);
    }

    #[test]
    fn abbreviations_belong_to_exactly_one_book() {
        let mut owner: HashMap<&str, &str> = HashMap::new();
        for book in BIBLE_BOOKS {
            for abbrev in book.abbreviations {
                assert_eq!(*abbrev, abbrev.to_lowercase(), "{abbrev} must be lowercase");
                assert!(!abbrev.contains('.'), "{abbrev} must not contain periods");
                if let Some(prev) = owner.insert(*abbrev, book.name) {
                    panic!("{abbrev} is shared by {prev} and {}", book.name);
                }
            }
        }
    }

    #[test]
    fn versification_totals() {
        let chapters: u32 = BIBLE_BOOKS.iter().map(BookDescriptor::chapter_count).sum();
        let verses: u32 = BIBLE_BOOKS
            .iter()
            .flat_map(|b| b.verses_per_chapter.iter())
            .map(|&v| u32::from(v))
            .sum();
        assert_eq!(chapters, 1189);
        // KJV total plus 3 John 1:15 and Revelation 12:18
        assert_eq!(verses, 31_104);
        assert!(BIBLE_BOOKS.iter().flat_map(|b| b.verses_per_chapter).all(|&v| v >= 1));
    }

    #[test]
    fn known_bounds() {
        assert_eq!(chapter_count("Genesis"), Some(50));
        assert_eq!(verse_count("Genesis", 1), Some(31));
        assert_eq!(verse_count("Genesis", 3), Some(24));
        assert_eq!(verse_count("Genesis", 50), Some(26));
        assert_eq!(verse_count("John", 3), Some(36));
        assert_eq!(chapter_count("John"), Some(21));
        assert_eq!(verse_count("Psalm", 119), Some(176));
        assert_eq!(chapter_count("Jude"), Some(1));
        assert_eq!(chapter_count("Revelation"), Some(22));
        assert_eq!(verse_count("Genesis", 0), None);
        assert_eq!(verse_count("Genesis", 51), None);
        assert_eq!(chapter_count("FakeBook"), None);
    }

    #[test]
    fn find_book_by_full_name() {
        let genesis = find_book("Genesis").unwrap();
        assert_eq!(genesis.name, "Genesis");
        assert_eq!(genesis.short_code, "Ge");
        assert_eq!(genesis.external_id, 1);
        assert_eq!(find_book("Revelation").unwrap().external_id, 66);
        assert_eq!(find_book("Song of Solomon").unwrap().short_code, "So");
    }

    #[test]
    fn find_book_is_case_insensitive() {
        for input in ["GENESIS", "genesis", "GeNeSiS"] {
            assert_eq!(find_book(input).map(|b| b.name), Some("Genesis"));
        }
    }

    #[test]
    fn find_book_by_abbreviation() {
        let cases = [
            ("Gen", "Genesis"),
            ("Ex", "Exodus"),
            ("Lev", "Leviticus"),
            ("Num", "Numbers"),
            ("Deut", "Deuteronomy"),
            ("Josh", "Joshua"),
            ("Judg", "Judges"),
            ("Ps", "Psalm"),
            ("Psalms", "Psalm"),
            ("Prov", "Proverbs"),
            ("Isa", "Isaiah"),
            ("Jer", "Jeremiah"),
            ("Matt", "Matthew"),
            ("Mk", "Mark"),
            ("Lk", "Luke"),
            ("Jn", "John"),
            ("Rom", "Romans"),
            ("Gal", "Galatians"),
            ("Eph", "Ephesians"),
            ("Phil", "Philippians"),
            ("Heb", "Hebrews"),
            ("Rev", "Revelation"),
        ];
        for (input, expected) in cases {
            assert_eq!(find_book(input).map(|b| b.name), Some(expected), "{input}");
        }
    }

    #[test]
    fn find_numbered_books() {
        for input in ["1 Samuel", "1 Sam", "1Sam", "1sa", "I Samuel", "First Samuel"] {
            assert_eq!(find_book(input).map(|b| b.name), Some("1 Samuel"), "{input}");
        }
        for input in ["2 Kings", "2 Kgs", "2kgs"] {
            assert_eq!(find_book(input).map(|b| b.name), Some("2 Kings"), "{input}");
        }
        for input in ["1 Corinthians", "1 Cor", "1cor"] {
            assert_eq!(find_book(input).map(|b| b.name), Some("1 Corinthians"), "{input}");
        }
        for input in ["1 John", "1 Jn", "1jn"] {
            assert_eq!(find_book(input).map(|b| b.name), Some("1 John"), "{input}");
        }
    }

    #[test]
    fn find_book_strips_periods_and_whitespace() {
        assert_eq!(find_book("Gen.").map(|b| b.name), Some("Genesis"));
        assert_eq!(find_book("Matt.").map(|b| b.name), Some("Matthew"));
        assert_eq!(find_book("1 Sam.").map(|b| b.name), Some("1 Samuel"));
        assert_eq!(find_book("  Genesis  ").map(|b| b.name), Some("Genesis"));
    }

    #[test]
    fn find_book_rejects_unknown_input() {
        assert!(find_book("FakeBook").is_none());
        assert!(find_book("").is_none());
        assert!(find_book("Hezekiah").is_none());
    }

    #[test]
    fn clear_caches_rebuilds_the_index() {
        let before = index();
        clear_caches();
        let after = index();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(before.pattern(), after.pattern());
        assert_eq!(after.get("jn").map(|b| b.name), Some("John"));
    }
}
