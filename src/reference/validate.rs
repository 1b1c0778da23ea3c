//! Chapter and verse bounds checking.

use crate::bible;

/// Check a reference against the registry's real chapter and verse counts.
///
/// A cross-chapter range (`chapter_end` present) must end in the same or a
/// later chapter that exists; a same-chapter range must not end before it
/// starts. Anything that fails is simply not a reference.
pub fn is_valid_reference(
    book: &str,
    chapter: u32,
    verse_start: Option<u32>,
    chapter_end: Option<u32>,
    verse_end: Option<u32>,
) -> bool {
    let Some(book) = bible::find_book(book) else {
        return false;
    };

    let Some(verses_in_chapter) = book.verses_in(chapter) else {
        return false;
    };

    if let Some(start) = verse_start {
        if !(1..=verses_in_chapter).contains(&start) {
            return false;
        }
    }

    if let Some(end_chapter) = chapter_end {
        let Some(verses_in_end) = book.verses_in(end_chapter) else {
            return false;
        };
        if end_chapter < chapter {
            return false;
        }
        if let Some(end) = verse_end {
            return (1..=verses_in_end).contains(&end);
        }
        return true;
    }

    match (verse_start, verse_end) {
        (Some(start), Some(end)) => (1..=verses_in_chapter).contains(&end) && end >= start,
        _ => true,
    }
}
