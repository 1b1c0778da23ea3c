//! Book-name alternation for the reference matcher.

use std::collections::HashSet;

use super::BookDescriptor;

/// Join every name and abbreviation into one escaped regex alternation.
///
/// Entries are ordered longest first: regex alternation commits to the first
/// branch that matches, so `1 John` has to be tried before `John` and `jn`.
pub(super) fn build_pattern(books: &[BookDescriptor]) -> String {
    let mut seen = HashSet::new();
    let mut names: Vec<&str> = Vec::new();

    for book in books {
        for name in std::iter::once(&book.name).chain(book.abbreviations) {
            if seen.insert(name.to_lowercase()) {
                names.push(*name);
            }
        }
    }

    // Stable sort keeps canonical order among equal lengths
    names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    names
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}
