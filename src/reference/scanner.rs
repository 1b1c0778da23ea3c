//! Single-pass reference scanner.
//!
//! One combined regex carries both reference shapes: a full form with a book
//! token and a shorthand `chapter:verse` that borrows the book from earlier on
//! the same line. The regex crate has no look-behind, so the boundary guard is
//! applied by hand and the cursor is threaded through the loop explicitly.

use std::sync::{Arc, PoisonError, RwLock};

use lazy_static::lazy_static;
use regex::{Captures, Regex, RegexBuilder};

use super::boundary::{self, Span};
use super::validate::is_valid_reference;
use super::ScriptureRef;
use crate::bible::{self, BookIndex};
use crate::constants::scan::{
    MAX_NUMBER_DIGITS, RANGE_DASHES, URL_DELIMITERS, URL_SCHEME_SEPARATOR,
};
use crate::error::Result;

/// Compiled matcher and the book index it was built from.
struct Matcher {
    index: Arc<BookIndex>,
    regex: Regex,
}

lazy_static! {
    static ref MATCHER: RwLock<Option<Arc<Matcher>>> = RwLock::new(None);
}

fn build_regex(book_pattern: &str) -> Result<Regex> {
    let num = |name: &str| format!("(?P<{name}>[0-9]{{1,{MAX_NUMBER_DIGITS}}})");
    let dash = format!("[{RANGE_DASHES}]");

    let full = format!(
        r"(?P<book>{book_pattern})\.?\s*{}(?:[:.]{}(?:{dash}{}(?:[:.]{})?)?)?",
        num("chapter"),
        num("verse"),
        num("range"),
        num("range_verse"),
    );
    let shorthand = format!(
        r"\(?{}:{}(?:{dash}{}(?:[:.]{})?)?\)?",
        num("short_chapter"),
        num("short_verse"),
        num("short_range"),
        num("short_range_verse"),
    );

    Ok(RegexBuilder::new(&format!("{full}|{shorthand}"))
        .case_insensitive(true)
        .build()?)
}

/// Matcher for the current book index, rebuilt after [`bible::clear_caches`].
fn matcher() -> Result<Arc<Matcher>> {
    let index = bible::index();

    if let Some(cached) = MATCHER.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        if Arc::ptr_eq(&cached.index, &index) {
            return Ok(Arc::clone(cached));
        }
    }

    let regex = build_regex(index.pattern())?;
    let fresh = Arc::new(Matcher { index, regex });
    *MATCHER.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&fresh));
    Ok(fresh)
}

/// Whether a match may start at `start`: the preceding character must not be
/// alphanumeric, and the surrounding token must not be a URL.
fn guard_allows(text: &str, start: usize) -> bool {
    let before = &text[..start];
    if before.chars().next_back().is_some_and(char::is_alphanumeric) {
        return false;
    }

    let token = before
        .rsplit(|c: char| c.is_whitespace() || URL_DELIMITERS.contains(&c))
        .next()
        .unwrap_or(before);
    !token.contains(URL_SCHEME_SEPARATOR)
}

/// Shorthand parentheses are only part of the match when both are present.
fn balance_parens(text: &str, start: usize, end: usize) -> (usize, usize) {
    let matched = &text[start..end];
    match (matched.starts_with('('), matched.ends_with(')')) {
        (true, false) => (start + 1, end),
        (false, true) => (start, end - 1),
        _ => (start, end),
    }
}

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name).and_then(|m| m.as_str().parse().ok())
}

/// Chapter, verse and range numbers of one match, in the order
/// `(chapter, verse_start, chapter_end, verse_end)`.
type Numbers = (u32, Option<u32>, Option<u32>, Option<u32>);

fn numbers(caps: &Captures<'_>, prefix: &str) -> Option<Numbers> {
    let field = |name: &str| number(caps, &format!("{prefix}{name}"));

    let chapter = field("chapter")?;
    let verse_start = field("verse");
    let range = field("range");
    let range_verse = field("range_verse");

    Some(match range_verse {
        Some(verse_end) => (chapter, verse_start, range, Some(verse_end)),
        None => (chapter, verse_start, None, range),
    })
}

/// Find every valid scripture reference in `text`, in document order.
///
/// Never fails: text without references, or a matcher that cannot be built,
/// gives an empty result.
pub fn scan(text: &str) -> Vec<ScriptureRef> {
    let matcher = match matcher() {
        Ok(m) => m,
        Err(e) => {
            tracing::error!("Failed to build reference matcher: {e}");
            return Vec::new();
        }
    };

    let mut refs = Vec::new();
    let mut context: Option<&'static str> = None;
    let mut last_end = 0;
    let mut pos = 0;

    while let Some(caps) = matcher.regex.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        let (mut start, mut end) = (whole.start(), whole.end());
        if caps.name("book").is_none() {
            (start, end) = balance_parens(text, start, end);
        }
        let raw_text = &text[start..end];

        if !guard_allows(text, start) {
            // Step one character so the next attempt starts inside this match
            pos = start + text[start..].chars().next().map_or(1, char::len_utf8);
            continue;
        }

        if text[last_end..start].contains('\n') {
            context = None;
        }
        last_end = end;
        pos = end;

        let (book, parsed) = if let Some(token) = caps.name("book") {
            let Some(book) = matcher.index.get(&bible::normalize(token.as_str())) else {
                tracing::debug!("Unresolved book token: {}", token.as_str());
                continue;
            };
            context = Some(book.name);
            (book.name, numbers(&caps, ""))
        } else {
            let Some(book) = context else {
                continue;
            };
            (book, numbers(&caps, "short_"))
        };

        let Some((chapter, verse_start, chapter_end, verse_end)) = parsed else {
            continue;
        };

        if !is_valid_reference(book, chapter, verse_start, chapter_end, verse_end) {
            tracing::debug!("Out of range reference dropped: {raw_text}");
            continue;
        }

        let (span_start, span_end) = match boundary::resolve_span(text, start, end) {
            Span::Keep => (start, end),
            Span::Expand { start, end } => {
                pos = end;
                last_end = end;
                (start, end)
            }
            Span::Reject => {
                tracing::debug!("Reference inside a foreign link skipped: {raw_text}");
                continue;
            }
        };

        refs.push(ScriptureRef {
            book: book.to_string(),
            chapter,
            verse_start,
            chapter_end,
            verse_end,
            raw_text: raw_text.to_string(),
            start: span_start,
            end: span_end,
        });
    }

    refs
}
