//! Span decisions for references that touch Markdown links.
//!
//! Links this tool wrote earlier are swallowed whole, so a rescan can re-render
//! them in place. References inside anybody else's link are left alone.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::links::{BOLLS_LABEL, LOGOS_LABEL};
use crate::services::links::is_managed_url;

/// `](url)` directly after the reference text.
#[allow(clippy::expect_used)]
static RE_LINK_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\]\(([^()\s]*)\)").expect("valid regex: RE_LINK_TAIL")
});

/// ` ([Logos](url) | [Bolls](url))` directly after the reference text.
#[allow(clippy::expect_used)]
static RE_DUAL_TAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^ \(\[{LOGOS_LABEL}\]\(([^()\s]*)\) \| \[{BOLLS_LABEL}\]\(([^()\s]*)\)\)"
    ))
    .expect("valid regex: RE_DUAL_TAIL")
});

/// What to do with a validated match at `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// Report the match as found.
    Keep,
    /// Report the match over a wider span that covers an existing link.
    Expand {
        /// Byte offset of the widened span start.
        start: usize,
        /// Byte offset of the widened span end (exclusive).
        end: usize,
    },
    /// Drop the match: it sits inside a link this tool did not write.
    Reject,
}

/// Decide the reported span for the match at `start..end` in `text`.
pub fn resolve_span(text: &str, start: usize, end: usize) -> Span {
    let before = &text[..start];
    let after = &text[end..];

    // [John 3:16](https://ref.ly/...)
    if before.ends_with('[') {
        if let Some(tail) = RE_LINK_TAIL.captures(after) {
            if tail.get(1).is_some_and(|url| is_managed_url(url.as_str())) {
                let tail_len = tail.get(0).map_or(0, |m| m.end());
                return Span::Expand { start: start - 1, end: end + tail_len };
            }
        }
    }

    // John 3:16 ([Logos](...) | [Bolls](...))
    if let Some(tail) = RE_DUAL_TAIL.captures(after) {
        let managed = [tail.get(1), tail.get(2)]
            .into_iter()
            .flatten()
            .any(|url| is_managed_url(url.as_str()));
        if managed {
            let tail_len = tail.get(0).map_or(0, |m| m.end());
            return Span::Expand { start, end: end + tail_len };
        }
    }

    if inside_markdown_link(before, after) {
        return Span::Reject;
    }

    Span::Keep
}

/// Whether the text between `before` and `after` is part of a Markdown link,
/// either its `[text]` or its `(url)`.
fn inside_markdown_link(before: &str, after: &str) -> bool {
    let open_bracket = before.rfind('[');
    let close_bracket = before.rfind(']');

    // Unclosed `[` behind us and a `](` ahead
    if open_bracket > close_bracket && after.contains("](") {
        return true;
    }

    // Unclosed `](` behind us and a `)` ahead
    let open_paren = before.rfind('(');
    if open_paren > close_bracket && open_paren > before.rfind(')') {
        let follows_link_text = open_paren.is_some_and(|i| before[..i].ends_with(']'));
        if follows_link_text && after.contains(')') {
            return true;
        }
    }

    false
}
