//! URL generation and Markdown link composition.
//!
//! Each service is a [`LinkProvider`]. Providers return `None` when the
//! reference's book cannot be resolved, which callers treat as "leave the text
//! alone".

use crate::bible::{self, BookDescriptor};
use crate::constants::links::{BOLLS_BASE, BOLLS_LABEL, LOGOS_BASE, LOGOS_LABEL};
use crate::reference::ScriptureRef;
use crate::types::{LinkService, Translation};

/// A Bible website that references can link to.
pub trait LinkProvider: Send + Sync {
    /// Build the URL for `reference` in `translation`.
    ///
    /// # Returns
    /// `None` when the book is unknown to the registry.
    fn url(&self, reference: &ScriptureRef, translation: Translation) -> Option<String>;

    /// Whether `url` has the shape this provider writes.
    fn owns_url(&self, url: &str) -> bool;

    /// Label used in dual-link output.
    fn label(&self) -> &'static str;
}

/// Logos Bible Software, through `ref.ly` short links.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logos;

/// Bolls Bible reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bolls;

/// Every provider whose links the scanner treats as its own.
pub static PROVIDERS: &[&dyn LinkProvider] = &[&Logos, &Bolls];

/// Whether `url` was produced by one of the [`PROVIDERS`].
pub fn is_managed_url(url: &str) -> bool {
    PROVIDERS.iter().any(|p| p.owns_url(url))
}

fn resolve(reference: &ScriptureRef) -> Option<&'static BookDescriptor> {
    let book = bible::find_book(&reference.book);
    if book.is_none() {
        tracing::warn!("Could not find book for: {}", reference.book);
    }
    book
}

/// `Jn3`, `Jn3.16`, `Jn3.16-18` or `Jn3.36-4.1`.
fn logos_ref(book: &BookDescriptor, reference: &ScriptureRef) -> String {
    let mut out = format!("{}{}", book.short_code, reference.chapter);
    if let Some(start) = reference.verse_start {
        out.push_str(&format!(".{start}"));
        match (reference.chapter_end, reference.verse_end) {
            (Some(chapter_end), Some(end)) => out.push_str(&format!("-{chapter_end}.{end}")),
            (None, Some(end)) if end != start => out.push_str(&format!("-{end}")),
            _ => {}
        }
    }
    out
}

impl LinkProvider for Logos {
    fn url(&self, reference: &ScriptureRef, translation: Translation) -> Option<String> {
        let book = resolve(reference)?;
        let config = translation.config();
        let target = logos_ref(book, reference);

        if translation.uses_semicolon_url() {
            return Some(format!("{LOGOS_BASE}{target};{}", config.logos_resource));
        }

        Some(format!(
            "{LOGOS_BASE}logosres/{}?ref={}.{target}",
            config.logos_resource, config.logos_bible_ref
        ))
    }

    fn owns_url(&self, url: &str) -> bool {
        url.starts_with(LOGOS_BASE)
    }

    fn label(&self) -> &'static str {
        LOGOS_LABEL
    }
}

impl LinkProvider for Bolls {
    fn url(&self, reference: &ScriptureRef, translation: Translation) -> Option<String> {
        let book = resolve(reference)?;
        let mut url = format!(
            "{BOLLS_BASE}{}/{}/{}/",
            translation.config().bolls_code,
            book.external_id,
            reference.chapter
        );
        if let Some(start) = reference.verse_start {
            url.push_str(&format!("#{start}"));
        }
        Some(url)
    }

    fn owns_url(&self, url: &str) -> bool {
        url.starts_with(BOLLS_BASE)
    }

    fn label(&self) -> &'static str {
        BOLLS_LABEL
    }
}

/// Logos `ref.ly` URL, e.g. `https://ref.ly/logosres/esv?ref=BibleESV.Jn3.16`.
pub fn logos_url(reference: &ScriptureRef, translation: Translation) -> Option<String> {
    Logos.url(reference, translation)
}

/// Bolls Bible URL, e.g. `https://bolls.life/ESV/43/3/#16`.
pub fn bolls_url(reference: &ScriptureRef, translation: Translation) -> Option<String> {
    Bolls.url(reference, translation)
}

/// `[raw text](url)` for one provider, or the raw text when no URL exists.
pub fn markdown_link(
    reference: &ScriptureRef,
    translation: Translation,
    provider: &dyn LinkProvider,
) -> String {
    provider.url(reference, translation).map_or_else(
        || reference.raw_text.clone(),
        |url| format!("[{}]({url})", reference.raw_text),
    )
}

/// `raw text ([Logos](url) | [Bolls](url))`, or the raw text when neither
/// provider can build a URL.
pub fn both_links(reference: &ScriptureRef, translation: Translation) -> String {
    let links: Vec<String> = PROVIDERS
        .iter()
        .filter_map(|p| {
            p.url(reference, translation)
                .map(|url| format!("[{}]({url})", p.label()))
        })
        .collect();

    if links.is_empty() {
        return reference.raw_text.clone();
    }

    format!("{} ({})", reference.raw_text, links.join(" | "))
}

/// Render `reference` for the configured service.
pub fn render(reference: &ScriptureRef, translation: Translation, service: LinkService) -> String {
    match service {
        LinkService::Logos => markdown_link(reference, translation, &Logos),
        LinkService::Bolls => markdown_link(reference, translation, &Bolls),
        LinkService::Both => both_links(reference, translation),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn logos_standard_format() {
        let cases = [
            (ScriptureRef::verse("John", 3, 16), Translation::Esv, "https://ref.ly/logosres/esv?ref=BibleESV.Jn3.16"),
            (ScriptureRef::verse("Genesis", 1, 1), Translation::Nasb95, "https://ref.ly/logosres/nasb95?ref=BibleNASB95.Ge1.1"),
            (ScriptureRef::verse("Romans", 8, 28), Translation::Niv, "https://ref.ly/logosres/niv2011?ref=BibleNIV.Ro8.28"),
            (ScriptureRef::verse("Psalm", 23, 1), Translation::Nkjv, "https://ref.ly/logosres/nkjv?ref=BibleNKJV.Ps23.1"),
            (ScriptureRef::range("1 Corinthians", 13, 4, 8), Translation::Esv, "https://ref.ly/logosres/esv?ref=BibleESV.1Co13.4-8"),
            (ScriptureRef::chapter("Psalm", 23), Translation::Esv, "https://ref.ly/logosres/esv?ref=BibleESV.Ps23"),
            (ScriptureRef::verse("John", 1, 1), Translation::Leb, "https://ref.ly/logosres/leb?ref=BibleLEB.Jn1.1"),
            (ScriptureRef::verse("1 Samuel", 10, 7), Translation::Msg, "https://ref.ly/logosres/message?ref=Bible.1Sa10.7"),
        ];
        for (reference, translation, expected) in cases {
            assert_eq!(logos_url(&reference, translation).as_deref(), Some(expected));
        }
    }

    #[test]
    fn logos_semicolon_format() {
        let lsb = logos_url(&ScriptureRef::verse("1 Samuel", 13, 5), Translation::Lsb);
        assert_eq!(lsb.as_deref(), Some("https://ref.ly/1Sa13.5;lgcystndrdbblsb"));

        let kjv = logos_url(&ScriptureRef::chapter("Genesis", 1), Translation::Kjv);
        assert_eq!(kjv.as_deref(), Some("https://ref.ly/Ge1;kjv1900"));

        let range = logos_url(&ScriptureRef::range("1 Samuel", 10, 7, 10), Translation::Lsb);
        assert_eq!(range.as_deref(), Some("https://ref.ly/1Sa10.7-10;lgcystndrdbblsb"));
    }

    #[test]
    fn logos_cross_chapter_range() {
        let r = ScriptureRef::cross_chapter("John", (3, 36), (4, 1));
        assert_eq!(
            logos_url(&r, Translation::Esv).as_deref(),
            Some("https://ref.ly/logosres/esv?ref=BibleESV.Jn3.36-4.1")
        );
    }

    #[test]
    fn unknown_book_has_no_url() {
        let r = ScriptureRef::verse("FakeBook", 1, 1);
        assert!(logos_url(&r, Translation::Esv).is_none());
        assert!(bolls_url(&r, Translation::Esv).is_none());
        assert_eq!(markdown_link(&r, Translation::Esv, &Logos), "FakeBook 1:1");
        assert_eq!(both_links(&r, Translation::Esv), "FakeBook 1:1");
    }

    #[test]
    fn bolls_urls() {
        let cases = [
            (ScriptureRef::verse("John", 3, 16), Translation::Esv, "https://bolls.life/ESV/43/3/#16"),
            (ScriptureRef::verse("Genesis", 1, 1), Translation::Niv, "https://bolls.life/NIV/1/1/#1"),
            (ScriptureRef::chapter("Psalm", 23), Translation::Esv, "https://bolls.life/ESV/19/23/"),
            (ScriptureRef::verse("Romans", 8, 28), Translation::Nasb95, "https://bolls.life/NASB/45/8/#28"),
        ];
        for (reference, translation, expected) in cases {
            assert_eq!(bolls_url(&reference, translation).as_deref(), Some(expected));
        }
    }

    #[test]
    fn single_service_markdown() {
        let r = ScriptureRef::verse("John", 3, 16);
        assert_eq!(
            markdown_link(&r, Translation::Esv, &Logos),
            "[John 3:16](https://ref.ly/logosres/esv?ref=BibleESV.Jn3.16)"
        );
        assert_eq!(
            render(&r, Translation::Esv, LinkService::Bolls),
            "[John 3:16](https://bolls.life/ESV/43/3/#16)"
        );
    }

    #[test]
    fn dual_service_markdown() {
        let r = ScriptureRef::verse("John", 3, 16);
        assert_eq!(
            both_links(&r, Translation::Esv),
            "John 3:16 ([Logos](https://ref.ly/logosres/esv?ref=BibleESV.Jn3.16) | [Bolls](https://bolls.life/ESV/43/3/#16))"
        );
    }

    #[test]
    fn managed_urls() {
        assert!(is_managed_url("https://ref.ly/Ge1;kjv1900"));
        assert!(is_managed_url("https://bolls.life/ESV/43/3/#16"));
        assert!(!is_managed_url("https://example.com/ref.ly"));
        assert!(!is_managed_url("http://ref.ly/Ge1"));
    }
}
