//! Scanner behaviour over the whole book registry and realistic notes.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use scripture_linker::bible::{BookDescriptor, BIBLE_BOOKS};
use scripture_linker::{format_display, parse_reference, scan, ScriptureRef};

fn chapters(book: &BookDescriptor) -> impl Iterator<Item = (u32, u32)> + '_ {
    (1..=book.chapter_count()).map(move |ch| (ch, book.verses_in(ch).unwrap()))
}

#[test]
fn every_chapter_of_every_book_is_found() {
    for book in BIBLE_BOOKS {
        for (chapter, _) in chapters(book) {
            let text = format!("{} {chapter}", book.name);
            let refs = scan(&text);
            assert_eq!(refs.len(), 1, "{text}");
            assert_eq!(refs[0].book, book.name);
            assert_eq!(refs[0].chapter, chapter);
            assert_eq!(refs[0].verse_start, None);
            assert_eq!(refs[0].verse_end, None);
        }
    }
}

#[test]
fn every_verse_of_every_book_is_found() {
    for book in BIBLE_BOOKS {
        for (chapter, verses) in chapters(book) {
            for verse in 1..=verses {
                let text = format!("{} {chapter}:{verse}", book.name);
                let refs = scan(&text);
                assert_eq!(refs.len(), 1, "{text}");
                let r = &refs[0];
                assert_eq!((r.book.as_str(), r.chapter, r.verse_start), (book.name, chapter, Some(verse)));
                assert_eq!(r.verse_end, None);
                assert_eq!((r.start, r.end), (0, text.len()));
            }
        }
    }
}

#[test]
fn past_the_last_chapter_or_verse_is_nothing() {
    for book in BIBLE_BOOKS {
        let last = book.chapter_count();
        assert!(scan(&format!("{} {}", book.name, last + 1)).is_empty(), "{}", book.name);

        let verses = book.verses_in(last).unwrap();
        let text = format!("{} {last}:{}", book.name, verses + 1);
        assert!(scan(&text).is_empty(), "{text}");
    }
}

#[test]
fn abbreviations_resolve_to_their_book() {
    for book in BIBLE_BOOKS {
        for abbrev in book.abbreviations {
            let text = format!("see {abbrev} 1:1 here");
            let refs = scan(&text);
            assert_eq!(refs.len(), 1, "{text}");
            assert_eq!(refs[0].book, book.name, "{text}");
            assert_eq!(refs[0].raw_text, format!("{abbrev} 1:1"));
        }
    }
}

#[test]
fn display_round_trip() {
    let refs = [
        ScriptureRef::chapter("Obadiah", 1),
        ScriptureRef::verse("3 John", 1, 15),
        ScriptureRef::verse("Revelation", 12, 18),
        ScriptureRef::range("Psalm", 119, 1, 176),
        ScriptureRef::cross_chapter("John", (3, 36), (4, 1)),
        ScriptureRef::cross_chapter("Genesis", (3, 24), (4, 1)),
    ];
    for r in refs {
        let shown = format_display(&r);
        let reparsed = parse_reference(&shown).unwrap();
        assert_eq!(format_display(&reparsed), shown);
        assert_eq!(reparsed.raw_text, shown);
    }
}

#[test]
fn sermon_outline() {
    let text = "\
# Samuel outline

- Call of Samuel: 1 Sam. 3:1-21 (cf. 2:26)
- Ark narrative: 1 Samuel 4:1–7:2
- 8:7 has no book on this line
- Saul anointed, 1 Sam 10:1; see also [commentary](https://example.com/1Sa10:1)
";
    let found: Vec<String> = scan(text).iter().map(format_display).collect();
    assert_eq!(
        found,
        ["1 Samuel 3:1-21", "1 Samuel 2:26", "1 Samuel 4:1-7:2", "1 Samuel 10:1"]
    );
}

#[test]
fn results_are_ordered_and_disjoint() {
    let text = "Gen 1:1, Ex 20:1-17 (20:3), Lev 19:18; Deut 6:4-5 and Jn 3:16";
    let refs = scan(text);
    assert_eq!(refs.len(), 6);
    for pair in refs.windows(2) {
        assert!(pair[0].end <= pair[1].start);
    }
    for r in &refs {
        assert!(text[r.start..r.end].contains(&r.raw_text));
    }
}
