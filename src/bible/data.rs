//! Static catalog of the 66 books of the Protestant canon.
//!
//! Verse counts follow the King James versification, widened where modern
//! English translations number an extra verse (3 John 1:15, Revelation 12:18).

use super::BookDescriptor;

/// Every book in canonical order. `external_id` equals the position plus one.
pub static BIBLE_BOOKS: &[BookDescriptor] = &[
    // Old Testament
    BookDescriptor {
        name: "Genesis",
        short_code: "Ge",
        external_id: 1,
        abbreviations: &["genesis", "gen", "ge", "gn"],
        verses_per_chapter: &[
            31, 25, 24, 26, 32, 22, 24, 22, 29, 32, 32, 20, 18, 24, 21, 16, 27, 33, 38, 18, 34,
            24, 20, 67, 34, 35, 46, 22, 35, 43, 55, 32, 20, 31, 29, 43, 36, 30, 23, 23, 57, 38,
            34, 34, 28, 34, 31, 22, 33, 26,
        ],
    },
    BookDescriptor {
        name: "Exodus",
        short_code: "Ex",
        external_id: 2,
        abbreviations: &["exodus", "exod", "exo", "ex"],
        verses_per_chapter: &[
            22, 25, 22, 31, 23, 30, 25, 32, 35, 29, 10, 51, 22, 31, 27, 36, 16, 27, 25, 26, 36,
            31, 33, 18, 40, 37, 21, 43, 46, 38, 18, 35, 23, 35, 35, 38, 29, 31, 43, 38,
        ],
    },
    BookDescriptor {
        name: "Leviticus",
        short_code: "Le",
        external_id: 3,
        abbreviations: &["leviticus", "lev", "le", "lv"],
        verses_per_chapter: &[
            17, 16, 17, 35, 19, 30, 38, 36, 24, 20, 47, 8, 59, 57, 33, 34, 16, 30, 37, 27, 24,
            33, 44, 23, 55, 46, 34,
        ],
    },
    BookDescriptor {
        name: "Numbers",
        short_code: "Nu",
        external_id: 4,
        abbreviations: &["numbers", "num", "nu", "nm", "nb"],
        verses_per_chapter: &[
            54, 34, 51, 49, 31, 27, 89, 26, 23, 36, 35, 16, 33, 45, 41, 50, 13, 32, 22, 29, 35,
            41, 30, 25, 18, 65, 23, 31, 40, 16, 54, 42, 56, 29, 34, 13,
        ],
    },
    BookDescriptor {
        name: "Deuteronomy",
        short_code: "Dt",
        external_id: 5,
        abbreviations: &["deuteronomy", "deut", "de", "dt"],
        verses_per_chapter: &[
            46, 37, 29, 49, 33, 25, 26, 20, 29, 22, 32, 32, 18, 29, 23, 22, 20, 22, 21, 20, 23,
            30, 25, 22, 19, 19, 26, 68, 29, 20, 30, 52, 29, 12,
        ],
    },
    BookDescriptor {
        name: "Joshua",
        short_code: "Jos",
        external_id: 6,
        abbreviations: &["joshua", "josh", "jos", "jsh"],
        verses_per_chapter: &[
            18, 24, 17, 24, 15, 27, 26, 35, 27, 43, 23, 24, 33, 15, 63, 10, 18, 28, 51, 9, 45,
            34, 16, 33,
        ],
    },
    BookDescriptor {
        name: "Judges",
        short_code: "Jdg",
        external_id: 7,
        abbreviations: &["judges", "judg", "jdg", "jg", "jdgs"],
        verses_per_chapter: &[36, 23, 31, 24, 31, 40, 25, 35, 57, 18, 40, 15, 25, 20, 20, 31, 13, 31, 30, 48, 25],
    },
    BookDescriptor {
        name: "Ruth",
        short_code: "Ru",
        external_id: 8,
        abbreviations: &["ruth", "rth", "ru"],
        verses_per_chapter: &[22, 23, 18, 22],
    },
    BookDescriptor {
        name: "1 Samuel",
        short_code: "1Sa",
        external_id: 9,
        abbreviations: &["1 samuel", "1samuel", "1 sam", "1sam", "1 sa", "1sa", "i samuel", "i sam", "first samuel"],
        verses_per_chapter: &[
            28, 36, 21, 22, 12, 21, 17, 22, 27, 27, 15, 25, 23, 52, 35, 23, 58, 30, 24, 42, 15,
            23, 29, 22, 44, 25, 12, 25, 11, 31, 13,
        ],
    },
    BookDescriptor {
        name: "2 Samuel",
        short_code: "2Sa",
        external_id: 10,
        abbreviations: &["2 samuel", "2samuel", "2 sam", "2sam", "2 sa", "2sa", "ii samuel", "ii sam", "second samuel"],
        verses_per_chapter: &[
            27, 32, 39, 12, 25, 23, 29, 18, 13, 19, 27, 31, 39, 33, 37, 23, 29, 33, 43, 26, 22,
            51, 39, 25,
        ],
    },
    BookDescriptor {
        name: "1 Kings",
        short_code: "1Ki",
        external_id: 11,
        abbreviations: &["1 kings", "1kings", "1 kgs", "1kgs", "1 ki", "1ki", "i kings", "i kgs", "first kings"],
        verses_per_chapter: &[
            53, 46, 28, 34, 18, 38, 51, 66, 28, 29, 43, 33, 34, 31, 34, 34, 24, 46, 21, 43, 29,
            53,
        ],
    },
    BookDescriptor {
        name: "2 Kings",
        short_code: "2Ki",
        external_id: 12,
        abbreviations: &["2 kings", "2kings", "2 kgs", "2kgs", "2 ki", "2ki", "ii kings", "ii kgs", "second kings"],
        verses_per_chapter: &[
            18, 25, 27, 44, 27, 33, 20, 29, 37, 36, 21, 21, 25, 29, 38, 20, 41, 37, 37, 21, 26,
            20, 37, 20, 30,
        ],
    },
    BookDescriptor {
        name: "1 Chronicles",
        short_code: "1Ch",
        external_id: 13,
        abbreviations: &["1 chronicles", "1chronicles", "1 chron", "1chron", "1 chr", "1chr", "1 ch", "1ch", "i chronicles", "i chron", "first chronicles"],
        verses_per_chapter: &[
            54, 55, 24, 43, 26, 81, 40, 40, 44, 14, 47, 40, 14, 17, 29, 43, 27, 17, 19, 8, 30,
            19, 32, 31, 31, 32, 34, 21, 30,
        ],
    },
    BookDescriptor {
        name: "2 Chronicles",
        short_code: "2Ch",
        external_id: 14,
        abbreviations: &["2 chronicles", "2chronicles", "2 chron", "2chron", "2 chr", "2chr", "2 ch", "2ch", "ii chronicles", "ii chron", "second chronicles"],
        verses_per_chapter: &[
            17, 18, 17, 22, 14, 42, 22, 18, 31, 19, 23, 16, 22, 15, 19, 14, 19, 34, 11, 37, 20,
            12, 21, 27, 28, 23, 9, 27, 36, 27, 21, 33, 25, 33, 27, 23,
        ],
    },
    BookDescriptor {
        name: "Ezra",
        short_code: "Ezr",
        external_id: 15,
        abbreviations: &["ezra", "ezr", "ez"],
        verses_per_chapter: &[11, 70, 13, 24, 17, 22, 28, 36, 15, 44],
    },
    BookDescriptor {
        name: "Nehemiah",
        short_code: "Ne",
        external_id: 16,
        abbreviations: &["nehemiah", "neh", "ne"],
        verses_per_chapter: &[11, 20, 32, 23, 19, 19, 73, 18, 38, 39, 36, 47, 31],
    },
    BookDescriptor {
        name: "Esther",
        short_code: "Es",
        external_id: 17,
        abbreviations: &["esther", "esth", "est", "es"],
        verses_per_chapter: &[22, 23, 15, 17, 14, 14, 10, 17, 32, 3],
    },
    BookDescriptor {
        name: "Job",
        short_code: "Job",
        external_id: 18,
        abbreviations: &["job", "jb"],
        verses_per_chapter: &[
            22, 13, 26, 21, 27, 30, 21, 22, 35, 22, 20, 25, 28, 22, 35, 22, 16, 21, 29, 29, 34,
            30, 17, 25, 6, 14, 23, 28, 25, 31, 40, 22, 33, 37, 16, 33, 24, 41, 30, 24, 34, 17,
        ],
    },
    BookDescriptor {
        name: "Psalm",
        short_code: "Ps",
        external_id: 19,
        abbreviations: &["psalm", "psalms", "ps", "psa", "psm", "pss"],
        verses_per_chapter: &[
            6, 12, 8, 8, 12, 10, 17, 9, 20, 18, 7, 8, 6, 7, 5, 11, 15, 50, 14, 9, 13, 31, 6,
            10, 22, 12, 14, 9, 11, 12, 24, 11, 22, 22, 28, 12, 40, 22, 13, 17, 13, 11, 5, 26,
            17, 11, 9, 14, 20, 23, 19, 9, 6, 7, 23, 13, 11, 11, 17, 12, 8, 12, 11, 10, 13, 20,
            7, 35, 36, 5, 24, 20, 28, 23, 10, 12, 20, 72, 13, 19, 16, 8, 18, 12, 13, 17, 7, 18,
            52, 17, 16, 15, 5, 23, 11, 13, 12, 9, 9, 5, 8, 28, 22, 35, 45, 48, 43, 13, 31, 7,
            10, 10, 9, 8, 18, 19, 2, 29, 176, 7, 8, 9, 4, 8, 5, 6, 5, 6, 8, 8, 3, 18, 3, 3, 21,
            26, 9, 8, 24, 13, 10, 7, 12, 15, 21, 10, 20, 14, 9, 6,
        ],
    },
    BookDescriptor {
        name: "Proverbs",
        short_code: "Pr",
        external_id: 20,
        abbreviations: &["proverbs", "prov", "pro", "prv", "pr"],
        verses_per_chapter: &[
            33, 22, 35, 27, 23, 35, 27, 36, 18, 32, 31, 28, 25, 35, 33, 33, 28, 24, 29, 30, 31,
            29, 35, 34, 28, 28, 27, 28, 27, 33, 31,
        ],
    },
    BookDescriptor {
        name: "Ecclesiastes",
        short_code: "Ec",
        external_id: 21,
        abbreviations: &["ecclesiastes", "eccl", "ecc", "ec", "qoh", "qoheleth"],
        verses_per_chapter: &[18, 26, 22, 16, 20, 12, 29, 17, 18, 20, 10, 14],
    },
    BookDescriptor {
        name: "Song of Solomon",
        short_code: "So",
        external_id: 22,
        abbreviations: &["song of solomon", "song of songs", "song", "sos", "so", "canticles", "canticle", "cant"],
        verses_per_chapter: &[17, 17, 11, 16, 16, 13, 13, 14],
    },
    BookDescriptor {
        name: "Isaiah",
        short_code: "Is",
        external_id: 23,
        abbreviations: &["isaiah", "isa", "is"],
        verses_per_chapter: &[
            31, 22, 26, 6, 30, 13, 25, 22, 21, 34, 16, 6, 22, 32, 9, 14, 14, 7, 25, 6, 17, 25,
            18, 23, 12, 21, 13, 29, 24, 33, 9, 20, 24, 17, 10, 22, 38, 22, 8, 31, 29, 25, 28,
            28, 25, 13, 15, 22, 26, 11, 23, 15, 12, 17, 13, 12, 21, 14, 21, 22, 11, 12, 19, 12,
            25, 24,
        ],
    },
    BookDescriptor {
        name: "Jeremiah",
        short_code: "Je",
        external_id: 24,
        abbreviations: &["jeremiah", "jer", "je", "jr"],
        verses_per_chapter: &[
            19, 37, 25, 31, 31, 30, 34, 22, 26, 25, 23, 17, 27, 22, 21, 21, 27, 23, 15, 18, 14,
            30, 40, 10, 38, 24, 22, 17, 32, 24, 40, 44, 26, 22, 19, 32, 21, 28, 18, 16, 18, 22,
            13, 30, 5, 28, 7, 47, 39, 46, 64, 34,
        ],
    },
    BookDescriptor {
        name: "Lamentations",
        short_code: "La",
        external_id: 25,
        abbreviations: &["lamentations", "lam", "la"],
        verses_per_chapter: &[22, 22, 66, 22, 22],
    },
    BookDescriptor {
        name: "Ezekiel",
        short_code: "Eze",
        external_id: 26,
        abbreviations: &["ezekiel", "ezek", "eze", "ezk"],
        verses_per_chapter: &[
            28, 10, 27, 17, 17, 14, 27, 18, 11, 22, 25, 28, 23, 23, 8, 63, 24, 32, 14, 49, 32,
            31, 49, 27, 17, 21, 36, 26, 21, 26, 18, 32, 33, 31, 15, 38, 28, 23, 29, 49, 26, 20,
            27, 31, 25, 24, 23, 35,
        ],
    },
    BookDescriptor {
        name: "Daniel",
        short_code: "Da",
        external_id: 27,
        abbreviations: &["daniel", "dan", "da", "dn"],
        verses_per_chapter: &[21, 49, 30, 37, 31, 28, 28, 27, 27, 21, 45, 13],
    },
    BookDescriptor {
        name: "Hosea",
        short_code: "Ho",
        external_id: 28,
        abbreviations: &["hosea", "hos", "ho"],
        verses_per_chapter: &[11, 23, 5, 19, 15, 11, 16, 14, 17, 15, 12, 14, 16, 9],
    },
    BookDescriptor {
        name: "Joel",
        short_code: "Joe",
        external_id: 29,
        abbreviations: &["joel", "joe", "jl"],
        verses_per_chapter: &[20, 32, 21],
    },
    BookDescriptor {
        name: "Amos",
        short_code: "Am",
        external_id: 30,
        abbreviations: &["amos", "am"],
        verses_per_chapter: &[15, 16, 15, 13, 27, 14, 17, 14, 15],
    },
    BookDescriptor {
        name: "Obadiah",
        short_code: "Ob",
        external_id: 31,
        abbreviations: &["obadiah", "obad", "ob"],
        verses_per_chapter: &[21],
    },
    BookDescriptor {
        name: "Jonah",
        short_code: "Jon",
        external_id: 32,
        abbreviations: &["jonah", "jon", "jnh"],
        verses_per_chapter: &[17, 10, 10, 11],
    },
    BookDescriptor {
        name: "Micah",
        short_code: "Mic",
        external_id: 33,
        abbreviations: &["micah", "mic", "mc"],
        verses_per_chapter: &[16, 13, 12, 13, 15, 16, 20],
    },
    BookDescriptor {
        name: "Nahum",
        short_code: "Na",
        external_id: 34,
        abbreviations: &["nahum", "nah", "na"],
        verses_per_chapter: &[15, 13, 19],
    },
    BookDescriptor {
        name: "Habakkuk",
        short_code: "Hab",
        external_id: 35,
        abbreviations: &["habakkuk", "hab", "hb"],
        verses_per_chapter: &[17, 20, 19],
    },
    BookDescriptor {
        name: "Zephaniah",
        short_code: "Zep",
        external_id: 36,
        abbreviations: &["zephaniah", "zeph", "zep", "zp"],
        verses_per_chapter: &[18, 15, 20],
    },
    BookDescriptor {
        name: "Haggai",
        short_code: "Hag",
        external_id: 37,
        abbreviations: &["haggai", "hag", "hg"],
        verses_per_chapter: &[15, 23],
    },
    BookDescriptor {
        name: "Zechariah",
        short_code: "Zec",
        external_id: 38,
        abbreviations: &["zechariah", "zech", "zec", "zc"],
        verses_per_chapter: &[21, 13, 10, 14, 11, 15, 14, 23, 17, 12, 17, 14, 9, 21],
    },
    BookDescriptor {
        name: "Malachi",
        short_code: "Mal",
        external_id: 39,
        abbreviations: &["malachi", "mal", "ml"],
        verses_per_chapter: &[14, 17, 18, 6],
    },
    // New Testament
    BookDescriptor {
        name: "Matthew",
        short_code: "Mt",
        external_id: 40,
        abbreviations: &["matthew", "matt", "mat", "mt"],
        verses_per_chapter: &[
            25, 23, 17, 25, 48, 34, 29, 34, 38, 42, 30, 50, 58, 36, 39, 28, 27, 35, 30, 34, 46,
            46, 39, 51, 46, 75, 66, 20,
        ],
    },
    BookDescriptor {
        name: "Mark",
        short_code: "Mk",
        external_id: 41,
        abbreviations: &["mark", "mrk", "mar", "mk", "mr"],
        verses_per_chapter: &[45, 28, 35, 41, 43, 56, 37, 38, 50, 52, 33, 44, 37, 72, 47, 20],
    },
    BookDescriptor {
        name: "Luke",
        short_code: "Lk",
        external_id: 42,
        abbreviations: &["luke", "luk", "lk"],
        verses_per_chapter: &[
            80, 52, 38, 44, 39, 49, 50, 56, 62, 42, 54, 59, 35, 35, 32, 31, 37, 43, 48, 47, 38,
            71, 56, 53,
        ],
    },
    BookDescriptor {
        name: "John",
        short_code: "Jn",
        external_id: 43,
        abbreviations: &["john", "joh", "jhn", "jn"],
        verses_per_chapter: &[51, 25, 36, 54, 47, 71, 53, 59, 41, 42, 57, 50, 38, 31, 27, 33, 26, 40, 42, 31, 25],
    },
    BookDescriptor {
        name: "Acts",
        short_code: "Ac",
        external_id: 44,
        abbreviations: &["acts", "act", "ac"],
        verses_per_chapter: &[
            26, 47, 26, 37, 42, 15, 60, 40, 43, 48, 30, 25, 52, 28, 41, 40, 34, 28, 41, 38, 40,
            30, 35, 27, 27, 32, 44, 31,
        ],
    },
    BookDescriptor {
        name: "Romans",
        short_code: "Ro",
        external_id: 45,
        abbreviations: &["romans", "rom", "ro", "rm"],
        verses_per_chapter: &[32, 29, 31, 25, 21, 23, 25, 39, 33, 21, 36, 21, 14, 23, 33, 27],
    },
    BookDescriptor {
        name: "1 Corinthians",
        short_code: "1Co",
        external_id: 46,
        abbreviations: &["1 corinthians", "1corinthians", "1 cor", "1cor", "1 co", "1co", "i corinthians", "i cor", "first corinthians"],
        verses_per_chapter: &[31, 16, 23, 21, 13, 20, 40, 13, 27, 33, 34, 31, 13, 40, 58, 24],
    },
    BookDescriptor {
        name: "2 Corinthians",
        short_code: "2Co",
        external_id: 47,
        abbreviations: &["2 corinthians", "2corinthians", "2 cor", "2cor", "2 co", "2co", "ii corinthians", "ii cor", "second corinthians"],
        verses_per_chapter: &[24, 17, 18, 18, 21, 18, 16, 24, 15, 18, 33, 21, 14],
    },
    BookDescriptor {
        name: "Galatians",
        short_code: "Ga",
        external_id: 48,
        abbreviations: &["galatians", "gal", "ga"],
        verses_per_chapter: &[24, 21, 29, 31, 26, 18],
    },
    BookDescriptor {
        name: "Ephesians",
        short_code: "Eph",
        external_id: 49,
        abbreviations: &["ephesians", "eph", "ephes"],
        verses_per_chapter: &[23, 22, 21, 32, 33, 24],
    },
    BookDescriptor {
        name: "Philippians",
        short_code: "Php",
        external_id: 50,
        abbreviations: &["philippians", "phil", "php", "pp"],
        verses_per_chapter: &[30, 30, 21, 23],
    },
    BookDescriptor {
        name: "Colossians",
        short_code: "Col",
        external_id: 51,
        abbreviations: &["colossians", "col", "co"],
        verses_per_chapter: &[29, 23, 25, 18],
    },
    BookDescriptor {
        name: "1 Thessalonians",
        short_code: "1Th",
        external_id: 52,
        abbreviations: &["1 thessalonians", "1thessalonians", "1 thess", "1thess", "1 thes", "1thes", "1 th", "1th", "i thessalonians", "i thess", "first thessalonians"],
        verses_per_chapter: &[10, 20, 13, 18, 28],
    },
    BookDescriptor {
        name: "2 Thessalonians",
        short_code: "2Th",
        external_id: 53,
        abbreviations: &["2 thessalonians", "2thessalonians", "2 thess", "2thess", "2 thes", "2thes", "2 th", "2th", "ii thessalonians", "ii thess", "second thessalonians"],
        verses_per_chapter: &[12, 17, 18],
    },
    BookDescriptor {
        name: "1 Timothy",
        short_code: "1Ti",
        external_id: 54,
        abbreviations: &["1 timothy", "1timothy", "1 tim", "1tim", "1 ti", "1ti", "i timothy", "i tim", "first timothy"],
        verses_per_chapter: &[20, 15, 16, 16, 25, 21],
    },
    BookDescriptor {
        name: "2 Timothy",
        short_code: "2Ti",
        external_id: 55,
        abbreviations: &["2 timothy", "2timothy", "2 tim", "2tim", "2 ti", "2ti", "ii timothy", "ii tim", "second timothy"],
        verses_per_chapter: &[18, 26, 17, 22],
    },
    BookDescriptor {
        name: "Titus",
        short_code: "Tt",
        external_id: 56,
        abbreviations: &["titus", "tit", "ti"],
        verses_per_chapter: &[16, 15, 15],
    },
    BookDescriptor {
        name: "Philemon",
        short_code: "Phm",
        external_id: 57,
        abbreviations: &["philemon", "philem", "phlm", "phm", "pm"],
        verses_per_chapter: &[25],
    },
    BookDescriptor {
        name: "Hebrews",
        short_code: "Heb",
        external_id: 58,
        abbreviations: &["hebrews", "heb", "he"],
        verses_per_chapter: &[14, 18, 19, 16, 14, 20, 28, 13, 28, 39, 40, 29, 25],
    },
    BookDescriptor {
        name: "James",
        short_code: "Jas",
        external_id: 59,
        abbreviations: &["james", "jas", "jm"],
        verses_per_chapter: &[27, 26, 18, 17, 20],
    },
    BookDescriptor {
        name: "1 Peter",
        short_code: "1Pe",
        external_id: 60,
        abbreviations: &["1 peter", "1peter", "1 pet", "1pet", "1 pe", "1pe", "1 pt", "1pt", "i peter", "i pet", "first peter"],
        verses_per_chapter: &[25, 25, 22, 19, 14],
    },
    BookDescriptor {
        name: "2 Peter",
        short_code: "2Pe",
        external_id: 61,
        abbreviations: &["2 peter", "2peter", "2 pet", "2pet", "2 pe", "2pe", "2 pt", "2pt", "ii peter", "ii pet", "second peter"],
        verses_per_chapter: &[21, 22, 18],
    },
    BookDescriptor {
        name: "1 John",
        short_code: "1Jn",
        external_id: 62,
        abbreviations: &["1 john", "1john", "1 jn", "1jn", "1 jhn", "1jhn", "1 jo", "1jo", "i john", "i jn", "first john"],
        verses_per_chapter: &[10, 29, 24, 21, 21],
    },
    BookDescriptor {
        name: "2 John",
        short_code: "2Jn",
        external_id: 63,
        abbreviations: &["2 john", "2john", "2 jn", "2jn", "2 jhn", "2jhn", "2 jo", "2jo", "ii john", "ii jn", "second john"],
        verses_per_chapter: &[13],
    },
    BookDescriptor {
        name: "3 John",
        short_code: "3Jn",
        external_id: 64,
        abbreviations: &["3 john", "3john", "3 jn", "3jn", "3 jhn", "3jhn", "3 jo", "3jo", "iii john", "iii jn", "third john"],
        verses_per_chapter: &[15],
    },
    BookDescriptor {
        name: "Jude",
        short_code: "Jud",
        external_id: 65,
        abbreviations: &["jude", "jud", "jd"],
        verses_per_chapter: &[25],
    },
    BookDescriptor {
        name: "Revelation",
        short_code: "Re",
        external_id: 66,
        abbreviations: &["revelation", "revelations", "rev", "re", "rv", "apocalypse"],
        verses_per_chapter: &[
            20, 29, 22, 11, 14, 17, 17, 13, 21, 11, 19, 18, 18, 20, 8, 21, 18, 24, 21, 15, 27,
            21,
        ],
    },
];
