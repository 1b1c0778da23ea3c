//! Application constants.
//!
//! Centralizes service hosts, grammar limits and file locations.

/// Link service constants.
pub mod links {
    /// Every Logos link the tool writes starts with this prefix.
    pub const LOGOS_BASE: &str = "https://ref.ly/";

    /// Every Bolls Bible link the tool writes starts with this prefix.
    pub const BOLLS_BASE: &str = "https://bolls.life/";

    /// Label of the Logos link in dual-link output.
    pub const LOGOS_LABEL: &str = "Logos";

    /// Label of the Bolls link in dual-link output.
    pub const BOLLS_LABEL: &str = "Bolls";
}

/// Reference grammar constants.
pub mod scan {
    /// Maximum digits in a chapter or verse number.
    pub const MAX_NUMBER_DIGITS: usize = 3;

    /// Characters accepted as range separators (hyphen, en dash, em dash).
    pub const RANGE_DASHES: &str = "-–—";

    /// A whitespace-delimited token containing this is a URL; references
    /// inside it are not matched.
    pub const URL_SCHEME_SEPARATOR: &str = "://";

    /// Characters that end a URL token besides whitespace (Markdown link and
    /// autolink punctuation).
    pub const URL_DELIMITERS: &[char] = &['(', ')', '[', ']', '<', '>'];
}

/// File and settings location constants.
pub mod files {
    /// Directory name under the platform config dir.
    pub const APP_DIR: &str = "scripture-linker";

    /// Settings file name inside [`APP_DIR`].
    pub const SETTINGS_FILE: &str = "settings.json";

    /// Extensions treated as Markdown notes.
    pub const NOTE_EXTENSIONS: &[&str] = &["md", "markdown"];
}
