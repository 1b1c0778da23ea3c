//! Core type definitions for link rendering.
//!
//! Translations and link services are closed sets, so they are modelled as
//! enums rather than free-form strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A Bible translation that links can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Translation {
    /// English Standard Version.
    #[default]
    Esv,
    /// New American Standard Bible (1995).
    #[serde(rename = "NASB95")]
    Nasb95,
    /// New International Version (2011).
    Niv,
    /// The Message.
    Msg,
    /// Legacy Standard Bible.
    Lsb,
    /// Lexham English Bible.
    Leb,
    /// King James Version (1900 edition).
    Kjv,
    /// New King James Version.
    Nkjv,
}

/// Per-translation identifiers used by the two link services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationConfig {
    /// Logos resource id (lowercase), e.g. `esv` or `niv2011`.
    pub logos_resource: &'static str,
    /// Logos Bible reference prefix, e.g. `BibleESV`.
    pub logos_bible_ref: &'static str,
    /// Bolls Bible translation code.
    pub bolls_code: &'static str,
    /// Whether Bolls Bible carries this translation.
    pub supports_bolls: bool,
}

impl Translation {
    /// Returns all translations in settings display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Esv,
            Self::Nasb95,
            Self::Niv,
            Self::Kjv,
            Self::Nkjv,
            Self::Msg,
            Self::Lsb,
            Self::Leb,
        ]
    }

    /// Short code as users write it (`ESV`, `NASB95`, ...).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Esv => "ESV",
            Self::Nasb95 => "NASB95",
            Self::Niv => "NIV",
            Self::Msg => "MSG",
            Self::Lsb => "LSB",
            Self::Leb => "LEB",
            Self::Kjv => "KJV",
            Self::Nkjv => "NKJV",
        }
    }

    /// Human-readable name for listings.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Esv => "English Standard Version",
            Self::Nasb95 => "New American Standard 1995",
            Self::Niv => "New International Version 2011",
            Self::Msg => "The Message",
            Self::Lsb => "Legacy Standard Bible",
            Self::Leb => "Lexham English Bible",
            Self::Kjv => "King James Version",
            Self::Nkjv => "New King James Version",
        }
    }

    /// Service identifiers for this translation.
    #[must_use]
    pub const fn config(self) -> TranslationConfig {
        match self {
            Self::Esv => TranslationConfig {
                logos_resource: "esv",
                logos_bible_ref: "BibleESV",
                bolls_code: "ESV",
                supports_bolls: true,
            },
            Self::Nasb95 => TranslationConfig {
                logos_resource: "nasb95",
                logos_bible_ref: "BibleNASB95",
                bolls_code: "NASB",
                supports_bolls: true,
            },
            Self::Niv => TranslationConfig {
                logos_resource: "niv2011",
                logos_bible_ref: "BibleNIV",
                bolls_code: "NIV",
                supports_bolls: true,
            },
            // MSG uses the bare `Bible.1Sa10.7` form
            Self::Msg => TranslationConfig {
                logos_resource: "message",
                logos_bible_ref: "Bible",
                bolls_code: "MSG",
                supports_bolls: true,
            },
            Self::Lsb => TranslationConfig {
                logos_resource: "lgcystndrdbblsb",
                logos_bible_ref: "BibleLSB",
                bolls_code: "LSB",
                supports_bolls: true,
            },
            Self::Leb => TranslationConfig {
                logos_resource: "leb",
                logos_bible_ref: "BibleLEB",
                bolls_code: "LEB",
                supports_bolls: false,
            },
            Self::Kjv => TranslationConfig {
                logos_resource: "kjv1900",
                logos_bible_ref: "BibleKJV",
                bolls_code: "KJV",
                supports_bolls: true,
            },
            Self::Nkjv => TranslationConfig {
                logos_resource: "nkjv",
                logos_bible_ref: "BibleNKJV",
                bolls_code: "NKJV",
                supports_bolls: true,
            },
        }
    }

    /// Logos only resolves these resources through the `<ref>;<resource>` form.
    #[must_use]
    pub const fn uses_semicolon_url(self) -> bool {
        matches!(self, Self::Lsb | Self::Kjv)
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Translation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::config(
                    format!("unknown translation '{wanted}'"),
                    "Use one of ESV, NASB95, NIV, KJV, NKJV, MSG, LSB, LEB",
                )
            })
    }
}

/// Which service generated links point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkService {
    /// Logos Bible Software via `ref.ly`.
    #[default]
    Logos,
    /// Bolls Bible.
    Bolls,
    /// Both services, rendered after the reference text.
    Both,
}

impl LinkService {
    /// Returns all link services.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Logos, Self::Bolls, Self::Both]
    }

    /// Lowercase identifier used in settings files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Logos => "logos",
            Self::Bolls => "bolls",
            Self::Both => "both",
        }
    }

    /// Whether links from this service include a Bolls URL.
    #[must_use]
    pub const fn uses_bolls(self) -> bool {
        matches!(self, Self::Bolls | Self::Both)
    }
}

impl fmt::Display for LinkService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LinkService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|svc| svc.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::config(
                    format!("unknown link service '{wanted}'"),
                    "Use one of logos, bolls, both",
                )
            })
    }
}
