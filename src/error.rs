//! Application error types.
//!
//! Scanning itself never fails; these errors cover settings, note files and
//! the compiled reference matcher.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from loading settings, reading notes and building the matcher
#[derive(Debug, Error)]
pub enum Error {
    /// A settings file or note could not be read or written
    #[error("Cannot access {}: {source}", .path.display())]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File or directory the operation was on.
        path: PathBuf,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Settings file parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// The combined reference matcher could not be compiled
    #[error("Reference pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    /// Create a config error with actionable hint
    #[must_use]
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    #[must_use]
    pub fn parse(message: impl Into<String>, file: impl Into<Option<PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Adapter for `map_err` that attaches `path` to an IO error
    #[must_use]
    pub fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| Self::Io { source, path: path.to_path_buf() }
    }
}
