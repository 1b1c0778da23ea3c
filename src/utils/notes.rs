//! Markdown note discovery and batch linking.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use walkdir::{DirEntry, WalkDir};

use crate::config::Settings;
use crate::constants::files::NOTE_EXTENSIONS;
use crate::error::{Error, Result};
use crate::services::linker::link_references;

/// Outcome of linking one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteOutcome {
    /// Note that was processed.
    pub path: PathBuf,
    /// References found in the note.
    pub found: usize,
    /// References that were (or would be) rewritten.
    pub linked: usize,
    /// Whether the note's content changed.
    pub changed: bool,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Whether `path` has a Markdown note extension.
pub fn is_note(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| NOTE_EXTENSIONS.iter().any(|n| n.eq_ignore_ascii_case(ext)))
}

/// All Markdown notes under `root`, sorted by path. Hidden directories such
/// as `.obsidian` or `.git` are skipped.
pub fn collect_notes(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::config(
            format!("notes path is not a directory: {}", root.display()),
            "Pass a notes directory or set SCRIPTURE_NOTES_PATH",
        ));
    }

    let start = Instant::now();
    let mut notes: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file() && is_note(e.path()))
        .map(DirEntry::into_path)
        .collect();
    notes.sort();

    let count = notes.len();
    let elapsed = start.elapsed();
    tracing::info!("Found {count} notes in {elapsed:?}");
    Ok(notes)
}

/// Link one note, rewriting it in place when `write` is set.
pub fn link_note(path: &Path, settings: &Settings, write: bool) -> Result<NoteOutcome> {
    let content = fs_err::read_to_string(path).map_err(Error::at(path))?;
    let report = link_references(&content, settings);
    let changed = report.text != content;

    if changed && write {
        fs_err::write(path, &report.text).map_err(Error::at(path))?;
        tracing::debug!("Rewrote {} ({} links)", path.display(), report.linked);
    }

    Ok(NoteOutcome {
        path: path.to_path_buf(),
        found: report.found,
        linked: report.linked,
        changed,
    })
}

/// Link many notes in parallel. Results keep the order of `paths`; a note that
/// cannot be read or written yields its own error without stopping the rest.
pub fn link_notes(paths: &[PathBuf], settings: &Settings, write: bool) -> Vec<Result<NoteOutcome>> {
    let start = Instant::now();
    let outcomes: Vec<Result<NoteOutcome>> =
        paths.par_iter().map(|path| link_note(path, settings, write)).collect();

    let linked: usize = outcomes.iter().flatten().map(|o| o.linked).sum();
    let elapsed = start.elapsed();
    tracing::info!("Linked {linked} references across {} notes in {elapsed:?}", paths.len());
    outcomes
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn write(dir: &Path, rel: &str, content: &str) -> PathBuf {
        let path = dir.join(rel);
        fs_err::create_dir_all(path.parent().unwrap()).unwrap();
        fs_err::write(&path, content).unwrap();
        path
    }

    #[test]
    fn note_extensions() {
        assert!(is_note(Path::new("sermon.md")));
        assert!(is_note(Path::new("sermon.MD")));
        assert!(is_note(Path::new("a/b/c.markdown")));
        assert!(!is_note(Path::new("notes.txt")));
        assert!(!is_note(Path::new("README")));
    }

    #[test]
    fn collects_notes_and_skips_hidden_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.md", "");
        let b = write(dir.path(), "sub/b.markdown", "");
        write(dir.path(), "sub/c.txt", "");
        write(dir.path(), ".obsidian/workspace.md", "");

        let notes = collect_notes(dir.path()).unwrap();
        assert_eq!(notes, vec![a, b]);
    }

    #[test]
    fn collect_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = collect_notes(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn dry_run_leaves_files_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "note.md", "Read John 3:16\n");

        let outcome = link_note(&path, &Settings::default(), false).unwrap();
        assert!(outcome.changed);
        assert_eq!((outcome.found, outcome.linked), (1, 1));
        assert_eq!(fs_err::read_to_string(&path).unwrap(), "Read John 3:16\n");
    }

    #[test]
    fn write_rewrites_changed_notes() {
        let dir = tempfile::tempdir().unwrap();
        let linked = write(dir.path(), "linked.md", "Read John 3:16\n");
        let plain = write(dir.path(), "plain.md", "No references\n");

        let outcomes = link_notes(&[linked.clone(), plain.clone()], &Settings::default(), true);
        let outcomes: Vec<NoteOutcome> = outcomes.into_iter().map(Result::unwrap).collect();

        assert!(outcomes[0].changed);
        assert!(!outcomes[1].changed);
        assert_eq!(
            fs_err::read_to_string(&linked).unwrap(),
            "Read [John 3:16](https://ref.ly/logosres/esv?ref=BibleESV.Jn3.16)\n"
        );
        assert_eq!(fs_err::read_to_string(&plain).unwrap(), "No references\n");

        // Second pass finds the links but has nothing to do
        let again = link_note(&linked, &Settings::default(), true).unwrap();
        assert_eq!((again.found, again.linked, again.changed), (1, 0, false));
    }

    #[test]
    fn unreadable_note_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.md");
        let outcomes = link_notes(&[missing.clone()], &Settings::default(), false);
        match &outcomes[0] {
            Err(Error::Io { path, .. }) => assert_eq!(path, &missing),
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
