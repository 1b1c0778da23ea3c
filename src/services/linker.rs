//! Rewrites a block of text so every reference becomes a link.

use serde::Serialize;

use super::links;
use crate::config::Settings;
use crate::reference::{scan, ScriptureRef};

/// Result of linking one block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// The rewritten text.
    pub text: String,
    /// References the scanner found.
    pub found: usize,
    /// References whose text was actually replaced.
    pub linked: usize,
}

impl LinkReport {
    /// Whether linking changed anything.
    pub const fn changed(&self) -> bool {
        self.linked > 0
    }
}

/// Replacement text for one reference under `settings`.
pub fn render(reference: &ScriptureRef, settings: Settings) -> String {
    links::render(reference, settings.translation, settings.link_service)
}

/// Scan `text` and replace every reference with its link markup.
///
/// Edits are applied back to front so earlier offsets stay valid. Running this
/// on its own output with the same settings changes nothing; running it with a
/// different service swaps the old links for new ones.
pub fn link_references(text: &str, settings: &Settings) -> LinkReport {
    let refs = scan(text);
    let found = refs.len();
    let mut out = text.to_string();
    let mut linked = 0;

    for reference in refs.iter().rev() {
        let replacement = render(reference, *settings);
        if replacement == reference.raw_text {
            continue;
        }
        if out[reference.start..reference.end] == replacement {
            continue;
        }
        out.replace_range(reference.start..reference.end, &replacement);
        linked += 1;
    }

    if linked > 0 {
        tracing::debug!("Linked {linked} of {found} references");
    }

    LinkReport { text: out, found, linked }
}
