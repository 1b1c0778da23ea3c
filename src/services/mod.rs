//! Link rendering services.
//!
//! This module turns scanned references into Markdown links and rewrites
//! whole blocks of text with them.

pub mod linker;
pub mod links;

pub use linker::{link_references, LinkReport};
pub use links::{Bolls, LinkProvider, Logos};
