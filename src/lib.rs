//! `Scripture Linker` - finds Bible references in Markdown notes and links them.
//!
//! The core is [`reference::scan`], which returns every validated reference
//! in a text with exact byte offsets. [`services::link_references`] turns
//! those into Logos or Bolls Bible links.

pub mod bible;
pub mod config;
pub mod constants;
pub mod error;
pub mod reference;
pub mod services;
pub mod types;
pub mod utils;

pub use config::{Config, Settings};
pub use error::{Error, Result};
pub use reference::{format_display, parse_reference, scan, ScriptureRef};
pub use services::{link_references, LinkReport};
pub use types::{LinkService, Translation};
