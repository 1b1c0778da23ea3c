//! Utility modules.

pub mod notes;
