//! Terminal output for parse results, crawls and profile rows.
//!
//! Formatting lives here so the selection code stays free of presentation
//! and output changes stay in one place.

pub mod format;

pub use format::*;
