//! `career-scout` library crate.
//!
//! The binary (`scout`) is a thin wrapper around this library so that the
//! date parser and the selection rules can be tested without a browser, a
//! network, or a process.

pub mod app;
pub mod cli;
pub mod crawl;
pub mod dates;
pub mod domain;
pub mod error;
pub mod logger;
pub mod page;
pub mod report;
pub mod scrape;
pub mod select;
