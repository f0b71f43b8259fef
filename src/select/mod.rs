//! Selection rules over scraped records.
//!
//! - `find_qualifying_degree`: which education entry is "the" degree
//! - `select_first_after`: first job taken after that degree ended

pub mod degree;
pub mod first_after;

pub use degree::find_qualifying_degree;
pub use first_after::select_first_after;
