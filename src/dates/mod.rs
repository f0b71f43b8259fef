//! Date-range parsing and the graduation flag derived from it.

pub mod graduation;
pub mod parser;

pub use graduation::{graduation_status, today};
pub use parser::{parse_date_range, parse_date_range_with};
