//! Extraction of profile data through a `PageReader`.

pub mod industry;
pub mod profile;
pub mod selectors;

pub use industry::{ACADEMIA, industry_for};
pub use profile::{ensure_profile_url, is_profile_url, read_profile, scrape_profile};
