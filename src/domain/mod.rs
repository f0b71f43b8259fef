//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - normalized dates (`CalendarPoint`, `RangeEnd`, `DateRange`)
//! - scraped profile records (`EducationEntry`, `ExperienceEntry`, `Profile`)
//! - the per-profile analytical row (`ProfileRow`)
//! - run configuration (`Heuristics`, `DegreeCriteria`, `ScoutConfig`)

pub mod config;
pub mod types;

pub use config::*;
pub use types::*;
