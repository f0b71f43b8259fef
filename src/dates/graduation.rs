//! Graduation status derived from a parsed end date.

use chrono::{Local, NaiveDate};

use crate::domain::{GraduationStatus, Heuristics, RangeEnd};

/// Today in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Whether an education entry ending at `end` is complete on `today`.
///
/// An ongoing ("present") entry counts as graduated once `today` is past
/// Jan 1 of `heuristics.present_cutoff_year`.
pub fn graduation_status(end: Option<RangeEnd>, today: NaiveDate, heuristics: &Heuristics) -> GraduationStatus {
    let reference = match end {
        None => return GraduationStatus::Unknown,
        Some(RangeEnd::Present) => match NaiveDate::from_ymd_opt(heuristics.present_cutoff_year, 1, 1) {
            Some(cutoff) => cutoff,
            None => return GraduationStatus::Unknown,
        },
        Some(RangeEnd::Date(point)) => point.date,
    };

    if today > reference {
        GraduationStatus::Graduated
    } else {
        GraduationStatus::Enrolled
    }
}
