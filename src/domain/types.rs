//! Shared domain types.
//!
//! Everything here is a plain value: produced once by the parser, the scrape
//! layer or the selector, then only read. Types derive `Serialize` so a row can
//! be dumped as JSON by the CLI.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How much of a `CalendarPoint` was actually present in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// `"2015"`; stored as Jan 1 of that year.
    Year,
    /// `"Jun 2015"` (or a defaulted month in degree mode).
    Month,
}

/// A normalized date with year or month precision.
///
/// Points compare by the day they denote, so `2015` (year precision) and
/// `Jan 2015` are equal and ordered identically. `precision` only affects
/// display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalendarPoint {
    pub date: NaiveDate,
    pub precision: Precision,
}

impl CalendarPoint {
    /// Jan 1 of `year`, year precision.
    pub fn year(year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, 1, 1).map(|date| Self {
            date,
            precision: Precision::Year,
        })
    }

    /// `day` of `month`/`year`, month precision.
    pub fn month_day(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|date| Self {
            date,
            precision: Precision::Month,
        })
    }

    /// 1st of `month`/`year`, month precision.
    pub fn month(year: i32, month: u32) -> Option<Self> {
        Self::month_day(year, month, 1)
    }

    pub fn year_value(&self) -> i32 {
        self.date.year()
    }
}

impl PartialEq for CalendarPoint {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date
    }
}

impl Eq for CalendarPoint {}

impl PartialOrd for CalendarPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }
}

impl fmt::Display for CalendarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Precision::Year => write!(f, "{}", self.date.year()),
            Precision::Month => write!(f, "{}", self.date.format("%Y-%m-%d")),
        }
    }
}

/// End of a range: a calendar point, or the "present" sentinel for ongoing
/// positions and enrolments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeEnd {
    Date(CalendarPoint),
    Present,
}

impl RangeEnd {
    pub fn as_point(&self) -> Option<CalendarPoint> {
        match self {
            RangeEnd::Date(point) => Some(*point),
            RangeEnd::Present => None,
        }
    }
}

impl From<CalendarPoint> for RangeEnd {
    fn from(point: CalendarPoint) -> Self {
        RangeEnd::Date(point)
    }
}

impl fmt::Display for RangeEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeEnd::Date(point) => write!(f, "{point}"),
            RangeEnd::Present => f.write_str("present"),
        }
    }
}

/// Normalized `(start, end)` pair. Unparseable sides are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<CalendarPoint>,
    pub end: Option<RangeEnd>,
}

impl DateRange {
    pub const EMPTY: DateRange = DateRange {
        start: None,
        end: None,
    };

    pub fn new(start: Option<CalendarPoint>, end: Option<RangeEnd>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

/// Which default-month policy applies to single-year tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateMode {
    /// Education dates: a bare start year means August, a bare end year June.
    Degree,
    /// Job dates: bare years stay year precision.
    Career,
}

impl DateMode {
    pub fn from_degree_flag(is_degree: bool) -> Self {
        if is_degree { DateMode::Degree } else { DateMode::Career }
    }
}

/// Whether an education entry was completed as of a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraduationStatus {
    Unknown,
    Graduated,
    Enrolled,
}

impl GraduationStatus {
    pub fn as_option(self) -> Option<bool> {
        match self {
            GraduationStatus::Unknown => None,
            GraduationStatus::Graduated => Some(true),
            GraduationStatus::Enrolled => Some(false),
        }
    }
}

/// Anything with a start and end that the selector can order.
pub trait TimeBounded {
    fn start(&self) -> Option<CalendarPoint>;
    fn end(&self) -> Option<RangeEnd>;
}

impl TimeBounded for DateRange {
    fn start(&self) -> Option<CalendarPoint> {
        self.start
    }

    fn end(&self) -> Option<RangeEnd> {
        self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub dates: DateRange,
    /// `None` when the end date is unknown.
    pub graduated: Option<bool>,
    pub activities: Option<String>,
    pub description: Option<String>,
}

impl TimeBounded for EducationEntry {
    fn start(&self) -> Option<CalendarPoint> {
        self.dates.start
    }

    fn end(&self) -> Option<RangeEnd> {
        self.dates.end
    }
}

/// One position. Several positions held at the same company become separate
/// entries sharing `company` and `company_url`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub company_url: Option<String>,
    pub industry: Option<String>,
    pub position: Option<String>,
    pub dates: DateRange,
    pub description: Option<String>,
}

impl TimeBounded for ExperienceEntry {
    fn start(&self) -> Option<CalendarPoint> {
        self.dates.start
    }

    fn end(&self) -> Option<RangeEnd> {
        self.dates.end
    }
}

/// Everything read from a single profile page.
///
/// `experience` keeps page order, which the site renders newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub url: String,
    pub name: Option<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

/// The analytical subset kept per profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    pub url: String,
    pub name: Option<String>,
    pub degree: Option<EducationEntry>,
    pub first_job: Option<ExperienceEntry>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_compare_by_day_regardless_of_precision() {
        let year = CalendarPoint::year(2015).unwrap();
        let january = CalendarPoint::month(2015, 1).unwrap();
        assert_eq!(year, january);
        assert!(CalendarPoint::month(2015, 2).unwrap() > year);
    }

    #[test]
    fn display_depends_on_precision() {
        assert_eq!(CalendarPoint::year(2016).unwrap().to_string(), "2016");
        assert_eq!(CalendarPoint::month(2016, 8).unwrap().to_string(), "2016-08-01");
        assert_eq!(RangeEnd::Present.to_string(), "present");
    }

    #[test]
    fn invalid_calendar_values_are_rejected() {
        assert!(CalendarPoint::month(2015, 13).is_none());
        assert!(CalendarPoint::month_day(2015, 2, 30).is_none());
    }
}
