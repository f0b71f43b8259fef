//! Run configuration.
//!
//! The date heuristics are historical defaults tied to when the first
//! dataset was collected; the CLI can override each of them.

pub const DEFAULT_DEGREE_START_MONTH: u32 = 8;
pub const DEFAULT_DEGREE_END_MONTH: u32 = 6;
/// An ongoing ("present") enrolment counts as graduated once today is past
/// Jan 1 of this year. The year dates from the first collection run.
pub const DEFAULT_PRESENT_CUTOFF_YEAR: i32 = 2020;

pub const DEFAULT_SCHOOL: &str = "national university of singapore";
pub const DEFAULT_DEGREE_KEYWORDS: [&str; 2] = ["bachelor", "hon"];

/// Default-month and cutoff constants used by `dates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristics {
    /// Month assumed for a bare start year in degree mode.
    pub degree_start_month: u32,
    /// Month assumed for a bare end year in degree mode.
    pub degree_end_month: u32,
    pub present_cutoff_year: i32,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            degree_start_month: DEFAULT_DEGREE_START_MONTH,
            degree_end_month: DEFAULT_DEGREE_END_MONTH,
            present_cutoff_year: DEFAULT_PRESENT_CUTOFF_YEAR,
        }
    }
}

/// Which education entry counts as "the" degree of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeCriteria {
    /// Case-insensitive substring of the school name.
    pub school: String,
    /// Case-insensitive substrings; any one matching the degree name is enough.
    pub degree_keywords: Vec<String>,
}

impl Default for DegreeCriteria {
    fn default() -> Self {
        Self {
            school: DEFAULT_SCHOOL.to_string(),
            degree_keywords: DEFAULT_DEGREE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Everything a scrape run needs besides the page reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoutConfig {
    pub heuristics: Heuristics,
    pub criteria: DegreeCriteria,
    /// Resolve the first job's industry through the company page.
    pub industries: bool,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            heuristics: Heuristics::default(),
            criteria: DegreeCriteria::default(),
            industries: true,
        }
    }
}
