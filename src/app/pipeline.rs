//! Shared per-profile workflow used by the `profile` and `profiles` commands.
//!
//! scrape profile -> pick qualifying degree -> pick first job after it ->
//! optionally look up that job's industry -> `ProfileRow`

use chrono::NaiveDate;
use log::{debug, info, warn};

use crate::domain::{Profile, ProfileRow, RangeEnd, ScoutConfig};
use crate::error::AppError;
use crate::page::PageReader;
use crate::scrape::{industry_for, scrape_profile};
use crate::select::{find_qualifying_degree, select_first_after};

/// Rows of a batch run plus the profiles that could not be read.
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    pub rows: Vec<ProfileRow>,
    pub skipped: Vec<SkippedProfile>,
}

#[derive(Debug, Clone)]
pub struct SkippedProfile {
    pub url: String,
    pub error: AppError,
}

/// Reduce a scraped profile to its analytical row.
///
/// The first job is only looked for when the qualifying degree has a dated
/// end; an ongoing or undated degree gives no threshold.
pub fn build_row(profile: &Profile, config: &ScoutConfig) -> ProfileRow {
    let degree = find_qualifying_degree(&profile.education, &config.criteria);
    if degree.is_none() {
        debug!("{} has no qualifying degree", profile.url);
    }

    let first_job = degree.and_then(|degree| match degree.dates.end {
        Some(RangeEnd::Date(threshold)) => select_first_after(&profile.experience, threshold),
        _ => {
            debug!("{}: qualifying degree has no end date", profile.url);
            None
        }
    });

    ProfileRow {
        url: profile.url.clone(),
        name: profile.name.clone(),
        degree: degree.cloned(),
        first_job: first_job.cloned(),
        skills: profile.skills.clone(),
        interests: profile.interests.clone(),
    }
}

/// Scrape one profile and build its row.
pub fn scrape_row(
    reader: &mut dyn PageReader,
    url: &str,
    config: &ScoutConfig,
    today: NaiveDate,
) -> Result<ProfileRow, AppError> {
    let profile = scrape_profile(reader, url, config, today)?;
    let mut row = build_row(&profile, config);

    if config.industries {
        if let Some(job) = row.first_job.as_mut() {
            job.industry = industry_for(reader, job.company_url.as_deref());
        }
    }

    Ok(row)
}

/// Scrape every url in order. A failing profile is logged and skipped.
pub fn scrape_all(reader: &mut dyn PageReader, urls: &[String], config: &ScoutConfig, today: NaiveDate) -> BatchOutput {
    let mut out = BatchOutput::default();
    for (i, url) in urls.iter().enumerate() {
        info!("Scraping profile #{}/{}: {url}", i + 1, urls.len());
        match scrape_row(reader, url, config, today) {
            Ok(row) => out.rows.push(row),
            Err(error) => {
                warn!("Skipping {url}: {error}");
                out.skipped.push(SkippedProfile {
                    url: url.clone(),
                    error,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalendarPoint, DateRange, EducationEntry, ExperienceEntry};

    fn job(company: &str, start: i32, end: i32) -> ExperienceEntry {
        ExperienceEntry {
            company: Some(company.to_string()),
            dates: DateRange::new(CalendarPoint::year(start), CalendarPoint::year(end).map(RangeEnd::Date)),
            ..ExperienceEntry::default()
        }
    }

    fn nus(end: Option<RangeEnd>) -> EducationEntry {
        EducationEntry {
            school: Some("National University of Singapore".to_string()),
            degree: Some("Bachelor of Science".to_string()),
            dates: DateRange::new(CalendarPoint::month(2012, 8), end),
            ..EducationEntry::default()
        }
    }

    fn profile(education: Vec<EducationEntry>) -> Profile {
        Profile {
            url: "https://www.linkedin.com/in/x/".to_string(),
            name: Some("X".to_string()),
            education,
            experience: vec![job("C", 2019, 2020), job("B", 2017, 2018), job("A", 2014, 2016)],
            skills: vec!["Rust".to_string()],
            interests: Vec::new(),
        }
    }

    #[test]
    fn first_job_after_degree_end() {
        let end = CalendarPoint::month(2016, 6).map(RangeEnd::Date);
        let row = build_row(&profile(vec![nus(end)]), &ScoutConfig::default());
        assert!(row.degree.is_some());
        assert_eq!(row.first_job.unwrap().company.as_deref(), Some("B"));
        assert_eq!(row.skills, vec!["Rust"]);
    }

    #[test]
    fn ongoing_degree_has_no_first_job() {
        let row = build_row(&profile(vec![nus(Some(RangeEnd::Present))]), &ScoutConfig::default());
        assert!(row.degree.is_some());
        assert!(row.first_job.is_none());
    }

    #[test]
    fn no_qualifying_degree_has_no_first_job() {
        let row = build_row(&profile(Vec::new()), &ScoutConfig::default());
        assert!(row.degree.is_none());
        assert!(row.first_job.is_none());
        assert_eq!(row.name.as_deref(), Some("X"));
    }
}
