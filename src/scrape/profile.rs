//! Reading one profile page into a `Profile`.
//!
//! Every field is optional: a missing element leaves the field `None` and is
//! logged at debug level, never aborting the profile.

use chrono::NaiveDate;
use log::debug;

use crate::dates::{graduation_status, parse_date_range_with};
use crate::domain::{DateMode, DateRange, EducationEntry, ExperienceEntry, Heuristics, Profile, ScoutConfig};
use crate::error::AppError;
use crate::page::{PageReader, Step};
use crate::scrape::selectors::*;

/// Navigate to `url` and read the whole profile.
pub fn scrape_profile(
    reader: &mut dyn PageReader,
    url: &str,
    config: &ScoutConfig,
    today: NaiveDate,
) -> Result<Profile, AppError> {
    ensure_profile_url(url)?;
    reader.navigate(url)?;
    Ok(read_profile(reader, url, &config.heuristics, today))
}

pub fn is_profile_url(url: &str) -> bool {
    url.starts_with(PROFILE_PREFIX)
}

pub fn ensure_profile_url(url: &str) -> Result<(), AppError> {
    if is_profile_url(url) {
        Ok(())
    } else {
        Err(AppError::usage(format!("Not a profile url: {url}")))
    }
}

/// Read the profile on the page the reader is currently showing.
pub fn read_profile(reader: &dyn PageReader, url: &str, heuristics: &Heuristics, today: NaiveDate) -> Profile {
    let name = reader.find_text(NAME);
    if name.is_none() {
        debug!("No name found on {url}");
    }

    Profile {
        url: url.to_string(),
        name,
        education: read_education(reader, heuristics, today),
        experience: read_experience(reader, heuristics),
        skills: read_list(reader, SKILLS),
        interests: read_list(reader, INTERESTS),
    }
}

pub fn read_education(reader: &dyn PageReader, heuristics: &Heuristics, today: NaiveDate) -> Vec<EducationEntry> {
    let count = reader.find_all(EDUCATION_ENTRIES).len();
    (0..count)
        .map(|i| {
            let scope = [Step::new(EDUCATION_ENTRIES, i)];
            let dates = read_dates(reader, &scope, EDU_DATES, DateMode::Degree, heuristics);
            EducationEntry {
                school: reader.find_text_in(&scope, EDU_SCHOOL),
                degree: reader.find_text_in(&scope, EDU_DEGREE),
                major: reader.find_text_in(&scope, EDU_MAJOR),
                dates,
                graduated: graduation_status(dates.end, today, heuristics).as_option(),
                activities: reader.find_text_in(&scope, EDU_ACTIVITIES),
                description: reader.find_text_in(&scope, EDU_DESCRIPTION),
            }
        })
        .collect()
}

/// Experience entries in page order (newest first). A company block listing
/// several roles yields one entry per role, all sharing the company fields.
pub fn read_experience(reader: &dyn PageReader, heuristics: &Heuristics) -> Vec<ExperienceEntry> {
    let count = reader.find_all(EXPERIENCE_ENTRIES).len();
    let mut out = Vec::with_capacity(count);

    for i in 0..count {
        let entry = Step::new(EXPERIENCE_ENTRIES, i);
        let scope = [entry];
        let company_url = reader.find_attr_in(&scope, EXP_COMPANY_LINK, "href");
        let date_text = reader.find_text_in(&scope, EXP_DATES);
        let entry_text = date_text.as_deref().unwrap_or_default();
        let entry_dates = parse_date_range_with(entry_text, DateMode::Career, heuristics);
        let roles = reader.query(&scope, EXP_ROLES).len();

        if roles == 0 {
            // A single position without a date line is not a dated job.
            if date_text.is_none() {
                debug!("Skipping undated experience entry {i}");
                continue;
            }
            out.push(ExperienceEntry {
                company: reader.find_text_in(&scope, EXP_COMPANY),
                company_url,
                industry: None,
                position: reader.find_text_in(&scope, EXP_POSITION),
                dates: entry_dates,
                description: reader.find_text_in(&scope, EXP_DESCRIPTION),
            });
            continue;
        }

        let company = reader.find_text_in(&scope, EXP_GROUP_COMPANY);
        for j in 0..roles {
            let role_scope = [entry, Step::new(EXP_ROLES, j)];
            let mut dates = read_dates(reader, &role_scope, ROLE_DATES, DateMode::Career, heuristics);
            // The block-level date range is the first role's when the role
            // itself carries none.
            if j == 0 && dates.is_empty() {
                dates = entry_dates;
            }
            out.push(ExperienceEntry {
                company: company.clone(),
                company_url: company_url.clone(),
                industry: None,
                position: reader.find_text_in(&role_scope, ROLE_POSITION),
                dates,
                description: reader.find_text_in(&role_scope, ROLE_DESCRIPTION),
            });
        }
    }

    out
}

fn read_dates(
    reader: &dyn PageReader,
    scope: &[Step<'_>],
    selector: &str,
    mode: DateMode,
    heuristics: &Heuristics,
) -> DateRange {
    let text = reader.find_text_in(scope, selector).unwrap_or_default();
    parse_date_range_with(&text, mode, heuristics)
}

/// Trimmed, non-empty texts of every match.
pub fn read_list(reader: &dyn PageReader, selector: &str) -> Vec<String> {
    reader
        .find_all(selector)
        .iter()
        .filter_map(|el| el.trimmed_text())
        .collect()
}
