//! Picking the degree a profile is analysed against.

use crate::domain::{DegreeCriteria, EducationEntry};

/// First education entry (page order) matching `criteria`.
///
/// Entries missing either the school or the degree name are skipped.
pub fn find_qualifying_degree<'a>(
    education: &'a [EducationEntry],
    criteria: &DegreeCriteria,
) -> Option<&'a EducationEntry> {
    let school_needle = criteria.school.to_lowercase();
    let keywords: Vec<String> = criteria.degree_keywords.iter().map(|k| k.to_lowercase()).collect();

    education.iter().find(|entry| {
        let (Some(school), Some(degree)) = (&entry.school, &entry.degree) else {
            return false;
        };
        if !school.to_lowercase().contains(&school_needle) {
            return false;
        }
        let degree = degree.to_lowercase();
        keywords.iter().any(|k| degree.contains(k.as_str()))
    })
}
