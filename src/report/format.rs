//! Plain-text formatting.

use crate::app::pipeline::BatchOutput;
use crate::crawl::CrawlOutcome;
use crate::domain::{CalendarPoint, DateRange, EducationEntry, ExperienceEntry, GraduationStatus, ProfileRow, RangeEnd};

/// Separator for multi-valued cells (skills, interests).
pub const LIST_SEPARATOR: &str = ";";

const MISSING: &str = "-";

/// `start – end`, with `-` for unknown sides.
pub fn format_date_range(range: &DateRange) -> String {
    format!("{} – {}", format_start(range.start), format_end(range.end))
}

fn format_start(start: Option<CalendarPoint>) -> String {
    start.map(|p| p.to_string()).unwrap_or_else(|| MISSING.to_string())
}

fn format_end(end: Option<RangeEnd>) -> String {
    end.map(|e| e.to_string()).unwrap_or_else(|| MISSING.to_string())
}

/// Output of `scout parse`.
pub fn format_parse_result(input: &str, range: &DateRange, status: GraduationStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!("Input:     {input:?}\n"));
    out.push_str(&format!("Start:     {}\n", format_start(range.start)));
    out.push_str(&format!("End:       {}\n", format_end(range.end)));
    let graduated = match status {
        GraduationStatus::Unknown => "unknown",
        GraduationStatus::Graduated => "yes",
        GraduationStatus::Enrolled => "no",
    };
    out.push_str(&format!("Graduated: {graduated}"));
    out
}

pub fn format_crawl(outcome: &CrawlOutcome) -> String {
    let mut out = String::new();
    for link in &outcome.links {
        out.push_str(link);
        out.push('\n');
    }
    out.push_str(&format!(
        "# {} link(s) from {} page(s){}",
        outcome.links.len(),
        outcome.pages_scraped,
        if outcome.exhausted { " (no further pages)" } else { "" }
    ));
    out
}

fn text(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(MISSING)
}

fn format_degree(degree: &EducationEntry) -> String {
    let graduated = match degree.graduated {
        Some(true) => "graduated",
        Some(false) => "enrolled",
        None => "unknown",
    };
    format!(
        "{} | {} | {} | {} | {graduated}",
        text(&degree.school),
        text(&degree.degree),
        text(&degree.major),
        format_date_range(&degree.dates),
    )
}

fn format_job(job: &ExperienceEntry) -> String {
    format!(
        "{} | {} | {} | {}",
        text(&job.position),
        text(&job.company),
        text(&job.industry),
        format_date_range(&job.dates),
    )
}

pub fn format_row(row: &ProfileRow) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", text(&row.name)));
    out.push_str(&format!("Url:       {}\n", row.url));
    out.push_str(&format!(
        "Degree:    {}\n",
        row.degree.as_ref().map(format_degree).unwrap_or_else(|| MISSING.to_string())
    ));
    out.push_str(&format!(
        "First job: {}\n",
        row.first_job.as_ref().map(format_job).unwrap_or_else(|| MISSING.to_string())
    ));
    out.push_str(&format!("Skills:    {}\n", row.skills.join(LIST_SEPARATOR)));
    out.push_str(&format!("Interests: {}", row.interests.join(LIST_SEPARATOR)));
    out
}

pub fn format_batch(batch: &BatchOutput) -> String {
    let mut out = String::new();
    for row in &batch.rows {
        out.push_str(&format_row(row));
        out.push_str("\n\n");
    }
    for skipped in &batch.skipped {
        out.push_str(&format!("Skipped {}: {}\n", skipped.url, skipped.error));
    }
    out.push_str(&format!(
        "# {} profile(s) scraped, {} skipped",
        batch.rows.len(),
        batch.skipped.len()
    ));
    out
}
