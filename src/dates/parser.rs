//! Free-text date ranges as rendered on profile pages.
//!
//! Accepted shapes:
//!
//! - `""`
//! - `"2015"` or `"Jun 2015"` (a single period)
//! - `"<start> – <end>"` where each side is `"2015"`, `"Jun 2015"`, and the
//!   end may also be `"Present"`
//!
//! Nothing here returns an error. A side that cannot be read is left `None`
//! and a warning is logged, so a batch run keeps going with a missing value.

use log::warn;

use crate::domain::{CalendarPoint, DateMode, DateRange, Heuristics, RangeEnd};

/// Separators the site uses between start and end.
const SEPARATORS: [char; 2] = ['–', '—'];

const PRESENT: &str = "present";

/// Day used as the end of a single-month period. Not the real month end;
/// downstream data was produced with this value.
const SINGLE_PERIOD_END_DAY: u32 = 28;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse with the default heuristics.
pub fn parse_date_range(text: &str, mode: DateMode) -> DateRange {
    parse_date_range_with(text, mode, &Heuristics::default())
}

/// Parse `text` into a normalized range.
pub fn parse_date_range_with(text: &str, mode: DateMode, heuristics: &Heuristics) -> DateRange {
    let text = text.trim();
    if text.is_empty() {
        return DateRange::EMPTY;
    }

    let mut parts = text.split(SEPARATORS.as_slice());
    let (Some(first), second) = (parts.next(), parts.next()) else {
        return DateRange::EMPTY;
    };

    let Some(second) = second else {
        return parse_single_period(first.trim());
    };

    if parts.next().is_some() {
        warn!("Date range {text:?} has more than one separator; using the first two parts");
    }

    let end = parse_end(second.trim(), mode, heuristics);
    let start = parse_start(first.trim(), mode, heuristics);
    DateRange::new(start, end)
}

/// `"2015"` covers the year; `"Jun 2015"` runs from the 1st to the 28th.
fn parse_single_period(token: &str) -> DateRange {
    let words: Vec<&str> = token.split_whitespace().collect();
    let range = match words.as_slice() {
        [year] => parse_year(year)
            .and_then(CalendarPoint::year)
            .map(|point| DateRange::new(Some(point), Some(RangeEnd::Date(point)))),
        [month, year] => {
            let first = month_year(month, year, 1);
            let last = month_year(month, year, SINGLE_PERIOD_END_DAY);
            match (first, last) {
                (Some(first), Some(last)) => Some(DateRange::new(Some(first), Some(RangeEnd::Date(last)))),
                _ => None,
            }
        }
        _ => None,
    };

    range.unwrap_or_else(|| {
        warn!("Date {token:?} is not in the expected format");
        DateRange::EMPTY
    })
}

fn parse_end(token: &str, mode: DateMode, heuristics: &Heuristics) -> Option<RangeEnd> {
    if token.eq_ignore_ascii_case(PRESENT) {
        return Some(RangeEnd::Present);
    }

    let point = parse_bound(token, mode, heuristics.degree_end_month);
    if point.is_none() {
        warn!("End date {token:?} is not in the expected format");
    }
    point.map(RangeEnd::Date)
}

fn parse_start(token: &str, mode: DateMode, heuristics: &Heuristics) -> Option<CalendarPoint> {
    let point = parse_bound(token, mode, heuristics.degree_start_month);
    if point.is_none() {
        warn!("Start date {token:?} is not in the expected format");
    }
    point
}

/// One side of a two-part range. A bare year takes `degree_month` in degree
/// mode and stays year precision otherwise.
fn parse_bound(token: &str, mode: DateMode, degree_month: u32) -> Option<CalendarPoint> {
    let words: Vec<&str> = token.split_whitespace().collect();
    match (words.as_slice(), mode) {
        ([year], DateMode::Degree) => CalendarPoint::month(parse_year(year)?, degree_month),
        ([year], DateMode::Career) => CalendarPoint::year(parse_year(year)?),
        ([month, year], _) => month_year(month, year, 1),
        _ => None,
    }
}

fn month_year(month: &str, year: &str, day: u32) -> Option<CalendarPoint> {
    CalendarPoint::month_day(parse_year(year)?, parse_month(month)?, day)
}

fn parse_year(word: &str) -> Option<i32> {
    if word.len() != 4 || !word.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    word.parse().ok()
}

/// `"Jun"`, `"june"`, `"Sept"`: any prefix of at least three letters.
fn parse_month(word: &str) -> Option<u32> {
    let word = word.trim_end_matches('.').to_ascii_lowercase();
    if word.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| name.starts_with(&word))
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Precision;

    fn year(y: i32) -> CalendarPoint {
        CalendarPoint::year(y).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> CalendarPoint {
        CalendarPoint::month_day(y, m, d).unwrap()
    }

    #[test]
    fn empty_text_is_empty_range() {
        assert_eq!(parse_date_range("", DateMode::Career), DateRange::EMPTY);
        assert_eq!(parse_date_range("   ", DateMode::Degree), DateRange::EMPTY);
    }

    #[test]
    fn bare_year_is_start_and_end_in_either_mode() {
        for mode in [DateMode::Career, DateMode::Degree] {
            let range = parse_date_range("2015", mode);
            assert_eq!(range.start, Some(year(2015)));
            assert_eq!(range.end, Some(RangeEnd::Date(year(2015))));
            assert_eq!(range.start.unwrap().precision, Precision::Year);
        }
    }

    #[test]
    fn single_month_ends_on_the_28th() {
        let range = parse_date_range("Jun 2015", DateMode::Career);
        assert_eq!(range.start, Some(ymd(2015, 6, 1)));
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2015, 6, 28))));

        // Not the real month end, even for 31-day months.
        let range = parse_date_range("Jan 2015", DateMode::Career);
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2015, 1, 28))));
    }

    #[test]
    fn present_end_is_the_sentinel() {
        let range = parse_date_range("Jan 2015 – present", DateMode::Career);
        assert_eq!(range.start, Some(ymd(2015, 1, 1)));
        assert_eq!(range.end, Some(RangeEnd::Present));

        let range = parse_date_range("2019 – Present", DateMode::Degree);
        assert_eq!(range.start, Some(ymd(2019, 8, 1)));
        assert_eq!(range.end, Some(RangeEnd::Present));
    }

    #[test]
    fn degree_mode_defaults_august_start_and_june_end() {
        let range = parse_date_range("2012 – 2016", DateMode::Degree);
        assert_eq!(range.start, Some(ymd(2012, 8, 1)));
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2016, 6, 1))));
    }

    #[test]
    fn career_mode_keeps_bare_years() {
        let range = parse_date_range("2012 – 2016", DateMode::Career);
        assert_eq!(range.start, Some(year(2012)));
        assert_eq!(range.end, Some(RangeEnd::Date(year(2016))));
        assert_eq!(range.end.unwrap().as_point().unwrap().precision, Precision::Year);
    }

    #[test]
    fn month_year_sides_ignore_mode() {
        let range = parse_date_range("Jan 2012 – Dec 2015", DateMode::Career);
        assert_eq!(range.start, Some(ymd(2012, 1, 1)));
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2015, 12, 1))));

        let range = parse_date_range("Jan 2012 – Dec 2015", DateMode::Degree);
        assert_eq!(range.start, Some(ymd(2012, 1, 1)));
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2015, 12, 1))));
    }

    #[test]
    fn mixed_precision_sides() {
        let range = parse_date_range("2014 – Mar 2016", DateMode::Degree);
        assert_eq!(range.start, Some(ymd(2014, 8, 1)));
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2016, 3, 1))));
    }

    #[test]
    fn malformed_sides_are_left_unset() {
        let range = parse_date_range("sometime – 2015", DateMode::Career);
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(RangeEnd::Date(year(2015))));

        let range = parse_date_range("Jan 2015 – a long while later", DateMode::Career);
        assert_eq!(range.start, Some(ymd(2015, 1, 1)));
        assert_eq!(range.end, None);

        let range = parse_date_range("Foo 2015 – 2016", DateMode::Career);
        assert_eq!(range.start, None);
    }

    #[test]
    fn malformed_single_period_is_empty() {
        assert_eq!(parse_date_range("Foo Bar", DateMode::Career), DateRange::EMPTY);
        assert_eq!(parse_date_range("present", DateMode::Career), DateRange::EMPTY);
        assert_eq!(parse_date_range("15", DateMode::Career), DateRange::EMPTY);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let range = parse_date_range("  Feb 2018–Aug 2019 ", DateMode::Career);
        assert_eq!(range.start, Some(ymd(2018, 2, 1)));
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2019, 8, 1))));
    }

    #[test]
    fn full_and_abbreviated_month_names() {
        assert_eq!(parse_month("Jun"), Some(6));
        assert_eq!(parse_month("june"), Some(6));
        assert_eq!(parse_month("Sept"), Some(9));
        assert_eq!(parse_month("Ju"), None);
        assert_eq!(parse_month("Juneteenth"), None);
    }

    #[test]
    fn year_display_reparses_to_same_year() {
        let parsed = parse_date_range("2017", DateMode::Career).start.unwrap();
        let reparsed = parse_date_range(&parsed.to_string(), DateMode::Career).start.unwrap();
        assert_eq!(reparsed.year_value(), 2017);
        assert_eq!(reparsed.precision, Precision::Year);
    }

    #[test]
    fn custom_heuristics_override_default_months() {
        let heuristics = Heuristics {
            degree_start_month: 9,
            degree_end_month: 5,
            ..Heuristics::default()
        };
        let range = parse_date_range_with("2012 – 2016", DateMode::Degree, &heuristics);
        assert_eq!(range.start, Some(ymd(2012, 9, 1)));
        assert_eq!(range.end, Some(RangeEnd::Date(ymd(2016, 5, 1))));
    }

    #[test]
    fn extra_separators_use_first_two_parts() {
        let range = parse_date_range("2012 – 2014 – 2016", DateMode::Career);
        assert_eq!(range.start, Some(year(2012)));
        assert_eq!(range.end, Some(RangeEnd::Date(year(2014))));
    }
}
