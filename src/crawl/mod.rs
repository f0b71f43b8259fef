//! Walking search result pages and collecting profile links.

use std::collections::HashSet;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use log::{debug, info, warn};
use url::Url;

use crate::error::AppError;
use crate::page::{Element, PageReader};
use crate::scrape::is_profile_url;
use crate::scrape::selectors::{NEXT_BUTTON, SEARCH_RESULT_LINK, SEARCH_RESULTS};

/// How many result pages to visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLimit {
    All,
    Pages(NonZeroUsize),
}

impl PageLimit {
    fn allows(&self, pages: usize) -> bool {
        match self {
            PageLimit::All => true,
            PageLimit::Pages(limit) => pages < limit.get(),
        }
    }
}

impl FromStr for PageLimit {
    type Err = String;

    /// `"all"` (any case) or a positive integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageLimit::All);
        }
        s.parse::<NonZeroUsize>()
            .map(PageLimit::Pages)
            .map_err(|_| format!("expected 'all' or a positive number of pages, got '{s}'"))
    }
}

impl fmt::Display for PageLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageLimit::All => f.write_str("all"),
            PageLimit::Pages(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    /// Profile links in first-seen order, without duplicates.
    pub links: Vec<String>,
    pub pages_scraped: usize,
    /// A numeric limit was set but fewer pages existed.
    pub exhausted: bool,
}

/// Visit `search_url` and the following result pages, up to `limit`.
///
/// Pagination stops when the next button is missing or disabled, when a page
/// shows no results, or when the limit is reached. Only the first page must
/// load; a later page that fails to load ends the crawl with the links
/// collected so far.
pub fn collect_profile_links(
    reader: &mut dyn PageReader,
    search_url: &str,
    limit: PageLimit,
) -> Result<CrawlOutcome, AppError> {
    let mut links = Links::default();
    let mut pages = 0usize;

    reader.navigate(search_url)?;
    if has_results(reader) {
        collect_page_links(reader, &mut links);
        pages = 1;
        info!("Links scraped: {} (page 1)", links.len());
    }

    while limit.allows(pages) {
        let Some(next) = next_page_url(reader, pages + 1) else {
            break;
        };
        if let Err(err) = reader.navigate(&next) {
            warn!("Stopping at page {pages}: {err}");
            break;
        }
        if !has_results(reader) {
            info!("No more results found");
            break;
        }
        collect_page_links(reader, &mut links);
        pages += 1;
        info!("Links scraped: {} (page {pages})", links.len());
    }

    let exhausted = matches!(limit, PageLimit::Pages(n) if pages < n.get());
    if exhausted {
        warn!("Only {pages} page(s) available and scraped");
    }

    Ok(CrawlOutcome {
        links: links.order,
        pages_scraped: pages,
        exhausted,
    })
}

fn has_results(reader: &dyn PageReader) -> bool {
    !reader.find_all(SEARCH_RESULTS).is_empty()
}

/// Links in first-seen order, with a set for duplicate checks.
#[derive(Default)]
struct Links {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl Links {
    fn len(&self) -> usize {
        self.order.len()
    }

    fn insert(&mut self, link: String) {
        if self.seen.insert(link.clone()) {
            self.order.push(link);
        }
    }
}

fn collect_page_links(reader: &dyn PageReader, links: &mut Links) {
    for anchor in reader.find_all(SEARCH_RESULT_LINK) {
        let Some(href) = anchor.attr("href") else {
            continue;
        };
        let Some(link) = absolute_url(reader.current_url(), href) else {
            debug!("Skipping unresolvable link {href:?}");
            continue;
        };
        if is_profile_url(&link) {
            links.insert(link);
        }
    }
}

/// Url of result page `page`, or `None` when there is no usable next button.
///
/// A next button with an `href` is followed as-is; a bare button (the search
/// page renders one) is emulated by setting the `page` query parameter.
fn next_page_url(reader: &dyn PageReader, page: usize) -> Option<String> {
    let button = reader.find_all(NEXT_BUTTON).into_iter().next()?;
    if is_disabled(&button) {
        debug!("Next button disabled");
        return None;
    }

    let current = reader.current_url()?;
    if let Some(href) = button.attr("href") {
        return absolute_url(Some(current), href);
    }

    let mut url = Url::parse(current).ok()?;
    let others: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(others)
        .append_pair("page", &page.to_string());
    Some(url.into())
}

fn is_disabled(button: &Element) -> bool {
    button.attr("disabled").is_some()
        || button
            .attr("class")
            .is_some_and(|class| class.split_whitespace().any(|c| c.contains("disabled")))
}

fn absolute_url(base: Option<&str>, href: &str) -> Option<String> {
    match Url::parse(href) {
        Ok(url) => Some(url.into()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(base?).ok()?;
            base.join(href).ok().map(Into::into)
        }
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::memory::{MemoryElement, MemoryPage, MemoryReader};

    const SEARCH: &str = "https://www.linkedin.com/search/results/people/?keywords=nus";

    fn page_url(n: usize) -> String {
        format!("https://www.linkedin.com/search/results/people/?keywords=nus&page={n}")
    }

    fn result_page(hrefs: &[&str], next: Option<MemoryElement>) -> MemoryPage {
        let mut page = MemoryPage::new()
            .with(SEARCH_RESULTS, vec![MemoryElement::default(); hrefs.len()])
            .with(
                SEARCH_RESULT_LINK,
                hrefs.iter().map(|h| MemoryElement::default().with_attr("href", *h)).collect(),
            );
        if let Some(next) = next {
            page.insert(NEXT_BUTTON, vec![next]);
        }
        page
    }

    fn enabled() -> Option<MemoryElement> {
        Some(MemoryElement::text("Next").with_attr("class", "artdeco-pagination__button--next"))
    }

    fn disabled() -> Option<MemoryElement> {
        Some(MemoryElement::text("Next").with_attr("class", "artdeco-button--disabled"))
    }

    fn three_pages() -> MemoryReader {
        MemoryReader::new()
            .with_page(
                SEARCH,
                result_page(
                    &[
                        "https://www.linkedin.com/in/a/",
                        "https://www.linkedin.com/in/b/",
                        "https://www.linkedin.com/in/a/",
                        "https://www.linkedin.com/company/acme/",
                    ],
                    enabled(),
                ),
            )
            .with_page(page_url(2), result_page(&["/in/c/", "https://www.linkedin.com/in/b/"], enabled()))
            .with_page(page_url(3), result_page(&["https://www.linkedin.com/in/d/"], disabled()))
    }

    #[test]
    fn page_limit_parsing() {
        assert_eq!("all".parse::<PageLimit>(), Ok(PageLimit::All));
        assert_eq!("ALL".parse::<PageLimit>(), Ok(PageLimit::All));
        assert_eq!("3".parse::<PageLimit>(), Ok(PageLimit::Pages(NonZeroUsize::new(3).unwrap())));
        assert!("0".parse::<PageLimit>().is_err());
        assert!("-1".parse::<PageLimit>().is_err());
        assert!("some".parse::<PageLimit>().is_err());
    }

    #[test]
    fn crawls_all_pages_until_next_is_disabled() {
        let mut reader = three_pages();
        let outcome = collect_profile_links(&mut reader, SEARCH, PageLimit::All).unwrap();
        assert_eq!(
            outcome.links,
            vec![
                "https://www.linkedin.com/in/a/",
                "https://www.linkedin.com/in/b/",
                "https://www.linkedin.com/in/c/",
                "https://www.linkedin.com/in/d/",
            ]
        );
        assert_eq!(outcome.pages_scraped, 3);
        assert!(!outcome.exhausted);
    }

    #[test]
    fn page_limit_stops_pagination() {
        let mut reader = three_pages();
        let limit = PageLimit::Pages(NonZeroUsize::new(2).unwrap());
        let outcome = collect_profile_links(&mut reader, SEARCH, limit).unwrap();
        assert_eq!(outcome.pages_scraped, 2);
        assert_eq!(outcome.links.len(), 3);
        assert_eq!(reader.visited().len(), 2);
    }

    #[test]
    fn limit_above_available_pages_is_exhausted() {
        let mut reader = three_pages();
        let limit = PageLimit::Pages(NonZeroUsize::new(10).unwrap());
        let outcome = collect_profile_links(&mut reader, SEARCH, limit).unwrap();
        assert_eq!(outcome.pages_scraped, 3);
        assert!(outcome.exhausted);
    }

    #[test]
    fn empty_search_collects_nothing() {
        let mut reader = MemoryReader::new().with_page(SEARCH, MemoryPage::new());
        let outcome = collect_profile_links(&mut reader, SEARCH, PageLimit::All).unwrap();
        assert!(outcome.links.is_empty());
        assert_eq!(outcome.pages_scraped, 0);
    }

    #[test]
    fn next_button_href_is_followed() {
        let next = MemoryElement::text("Next").with_attr("href", "/search/results/people/?keywords=nus&page=2");
        let mut reader = MemoryReader::new()
            .with_page(SEARCH, result_page(&["https://www.linkedin.com/in/a/"], Some(next)))
            .with_page(page_url(2), result_page(&["https://www.linkedin.com/in/b/"], None));
        let outcome = collect_profile_links(&mut reader, SEARCH, PageLimit::All).unwrap();
        assert_eq!(outcome.pages_scraped, 2);
        assert_eq!(reader.visited()[1], page_url(2));
    }

    #[test]
    fn unreachable_later_page_keeps_collected_links() {
        let mut reader =
            MemoryReader::new().with_page(SEARCH, result_page(&["https://www.linkedin.com/in/alice/"], enabled()));
        let outcome = collect_profile_links(&mut reader, SEARCH, PageLimit::All).unwrap();
        assert_eq!(outcome.links, vec!["https://www.linkedin.com/in/alice/"]);
        assert_eq!(outcome.pages_scraped, 1);
    }

    #[test]
    fn unreachable_search_page_is_an_error() {
        let mut reader = MemoryReader::new();
        assert!(collect_profile_links(&mut reader, SEARCH, PageLimit::All).is_err());
    }
}
