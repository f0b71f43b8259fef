//! Industry of an employer, read from its company page.

use log::warn;

use crate::page::{Element, PageReader};
use crate::scrape::selectors::{COMPANY_DEFINITIONS, COMPANY_PREFIX, COMPANY_TERMS, SCHOOL_PREFIX};

pub const ACADEMIA: &str = "Academia/Education";

/// Industry for `company_url`.
///
/// School pages map to `ACADEMIA` without a request. Company pages are
/// visited at `<url>about/`, which moves the reader off the current page.
/// Anything else, or a failed lookup, is `None`.
pub fn industry_for(reader: &mut dyn PageReader, company_url: Option<&str>) -> Option<String> {
    let url = company_url?;
    if url.starts_with(SCHOOL_PREFIX) {
        return Some(ACADEMIA.to_string());
    }
    if !url.starts_with(COMPANY_PREFIX) {
        return None;
    }

    let about = about_url(url);
    if let Err(err) = reader.navigate(&about) {
        warn!("Industry lookup for {url} skipped: {err}");
        return None;
    }

    let index = reader
        .find_all(COMPANY_TERMS)
        .iter()
        .position(|term| term.text.trim().eq_ignore_ascii_case("industry"))?;
    reader
        .find_all(COMPANY_DEFINITIONS)
        .get(index)
        .and_then(Element::trimmed_text)
}

fn about_url(url: &str) -> String {
    if url.ends_with('/') {
        format!("{url}about/")
    } else {
        format!("{url}/about/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::memory::{MemoryElement, MemoryPage, MemoryReader};

    #[test]
    fn school_urls_are_academia_without_navigation() {
        let mut reader = MemoryReader::new();
        let industry = industry_for(&mut reader, Some("https://www.linkedin.com/school/nus/"));
        assert_eq!(industry.as_deref(), Some(ACADEMIA));
        assert!(reader.visited().is_empty());
    }

    #[test]
    fn company_about_page_term_lookup() {
        let page = MemoryPage::new()
            .with(
                COMPANY_TERMS,
                vec![MemoryElement::text("Website"), MemoryElement::text("Industry")],
            )
            .with(
                COMPANY_DEFINITIONS,
                vec![MemoryElement::text("acme.test"), MemoryElement::text(" Computer Software ")],
            );
        let mut reader = MemoryReader::new().with_page("https://www.linkedin.com/company/acme/about/", page);
        let industry = industry_for(&mut reader, Some("https://www.linkedin.com/company/acme/"));
        assert_eq!(industry.as_deref(), Some("Computer Software"));
    }

    #[test]
    fn unknown_or_missing_urls_have_no_industry() {
        let mut reader = MemoryReader::new();
        assert_eq!(industry_for(&mut reader, None), None);
        assert_eq!(industry_for(&mut reader, Some("https://acme.test/")), None);
        // Failed navigation degrades to None.
        assert_eq!(industry_for(&mut reader, Some("https://www.linkedin.com/company/ghost")), None);
        assert_eq!(reader.visited(), ["https://www.linkedin.com/company/ghost/about/"]);
    }
}
