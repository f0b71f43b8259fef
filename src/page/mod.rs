//! Page access behind a small capability trait.
//!
//! The scrape and crawl code only ever asks three things of a browser
//! session: go to a url, and give me the elements (text + attributes) that
//! match a selector, optionally inside the n-th match of an outer selector.
//! Keeping that surface in `PageReader` lets the selection logic run against
//! recorded pages (`MemoryReader`) or fetched HTML (`HtmlReader`) alike.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub mod html;
pub mod memory;

pub use html::HtmlReader;
pub use memory::MemoryReader;

/// Text and attributes of a matched element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Trimmed text, `None` when blank.
    pub fn trimmed_text(&self) -> Option<String> {
        let text = self.text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

/// Narrow a query to the `index`-th element matching `selector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'a> {
    pub selector: &'a str,
    pub index: usize,
}

impl<'a> Step<'a> {
    pub fn new(selector: &'a str, index: usize) -> Self {
        Self { selector, index }
    }
}

/// An explicitly passed page session.
pub trait PageReader {
    /// Load `url`; later queries run against it.
    fn navigate(&mut self, url: &str) -> Result<(), AppError>;

    /// Url of the loaded page, if any.
    fn current_url(&self) -> Option<&str>;

    /// Elements matching `selector` inside the element chain picked by `scope`
    /// (empty scope = whole page). Unknown selectors or a broken scope chain
    /// give an empty list.
    fn query(&self, scope: &[Step<'_>], selector: &str) -> Vec<Element>;

    fn find_all(&self, selector: &str) -> Vec<Element> {
        self.query(&[], selector)
    }

    /// Trimmed text of the first match, `None` if absent or blank.
    fn find_text(&self, selector: &str) -> Option<String> {
        self.find_text_in(&[], selector)
    }

    fn find_text_in(&self, scope: &[Step<'_>], selector: &str) -> Option<String> {
        self.query(scope, selector).first().and_then(Element::trimmed_text)
    }

    fn find_attr_in(&self, scope: &[Step<'_>], selector: &str, attr: &str) -> Option<String> {
        self.query(scope, selector)
            .first()
            .and_then(|el| el.attr(attr))
            .map(str::to_string)
    }
}
