//! Recorded pages served from memory.
//!
//! A replay file is JSON of the form:
//!
//! ```json
//! { "pages": { "<url>": { "<selector>": [ { "text": "...", "attrs": {}, "children": {} } ] } } }
//! ```
//!
//! Selectors are matched literally; `children` holds the selector map used
//! for queries scoped to that element.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::page::{Element, PageReader, Step};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryElement {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub children: MemoryPage,
}

impl MemoryElement {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_children(mut self, selector: impl Into<String>, children: Vec<MemoryElement>) -> Self {
        self.children.insert(selector, children);
        self
    }

    fn to_element(&self) -> Element {
        Element {
            text: self.text.clone(),
            attrs: self.attrs.clone(),
        }
    }
}

/// Selector → matched elements for one page (or one element's subtree).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryPage {
    elements: BTreeMap<String, Vec<MemoryElement>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, selector: impl Into<String>, elements: Vec<MemoryElement>) -> Self {
        self.insert(selector, elements);
        self
    }

    pub fn insert(&mut self, selector: impl Into<String>, elements: Vec<MemoryElement>) {
        self.elements.insert(selector.into(), elements);
    }

    fn get(&self, selector: &str) -> &[MemoryElement] {
        self.elements.get(selector).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryReader {
    pages: BTreeMap<String, MemoryPage>,
    #[serde(skip)]
    current: Option<String>,
    #[serde(skip)]
    visited: Vec<String>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, page: MemoryPage) -> Self {
        self.pages.insert(url.into(), page);
        self
    }

    /// Load a replay file.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let file = File::open(path)
            .map_err(|e| AppError::usage(format!("Failed to open replay file '{}': {e}", path.display())))?;
        serde_json::from_reader(file)
            .map_err(|e| AppError::usage(format!("Invalid replay file '{}': {e}", path.display())))
    }

    /// Every url navigated to, in order.
    pub fn visited(&self) -> &[String] {
        &self.visited
    }

    fn current_page(&self) -> Option<&MemoryPage> {
        self.current.as_ref().and_then(|url| self.pages.get(url))
    }
}

impl PageReader for MemoryReader {
    fn navigate(&mut self, url: &str) -> Result<(), AppError> {
        self.visited.push(url.to_string());
        if !self.pages.contains_key(url) {
            self.current = None;
            return Err(AppError::fetch(format!("No recorded page for {url}")));
        }
        self.current = Some(url.to_string());
        Ok(())
    }

    fn current_url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn query(&self, scope: &[Step<'_>], selector: &str) -> Vec<Element> {
        let Some(mut page) = self.current_page() else {
            return Vec::new();
        };
        for step in scope {
            match page.get(step.selector).get(step.index) {
                Some(element) => page = &element.children,
                None => {
                    debug!("Scope {}[{}] not found", step.selector, step.index);
                    return Vec::new();
                }
            }
        }
        page.get(selector).iter().map(MemoryElement::to_element).collect()
    }
}
