//! `PageReader` over real HTML, fetched live or read from saved snapshots.
//!
//! Live mode issues plain blocking GETs. Script-rendered sections are only
//! visible when the server pre-renders them, so the usual workflow is to save
//! pages from a logged-in browser into a snapshot directory and point
//! `--snapshots` at it.

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};
use scraper::{ElementRef, Html, Selector};

use crate::error::AppError;
use crate::page::{Element, PageReader, Step};

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

enum Source {
    Http { client: Client, delay: Duration },
    Directory(PathBuf),
}

pub struct HtmlReader {
    source: Source,
    current: Option<(String, Html)>,
}

impl HtmlReader {
    /// Fetch pages over HTTP. `cookie` is forwarded verbatim as the `Cookie`
    /// header of an already authenticated session.
    pub fn live(user_agent: Option<&str>, cookie: Option<&str>, delay: Duration) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| AppError::usage(format!("Invalid session cookie: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(DEFAULT_USER_AGENT))
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::fetch(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            source: Source::Http { client, delay },
            current: None,
        })
    }

    /// Read pages from `dir`, one `.html` file per url (see `snapshot_file_name`).
    pub fn snapshots(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::Directory(dir.into()),
            current: None,
        }
    }

    /// Parse `html` as the page at `url`, bypassing the source.
    pub fn load_html(&mut self, url: &str, html: &str) {
        self.current = Some((url.to_string(), Html::parse_document(html)));
    }

    fn fetch(&self, url: &str) -> Result<String, AppError> {
        match &self.source {
            Source::Http { client, delay } => {
                let resp = client
                    .get(url)
                    .send()
                    .map_err(|e| AppError::fetch(format!("Request to {url} failed: {e}")))?;
                if !resp.status().is_success() {
                    return Err(AppError::fetch(format!(
                        "Request to {url} failed with status {}.",
                        resp.status()
                    )));
                }
                let body = resp
                    .text()
                    .map_err(|e| AppError::fetch(format!("Failed to read body of {url}: {e}")))?;
                if !delay.is_zero() {
                    debug!("Waiting {} ms after {url}", delay.as_millis());
                    thread::sleep(*delay);
                }
                Ok(body)
            }
            Source::Directory(dir) => {
                let path = dir.join(snapshot_file_name(url));
                fs::read_to_string(&path).map_err(|e| {
                    AppError::fetch(format!("No snapshot for {url} at '{}': {e}", path.display()))
                })
            }
        }
    }
}

impl PageReader for HtmlReader {
    fn navigate(&mut self, url: &str) -> Result<(), AppError> {
        info!("Loading {url}");
        self.current = None;
        let body = self.fetch(url)?;
        self.load_html(url, &body);
        Ok(())
    }

    fn current_url(&self) -> Option<&str> {
        self.current.as_ref().map(|(url, _)| url.as_str())
    }

    fn query(&self, scope: &[Step<'_>], selector: &str) -> Vec<Element> {
        let Some((_, doc)) = &self.current else {
            return Vec::new();
        };
        let Some(target) = parse_selector(selector) else {
            return Vec::new();
        };

        let mut root: Option<ElementRef<'_>> = None;
        for step in scope {
            let Some(step_selector) = parse_selector(step.selector) else {
                return Vec::new();
            };
            let next = match root {
                None => doc.select(&step_selector).nth(step.index),
                Some(el) => el.select(&step_selector).nth(step.index),
            };
            match next {
                Some(el) => root = Some(el),
                None => {
                    debug!("Scope {}[{}] not found", step.selector, step.index);
                    return Vec::new();
                }
            }
        }

        match root {
            None => doc.select(&target).map(to_element).collect(),
            Some(el) => el.select(&target).map(to_element).collect(),
        }
    }
}

fn parse_selector(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Invalid selector {selector:?}: {e:?}");
            None
        }
    }
}

fn to_element(el: ElementRef<'_>) -> Element {
    let text = el.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ");
    let attrs = el
        .value()
        .attrs()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    Element { text, attrs }
}

/// File name a snapshot of `url` is stored under: scheme dropped, every run
/// of non-alphanumeric characters collapsed to `_`.
pub fn snapshot_file_name(url: &str) -> String {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let mut name = String::with_capacity(without_scheme.len() + 5);
    for ch in without_scheme.chars() {
        if ch.is_ascii_alphanumeric() {
            name.push(ch);
        } else if !name.ends_with('_') {
            name.push('_');
        }
    }
    let mut name = name.trim_matches('_').to_string();
    name.push_str(".html");
    name
}
