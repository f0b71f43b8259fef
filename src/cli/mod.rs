//! Command-line parsing for the profile scraper.
//!
//! Argument parsing and command dispatch are kept apart from the parsing and
//! selection code; `app` turns these structs into a `ScoutConfig`.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};

use crate::crawl::PageLimit;
use crate::domain::{
    DEFAULT_DEGREE_END_MONTH, DEFAULT_DEGREE_START_MONTH, DEFAULT_PRESENT_CUTOFF_YEAR, DEFAULT_SCHOOL, DateMode,
};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "scout", version, about = "Profile scraper: degrees and first jobs after graduation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a single date-range string and show the graduation flag.
    Parse(ParseArgs),
    /// Collect profile links from search result pages.
    Links(LinksArgs),
    /// Scrape one profile and print its degree / first-job row.
    Profile(ProfileArgs),
    /// Scrape many profiles, from a url list or a search.
    Profiles(ProfilesArgs),
}

/// Date heuristics. Defaults match the 2020 graduate cohort data.
#[derive(Debug, Args, Clone)]
pub struct HeuristicArgs {
    /// Month assumed for a bare start year of a degree.
    #[arg(long, default_value_t = DEFAULT_DEGREE_START_MONTH, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub degree_start_month: u32,

    /// Month assumed for a bare end year of a degree.
    #[arg(long, default_value_t = DEFAULT_DEGREE_END_MONTH, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub degree_end_month: u32,

    /// An ongoing degree counts as graduated after Jan 1 of this year.
    #[arg(long, default_value_t = DEFAULT_PRESENT_CUTOFF_YEAR)]
    pub present_cutoff_year: i32,
}

/// Where pages come from. Exactly one source is required.
#[derive(Debug, Args, Clone)]
#[command(group(ArgGroup::new("source").required(true).args(["replay", "snapshots", "live"])))]
pub struct SourceArgs {
    /// JSON file of recorded pages.
    #[arg(long, value_name = "JSON")]
    pub replay: Option<PathBuf>,

    /// Directory of saved `.html` pages.
    #[arg(long, value_name = "DIR")]
    pub snapshots: Option<PathBuf>,

    /// Fetch pages over HTTP.
    #[arg(long)]
    pub live: bool,

    /// User agent for live fetches.
    #[arg(long, env = "SCOUT_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Cookie header of an authenticated session, for live fetches.
    #[arg(long, env = "SCOUT_COOKIE", hide_env_values = true)]
    pub cookie: Option<String>,

    /// Pause after every live page load (milliseconds).
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,
}

/// Which degree a profile is analysed against.
#[derive(Debug, Args, Clone)]
pub struct SelectionArgs {
    /// School name (case-insensitive substring).
    #[arg(long, env = "SCOUT_SCHOOL", default_value = DEFAULT_SCHOOL)]
    pub school: String,

    /// Degree name keywords; any one matching is enough.
    #[arg(long = "degree-keyword", value_name = "KEYWORD", default_values_t = vec!["bachelor".to_string(), "hon".to_string()])]
    pub degree_keywords: Vec<String>,

    /// Skip the company-page industry lookup for the first job.
    #[arg(long)]
    pub no_industries: bool,

    /// Print rows as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ParseArgs {
    /// Date range as shown on a profile, e.g. "Jan 2015 – Present".
    pub text: String,

    /// Use degree-mode defaults for bare years.
    #[arg(long)]
    pub degree: bool,

    #[command(flatten)]
    pub heuristics: HeuristicArgs,
}

impl ParseArgs {
    pub fn mode(&self) -> DateMode {
        DateMode::from_degree_flag(self.degree)
    }
}

#[derive(Debug, Args, Clone)]
pub struct LinksArgs {
    /// Search results url (page 1).
    #[arg(long, value_name = "URL")]
    pub search_url: String,

    /// Number of result pages, or "all".
    #[arg(long, default_value = "all")]
    pub pages: PageLimit,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ProfileArgs {
    /// Profile url.
    #[arg(long, value_name = "URL")]
    pub url: String,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub heuristics: HeuristicArgs,
}

#[derive(Debug, Args, Clone)]
#[command(group(ArgGroup::new("targets").required(true).args(["urls", "search_url"])))]
pub struct ProfilesArgs {
    /// File with one profile url per line (`#` starts a comment).
    #[arg(long, value_name = "FILE")]
    pub urls: Option<PathBuf>,

    /// Collect profile urls from this search first.
    #[arg(long, value_name = "URL")]
    pub search_url: Option<String>,

    /// Result pages to crawl with `--search-url`, or "all".
    #[arg(long, default_value = "all")]
    pub pages: PageLimit,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub selection: SelectionArgs,

    #[command(flatten)]
    pub heuristics: HeuristicArgs,
}
