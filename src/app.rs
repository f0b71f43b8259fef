//! Top-level application orchestration.
//!
//! `src/main.rs` only maps the result to an exit code; this module:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - opens the page source
//! - dispatches to the parse / crawl / scrape workflows and prints results

use std::fs;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use log::info;

use crate::cli::{Command, HeuristicArgs, LinksArgs, ParseArgs, ProfileArgs, ProfilesArgs, SelectionArgs, SourceArgs};
use crate::crawl::collect_profile_links;
use crate::dates::{graduation_status, parse_date_range_with, today};
use crate::domain::{DegreeCriteria, Heuristics, ScoutConfig};
use crate::error::AppError;
use crate::page::{HtmlReader, MemoryReader, PageReader};

pub mod pipeline;

/// Entry point for the `scout` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    crate::logger::init();

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Parse(args) => handle_parse(args),
        Command::Links(args) => handle_links(args),
        Command::Profile(args) => handle_profile(args),
        Command::Profiles(args) => handle_profiles(args),
    }
}

fn handle_parse(args: ParseArgs) -> Result<(), AppError> {
    let heuristics = heuristics_from_args(&args.heuristics);
    let range = parse_date_range_with(&args.text, args.mode(), &heuristics);
    let status = graduation_status(range.end, today(), &heuristics);
    println!("{}", crate::report::format_parse_result(&args.text, &range, status));
    Ok(())
}

fn handle_links(args: LinksArgs) -> Result<(), AppError> {
    let mut reader = open_reader(&args.source)?;
    let outcome = collect_profile_links(reader.as_mut(), &args.search_url, args.pages)?;
    println!("{}", crate::report::format_crawl(&outcome));
    Ok(())
}

fn handle_profile(args: ProfileArgs) -> Result<(), AppError> {
    let config = scout_config_from_args(&args.heuristics, &args.selection);
    let mut reader = open_reader(&args.source)?;
    let row = pipeline::scrape_row(reader.as_mut(), &args.url, &config, today())?;

    if args.selection.json {
        println!("{}", to_json(&row)?);
    } else {
        println!("{}", crate::report::format_row(&row));
    }
    Ok(())
}

fn handle_profiles(args: ProfilesArgs) -> Result<(), AppError> {
    let config = scout_config_from_args(&args.heuristics, &args.selection);
    let mut reader = open_reader(&args.source)?;

    let urls = match (&args.urls, &args.search_url) {
        (Some(path), _) => read_url_list(path)?,
        (None, Some(search_url)) => collect_profile_links(reader.as_mut(), search_url, args.pages)?.links,
        (None, None) => return Err(AppError::usage("Either --urls or --search-url is required.")),
    };
    info!("{} profile url(s) to scrape", urls.len());

    let batch = pipeline::scrape_all(reader.as_mut(), &urls, &config, today());
    if args.selection.json {
        println!("{}", to_json(&batch.rows)?);
    } else {
        println!("{}", crate::report::format_batch(&batch));
    }
    Ok(())
}

pub fn heuristics_from_args(args: &HeuristicArgs) -> Heuristics {
    Heuristics {
        degree_start_month: args.degree_start_month,
        degree_end_month: args.degree_end_month,
        present_cutoff_year: args.present_cutoff_year,
    }
}

pub fn scout_config_from_args(heuristics: &HeuristicArgs, selection: &SelectionArgs) -> ScoutConfig {
    ScoutConfig {
        heuristics: heuristics_from_args(heuristics),
        criteria: DegreeCriteria {
            school: selection.school.clone(),
            degree_keywords: selection.degree_keywords.clone(),
        },
        industries: !selection.no_industries,
    }
}

/// Open the page source selected on the command line.
pub fn open_reader(source: &SourceArgs) -> Result<Box<dyn PageReader>, AppError> {
    if let Some(path) = &source.replay {
        info!("Replaying pages from {}", path.display());
        return Ok(Box::new(MemoryReader::from_path(path)?));
    }
    if let Some(dir) = &source.snapshots {
        info!("Reading page snapshots from {}", dir.display());
        return Ok(Box::new(HtmlReader::snapshots(dir.clone())));
    }
    if source.live {
        let reader = HtmlReader::live(
            source.user_agent.as_deref(),
            source.cookie.as_deref(),
            Duration::from_millis(source.delay_ms),
        )?;
        return Ok(Box::new(reader));
    }
    Err(AppError::usage("One of --replay, --snapshots or --live is required."))
}

/// Profile urls from a text file: one per line, blank lines and `#` comments
/// ignored.
pub fn read_url_list(path: &Path) -> Result<Vec<String>, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::usage(format!("Failed to read url list '{}': {e}", path.display())))?;
    Ok(parse_url_list(&content))
}

fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::internal(format!("Failed to serialize output: {e}")))
}
