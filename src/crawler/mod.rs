//! Crawler module for fetching and extracting workbook pages
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching with a browser-like header set
//! - HTML parsing of the landing page and exercise pages
//! - Overall scrape coordination with a courtesy delay and exercise cap

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_scrape, Coordinator};
pub use fetcher::{build_http_client, fetch_page};
pub use parser::{block_text, parse_exercise, parse_sections};
