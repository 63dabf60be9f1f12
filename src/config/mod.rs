//! Configuration module for the workbook scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key is optional; `Config::default()` scrapes the Focus 2 workbook with a
//! 1.5 second courtesy delay and writes into `data/`.
//!
//! # Example
//!
//! ```no_run
//! use workbook_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Landing page: {}", config.book_url());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, ScraperConfig, SiteConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
