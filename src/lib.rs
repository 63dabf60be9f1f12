//! Workbook Scraper: collects exercise questions and answers from an online workbook
//!
//! The crate discovers the workbook's sections and exercises from its landing page,
//! fetches every exercise page in order, and renders the collected answers as JSON,
//! Markdown and plain text.

pub mod config;
pub mod crawler;
pub mod output;
pub mod workbook;

use thiserror::Error;

/// Main error type for workbook scraping operations
#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Errors raised while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} {reason} for url: {url}")]
    Status {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("Failed to read response body from {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for workbook scraping operations
pub type Result<T> = std::result::Result<T, WorkbookError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use workbook::{ExerciseContent, ExerciseRecord, ScrapeTree, Section, SectionIndex};
