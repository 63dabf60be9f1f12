use crate::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Desktop browser identification sent with every request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for the workbook scraper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub scraper: ScraperConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Absolute URL of the landing page listing every section
    pub fn book_url(&self) -> String {
        format!("{}{}", self.site.base(), self.site.book_path)
    }

    /// Absolute URL of an exercise page given its site-relative link
    pub fn exercise_url(&self, relative_url: &str) -> String {
        format!("{}{}", self.site.base(), relative_url)
    }
}

/// Location of the workbook on the source site
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Site origin, e.g. `https://studifor.com`
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Path of the landing page relative to the origin
    #[serde(rename = "book-path", default = "default_book_path")]
    pub book_path: String,
}

impl SiteConfig {
    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            book_path: default_book_path(),
        }
    }
}

/// Scrape loop behavior
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperConfig {
    /// Pause after every exercise attempt (seconds)
    #[serde(rename = "delay-seconds", default = "default_delay_seconds")]
    pub delay_seconds: f64,

    /// Stop after this many exercise attempts; unset means no limit
    #[serde(rename = "max-exercises", default)]
    pub max_exercises: Option<usize>,

    /// User-Agent header value
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl ScraperConfig {
    /// Courtesy delay as a `Duration`
    ///
    /// Fails for negative, non-finite, or unrepresentably large values.
    pub fn delay(&self) -> Result<Duration, ConfigError> {
        Duration::try_from_secs_f64(self.delay_seconds).map_err(|e| {
            ConfigError::Validation(format!(
                "delay-seconds must be a non-negative number of seconds, got {}: {}",
                self.delay_seconds, e
            ))
        })
    }
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            delay_seconds: default_delay_seconds(),
            max_exercises: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving all output files (created if absent)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name of the JSON dump
    #[serde(rename = "json-file", default = "default_json_file")]
    pub json_file: String,

    /// File name of the Markdown document
    #[serde(rename = "markdown-file", default = "default_markdown_file")]
    pub markdown_file: String,

    /// File name of the plain-text document
    #[serde(rename = "text-file", default = "default_text_file")]
    pub text_file: String,

    /// Document title written at the top of the Markdown and text files
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            json_file: default_json_file(),
            markdown_file: default_markdown_file(),
            text_file: default_text_file(),
            title: default_title(),
        }
    }
}

fn default_base_url() -> String {
    "https://studifor.com".to_string()
}

fn default_book_path() -> String {
    "/books/focus-2-workbook".to_string()
}

fn default_delay_seconds() -> f64 {
    1.5
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_directory() -> PathBuf {
    PathBuf::from("data")
}

fn default_json_file() -> String {
    "focus_2_workbook.json".to_string()
}

fn default_markdown_file() -> String {
    "focus_2_workbook.md".to_string()
}

fn default_text_file() -> String {
    "focus_2_workbook.txt".to_string()
}

fn default_title() -> String {
    "FOCUS 2 WORKBOOK - ANSWERS".to_string()
}
