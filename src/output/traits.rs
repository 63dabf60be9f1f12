//! Output formats and error types
//!
//! This module defines the set of output formats and the errors that can
//! occur while rendering or writing them.

use crate::config::OutputConfig;
use crate::output::{format_json, format_markdown, format_text};
use crate::workbook::ScrapeTree;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// The documents produced from a scrape tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Full tree as indented JSON
    Json,
    /// Heading hierarchy with cleaned-up answers
    Markdown,
    /// Underlined titles with answers kept verbatim
    Text,
}

impl OutputFormat {
    /// Every format, in the order files are written
    pub const ALL: [OutputFormat; 3] = [Self::Json, Self::Markdown, Self::Text];

    /// Path of this format's file under the configured output directory
    pub fn path(&self, config: &OutputConfig) -> PathBuf {
        let file_name = match self {
            Self::Json => &config.json_file,
            Self::Markdown => &config.markdown_file,
            Self::Text => &config.text_file,
        };
        config.directory.join(file_name)
    }

    /// Renders the tree in this format
    pub fn render(&self, tree: &ScrapeTree, config: &OutputConfig) -> OutputResult<String> {
        match self {
            Self::Json => format_json(tree),
            Self::Markdown => Ok(format_markdown(tree, &config.title)),
            Self::Text => Ok(format_text(tree, &config.title)),
        }
    }
}
