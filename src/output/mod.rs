//! Output module for rendering scraped workbooks
//!
//! This module handles:
//! - JSON dumps of the full scrape tree
//! - Markdown documents with cleaned-up answers
//! - Plain-text documents with answers kept verbatim
//! - Writing all three files into the output directory

mod json;
mod markdown;
mod text;
mod traits;

pub use json::format_json;
pub use markdown::{clean_answer_lines, format_markdown};
pub use text::format_text;
pub use traits::{OutputError, OutputFormat, OutputResult};

use crate::config::OutputConfig;
use crate::workbook::ScrapeTree;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes every output format for the tree
///
/// Creates the output directory if it does not exist. Files are written in
/// JSON, Markdown, text order; the first failure aborts the rest.
///
/// # Arguments
///
/// * `tree` - The scraped sections
/// * `config` - Output directory, file names and document title
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - Paths of the written files
/// * `Err(OutputError)` - Rendering or writing failed
pub fn write_outputs(tree: &ScrapeTree, config: &OutputConfig) -> OutputResult<Vec<PathBuf>> {
    std::fs::create_dir_all(&config.directory)?;

    let mut written = Vec::with_capacity(OutputFormat::ALL.len());
    for format in OutputFormat::ALL {
        let path = format.path(config);
        let content = format.render(tree, config)?;
        write_file(&path, &content)?;

        tracing::info!("Data saved to {}", path.display());
        written.push(path);
    }

    Ok(written)
}

fn write_file(path: &Path, content: &str) -> OutputResult<()> {
    let to_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_error)?;
    file.write_all(content.as_bytes()).map_err(to_error)?;

    Ok(())
}
