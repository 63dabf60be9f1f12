//! JSON dump of the scrape tree

use crate::output::traits::OutputResult;
use crate::workbook::ScrapeTree;

/// Serializes the tree as JSON with 2-space indentation
///
/// Keys keep their scrape order and non-ASCII text is written literally.
pub fn format_json(tree: &ScrapeTree) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(tree)?)
}
