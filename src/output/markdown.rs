//! Markdown document generation
//!
//! Renders the scrape tree as a heading hierarchy with cleaned-up answers,
//! suited for pasting into a word processor.

use crate::workbook::ScrapeTree;
use regex::Regex;
use std::sync::LazyLock;

static NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("numbering pattern is valid"));
static BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-*]\s*").expect("bullet pattern is valid"));

/// Formats the scrape tree as markdown
///
/// # Arguments
///
/// * `tree` - The scraped sections
/// * `title` - Document title for the top-level heading
///
/// # Returns
///
/// A formatted markdown string
pub fn format_markdown(tree: &ScrapeTree, title: &str) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", title));

    for (section_title, section) in tree.sections() {
        md.push_str(&format!("## {}\n\n", section_title));

        for (exercise_title, record) in &section.exercises {
            md.push_str(&format!("### {}\n\n", exercise_title));

            if let Some(answer) = record.answer_text() {
                for line in clean_answer_lines(answer) {
                    md.push_str(line);
                    md.push('\n');
                }
            }

            md.push('\n');
        }
    }

    md
}

/// Splits an answer into lines without list numbering or bullet markers
///
/// A leading `1.` style number is removed first, then a leading `•`, `-` or
/// `*` marker. Lines left empty are dropped.
pub fn clean_answer_lines(answer: &str) -> Vec<&str> {
    answer
        .split('\n')
        .map(|line| strip_leading(line, &NUMBERING).trim())
        .map(|line| strip_leading(line, &BULLET).trim())
        .filter(|line| !line.is_empty())
        .collect()
}

fn strip_leading<'a>(line: &'a str, pattern: &Regex) -> &'a str {
    match pattern.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}
