//! Plain-text document generation

use crate::workbook::ScrapeTree;

/// Formats the scrape tree as plain text
///
/// Section titles are underlined with `=` and exercise titles with `-`,
/// one character per title character. Answer lines are trimmed and kept
/// verbatim, numbering included.
pub fn format_text(tree: &ScrapeTree, title: &str) -> String {
    let mut text = String::new();

    text.push_str(&format!("{}\n\n", title));

    for (section_title, section) in tree.sections() {
        text.push_str(&format!("{}\n{}\n\n", section_title, underline(section_title, '=')));

        for (exercise_title, record) in &section.exercises {
            text.push_str(&format!(
                "{}\n{}\n\n",
                exercise_title,
                underline(exercise_title, '-')
            ));

            if let Some(answer) = record.answer_text() {
                for line in answer.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
                    text.push_str(line);
                    text.push('\n');
                }
            }

            text.push_str("\n\n");
        }
    }

    text
}

/// A run of `marker` as long as `title` in characters
fn underline(title: &str, marker: char) -> String {
    std::iter::repeat(marker).take(title.chars().count()).collect()
}
