//! HTML parser for the workbook landing page and exercise pages
//!
//! This module handles parsing HTML content to extract:
//! - Sections (cards) and their exercise links from the landing page
//! - Question and answer text from an exercise page

use crate::workbook::{ExerciseContent, ExerciseLinks, SectionIndex};
use crate::WorkbookError;
use scraper::{ElementRef, Html, Node, Selector};

/// Section container on the landing page
const CARD: &str = ".card";
/// Section title inside a card
const CARD_TITLE: &str = ".accordion-header p";
/// Exercise links inside a card
const CARD_LINKS: &str = ".card-body a";
/// Question region of an exercise page
const QUESTION_BODY: &str = "#question .card-body";
/// Solution region of an exercise page
const SOLUTION_BODY: &str = "#solution .card-body";
/// Elements whose text is never shown to the reader
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

fn selector(css: &str) -> Result<Selector, WorkbookError> {
    Selector::parse(css).map_err(|e| WorkbookError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

/// Parses the landing page into sections and their exercise links
///
/// # Discovery Rules
///
/// - Every `.card` element is a candidate section, in document order
/// - A card without a `.accordion-header p` title is skipped
/// - A titled card with no links yields a section with no exercises
/// - Exercises are keyed by their trimmed link text; a repeated title
///   keeps its first position and takes the later URL
/// - Links without an `href` are skipped rather than failing discovery
///
/// # Arguments
///
/// * `html` - The landing page HTML
///
/// # Returns
///
/// * `Ok(SectionIndex)` - Sections in document order
/// * `Err(WorkbookError)` - A selector failed to compile
///
/// # Example
///
/// ```
/// use workbook_scraper::crawler::parse_sections;
///
/// let html = r#"<div class="card">
///     <div class="accordion-header"><p>Unit 1</p></div>
///     <div class="card-body"><a href="/ex/1">1.1 Vocabulary</a></div>
/// </div>"#;
/// let sections = parse_sections(html).unwrap();
/// assert_eq!(sections["Unit 1"]["1.1 Vocabulary"], "/ex/1");
/// ```
pub fn parse_sections(html: &str) -> Result<SectionIndex, WorkbookError> {
    let document = Html::parse_document(html);

    let card_selector = selector(CARD)?;
    let title_selector = selector(CARD_TITLE)?;
    let link_selector = selector(CARD_LINKS)?;

    let mut sections = SectionIndex::new();

    for card in document.select(&card_selector) {
        let Some(title_element) = card.select(&title_selector).next() else {
            tracing::debug!("Skipping card without a title");
            continue;
        };
        let section_title = inline_text(title_element);

        let mut exercises = ExerciseLinks::new();
        for link in card.select(&link_selector) {
            let exercise_title = inline_text(link);

            let Some(href) = link.value().attr("href") else {
                tracing::debug!(
                    "Skipping link '{}' in '{}' without href",
                    exercise_title,
                    section_title
                );
                continue;
            };

            if let Some(previous) = exercises.insert(exercise_title.clone(), href.to_string()) {
                tracing::debug!(
                    "Duplicate exercise '{}' in '{}': {} replaced by {}",
                    exercise_title,
                    section_title,
                    previous,
                    href
                );
            }
        }

        sections.insert(section_title, exercises);
    }

    Ok(sections)
}

/// Extracts the question and answer regions of an exercise page
///
/// A missing region leaves the corresponding field as `None`.
///
/// # Arguments
///
/// * `html` - The exercise page HTML
///
/// # Returns
///
/// * `Ok(ExerciseContent)` - Extracted text
/// * `Err(WorkbookError)` - A selector failed to compile
pub fn parse_exercise(html: &str) -> Result<ExerciseContent, WorkbookError> {
    let document = Html::parse_document(html);

    let question_selector = selector(QUESTION_BODY)?;
    let answer_selector = selector(SOLUTION_BODY)?;

    Ok(ExerciseContent {
        question: document.select(&question_selector).next().map(block_text),
        answer: document.select(&answer_selector).next().map(block_text),
    })
}

/// Joins the element's visible text nodes with newlines
///
/// Each text node is trimmed and empty nodes are dropped, so every block in
/// the source markup lands on its own line. Text inside `script`, `style`
/// and `template` elements is skipped.
pub fn block_text(element: ElementRef<'_>) -> String {
    visible_text(element)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Concatenates the element's visible text and trims the result
fn inline_text(element: ElementRef<'_>) -> String {
    visible_text(element).collect::<String>().trim().to_string()
}

/// Text nodes under `element` that are not inside a hidden element
fn visible_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element.descendants().filter_map(|node| match node.value() {
        Node::Text(text) => {
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
            });
            (!hidden).then_some(&**text)
        }
        _ => None,
    })
}
