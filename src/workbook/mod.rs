//! Workbook data model
//!
//! This module provides the in-memory structures built during a scrape:
//!
//! - `SectionIndex`: the section/exercise/URL map discovered on the landing page
//! - `ScrapeTree`: the ordered tree of scraped results handed to the serializers
//! - `ExerciseRecord`: the outcome for one exercise (content or error)

mod exercise;
mod tree;

// Re-export main types
pub use exercise::{ExerciseContent, ExerciseRecord};
pub use tree::{ExerciseLinks, ScrapeTree, Section, SectionIndex};
