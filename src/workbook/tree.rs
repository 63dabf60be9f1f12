use crate::workbook::ExerciseRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Exercise title -> site-relative exercise URL, in landing-page order
pub type ExerciseLinks = IndexMap<String, String>;

/// Section title -> exercise links, in landing-page order
pub type SectionIndex = IndexMap<String, ExerciseLinks>;

/// Scraped exercises of one section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub exercises: IndexMap<String, ExerciseRecord>,
}

/// Ordered tree of every scraped section
///
/// Insertion order is preserved and is the order every serializer renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrapeTree {
    sections: IndexMap<String, Section>,
}

impl ScrapeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the section with the given title, creating it at the end if absent
    pub fn section_mut(&mut self, title: &str) -> &mut Section {
        self.sections.entry(title.to_string()).or_default()
    }

    /// Records the outcome of one exercise, replacing any earlier record of the same title
    pub fn record(&mut self, section: &str, exercise: &str, record: ExerciseRecord) {
        self.section_mut(section)
            .exercises
            .insert(exercise.to_string(), record);
    }

    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.get(title)
    }

    pub fn exercise(&self, section: &str, exercise: &str) -> Option<&ExerciseRecord> {
        self.section(section)?.exercises.get(exercise)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&String, &Section)> {
        self.sections.iter()
    }

    /// Number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of exercise records across all sections
    pub fn exercise_count(&self) -> usize {
        self.sections.values().map(|s| s.exercises.len()).sum()
    }

    /// Number of exercise records holding an error
    pub fn failed_count(&self) -> usize {
        self.sections
            .values()
            .flat_map(|s| s.exercises.values())
            .filter(|r| r.is_failed())
            .count()
    }
}
