use serde::{Deserialize, Serialize};

/// Question and answer text pulled from an exercise page
///
/// Either field is `None` when its region is missing from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExerciseContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl ExerciseContent {
    /// Question text, treating an empty region as missing
    pub fn question_text(&self) -> Option<&str> {
        non_empty(self.question.as_deref())
    }

    /// Answer text, treating an empty region as missing
    pub fn answer_text(&self) -> Option<&str> {
        non_empty(self.answer.as_deref())
    }
}

/// Outcome of extracting a single exercise
///
/// Serialized without a tag: `{"error": ...}` for failures and
/// `{"question": ..., "answer": ...}` for content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExerciseRecord {
    /// Extraction raised; the message is kept instead of any content
    Failed { error: String },

    /// Extraction succeeded, possibly with regions missing
    Content(ExerciseContent),
}

impl ExerciseRecord {
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// Answer text to render, if any
    pub fn answer_text(&self) -> Option<&str> {
        match self {
            Self::Content(content) => content.answer_text(),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl From<ExerciseContent> for ExerciseRecord {
    fn from(content: ExerciseContent) -> Self {
        Self::Content(content)
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}
