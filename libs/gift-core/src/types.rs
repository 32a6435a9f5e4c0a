//! Core types for the question bank.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse question type assigned by the classifier at import time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    MultipleChoice,
    ShortAnswer,
    Matching,
    Essay,
    Fill,
    Numeric,
    TrueFalse,
    Unknown,
}

impl Default for QuestionType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl QuestionType {
    /// Every type, in reporting order.
    pub const ALL: [QuestionType; 8] = [
        Self::MultipleChoice,
        Self::ShortAnswer,
        Self::Matching,
        Self::Essay,
        Self::Fill,
        Self::Numeric,
        Self::TrueFalse,
        Self::Unknown,
    ];

    /// Get the persisted label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "MultipleChoice",
            Self::ShortAnswer => "ShortAnswer",
            Self::Matching => "Matching",
            Self::Essay => "Essay",
            Self::Fill => "Fill",
            Self::Numeric => "Numeric",
            Self::TrueFalse => "TrueFalse",
            Self::Unknown => "Unknown",
        }
    }

    /// Parse a label. Accepts the spaced spellings of older banks.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "MultipleChoice" | "Multiple Choice" => Some(Self::MultipleChoice),
            "ShortAnswer" | "Short Answer" => Some(Self::ShortAnswer),
            "Matching" => Some(Self::Matching),
            "Essay" => Some(Self::Essay),
            "Fill" => Some(Self::Fill),
            "Numeric" => Some(Self::Numeric),
            "TrueFalse" | "True False" => Some(Self::TrueFalse),
            "Unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl From<String> for QuestionType {
    fn from(s: String) -> Self {
        Self::from_label(&s).unwrap_or_default()
    }
}

impl From<QuestionType> for String {
    fn from(t: QuestionType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A question record as stored in the bank.
///
/// `text` is the raw markup body, answer block included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub theme: String,
    #[serde(rename = "type", default)]
    pub question_type: QuestionType,
}

impl Question {
    pub fn new(title: impl Into<String>, text: impl Into<String>, question_type: QuestionType) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            theme: String::new(),
            question_type,
        }
    }

    /// Set the theme (builder style).
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    /// Whether the title is missing or whitespace only.
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// A generated exam. Questions are snapshots, later bank edits do not reach them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub date: DateTime<Utc>,
    pub questions: Vec<Question>,
}
