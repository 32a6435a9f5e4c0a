//! Question type classification.
//!
//! Rules are checked in a fixed order and the first match wins. Marker rules
//! come before the length rule so a long multiple-choice question stays
//! `MultipleChoice`.

use crate::types::QuestionType;

/// Bodies longer than this (in characters) are treated as essays.
pub const ESSAY_MIN_LENGTH: usize = 150;

const TRUE_FALSE_MARKERS: [&str; 4] = ["{T}", "{F}", "{TRUE}", "{FALSE}"];

/// Classify a question body.
pub fn classify(text: &str) -> QuestionType {
    if TRUE_FALSE_MARKERS.iter().any(|m| text.contains(m)) {
        QuestionType::TrueFalse
    } else if text.contains("{1:MC:") || text.contains('~') {
        QuestionType::MultipleChoice
    } else if text.contains("{#") {
        QuestionType::Numeric
    } else if has_arrow_pair(text) {
        QuestionType::Matching
    } else if text.contains("{=") {
        QuestionType::Fill
    } else if text.chars().count() > ESSAY_MIN_LENGTH {
        QuestionType::Essay
    } else if text.contains("{1:SA:") {
        QuestionType::ShortAnswer
    } else {
        QuestionType::Unknown
    }
}

/// Whether some `{...}` group contains a `->` pair.
fn has_arrow_pair(text: &str) -> bool {
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                if after[..close].contains("->") {
                    return true;
                }
                rest = &after[close + 1..];
            }
            None => return false,
        }
    }
    false
}
