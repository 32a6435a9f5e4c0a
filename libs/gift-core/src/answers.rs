//! Answer extraction and grading for quiz mode.
//!
//! Accepted answers are re-derived from the markup body at quiz time. The
//! extraction is a heuristic: it looks for the first `=` followed by a
//! recognisable answer span, then splits that span on the answer delimiters.

use crate::types::QuestionType;
use serde::Serialize;

/// Placeholder answer used when no extraction is attempted or none is found.
pub const UNKNOWN_ANSWER: &str = "unknown";

/// Characters that separate answer words inside a raw span.
const SEPARATORS: [char; 7] = ['=', '~', '{', '}', '|', '\n', '\r'];

/// Token produced by the answer lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerToken {
    Word(String),
    Separator(char),
}

/// Split a raw answer span into words and separators.
///
/// Spaces are not separators, so `"cat =dog"` yields the word `"cat "`.
pub fn lex_answers(raw: &str) -> Vec<AnswerToken> {
    let mut tokens = Vec::new();
    let mut word = String::new();

    for c in raw.chars() {
        if SEPARATORS.contains(&c) {
            if !word.is_empty() {
                tokens.push(AnswerToken::Word(std::mem::take(&mut word)));
            }
            tokens.push(AnswerToken::Separator(c));
        } else {
            word.push(c);
        }
    }

    if !word.is_empty() {
        tokens.push(AnswerToken::Word(word));
    }

    tokens
}

/// The answers a question can be graded against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "answers", rename_all = "lowercase")]
pub enum AnswerKey {
    /// Answers recovered from the markup.
    Accepted(Vec<String>),
    /// Nothing was extracted; every input is wrong.
    Sentinel,
}

impl AnswerKey {
    /// Build the key for a question body.
    pub fn for_question(text: &str, question_type: QuestionType) -> Self {
        match question_type {
            // Short answers are not extracted yet, they grade like unknowns.
            QuestionType::ShortAnswer | QuestionType::Unknown => Self::Sentinel,
            _ => {
                let words: Vec<String> = raw_answer_span(text)
                    .map(lex_answers)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|token| match token {
                        AnswerToken::Word(w) => Some(w),
                        AnswerToken::Separator(_) => None,
                    })
                    .collect();

                if words.is_empty() {
                    Self::Sentinel
                } else {
                    Self::Accepted(words)
                }
            }
        }
    }

    /// Accepted answers, the sentinel yields `["unknown"]`.
    pub fn answers(&self) -> Vec<String> {
        match self {
            Self::Accepted(words) => words.clone(),
            Self::Sentinel => vec![UNKNOWN_ANSWER.to_string()],
        }
    }

    /// Exact, case- and whitespace-sensitive check.
    pub fn is_correct(&self, input: &str) -> bool {
        match self {
            Self::Accepted(words) => grade(input, words),
            Self::Sentinel => false,
        }
    }
}

/// Accepted answers for a question body.
pub fn accepted_answers(text: &str, question_type: QuestionType) -> Vec<String> {
    AnswerKey::for_question(text, question_type).answers()
}

/// Whether `input` is one of the accepted answers.
///
/// This is plain membership: the sentinel list `["unknown"]` accepts
/// `"unknown"`. Grade through [`AnswerKey::is_correct`] when the list may be
/// a sentinel.
pub fn grade(input: &str, accepted: &[String]) -> bool {
    accepted.iter().any(|a| a == input)
}

/// Prompt shown to the quiz taker.
///
/// Short answers show only the text before the answer block; other types show
/// the whole body with `~` and `=` blanked out.
pub fn display_text(text: &str, question_type: QuestionType) -> String {
    match question_type {
        QuestionType::ShortAnswer => match text.find('{') {
            Some(open) => text[..open].to_string(),
            None => text.to_string(),
        },
        _ => text.replace(['~', '='], " "),
    }
}

/// Find the raw answer span following the first usable `=`.
fn raw_answer_span(text: &str) -> Option<&str> {
    text.match_indices('=')
        .find_map(|(idx, _)| span_after_equals(&text[idx + 1..]))
}

/// Try the span alternatives in order on the text right after an `=`.
fn span_after_equals(rest: &str) -> Option<&str> {
    // A single word directly followed by the next wrong choice
    let run_end = rest.find(' ').unwrap_or(rest.len());
    if run_end > 0 && rest[run_end..].starts_with(" ~") {
        return Some(&rest[..run_end]);
    }

    let line_end = rest.find(['\n', '\r']).unwrap_or(rest.len());
    let line = &rest[..line_end];

    if let Some(dot) = line.find('.') {
        return Some(&line[..=dot]);
    }
    if let Some(end) = line.find(['.', '~']) {
        return Some(&line[..end]);
    }
    line.find(['.', '}']).map(|end| &line[..end])
}
