//! Quiz sessions over a fixed list of questions.
//!
//! The session only grades. Showing prompts and reading input is left to the
//! caller, one question at a time.

use crate::answers::{display_text, AnswerKey};
use crate::error::QuizError;
use crate::types::Question;
use serde::Serialize;

/// One question as presented to the quiz taker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    pub title: String,
    pub prompt: String,
    /// Display form of the key, `["unknown"]` when nothing was extracted.
    pub accepted: Vec<String>,
    /// Grade with this rather than with `accepted`.
    pub key: AnswerKey,
}

/// Outcome of a submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub correct: bool,
    /// Running score after this answer.
    pub score: usize,
    /// Questions answered so far.
    pub answered: usize,
}

/// Running quiz state.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    index: usize,
    score: usize,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            index: 0,
            score: 0,
        }
    }

    /// The question waiting for an answer, if any.
    pub fn current(&self) -> Option<QuizItem> {
        self.questions.get(self.index).map(|q| {
            let key = AnswerKey::for_question(&q.text, q.question_type);
            QuizItem {
                title: q.title.clone(),
                prompt: display_text(&q.text, q.question_type),
                accepted: key.answers(),
                key,
            }
        })
    }

    /// Grade `input` against the current question and move on.
    pub fn submit(&mut self, input: &str) -> Result<Verdict, QuizError> {
        let question = self.questions.get(self.index).ok_or(QuizError::Finished {
            total: self.questions.len(),
        })?;

        let correct = AnswerKey::for_question(&question.text, question.question_type).is_correct(input);
        if correct {
            self.score += 1;
        }
        self.index += 1;

        Ok(Verdict {
            correct,
            score: self.score,
            answered: self.index,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.questions.len()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}
