//! Question bank operations.
//!
//! Two equality notions coexist: imports merge by exact body text while
//! deduplication compares titles. They are kept as separate operations.

use crate::classifier::classify;
use crate::types::{Question, QuestionType};
use std::collections::HashSet;

/// Give every blank-titled question `Question {position}` (1-based).
///
/// Titles that were already set are never touched, so they are the only ones
/// guaranteed to stay stable across saves.
pub fn assign_titles(questions: &mut [Question]) {
    for (idx, question) in questions.iter_mut().enumerate() {
        if question.has_blank_title() {
            question.title = format!("Question {}", idx + 1);
        }
    }
}

/// Append imported questions whose body text is not already in the bank.
///
/// Returns the number of questions appended.
pub fn merge_by_body_text(existing: &mut Vec<Question>, imported: Vec<Question>) -> usize {
    let mut seen: HashSet<String> = existing.iter().map(|q| q.text.clone()).collect();
    let before = existing.len();

    for question in imported {
        if seen.insert(question.text.clone()) {
            existing.push(question);
        }
    }

    existing.len() - before
}

/// Drop every question whose title was already seen, keeping the first.
///
/// Returns `true` if at least one duplicate was removed.
pub fn dedupe_by_title(questions: &mut Vec<Question>) -> bool {
    let mut seen = HashSet::new();
    let before = questions.len();
    questions.retain(|q| seen.insert(q.title.clone()));
    questions.len() != before
}

/// Remove the first question with exactly this title.
pub fn delete_by_title(questions: &mut Vec<Question>, title: &str) -> Option<Question> {
    let idx = questions.iter().position(|q| q.title == title)?;
    Some(questions.remove(idx))
}

/// Append a manually written question.
///
/// The title is `Question {len + 1}`, bumped until it is free. Without an
/// explicit type the classifier decides.
pub fn add_question<'a>(
    questions: &'a mut Vec<Question>,
    text: &str,
    question_type: Option<QuestionType>,
) -> &'a Question {
    let taken: HashSet<&str> = questions.iter().map(|q| q.title.as_str()).collect();
    let mut number = questions.len() + 1;
    while taken.contains(format!("Question {}", number).as_str()) {
        number += 1;
    }

    let text = text.trim();
    let question_type = question_type.unwrap_or_else(|| classify(text));
    questions.push(Question::new(format!("Question {}", number), text, question_type));

    &questions[questions.len() - 1]
}

/// Case-insensitive keyword search on question text.
pub fn search<'a>(questions: &'a [Question], keyword: &str) -> Vec<&'a Question> {
    let keyword = keyword.to_lowercase();
    questions
        .iter()
        .filter(|q| q.text.to_lowercase().contains(&keyword))
        .collect()
}

/// Look up a question by its 1-based position.
pub fn find_by_number(questions: &[Question], number: usize) -> Option<&Question> {
    number.checked_sub(1).and_then(|idx| questions.get(idx))
}

/// Count questions per type, in first-seen order.
pub fn type_counts(questions: &[Question]) -> Vec<(QuestionType, usize)> {
    let mut counts: Vec<(QuestionType, usize)> = Vec::new();
    for question in questions {
        match counts.iter_mut().find(|(t, _)| *t == question.question_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((question.question_type, 1)),
        }
    }
    counts
}
