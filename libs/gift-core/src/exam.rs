//! Exam assembly, lookup and export.

use crate::error::ExamError;
use crate::types::{Exam, Question, QuestionType};
use chrono::{DateTime, NaiveDate, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Smallest allowed exam.
pub const MIN_QUESTIONS: usize = 15;
/// Largest allowed exam.
pub const MAX_QUESTIONS: usize = 20;

/// Theme label reported for questions without one.
const UNKNOWN_THEME: &str = "unknown";

/// Parameters for exam generation.
#[derive(Debug, Clone, Default)]
pub struct ExamRequest {
    /// Number of questions, defaults to [`MIN_QUESTIONS`].
    pub count: Option<usize>,
    /// Only questions whose text contains this (case-insensitive).
    pub keyword: Option<String>,
}

/// Build the id for an exam created at `now`.
///
/// Ids are `exam_{epoch millis}`; on collision the millisecond value is bumped.
pub fn exam_id(now: DateTime<Utc>, existing_ids: &[&str]) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let id = format!("exam_{}", millis);
        if !existing_ids.contains(&id.as_str()) {
            return id;
        }
        millis += 1;
    }
}

/// Draw a random exam from the bank.
pub fn generate<R: Rng + ?Sized>(
    bank: &[Question],
    request: &ExamRequest,
    existing_ids: &[&str],
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<Exam, ExamError> {
    let count = request.count.unwrap_or(MIN_QUESTIONS);
    if !(MIN_QUESTIONS..=MAX_QUESTIONS).contains(&count) {
        return Err(ExamError::InvalidCount {
            count,
            min: MIN_QUESTIONS,
            max: MAX_QUESTIONS,
        });
    }

    if bank.len() < count {
        return Err(ExamError::NotEnoughQuestions {
            available: bank.len(),
            requested: count,
        });
    }

    let mut pool: Vec<&Question> = match &request.keyword {
        Some(keyword) => {
            let keyword = keyword.to_lowercase();
            let matching: Vec<&Question> = bank
                .iter()
                .filter(|q| q.text.to_lowercase().contains(&keyword))
                .collect();
            if matching.len() < count {
                return Err(ExamError::NotEnoughMatching {
                    keyword,
                    available: matching.len(),
                    requested: count,
                });
            }
            matching
        }
        None => bank.iter().collect(),
    };

    pool.shuffle(rng);

    Ok(Exam {
        id: exam_id(now, existing_ids),
        date: now,
        questions: pool.into_iter().take(count).cloned().collect(),
    })
}

/// Render an exam as GIFT markup.
///
/// Answer blocks are not reproduced: each body is followed by an empty `{}`.
pub fn export_gift(exam: &Exam) -> String {
    exam.questions
        .iter()
        .map(|q| format!("::{}:: {} {{}}", q.title, q.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Find an exam by id.
pub fn find_exam<'a>(exams: &'a [Exam], id: &str) -> Result<&'a Exam, ExamError> {
    exams
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| ExamError::NotFound(id.to_string()))
}

/// Exams created on or after the start of `date` (UTC).
pub fn exams_since(exams: &[Exam], date: NaiveDate) -> Vec<&Exam> {
    exams.iter().filter(|e| e.date.date_naive() >= date).collect()
}

/// Count an exam's questions for every type, in [`QuestionType::ALL`] order.
pub fn type_profile(exam: &Exam) -> Vec<(QuestionType, usize)> {
    QuestionType::ALL
        .iter()
        .map(|t| {
            let count = exam.questions.iter().filter(|q| q.question_type == *t).count();
            (*t, count)
        })
        .collect()
}

/// Count an exam's questions per theme, in first-seen order.
pub fn theme_profile(exam: &Exam) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for question in &exam.questions {
        let theme = match question.theme.trim() {
            "" => UNKNOWN_THEME,
            theme => theme,
        };
        match counts.iter_mut().find(|(t, _)| t == theme) {
            Some((_, count)) => *count += 1,
            None => counts.push((theme.to_string(), 1)),
        }
    }
    counts
}
