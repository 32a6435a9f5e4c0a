//! Exam commands.

use chrono::{NaiveDate, Utc};
use gift_core::exam::{self, export_gift, find_exam, ExamRequest};
use gift_core::types::{Exam, QuestionType};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

use super::{persist, Result};
use crate::store::BankRepository;

/// Draw a new exam from the bank and store it.
pub fn generate<S: BankRepository, R: Rng>(
    store: &S,
    request: &ExamRequest,
    rng: &mut R,
) -> Result<Exam> {
    let questions = store.load_questions();
    let exams = store.load_exams();
    let existing_ids: Vec<&str> = exams.iter().map(|e| e.id.as_str()).collect();

    let exam = exam::generate(&questions, request, &existing_ids, rng, Utc::now())?;
    persist(store.append_exam(&exam))?;

    tracing::info!("generated exam {} with {} questions", exam.id, exam.questions.len());
    Ok(exam)
}

/// All exams, or those created on or after `since`.
pub fn list<S: BankRepository>(store: &S, since: Option<NaiveDate>) -> Vec<Exam> {
    let exams = store.load_exams();
    match since {
        Some(date) => exam::exams_since(&exams, date).into_iter().cloned().collect(),
        None => exams,
    }
}

pub fn show<S: BankRepository>(store: &S, id: &str) -> Result<Exam> {
    let exams = store.load_exams();
    Ok(find_exam(&exams, id)?.clone())
}

/// Write an exam to `{out_dir}/{id}.gift` and return the path.
pub fn export<S: BankRepository>(store: &S, id: &str, out_dir: &Path) -> Result<PathBuf> {
    let exam = show(store, id)?;

    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(format!("{}.gift", exam.id));
    fs::write(&path, export_gift(&exam))?;

    tracing::info!("exported exam {} to {}", exam.id, path.display());
    Ok(path)
}

/// Type and theme breakdown of an exam.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExamProfile {
    pub id: String,
    pub types: Vec<(QuestionType, usize)>,
    pub themes: Vec<(String, usize)>,
}

pub fn profile<S: BankRepository>(store: &S, id: &str) -> Result<ExamProfile> {
    let exam = show(store, id)?;
    Ok(ExamProfile {
        types: exam::type_profile(&exam),
        themes: exam::theme_profile(&exam),
        id: exam.id,
    })
}
