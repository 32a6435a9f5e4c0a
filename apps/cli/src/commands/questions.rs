//! Question bank commands.

use gift_core::bank::{self, add_question, delete_by_title, dedupe_by_title, merge_by_body_text};
use gift_core::parser::parse_directory;
use gift_core::types::{Question, QuestionType};
use std::path::Path;

use super::{persist, CommandError, Result};
use crate::store::BankRepository;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ImportResult {
    /// Questions read from the source directory.
    pub parsed: usize,
    /// Questions actually added to the bank.
    pub imported: usize,
    /// Bank size after the import.
    pub total: usize,
}

/// Import every `.gift` file of `dir`, skipping bodies already in the bank.
///
/// A missing directory is logged and imports nothing. Files that cannot be
/// read are logged and skipped; the rest are still imported.
pub fn import<S: BankRepository>(store: &S, dir: &Path) -> Result<ImportResult> {
    let parsed = match parse_directory(dir) {
        Ok(parsed) => {
            for e in &parsed.skipped {
                tracing::warn!("skipped: {}", e);
            }
            parsed.questions
        }
        Err(e) => {
            tracing::warn!("nothing imported: {}", e);
            Vec::new()
        }
    };

    let parsed_count = parsed.len();
    let mut questions = store.load_questions();
    let imported = merge_by_body_text(&mut questions, parsed);

    if imported > 0 {
        persist(store.save_questions(&mut questions))?;
    }

    tracing::info!(
        "imported {} new questions from {} ({} parsed)",
        imported,
        dir.display(),
        parsed_count
    );

    Ok(ImportResult {
        parsed: parsed_count,
        imported,
        total: questions.len(),
    })
}

pub fn list<S: BankRepository>(store: &S) -> Vec<Question> {
    store.load_questions()
}

/// Add a question by hand. The type is classified when not given.
pub fn add<S: BankRepository>(
    store: &S,
    text: &str,
    question_type: Option<QuestionType>,
) -> Result<Question> {
    let mut questions = store.load_questions();
    let added = add_question(&mut questions, text, question_type).clone();
    persist(store.save_questions(&mut questions))?;

    tracing::info!("added question \"{}\" as {}", added.title, added.question_type);
    Ok(added)
}

/// Delete the first question with exactly this title.
pub fn delete<S: BankRepository>(store: &S, title: &str) -> Result<Question> {
    let mut questions = store.load_questions();
    let removed = delete_by_title(&mut questions, title)
        .ok_or_else(|| CommandError::NotFound(format!("question titled \"{}\"", title)))?;
    persist(store.save_questions(&mut questions))?;

    tracing::info!("deleted question \"{}\", {} remaining", title, questions.len());
    Ok(removed)
}

/// Remove questions with repeated titles. Returns `false` when none were found.
pub fn deduplicate<S: BankRepository>(store: &S) -> Result<bool> {
    let mut questions = store.load_questions();
    let before = questions.len();

    if !dedupe_by_title(&mut questions) {
        return Ok(false);
    }
    persist(store.save_questions(&mut questions))?;

    tracing::info!("removed {} duplicate questions", before - questions.len());
    Ok(true)
}

pub fn search<S: BankRepository>(store: &S, keyword: &str) -> Vec<Question> {
    let questions = store.load_questions();
    bank::search(&questions, keyword).into_iter().cloned().collect()
}

/// Look up a question by its 1-based number in the bank.
pub fn show<S: BankRepository>(store: &S, number: usize) -> Result<Question> {
    let questions = store.load_questions();
    bank::find_by_number(&questions, number)
        .cloned()
        .ok_or_else(|| CommandError::NotFound(format!("question number {}", number)))
}

/// Type distribution of the bank.
pub fn stats<S: BankRepository>(store: &S) -> Vec<(QuestionType, usize)> {
    bank::type_counts(&store.load_questions())
}
