//! Repository pattern for bank persistence.

use crate::store::error::StoreError;
use gift_core::bank::assign_titles;
use gift_core::types::{Exam, Question};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, StoreError>;

/// File holding the question bank.
pub const QUESTIONS_FILE: &str = "questions.json";
/// File holding generated exams.
pub const EXAMS_FILE: &str = "exams.json";

/// Persistence for questions and exams.
///
/// Reads never fail: a missing or unreadable file is an empty collection.
/// Writes replace the whole file.
pub trait BankRepository {
    fn load_questions(&self) -> Vec<Question>;
    /// Assign titles to blank entries, then overwrite the bank.
    fn save_questions(&self, questions: &mut [Question]) -> Result<()>;
    fn load_exams(&self) -> Vec<Exam>;
    fn append_exam(&self, exam: &Exam) -> Result<()>;
}

/// JSON implementation of the repository, one file per collection.
pub struct JsonStore {
    questions_path: PathBuf,
    exams_path: PathBuf,
}

impl JsonStore {
    /// Store rooted at `data_dir`. Nothing is created until the first write.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Self {
        let dir = data_dir.as_ref();
        Self {
            questions_path: dir.join(QUESTIONS_FILE),
            exams_path: dir.join(EXAMS_FILE),
        }
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    pub fn exams_path(&self) -> &Path {
        &self.exams_path
    }

    fn read_list<T: DeserializeOwned>(path: &Path) -> Vec<T> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("{} not found, starting with an empty list", path.display());
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("failed to read {}: {}", path.display(), e);
                return Vec::new();
            }
        };

        serde_json::from_str(&data).unwrap_or_else(|e| {
            tracing::warn!("failed to parse {}: {}", path.display(), e);
            Vec::new()
        })
    }

    fn write_list<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string_pretty(items)?;
        fs::write(path, json).map_err(io_err)
    }
}

impl BankRepository for JsonStore {
    fn load_questions(&self) -> Vec<Question> {
        Self::read_list(&self.questions_path)
    }

    fn save_questions(&self, questions: &mut [Question]) -> Result<()> {
        assign_titles(questions);
        Self::write_list(&self.questions_path, questions)?;
        tracing::debug!("saved {} questions", questions.len());
        Ok(())
    }

    fn load_exams(&self) -> Vec<Exam> {
        Self::read_list(&self.exams_path)
    }

    fn append_exam(&self, exam: &Exam) -> Result<()> {
        let mut exams = self.load_exams();
        exams.push(exam.clone());
        Self::write_list(&self.exams_path, &exams)?;
        tracing::debug!("saved exam {}", exam.id);
        Ok(())
    }
}
