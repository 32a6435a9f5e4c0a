//! Error types for gift-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading markup sources.
///
/// Content that simply contains no questions is not an error.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("source directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while assembling or looking up exams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExamError {
    #[error("question count must be between {min} and {max}, got {count}")]
    InvalidCount { count: usize, min: usize, max: usize },

    #[error("not enough questions to build an exam: {available} available, {requested} requested")]
    NotEnoughQuestions { available: usize, requested: usize },

    #[error("not enough questions matching \"{keyword}\": {available} available, {requested} requested")]
    NotEnoughMatching {
        keyword: String,
        available: usize,
        requested: usize,
    },

    #[error("exam not found: {0}")]
    NotFound(String),
}

/// Errors raised by a quiz session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz already finished after {total} questions")]
    Finished { total: usize },
}
