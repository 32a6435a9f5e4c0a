//! Core question bank library for GIFT quiz files.
//!
//! Provides:
//! - GIFT markup tokenizer and directory import
//! - Question type classification
//! - Answer extraction and grading for quiz mode
//! - Bank operations (title assignment, merge, dedupe)
//! - Exam generation and GIFT export
//! - Shared types (Question, QuestionType, Exam)

pub mod answers;
pub mod bank;
pub mod classifier;
pub mod error;
pub mod exam;
pub mod parser;
pub mod quiz;
pub mod types;

pub use answers::{accepted_answers, display_text, grade, lex_answers, AnswerKey, AnswerToken, UNKNOWN_ANSWER};
pub use bank::{assign_titles, dedupe_by_title, merge_by_body_text};
pub use classifier::classify;
pub use error::{ExamError, ParseError, QuizError, Result};
pub use exam::{export_gift, generate, ExamRequest};
pub use parser::{extract_theme, parse, parse_directory, parse_file, DirectoryParse};
pub use quiz::{QuizItem, QuizSession, Verdict};
pub use types::{Exam, Question, QuestionType};
