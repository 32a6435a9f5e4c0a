//! Command handlers behind the CLI.
//!
//! Handlers return data; printing is left to the caller.

pub mod exam;
pub mod questions;
pub mod quiz;

use gift_core::{ExamError, QuizError};
use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Exam(#[from] ExamError),

    #[error("quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, CommandError>;

/// Log a failed write where it happened, then hand it to the caller.
fn persist(result: std::result::Result<(), StoreError>) -> Result<()> {
    result.map_err(|e| {
        tracing::error!("failed to save: {}", e);
        CommandError::Store(e)
    })
}
