//! JSON file persistence for the question bank and exams.

pub mod error;
pub mod repository;

pub use error::StoreError;
pub use repository::{BankRepository, JsonStore, EXAMS_FILE, QUESTIONS_FILE};
