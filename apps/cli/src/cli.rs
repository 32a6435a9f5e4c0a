//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gift_core::types::QuestionType;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "gift-bank", version, about = "Manage a GIFT question bank and run practice exams")]
pub struct Cli {
    /// Directory holding questions.json and exams.json
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Directory of .gift files to import
    #[arg(long, global = true)]
    pub source_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Work with the question bank
    #[command(subcommand)]
    Questions(QuestionsCommand),

    /// Work with exams
    #[command(subcommand)]
    Exam(ExamCommand),
}

#[derive(Debug, Subcommand)]
pub enum QuestionsCommand {
    /// List every question in the bank
    List,
    /// Import .gift files, skipping bodies already in the bank
    Import {
        /// Directory to read instead of the configured source directory
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Add a question by hand
    Add {
        #[arg(long)]
        text: String,
        /// Question type; classified from the text when omitted
        #[arg(long = "type", value_parser = parse_question_type)]
        question_type: Option<QuestionType>,
    },
    /// Delete the first question with this exact title
    Delete {
        #[arg(long)]
        title: String,
    },
    /// Remove questions with duplicate titles
    Deduplicate,
    /// Search question text (case-insensitive)
    Search { keyword: String },
    /// Show a question by its number in the bank
    Show { number: usize },
    /// Count questions per type
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum ExamCommand {
    /// Draw a random exam from the bank
    Generate(GenerateArgs),
    /// List exams
    List {
        /// Only exams created on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        since: Option<NaiveDate>,
    },
    /// Show an exam's questions
    Show { id: String },
    /// Export an exam as GIFT
    Export {
        id: String,
        /// Output directory instead of the configured export directory
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Take an exam interactively
    Simulate { id: String },
    /// Count an exam's questions per type and theme
    Profile { id: String },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of questions (15 to 20)
    #[arg(long)]
    pub count: Option<usize>,
    /// Only draw questions containing this keyword
    #[arg(long)]
    pub keyword: Option<String>,
}

fn parse_question_type(s: &str) -> Result<QuestionType, String> {
    QuestionType::from_label(s).ok_or_else(|| {
        let known: Vec<_> = QuestionType::ALL.iter().map(|t| t.as_str()).collect();
        format!("unknown question type '{}', expected one of {}", s, known.join(", "))
    })
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_type() {
        let cli = Cli::try_parse_from([
            "gift-bank", "questions", "add", "--text", "Is it? {T}", "--type", "Short Answer",
        ])
        .unwrap();
        match cli.command {
            Command::Questions(QuestionsCommand::Add { text, question_type }) => {
                assert_eq!(text, "Is it? {T}");
                assert_eq!(question_type, Some(QuestionType::ShortAnswer));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_type() {
        let result = Cli::try_parse_from(["gift-bank", "questions", "add", "--text", "x", "--type", "Poem"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_since_date_and_global_flags() {
        let cli = Cli::try_parse_from([
            "gift-bank", "exam", "list", "--since", "2024-12-01", "--data-dir", "/tmp/bank",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/bank")));
        match cli.command {
            Command::Exam(ExamCommand::List { since }) => {
                assert_eq!(since, NaiveDate::from_ymd_opt(2024, 12, 1));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
