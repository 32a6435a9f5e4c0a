//! Exam simulation tests.

mod common;

use std::io::Cursor;

use chrono::Utc;
use gift_bank::commands::quiz::{simulate, QuizSummary};
use gift_bank::commands::CommandError;
use gift_bank::store::BankRepository;
use gift_core::types::{Exam, Question, QuestionType};
use gift_core::ExamError;
use pretty_assertions::assert_eq;

use common::TestContext;

fn stored_exam(ctx: &TestContext) -> Exam {
    let exam = Exam {
        id: "exam_1".to_string(),
        date: Utc::now(),
        questions: vec![
            Question::new("Q1", "What is 2+2? {=4 ~5 ~6}", QuestionType::MultipleChoice),
            Question::new("Q2", "The sky is blue. {T}", QuestionType::TrueFalse),
            Question::new("Q3", "She {=goes} to school.", QuestionType::Fill),
            Question::new("Q4", "Describe your last holiday.", QuestionType::Unknown),
        ],
    };
    ctx.store.append_exam(&exam).unwrap();
    exam
}

#[test]
fn test_simulate_scores_answers() {
    let ctx = TestContext::new();
    let exam = stored_exam(&ctx);

    let mut input = Cursor::new("4\nT\ngoes\nunknown\n");
    let mut output = Vec::new();
    let summary = simulate(&ctx.store, &exam.id, &mut input, &mut output).unwrap();

    assert_eq!(summary, QuizSummary { score: 2, total: 4 });

    let text = String::from_utf8(output).unwrap();
    assert!(text.starts_with("Exam exam_1 (4 questions)\n"));
    assert_eq!(text.matches("Your answer: ").count(), 4);
    // True/false and unknown questions have no extractable answer
    assert_eq!(text.matches("Correct!").count(), 2);
    assert_eq!(text.matches("Incorrect.").count(), 2);
    assert!(text.ends_with("Quiz finished! Final score: 2 / 4\n"));
}

#[test]
fn test_simulate_answers_are_case_sensitive() {
    let ctx = TestContext::new();
    let exam = stored_exam(&ctx);

    let mut input = Cursor::new("4\nT\nGOES\n");
    let mut output = Vec::new();
    let summary = simulate(&ctx.store, &exam.id, &mut input, &mut output).unwrap();
    assert_eq!(summary, QuizSummary { score: 1, total: 4 });
}

#[test]
fn test_simulate_unknown_exam() {
    let ctx = TestContext::new();
    let mut input = Cursor::new("");
    let mut output = Vec::new();

    let result = simulate(&ctx.store, "exam_missing", &mut input, &mut output);
    assert!(matches!(result, Err(CommandError::Exam(ExamError::NotFound(_)))));
    assert!(output.is_empty());
}
