//! Exam command tests.

mod common;

use std::fs;

use chrono::{Duration, NaiveDate, Utc};
use gift_bank::commands::{exam, CommandError};
use gift_bank::store::BankRepository;
use gift_core::exam::ExamRequest;
use gift_core::types::{Exam, QuestionType};
use gift_core::ExamError;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use common::fixtures;
use common::TestContext;

fn seeded_bank(ctx: &TestContext, count: usize) {
    let mut bank = fixtures::question_bank(count);
    ctx.store.save_questions(&mut bank).unwrap();
}

#[test]
fn test_generate_default_count_and_store() {
    let ctx = TestContext::new();
    seeded_bank(&ctx, 30);
    let mut rng = StdRng::seed_from_u64(7);

    let generated = exam::generate(&ctx.store, &ExamRequest::default(), &mut rng).unwrap();
    assert_eq!(generated.questions.len(), 15);
    assert!(generated.id.starts_with("exam_"));

    let mut titles: Vec<_> = generated.questions.iter().map(|q| q.title.clone()).collect();
    titles.sort();
    titles.dedup();
    assert_eq!(titles.len(), 15);

    let stored = exam::list(&ctx.store, None);
    assert_eq!(stored, vec![generated]);
}

#[test]
fn test_generate_ids_are_unique() {
    let ctx = TestContext::new();
    seeded_bank(&ctx, 20);
    let mut rng = StdRng::seed_from_u64(1);

    let first = exam::generate(&ctx.store, &ExamRequest::default(), &mut rng).unwrap();
    let second = exam::generate(&ctx.store, &ExamRequest::default(), &mut rng).unwrap();
    assert_ne!(first.id, second.id);
    assert_eq!(exam::list(&ctx.store, None).len(), 2);
}

#[test]
fn test_generate_rejects_out_of_range_count() {
    let ctx = TestContext::new();
    seeded_bank(&ctx, 30);
    let mut rng = StdRng::seed_from_u64(7);

    let request = ExamRequest {
        count: Some(21),
        keyword: None,
    };
    let result = exam::generate(&ctx.store, &request, &mut rng);
    assert!(matches!(
        result,
        Err(CommandError::Exam(ExamError::InvalidCount { count: 21, .. }))
    ));
    assert!(exam::list(&ctx.store, None).is_empty());
}

#[test]
fn test_generate_with_small_bank() {
    let ctx = TestContext::new();
    seeded_bank(&ctx, 10);
    let mut rng = StdRng::seed_from_u64(7);

    let result = exam::generate(&ctx.store, &ExamRequest::default(), &mut rng);
    assert!(matches!(
        result,
        Err(CommandError::Exam(ExamError::NotEnoughQuestions {
            available: 10,
            requested: 15
        }))
    ));
}

#[test]
fn test_generate_with_keyword() {
    let ctx = TestContext::new();
    // 60 questions, every third one about grammar
    seeded_bank(&ctx, 60);
    let mut rng = StdRng::seed_from_u64(3);

    let request = ExamRequest {
        count: Some(16),
        keyword: Some("GRAMMAR".to_string()),
    };
    let generated = exam::generate(&ctx.store, &request, &mut rng).unwrap();
    assert_eq!(generated.questions.len(), 16);
    assert!(generated.questions.iter().all(|q| q.text.contains("grammar")));

    let request = ExamRequest {
        count: Some(15),
        keyword: Some("history".to_string()),
    };
    let result = exam::generate(&ctx.store, &request, &mut rng);
    assert!(matches!(
        result,
        Err(CommandError::Exam(ExamError::NotEnoughMatching { available: 0, .. }))
    ));
}

#[test]
fn test_export_writes_gift_file() {
    let ctx = TestContext::new();
    seeded_bank(&ctx, 15);
    let mut rng = StdRng::seed_from_u64(11);
    let generated = exam::generate(&ctx.store, &ExamRequest::default(), &mut rng).unwrap();

    let path = exam::export(&ctx.store, &generated.id, &ctx.export_dir()).unwrap();
    assert_eq!(path, ctx.export_dir().join(format!("{}.gift", generated.id)));

    let content = fs::read_to_string(&path).unwrap();
    let blocks: Vec<_> = content.split("\n\n").collect();
    assert_eq!(blocks.len(), 15);

    let first = &generated.questions[0];
    assert_eq!(blocks[0], format!("::{}:: {} {{}}", first.title, first.text));
}

#[test]
fn test_unknown_exam_id() {
    let ctx = TestContext::new();
    let result = exam::show(&ctx.store, "exam_0");
    assert!(matches!(result, Err(CommandError::Exam(ExamError::NotFound(_)))));

    let result = exam::export(&ctx.store, "exam_0", &ctx.export_dir());
    assert!(result.is_err());
    assert!(!ctx.export_dir().exists());
}

#[test]
fn test_profile_counts_types_and_themes() {
    let ctx = TestContext::new();
    seeded_bank(&ctx, 20);
    let mut rng = StdRng::seed_from_u64(5);
    let request = ExamRequest {
        count: Some(20),
        keyword: None,
    };
    let generated = exam::generate(&ctx.store, &request, &mut rng).unwrap();

    let profile = exam::profile(&ctx.store, &generated.id).unwrap();
    assert_eq!(profile.id, generated.id);
    assert_eq!(profile.types.len(), QuestionType::ALL.len());

    let multiple_choice = profile
        .types
        .iter()
        .find(|(t, _)| *t == QuestionType::MultipleChoice)
        .map(|(_, c)| *c);
    assert_eq!(multiple_choice, Some(20));

    // Even numbers carry the "Voc" theme, odd ones none
    let mut themes = profile.themes.clone();
    themes.sort();
    assert_eq!(themes, vec![("Voc".to_string(), 10), ("unknown".to_string(), 10)]);
}

#[test]
fn test_list_since_date() {
    let ctx = TestContext::new();
    let now = Utc::now();
    let old = Exam {
        id: "exam_old".to_string(),
        date: now - Duration::days(10),
        questions: Vec::new(),
    };
    let recent = Exam {
        id: "exam_recent".to_string(),
        date: now,
        questions: Vec::new(),
    };
    ctx.store.append_exam(&old).unwrap();
    ctx.store.append_exam(&recent).unwrap();

    let since = (now - Duration::days(1)).date_naive();
    let listed = exam::list(&ctx.store, Some(since));
    assert_eq!(listed, vec![recent.clone()]);

    let everything = exam::list(&ctx.store, NaiveDate::from_ymd_opt(2000, 1, 1));
    assert_eq!(everything, vec![old, recent]);
}
