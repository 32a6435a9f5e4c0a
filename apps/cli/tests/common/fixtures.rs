//! Test fixtures and factory functions for creating test data.

use gift_core::types::{Question, QuestionType};

/// Generate GIFT content with a specified number of fill-in blocks.
///
/// # Arguments
/// * `num_questions` - Number of blocks to generate
/// * `offset` - Added to every number so separate files get distinct bodies
/// * `with_titles` - Whether to include `::title::` labels
pub fn sample_gift_content(num_questions: usize, offset: usize, with_titles: bool) -> String {
    (0..num_questions)
        .map(|i| {
            let n = i + offset + 1;
            if with_titles {
                format!("::Item {}:: What is {} plus {}? {{={}}}\n", n, n, n, n * 2)
            } else {
                format!("What is {} plus {}? {{={}}}\n", n, n, n * 2)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A bank of `count` multiple choice questions, every third one about grammar.
pub fn question_bank(count: usize) -> Vec<Question> {
    (1..=count)
        .map(|n| {
            let topic = if n % 3 == 0 { "grammar" } else { "vocabulary" };
            Question::new(
                format!("Question {}", n),
                format!("A {} question number {} {{={} ~wrong}}", topic, n, n),
                QuestionType::MultipleChoice,
            )
            .with_theme(if n % 2 == 0 { "Voc" } else { "" })
        })
        .collect()
}
