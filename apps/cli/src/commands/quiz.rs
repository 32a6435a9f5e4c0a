//! Interactive exam simulation on a line-based terminal.

use gift_core::quiz::QuizSession;
use std::io::{BufRead, Write};

use super::exam::show;
use super::Result;
use crate::store::BankRepository;

/// Final result of a simulated exam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
}

/// Run the stored exam `id` as a quiz.
pub fn simulate<S, I, O>(store: &S, id: &str, input: &mut I, output: &mut O) -> Result<QuizSummary>
where
    S: BankRepository,
    I: BufRead,
    O: Write,
{
    let exam = show(store, id)?;
    writeln!(output, "Exam {} ({} questions)", exam.id, exam.questions.len())?;

    let mut session = QuizSession::new(exam.questions);
    run_session(&mut session, input, output)
}

/// Ask every remaining question of `session`, one input line each.
///
/// Input running out ends the quiz early; unanswered questions count as wrong.
pub fn run_session<I: BufRead, O: Write>(
    session: &mut QuizSession,
    input: &mut I,
    output: &mut O,
) -> Result<QuizSummary> {
    while let Some(item) = session.current() {
        writeln!(output, "{}", item.prompt)?;
        write!(output, "Your answer: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::warn!("input closed before the quiz finished");
            break;
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);

        let verdict = session.submit(answer)?;
        if verdict.correct {
            writeln!(output, "Correct!")?;
        } else {
            writeln!(output, "Incorrect.")?;
        }
    }

    let summary = QuizSummary {
        score: session.score(),
        total: session.total(),
    };
    writeln!(output, "Quiz finished! Final score: {} / {}", summary.score, summary.total)?;
    Ok(summary)
}
