pub mod cli;
pub mod commands;
pub mod config;
pub mod store;

use clap::Parser;
use gift_core::exam::ExamRequest;
use gift_core::types::{Exam, Question};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, ExamCommand, QuestionsCommand};
use crate::commands::{exam, questions, quiz};
use crate::config::{Config, Overrides};
use crate::store::JsonStore;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env(Overrides {
        data_dir: cli.data_dir.clone(),
        source_dir: cli.source_dir.clone(),
    });
    tracing::debug!(?config, "loaded configuration");

    let store = JsonStore::open(&config.data_dir);

    if config.auto_import {
        if let Err(e) = questions::import(&store, &config.source_dir) {
            tracing::error!("automatic import failed: {}", e);
        }
    }

    match cli.command {
        Command::Questions(command) => run_questions(&store, &config, command),
        Command::Exam(command) => run_exam(&store, &config, command),
    }
}

fn run_questions(store: &JsonStore, config: &Config, command: QuestionsCommand) -> anyhow::Result<()> {
    match command {
        QuestionsCommand::List => {
            let questions = questions::list(store);
            if questions.is_empty() {
                println!("No questions found.");
            } else {
                println!("{} questions:", questions.len());
                for question in &questions {
                    print_question(question);
                }
            }
        }
        QuestionsCommand::Import { dir } => {
            let dir = dir.as_deref().unwrap_or(&config.source_dir);
            let result = questions::import(store, dir)?;
            println!(
                "{} new questions imported ({} parsed, {} in bank).",
                result.imported, result.parsed, result.total
            );
        }
        QuestionsCommand::Add { text, question_type } => {
            let added = questions::add(store, &text, question_type)?;
            println!("Question \"{}\" added as {}.", added.title, added.question_type);
        }
        QuestionsCommand::Delete { title } => {
            questions::delete(store, &title)?;
            println!("Question \"{}\" deleted.", title);
        }
        QuestionsCommand::Deduplicate => {
            if questions::deduplicate(store)? {
                println!("Duplicate titles removed.");
            } else {
                println!("No duplicates found.");
            }
        }
        QuestionsCommand::Search { keyword } => {
            let found = questions::search(store, &keyword);
            if found.is_empty() {
                println!("No question contains \"{}\".", keyword);
            }
            for question in &found {
                print_question(question);
            }
        }
        QuestionsCommand::Show { number } => {
            let question = questions::show(store, number)?;
            println!("Title: {}", question.title);
            println!("Text:  {}", question.text);
            println!("Theme: {}", question.theme);
            println!("Type:  {}", question.question_type);
        }
        QuestionsCommand::Stats => {
            for (question_type, count) in questions::stats(store) {
                println!("{:<16} {}", question_type.as_str(), count);
            }
        }
    }
    Ok(())
}

fn run_exam(store: &JsonStore, config: &Config, command: ExamCommand) -> anyhow::Result<()> {
    match command {
        ExamCommand::Generate(args) => {
            let request = ExamRequest {
                count: args.count,
                keyword: args.keyword,
            };
            let generated = exam::generate(store, &request, &mut rand::thread_rng())?;
            println!("Exam generated: {}", generated.id);
        }
        ExamCommand::List { since } => {
            let exams = exam::list(store, since);
            if exams.is_empty() {
                println!("No exams found.");
            }
            for found in &exams {
                println!("{}  {}  ({} questions)", found.id, found.date.to_rfc3339(), found.questions.len());
            }
        }
        ExamCommand::Show { id } => print_exam(&exam::show(store, &id)?),
        ExamCommand::Export { id, out } => {
            let out_dir = out.as_deref().unwrap_or(&config.export_dir);
            let path = exam::export(store, &id, out_dir)?;
            println!("Exam exported to {}", path.display());
        }
        ExamCommand::Simulate { id } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            quiz::simulate(store, &id, &mut input, &mut output)?;
        }
        ExamCommand::Profile { id } => {
            let profile = exam::profile(store, &id)?;
            println!("Types:");
            for (question_type, count) in &profile.types {
                println!("  {:<16} {}", question_type.as_str(), count);
            }
            println!("Themes:");
            for (theme, count) in &profile.themes {
                println!("  {:<16} {}", theme, count);
            }
        }
    }
    Ok(())
}

fn print_question(question: &Question) {
    println!("{}", question.title);
    println!("   Text: {}", question.text);
}

fn print_exam(exam: &Exam) {
    println!("Id:   {}", exam.id);
    println!("Date: {}", exam.date.to_rfc3339());
    for (idx, question) in exam.questions.iter().enumerate() {
        println!("{}. {}", idx + 1, question.title);
        println!("   Text: {}", question.text);
    }
}
