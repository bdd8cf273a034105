//! Quiz CLI
//!
//! Drives the quiz actor from standard input and prints every new snapshot.
//!
//! Each line is either a JSON event such as
//! `{"type": "SELECT_CHOICE", "choice": "Paris"}` or one of the shorthands
//! `start`, `select <choice>`, `submit`, `next`, `reset`, `leave`.
//! An optional first argument names a JSON question bank file.
//!
//! Run with: cargo run --example quiz_cli [questions.json]

use quizset::quiz::{quiz_actor, Progress, QuestionBank, QuizEvent, QuizState, QuizSummary};
use quizset::SendOutcome;
use std::io::{self, BufRead};
use tracing::{info, warn};

fn parse_line(line: &str) -> Option<QuizEvent> {
    let line = line.trim();
    if line.starts_with('{') {
        return serde_json::from_str(line).ok();
    }
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "start" => Some(QuizEvent::StartQuiz),
        "select" if !rest.trim().is_empty() => Some(QuizEvent::select(rest.trim())),
        "submit" => Some(QuizEvent::SubmitAnswer),
        "next" => Some(QuizEvent::NextQuestion),
        "reset" => Some(QuizEvent::ResetQuiz),
        "leave" => Some(QuizEvent::LeaveQuiz),
        _ => None,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let bank = match std::env::args().nth(1) {
        Some(path) => QuestionBank::from_json(&std::fs::read_to_string(path)?)?,
        None => QuestionBank::sample(),
    };
    info!(questions = bank.len(), "question bank loaded");

    let actor = quiz_actor(bank.clone())?;
    let view_bank = bank.clone();
    let _view = actor.subscribe(move |snapshot| {
        let context = &snapshot.context;
        println!("[{}] score {}", snapshot.state, context.score);
        match snapshot.state {
            QuizState::QuestionModal | QuizState::AnswerFeedback => {
                if let Some(question) = &context.current_question {
                    println!("  {}: {}", Progress::from_context(context, &view_bank), question.text);
                    for choice in &question.choices {
                        let marker = if context.selected_choice.as_ref() == Some(choice) {
                            '>'
                        } else {
                            ' '
                        };
                        println!("   {marker} {choice}");
                    }
                }
                match context.is_answer_correct {
                    Some(true) => println!("  Correct!"),
                    Some(false) => println!("  Incorrect!"),
                    None if snapshot.state == QuizState::AnswerFeedback => println!("  No answer given"),
                    None => {}
                }
            }
            QuizState::QuizComplete => {
                println!("  {}", QuizSummary::from_context(context, &view_bank));
            }
            QuizState::Idle => println!("  Type 'start' to begin"),
        }
    });

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(&line) {
            Some(event) => match actor.send(event) {
                SendOutcome::Ignored => println!("  (not available in {})", actor.state()),
                _ if actor.state() == QuizState::QuizComplete => {
                    if let Some(elapsed) = actor.history().duration() {
                        info!(elapsed_ms = elapsed.as_millis() as u64, "quiz completed");
                    }
                }
                _ => {}
            },
            None => warn!(input = %line, "unrecognised command"),
        }
    }

    Ok(())
}
