//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::core::ClueId;
use crate::engine::{Entry, PuzzleSession, Solve};
use crate::output::{print_board, print_results};
use crate::storage::{KeyValueStore, intro_seen, mark_intro_seen, persist};
use crate::timer::GameTimer;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineCommand {
    /// Words to select, in order
    Words(Vec<String>),
    Hint(ClueId),
    Undo,
    Clear,
    GiveUp,
    Board,
    Help,
    Quit,
}

/// Parse a line of input
///
/// # Errors
///
/// Returns a message for the player if the line is not understood.
pub fn parse_line(line: &str) -> Result<LineCommand, String> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        if line.is_empty() {
            return Ok(LineCommand::Board);
        }
        return Ok(LineCommand::Words(
            line.split_whitespace().map(str::to_string).collect(),
        ));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    match name.as_str() {
        "hint" | "h" => {
            let number = parts
                .next()
                .ok_or_else(|| "Usage: :hint N (1-4)".to_string())?;
            match number.parse::<ClueId>() {
                Ok(n @ 1..=4) => Ok(LineCommand::Hint(n - 1)),
                _ => Err(format!("No clue {number:?}, pick 1-4")),
            }
        }
        "undo" | "u" => Ok(LineCommand::Undo),
        "clear" | "c" => Ok(LineCommand::Clear),
        "giveup" | "forfeit" => Ok(LineCommand::GiveUp),
        "board" | "b" => Ok(LineCommand::Board),
        "help" | "?" => Ok(LineCommand::Help),
        "quit" | "q" | "exit" => Ok(LineCommand::Quit),
        _ => Err(format!("Unknown command :{name}, try :help")),
    }
}

fn solve_message(session: &PuzzleSession, solve: &Solve) -> String {
    let answer = session
        .clue(solve.clue_id)
        .map(|clue| clue.answer.to_uppercase())
        .unwrap_or_default();
    format!("✓ Clue {} solved: {answer}", solve.clue_id + 1)
}

/// Apply a command to the session, returning messages for the player
///
/// `Quit` and `Board` are left to the caller.
pub fn apply<R: Rng + ?Sized>(
    session: &mut PuzzleSession,
    command: &LineCommand,
    rng: &mut R,
) -> Vec<String> {
    let mut messages = Vec::new();

    match command {
        LineCommand::Words(words) => {
            for word in words {
                if session.is_completed() {
                    break;
                }
                match session.enter_text(word) {
                    Entry::Selected {
                        solve: Some(solve), ..
                    } => messages.push(solve_message(session, &solve)),
                    Entry::Selected { .. } => {}
                    Entry::Unresolved => {
                        let matches = session.suggestions(word);
                        if matches.is_empty() {
                            messages.push(format!("No word matches {word:?}"));
                        } else {
                            messages.push(format!(
                                "{word:?} is ambiguous: {}",
                                matches.join(", ")
                            ));
                        }
                    }
                }
            }
        }
        LineCommand::Hint(clue_id) => match session.request_hint(*clue_id, rng) {
            Some(_) => messages.push(format!(
                "Hint for clue {} is highlighted in the word list",
                clue_id + 1
            )),
            None => messages.push(format!("Clue {} is already solved", clue_id + 1)),
        },
        LineCommand::Undo => match session.remove_last_word() {
            Some(word) => {
                messages.push(format!("Removed {word:?}"));
                if let Some(solve) = session.recheck() {
                    messages.push(solve_message(session, &solve));
                }
            }
            None => messages.push("Nothing to undo!".to_string()),
        },
        LineCommand::Clear => session.clear_sentence(),
        LineCommand::GiveUp => {
            if session.forfeit() {
                messages.push("All answers revealed".to_string());
            }
        }
        LineCommand::Help => messages.push(HELP.to_string()),
        LineCommand::Board | LineCommand::Quit => {}
    }

    messages
}

const HELP: &str = "\
Type words (or unique prefixes) to build a sentence. A sentence that spells
an answer solves its clue.

Commands:
  :hint N    highlight clue N's words among a few red herrings
  :undo      remove the last word
  :clear     empty the sentence
  :giveup    reveal every answer
  :board     show the board again
  :quit      leave (progress is saved)";

/// Run the line-mode game until it ends or the player quits
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<S>(session: &mut PuzzleSession, store: &mut S) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Bandadle - Line Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let today = session.current_date();
    if !session.is_completed() && !intro_seen(store, today) {
        println!("Each clue chains phrases that share a word: \"Kevin James\" and");
        println!("\"James Bond\" make KEVIN JAMES BOND. Build each answer from the");
        println!("word list. The fourth clue chains three phrases.\n");
        println!("{HELP}\n");
        get_user_input("Press Enter to start the clock")?;
        if let Err(e) = mark_intro_seen(store, today) {
            tracing::warn!("Failed to record intro: {e}");
        }
    }

    if session.start(Utc::now()) {
        persist(store, session);
    }

    let timer = GameTimer::new();
    let mut rng = rand::rng();
    let mut show_board = true;

    loop {
        let elapsed = timer.elapsed(session.start_time(), session.end_time(), Utc::now());
        if session.is_completed() {
            print_results(session, elapsed);
            return Ok(());
        }
        if show_board {
            print_board(session, elapsed);
        }

        let Some(line) = read_line("\nWord or :command")? else {
            println!("\n👋 Progress saved. See you soon!\n");
            return Ok(());
        };

        let command = match parse_line(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message.red());
                show_board = false;
                continue;
            }
        };

        match command {
            LineCommand::Quit => {
                println!("\n👋 Progress saved. See you soon!\n");
                return Ok(());
            }
            LineCommand::Board => {
                show_board = true;
                continue;
            }
            _ => {}
        }

        for message in apply(session, &command, &mut rng) {
            println!("{}", message.bright_yellow());
        }
        show_board = !matches!(command, LineCommand::Help);
        persist(store, session);
    }
}

/// Prompt and read one line; `None` on end of input
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;

    Ok((read > 0).then(|| input.trim().to_string()))
}

fn get_user_input(prompt: &str) -> Result<String> {
    Ok(read_line(prompt)?.unwrap_or_default())
}
