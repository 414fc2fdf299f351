use anyhow::Result;
use colored::*;
use std::io::{BufRead, Write};

use crate::core::{Activity, AdviceSource, BuddyError, ByteBuddy, KeyValueStore, Mood, Notifier};
use crate::formatter::BuddyFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Mood(Mood),
    Do(Activity),
    Advice,
    Status,
    Help,
    Quit,
}

/// Parse one line of session input. Blank lines yield `None`.
pub fn parse_line(line: &str) -> crate::core::Result<Option<SessionCommand>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&first, rest)) = words.split_first() else {
        return Ok(None);
    };
    let name = first.to_lowercase();

    let command = match name.as_str() {
        "mood" => SessionCommand::Mood(single_argument(first, rest, MOOD_CHOICES)?.parse()?),
        "do" => SessionCommand::Do(single_argument(first, rest, ACTIVITY_CHOICES)?.parse()?),
        "advice" | "wisdom" => SessionCommand::Advice,
        "status" => SessionCommand::Status,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "bye" => SessionCommand::Quit,
        other => match other.parse::<Activity>() {
            Ok(activity) => SessionCommand::Do(activity),
            Err(_) => return Err(BuddyError::UnknownCommand(first.to_string())),
        },
    };

    if !matches!(name.as_str(), "mood" | "do") && !rest.is_empty() {
        return Err(BuddyError::UnexpectedArgument(first.to_string(), rest.join(" ")));
    }

    Ok(Some(command))
}

const MOOD_CHOICES: &str = "happy|tired|curious|excited";
const ACTIVITY_CHOICES: &str = "charge|explore|sleep|learn";

fn single_argument<'a>(
    command: &str,
    rest: &[&'a str],
    choices: &'static str,
) -> crate::core::Result<&'a str> {
    match rest {
        [] => Err(BuddyError::MissingArgument(command.to_string(), choices)),
        [arg] => Ok(*arg),
        [arg, extra @ ..] => Err(BuddyError::UnexpectedArgument(
            format!("{} {}", command, arg),
            extra.join(" "),
        )),
    }
}

const HELP: &str = "Commands: mood <happy|tired|curious|excited>, \
    do <charge|explore|sleep|learn>, advice, status, help, quit";

/// Drive one buddy from line-based input until `quit` or end of input
pub fn run_session<S, N, R, I, W>(
    buddy: &mut ByteBuddy<S, N, R>,
    mut input: I,
    out: &mut W,
) -> Result<()>
where
    S: KeyValueStore,
    N: Notifier,
    R: AdviceSource,
    I: BufRead,
    W: Write,
{
    writeln!(out, "{}", BuddyFormatter::format_status(buddy.state(), buddy.is_changing()))?;
    writeln!(out, "{}", HELP.yellow())?;

    loop {
        write!(out, "{} ", "You:".cyan().bold())?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "❓ {}. Type 'help' for commands.", e)?;
                continue;
            }
        };

        match command {
            SessionCommand::Mood(mood) => {
                if buddy.set_mood(mood)? {
                    let card = BuddyFormatter::format_status(buddy.state(), buddy.is_changing());
                    writeln!(out, "{}", card)?;
                } else {
                    writeln!(out, "ByteBuddy is already feeling {}.", mood)?;
                }
            }
            SessionCommand::Do(activity) => {
                buddy.perform_activity(activity)?;
            }
            SessionCommand::Advice => {
                buddy.request_advice()?;
            }
            SessionCommand::Status => {
                let card = BuddyFormatter::format_status(buddy.state(), buddy.is_changing());
                writeln!(out, "{}", card)?;
                writeln!(out, "{}", BuddyFormatter::format_moods(buddy.state().mood))?;
                writeln!(out, "{}", BuddyFormatter::format_activities())?;
            }
            SessionCommand::Help => {
                writeln!(out, "{}", HELP.yellow())?;
            }
            SessionCommand::Quit => {
                writeln!(out, "{}", "See you soon! 👋".green())?;
                break;
            }
        }
    }

    Ok(())
}
