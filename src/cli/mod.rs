use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::core::{Activity, ByteBuddy, FileStore, Mood, RandomAdvice};
use crate::formatter::BuddyFormatter;
use crate::notify::ConsoleNotifier;

pub use commands::{Args, Commands};
pub use session::{parse_line, run_session, SessionCommand};

mod commands;
mod session;

pub type ConsoleBuddy = ByteBuddy<FileStore, ConsoleNotifier, RandomAdvice>;

pub fn open_buddy(data_dir: Option<PathBuf>) -> Result<ConsoleBuddy> {
    let config = Config::new(data_dir)?;
    let options = config.buddy_options().context("Invalid config.json")?;
    let store = FileStore::new(config.storage_path());

    Ok(ByteBuddy::load(store, ConsoleNotifier, RandomAdvice, options))
}

fn print_status(buddy: &ConsoleBuddy) {
    println!("{}", BuddyFormatter::format_status(buddy.state(), buddy.is_changing()));
}

pub fn handle_status(data_dir: Option<PathBuf>) -> Result<()> {
    let buddy = open_buddy(data_dir)?;
    print_status(&buddy);
    println!("{}", BuddyFormatter::format_moods(buddy.state().mood));
    println!("{}", BuddyFormatter::format_activities());
    Ok(())
}

pub fn handle_mood(data_dir: Option<PathBuf>, mood: Mood) -> Result<()> {
    let mut buddy = open_buddy(data_dir)?;

    if !buddy.set_mood(mood).context("Failed to save mood")? {
        println!("ByteBuddy is already feeling {}.", mood);
    }
    print_status(&buddy);
    Ok(())
}

pub fn handle_activity(data_dir: Option<PathBuf>, activity: Activity) -> Result<()> {
    let mut buddy = open_buddy(data_dir)?;
    buddy
        .perform_activity(activity)
        .context("Failed to save activity")?;
    Ok(())
}

pub fn handle_advice(data_dir: Option<PathBuf>) -> Result<()> {
    let mut buddy = open_buddy(data_dir)?;
    buddy.request_advice().context("Failed to save interaction")?;
    Ok(())
}

pub fn handle_session(data_dir: Option<PathBuf>) -> Result<()> {
    let mut buddy = open_buddy(data_dir)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut buddy, stdin.lock(), &mut stdout)
}
