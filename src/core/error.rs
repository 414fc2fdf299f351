use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuddyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown mood: {0} (expected happy, tired, curious or excited)")]
    UnknownMood(String),

    #[error("Unknown activity: {0} (expected charge, explore, sleep or learn)")]
    UnknownActivity(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for '{0}' (expected {1})")]
    MissingArgument(String, &'static str),

    #[error("Unexpected extra input after '{0}': {1}")]
    UnexpectedArgument(String, String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BuddyError>;
