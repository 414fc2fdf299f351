//! ByteBuddy: a small virtual companion that shows a mood, reacts to
//! activities, hands out advice and remembers it all between sessions.

pub mod cli;
pub mod config;
pub mod core;
pub mod formatter;
pub mod notify;
