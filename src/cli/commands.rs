use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::{Activity, Mood};

#[derive(Parser)]
#[command(name = "bytebuddy")]
#[command(about = "Meet ByteBuddy 🤖 - your friendly digital companion")]
#[command(version)]
pub struct Args {
    /// Data directory (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show ByteBuddy's mood and interaction stats
    Status,
    /// Change how ByteBuddy is feeling
    Mood {
        #[arg(value_name = "happy|tired|curious|excited")]
        mood: Mood,
    },
    /// Do something together
    Do {
        #[arg(value_name = "charge|explore|sleep|learn")]
        activity: Activity,
    },
    /// Ask ByteBuddy for some wisdom
    Advice,
    /// Keep ByteBuddy open and issue commands interactively
    Session,
}
