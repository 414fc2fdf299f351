// main.rs
use bytebuddy::cli::{self, Args, Commands};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("⚠️ Failed to initialize logging: {}", e);
    }

    let args = Args::parse();
    let data_dir = args.data_dir;

    let result = match args.command.unwrap_or(Commands::Status) {
        Commands::Status => cli::handle_status(data_dir),
        Commands::Mood { mood } => cli::handle_mood(data_dir, mood),
        Commands::Do { activity } => cli::handle_activity(data_dir, activity),
        Commands::Advice => cli::handle_advice(data_dir),
        Commands::Session => cli::handle_session(data_dir),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
