//! Speech Assistant - communication aid for people with speech disabilities
//!
//! Runs the interactive text menu on stdin/stdout. Diagnostics go to stderr.

use anyhow::Result;
use clap::Parser;
use speech_assistant::config::Config;
use speech_assistant::shell::{Session, Shell};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Skip the simulated processing delays
    #[arg(long)]
    no_delay: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Conversation log file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Saved text file
    #[arg(long)]
    save_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(path) = args.log_file {
        config.conversation_log_path = path;
    }
    if let Some(path) = args.save_file {
        config.saved_text_path = path;
    }

    // Setup logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("🗣️ Speech Assistant v{} starting...", env!("CARGO_PKG_VERSION"));

    let session = Session::from_config(&config, args.no_delay);
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), session).run()?;

    Ok(())
}
