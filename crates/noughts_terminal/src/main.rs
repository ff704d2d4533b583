//! Noughts - terminal tic-tac-toe.

use anyhow::{Context, Result};
use clap::Parser;
use noughts_terminal::{Cli, Command, Console, DuelArgs, Palette, PlayArgs, Session, Settings};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_file.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Play(args) => run_play(args),
        Command::Duel(args) => run_duel(args),
    }
}

/// Logs go to stderr (or a file) so the board on stdout stays readable.
fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::sync::Arc::new(file))
                        .with_ansi(false),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }

    info!("Tracing initialized");
    Ok(())
}

/// Play against the computer on stdin/stdout.
#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = args
        .config
        .clone()
        .or_else(|| std::env::var_os("NOUGHTS_CONFIG").map(PathBuf::from));
    let settings = args.apply(Settings::load(config.as_deref())?);
    info!(?settings, "Starting session");

    let console = Console::new(io::stdin().lock(), io::stdout(), Palette::detect(*settings.color()));
    let tally = Session::new(console, settings).run()?;

    info!(%tally, "Session finished");
    Ok(())
}

/// Pit two difficulties against each other.
#[instrument(skip_all, fields(x = %args.x, o = %args.o, rounds = args.rounds))]
fn run_duel(args: DuelArgs) -> Result<()> {
    let report = noughts_terminal::run_duel(args.x, args.o, args.rounds, args.seed)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
