use std::{path::PathBuf, process::exit, sync::Arc, time::Duration};

use anyhow::Context;
use clap::Parser;
use term_snake::config::{GameConfig, TICK_INTERVAL_MS};
use term_snake::game::{self, GameSession, SessionEnd};
use term_snake::input::{InputCell, spawn_sampler};
use term_snake::logging::init_logging;
use term_snake::term::TermManager;

/// Snake in the terminal. Steer with the arrow keys, Ctrl+C quits.
#[derive(Parser, Debug)]
#[command(name = "term-snake", version)]
struct Cli {
    /// Milliseconds between game ticks
    #[arg(long, default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    match play(&cli) {
        Ok(end) => {
            println!("{}", end.message());
            exit(end.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(1);
        }
    }
}

fn play(cli: &Cli) -> anyhow::Result<SessionEnd> {
    init_logging(cli.log_file.as_deref()).context("setting up logging")?;

    let config = GameConfig::default().with_tick_interval(Duration::from_millis(cli.tick_ms));
    let input = Arc::new(InputCell::new());
    let mut term = TermManager::new();

    term.setup().context("preparing the terminal")?;
    // The sampler is never joined: it lives until the process exits
    let res = spawn_sampler(Arc::clone(&input))
        .map_err(anyhow::Error::from)
        .and_then(|_| {
            let mut session = GameSession::new(&config);
            game::run(&mut session, &mut term, &input, &config).map_err(anyhow::Error::from)
        });
    term.restore().context("restoring the terminal")?;

    res
}
