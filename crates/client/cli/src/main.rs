//! Terminal inventory shell.
//!
//! Loads an item catalog and grid configuration, restores the last save (or
//! starts a fresh grid with the bootstrap items) and then reads commands from
//! stdin until `quit` or end of input.
mod config;
mod presentation;
mod repository;
mod session;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use config::CliConfig;
use grid_content::{ConfigLoader, ItemLoader};
use grid_core::{GridError, GridState};
use repository::FileSaveRepository;
use session::{Command, CommandError, Reply, Session};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = CliConfig::from_env();
    let mut session = open_session(&config)?;

    println!("{}", session::HELP);
    run(&mut session, io::stdin().lock(), io::stdout().lock())
}

/// Logs go to stderr so they never interleave with command output.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn open_session(config: &CliConfig) -> Result<Session> {
    let items = match &config.catalog_path {
        Some(path) => ItemLoader::load(path)?,
        None => ItemLoader::builtin()?,
    };
    let grid_config = match &config.config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::builtin()?,
    };

    let repository = FileSaveRepository::new(&config.save_path);
    let restored = repository
        .load(&items)
        .with_context(|| format!("Failed to load save {}", config.save_path.display()))?;

    match restored {
        Some(state) => {
            tracing::info!(entries = state.len(), "Restored inventory from save");
            Ok(Session::new(state, items, repository))
        }
        None => {
            let state = GridState::from_config(&grid_config)
                .map_err(|e| anyhow::anyhow!("Invalid grid config: {}", e))?;
            let mut session = Session::new(state, items, repository);
            session.bootstrap(&config.bootstrap);
            Ok(session)
        }
    }
}

fn run(session: &mut Session, input: impl BufRead, mut output: impl Write) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let reply = Command::parse(&line).and_then(|command| match command {
            Some(command) => session.execute(command).map(Some),
            None => Ok(None),
        });

        match reply {
            Ok(Some(Reply::Print(message))) => writeln!(output, "{message}")?,
            Ok(Some(Reply::Exit)) => break,
            Ok(None) => {}
            Err(error) => {
                if let CommandError::Execute(inner) = &error {
                    tracing::debug!(code = inner.error_code(), severity = inner.severity().as_str());
                }
                writeln!(output, "error: {error}")?;
            }
        }
        output.flush()?;
    }
    Ok(())
}
