//! Console Othello: `outflank --help` for options. Set `RUST_LOG=debug` to
//! trace moves and the computer's candidates on stderr.

use anyhow::Result;
use clap::Parser;
use outflank_player::config::Cli;
use outflank_player::connectors::Console;
use outflank_player::session;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut console = Console::new(io::stdin().lock(), stdout.lock())
        .clearing_screen(clear_screen);

    session::run(&cli, &mut console)?;
    Ok(())
}
