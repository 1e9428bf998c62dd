mod session;

use std::io::{self, BufRead};

use chess_ai::{AiConfig, AiError, ChessAi};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::session::{Flow, UciSession};

fn main() -> Result<(), AiError> {
    // stdout carries the UCI protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading config");
            AiConfig::load(&path)?
        }
        None => AiConfig::default(),
    };

    let mut session = UciSession::new(ChessAi::new(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match session.handle(&line, &mut stdout) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => break,
            Err(e) => {
                error!(error = %e, "stdout closed");
                break;
            }
        }
    }
    Ok(())
}
