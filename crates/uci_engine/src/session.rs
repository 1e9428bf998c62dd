//! UCI command handling.

use std::io::{self, Write};

use chess_ai::{ChessAi, EngineKind};
use chess_core::Game;
use tracing::{debug, warn};

/// Whether the read loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct UciSession {
    ai: ChessAi,
    game: Game,
}

impl UciSession {
    pub fn new(ai: ChessAi) -> Self {
        Self {
            ai,
            game: Game::startpos(),
        }
    }

    /// Handle one line of input, writing any reply to `out`.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&cmd, args)) = parts.split_first() else {
            return Ok(Flow::Continue);
        };

        match cmd {
            "uci" => self.identify(out)?,
            "isready" => {
                writeln!(out, "readyok")?;
                out.flush()?;
            }
            "setoption" => self.set_option(args),
            "ucinewgame" => {
                self.game = Game::startpos();
                self.ai.new_game();
            }
            "position" => self.set_position(args),
            "go" => self.go(out)?,
            "quit" => return Ok(Flow::Quit),
            // "stop" is a no-op: searches run to completion before we read again
            _ => debug!(line, "ignoring command"),
        }
        Ok(Flow::Continue)
    }

    fn identify<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let config = self.ai.config();
        writeln!(out, "id name {}", self.ai.engine_name())?;
        writeln!(out, "id author {}", self.ai.engine_author())?;

        let vars: String = classical_engine::difficulty::names()
            .map(|n| format!(" var {n}"))
            .collect();
        writeln!(
            out,
            "option name Difficulty type combo default {}{vars}",
            self.ai.profile().name
        )?;
        writeln!(
            out,
            "option name OwnBook type check default {}",
            config.opening_book
        )?;
        writeln!(
            out,
            "option name Engine type combo default {} var classical var random",
            engine_label(config.engine)
        )?;
        writeln!(out, "uciok")?;
        out.flush()
    }

    /// `setoption name <name> [value <value>]`
    fn set_option(&mut self, args: &[&str]) {
        let Some(name_at) = args.iter().position(|&a| a == "name") else {
            warn!(?args, "setoption without a name");
            return;
        };
        let value_at = args.iter().position(|&a| a == "value");
        let name_end = value_at.unwrap_or(args.len());
        let name = args.get(name_at + 1..name_end).unwrap_or_default().join(" ");
        let value = value_at
            .map(|i| args[i + 1..].join(" "))
            .unwrap_or_default();

        match name.to_ascii_lowercase().as_str() {
            "difficulty" => self.ai.set_difficulty(&value),
            "ownbook" => match value.as_str() {
                "true" => self.ai.set_opening_book(true),
                "false" => self.ai.set_opening_book(false),
                _ => warn!(%value, "OwnBook expects true or false"),
            },
            "engine" => match value.to_ascii_lowercase().as_str() {
                "classical" => self.ai.set_engine(EngineKind::Classical),
                "random" => self.ai.set_engine(EngineKind::Random),
                _ => warn!(%value, "unknown engine"),
            },
            _ => warn!(%name, "unknown option"),
        }
    }

    /// `position (startpos | fen <fen>) [moves <uci>...]`
    ///
    /// A bad FEN leaves the previous position in place; an illegal move
    /// stops the move list at that point.
    fn set_position(&mut self, args: &[&str]) {
        let moves_at = args.iter().position(|&a| a == "moves");
        let setup = &args[..moves_at.unwrap_or(args.len())];

        let game = match setup.split_first() {
            Some((&"startpos", _)) => Game::startpos(),
            Some((&"fen", fields)) => match Game::from_fen(&fields.join(" ")) {
                Ok(game) => game,
                Err(e) => {
                    warn!(error = %e, "rejected position");
                    return;
                }
            },
            _ => {
                warn!(?args, "position needs startpos or fen");
                return;
            }
        };
        self.game = game;

        let Some(moves_at) = moves_at else { return };
        for text in &args[moves_at + 1..] {
            if let Err(e) = self.game.apply_uci(text) {
                warn!(error = %e, "stopping at bad move");
                break;
            }
        }
    }

    fn go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let best = match self.ai.choose_move_in(&mut self.game) {
            Ok(mv) => mv,
            Err(e) => {
                warn!(error = %e, "search failed");
                None
            }
        };
        match best {
            Some(mv) => writeln!(out, "bestmove {}", mv.uci())?,
            None => writeln!(out, "bestmove 0000")?,
        }
        out.flush()
    }
}

fn engine_label(kind: EngineKind) -> &'static str {
    match kind {
        EngineKind::Classical => "classical",
        EngineKind::Random => "random",
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
