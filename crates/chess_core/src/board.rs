//! [`Game`]: the production [`RulesEngine`], backed by `cozy-chess`.
//!
//! `cozy-chess` owns legality; this module adds what the search core needs
//! on top of it: an undo stack, repetition history, draw rules, and
//! conversion to the workspace's own [`Move`] value type.

use cozy_chess as cz;

use crate::error::RulesError;
use crate::rules::RulesEngine;
use crate::san;
use crate::types::*;

pub const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Clone, Debug)]
struct Frame {
    board: cz::Board,
    mv: Move,
}

/// A chess game: current position plus the moves applied since loading.
#[derive(Clone, Debug)]
pub struct Game {
    board: cz::Board,
    undo: Vec<Frame>,
    /// Hash of every position since load, current position last.
    hashes: Vec<u64>,
}

impl Default for Game {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Game {
    pub fn startpos() -> Self {
        Self::with_board(cz::Board::default())
    }

    /// Parse a FEN. The halfmove and fullmove fields may be omitted.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        Ok(Self::with_board(parse_fen(fen)?))
    }

    fn with_board(board: cz::Board) -> Self {
        let hashes = vec![board.hash()];
        Self {
            board,
            undo: Vec::new(),
            hashes,
        }
    }

    pub fn fen(&self) -> String {
        self.board.to_string()
    }

    pub fn halfmove_clock(&self) -> u32 {
        u32::from(self.board.halfmove_clock())
    }

    pub fn fullmove_number(&self) -> u32 {
        u32::from(self.board.fullmove_number())
    }

    /// Moves applied since the position was loaded, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Move> {
        self.undo.iter().map(|f| &f.mv)
    }

    /// Resolve UCI text (`e2e4`, `e7e8q`, `e1g1`) against the legal moves and play it.
    pub fn apply_uci(&mut self, text: &str) -> Result<Move, RulesError> {
        let text = text.trim().to_ascii_lowercase();
        let bad_text = || RulesError::InvalidMoveText(text.clone());
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(bad_text());
        }
        let from: Square = text[0..2].parse()?;
        let to: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(PieceKind::from_uci_char(c).ok_or_else(bad_text)?),
            None => None,
        };

        let mv = self
            .legal_moves(Some(from))
            .into_iter()
            .find(|m| m.to == to && m.promotion == promotion)
            .ok_or_else(|| RulesError::IllegalMove {
                mv: text.clone(),
                fen: self.fen(),
            })?;
        self.apply(&mv)?;
        Ok(mv)
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// Bare kings, a single minor piece, or only bishops that all share a square colour.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(cz::Piece::Pawn) | b.pieces(cz::Piece::Rook) | b.pieces(cz::Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }
        let knights = b.pieces(cz::Piece::Knight);
        let bishops = b.pieces(cz::Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }
        let light = bishops
            .into_iter()
            .filter(|&sq| (sq.file() as u8 + sq.rank() as u8) % 2 == 1)
            .count();
        light == 0 || light == bishops.len() as usize
    }

    pub fn is_threefold_repetition(&self) -> bool {
        let current = self.board.hash();
        self.hashes.iter().filter(|&&h| h == current).count() >= 3
    }

    fn has_legal_moves(&self) -> bool {
        has_moves(&self.board)
    }

    /// Translate to cozy-chess' king-takes-rook castling encoding.
    fn raw_move(&self, mv: &Move) -> cz::Move {
        let from = cz_square(mv.from);
        let mut to = cz_square(mv.to);
        if mv.is_castle() {
            let rook_file = if mv.to.file() > mv.from.file() {
                cz::File::H
            } else {
                cz::File::A
            };
            to = cz::Square::new(rook_file, from.rank());
        }
        cz::Move {
            from,
            to,
            promotion: mv.promotion.map(cz_piece),
        }
    }

    fn describe(&self, piece: cz::Piece, mv: cz::Move, all: &[(cz::Piece, cz::Move)]) -> Move {
        let stm = self.board.side_to_move();
        let castle = piece == cz::Piece::King && self.board.color_on(mv.to) == Some(stm);
        let to = if castle {
            let file = if (mv.to.file() as u8) > (mv.from.file() as u8) {
                cz::File::G
            } else {
                cz::File::C
            };
            cz::Square::new(file, mv.from.rank())
        } else {
            mv.to
        };
        let captured = if castle {
            None
        } else if let Some(p) = self.board.piece_on(mv.to) {
            Some(piece_kind(p))
        } else if piece == cz::Piece::Pawn && mv.from.file() != mv.to.file() {
            Some(PieceKind::Pawn)
        } else {
            None
        };

        Move {
            from: square(mv.from),
            to: square(to),
            promotion: mv.promotion.map(piece_kind),
            captured,
            color: color(stm),
            piece: piece_kind(piece),
            san: san::notation(&self.board, piece, mv, castle, captured.is_some(), all),
        }
    }
}

impl RulesEngine for Game {
    fn load(&mut self, fen: &str) -> Result<(), RulesError> {
        *self = Self::from_fen(fen)?;
        Ok(())
    }

    fn legal_moves(&self, from: Option<Square>) -> Vec<Move> {
        let mut raw = Vec::with_capacity(64);
        self.board.generate_moves(|moves| {
            let piece = moves.piece;
            for mv in moves {
                raw.push((piece, mv));
            }
            false
        });

        raw.iter()
            .filter(|(_, mv)| from.map_or(true, |sq| square(mv.from) == sq))
            .map(|&(piece, mv)| self.describe(piece, mv, &raw))
            .collect()
    }

    fn apply(&mut self, mv: &Move) -> Result<(), RulesError> {
        let raw = self.raw_move(mv);
        let legal = self
            .board
            .generate_moves(|moves| moves.into_iter().any(|m| m == raw));
        if !legal {
            return Err(RulesError::IllegalMove {
                mv: mv.uci(),
                fen: self.fen(),
            });
        }

        self.undo.push(Frame {
            board: self.board.clone(),
            mv: mv.clone(),
        });
        self.board.play(raw);
        self.hashes.push(self.board.hash());
        Ok(())
    }

    fn undo_last(&mut self) -> Result<Move, RulesError> {
        let frame = self.undo.pop().ok_or(RulesError::NothingToUndo)?;
        self.board = frame.board;
        self.hashes.pop();
        Ok(frame.mv)
    }

    fn is_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_legal_moves()
    }

    fn is_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_legal_moves()
    }

    fn is_draw(&self) -> bool {
        self.is_fifty_move_draw()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    fn is_in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    fn side_to_move(&self) -> Color {
        color(self.board.side_to_move())
    }

    fn ply_history_length(&self) -> usize {
        self.undo.len()
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        let cs = cz_square(sq);
        let kind = piece_kind(self.board.piece_on(cs)?);
        let color = color(self.board.color_on(cs)?);
        Some(Piece { color, kind })
    }
}

fn parse_fen(fen: &str) -> Result<cz::Board, RulesError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let full = match fields.len() {
        4 => format!("{} 0 1", fields.join(" ")),
        5 => format!("{} 1", fields.join(" ")),
        _ => fields.join(" "),
    };
    cz::Board::from_fen(&full, false).map_err(|e| RulesError::InvalidFen {
        fen: fen.to_string(),
        reason: format!("{e:?}"),
    })
}

pub(crate) fn has_moves(board: &cz::Board) -> bool {
    board.generate_moves(|moves| moves.into_iter().next().is_some())
}

// =============================================================================
// cozy-chess <-> workspace type conversion
// =============================================================================

pub(crate) fn square(sq: cz::Square) -> Square {
    Square(sq as u8)
}

fn cz_square(sq: Square) -> cz::Square {
    cz::Square::index(sq.index() as usize)
}

pub(crate) fn piece_kind(p: cz::Piece) -> PieceKind {
    match p {
        cz::Piece::Pawn => PieceKind::Pawn,
        cz::Piece::Knight => PieceKind::Knight,
        cz::Piece::Bishop => PieceKind::Bishop,
        cz::Piece::Rook => PieceKind::Rook,
        cz::Piece::Queen => PieceKind::Queen,
        cz::Piece::King => PieceKind::King,
    }
}

fn cz_piece(k: PieceKind) -> cz::Piece {
    match k {
        PieceKind::Pawn => cz::Piece::Pawn,
        PieceKind::Knight => cz::Piece::Knight,
        PieceKind::Bishop => cz::Piece::Bishop,
        PieceKind::Rook => cz::Piece::Rook,
        PieceKind::Queen => cz::Piece::Queen,
        PieceKind::King => cz::Piece::King,
    }
}

fn color(c: cz::Color) -> Color {
    match c {
        cz::Color::White => Color::White,
        cz::Color::Black => Color::Black,
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
