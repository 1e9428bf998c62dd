//! SAN rendering of generated moves.

use chess_core::{Game, Move, RulesEngine};

fn san_of(fen: &str, uci: &str) -> String {
    let game = Game::from_fen(fen).unwrap();
    game.legal_moves(None)
        .into_iter()
        .find(|m: &Move| m.uci() == uci)
        .map(|m| m.san)
        .unwrap_or_else(|| panic!("{uci} not legal in {fen}"))
}

#[test]
fn test_pawn_and_piece_moves() {
    let start = chess_core::STARTPOS_FEN;
    assert_eq!(san_of(start, "e2e4"), "e4");
    assert_eq!(san_of(start, "b1c3"), "Nc3");
}

#[test]
fn test_captures() {
    let fen = "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2";
    assert_eq!(san_of(fen, "e4d5"), "exd5");
}

#[test]
fn test_file_disambiguation() {
    let fen = "4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1";
    assert_eq!(san_of(fen, "b1d2"), "Nbd2");
    assert_eq!(san_of(fen, "f1d2"), "Nfd2");
}

#[test]
fn test_rank_disambiguation() {
    let fen = "4k3/8/8/8/8/1N6/8/1N2K3 w - - 0 1";
    assert_eq!(san_of(fen, "b1d2"), "N1d2");
    assert_eq!(san_of(fen, "b3d2"), "N3d2");
}

#[test]
fn test_check_and_mate_suffixes() {
    assert_eq!(san_of("4k3/8/8/8/8/8/8/4K2R w K - 0 1", "h1h8"), "Rh8+");
    assert_eq!(san_of("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1", "e1e8"), "Qe8#");
}
