use super::*;
use crate::eval::MATE_SCORE;
use chess_core::{Game, Piece, SteppingClock, ManualClock, Square};
use std::sync::Arc;
use std::time::Duration;

const POSITIONS: [&str; 5] = [
    chess_core::STARTPOS_FEN,
    "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1",
    "4k3/8/8/8/8/8/4r3/4K3 w - - 0 1",
    "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
    "8/2k5/3p4/p2P1p2/P2P1P2/8/3K4/8 b - - 0 1",
];

/// Full-width minimax without pruning, used as the reference score.
fn plain_minimax(pos: &mut Game, depth: u8, maximizing: bool, nodes: &mut u64) -> i32 {
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }
    let mut best = if maximizing { -INFINITY } else { INFINITY };
    for mv in pos.legal_moves(None) {
        pos.apply(&mv).unwrap();
        *nodes += 1;
        let score = plain_minimax(pos, depth - 1, !maximizing, nodes);
        pos.undo_last().unwrap();
        best = if maximizing { best.max(score) } else { best.min(score) };
    }
    best
}

fn unlimited() -> TimeControl {
    let tc = TimeControl::new(None);
    tc.start();
    tc
}

#[test]
fn test_pruning_preserves_scores() {
    for fen in POSITIONS {
        for depth in 1..=3u8 {
            let mut pos = Game::from_fen(fen).unwrap();
            let maximizing = pos.side_to_move() == Color::White;

            let mut plain_nodes = 0;
            let expected = plain_minimax(&mut pos, depth, maximizing, &mut plain_nodes);

            let mut nodes = 0;
            let got = minimax(&mut pos, depth, -INFINITY, INFINITY, maximizing, &mut nodes).unwrap();

            assert_eq!(got, expected, "{fen} at depth {depth}");
            assert!(nodes <= plain_nodes);
            assert_eq!(pos.fen(), Game::from_fen(fen).unwrap().fen());
        }
    }
}

#[test]
fn test_root_choice_matches_plain_minimax() {
    for fen in POSITIONS {
        for depth in 1..=2u8 {
            let mut pos = Game::from_fen(fen).unwrap();
            let mover = pos.side_to_move();

            // First move reaching the best score for the mover
            let mut expected: Option<(Move, i32)> = None;
            for mv in pos.legal_moves(None) {
                pos.apply(&mv).unwrap();
                let mut nodes = 0;
                let maximizing = pos.side_to_move() == Color::White;
                let score = plain_minimax(&mut pos, depth - 1, maximizing, &mut nodes);
                pos.undo_last().unwrap();
                let better = match &expected {
                    None => true,
                    Some((_, best)) => for_side(score, mover) > for_side(*best, mover),
                };
                if better {
                    expected = Some((mv, score));
                }
            }

            let outcome = pick_best_move(&mut pos, depth, &unlimited()).unwrap();
            assert_eq!(outcome.best_move, expected, "{fen} at depth {depth}");
            assert!(!outcome.stopped);
        }
    }
}

#[test]
fn test_alpha_beta_visits_fewer_nodes() {
    let mut pos = Game::startpos();
    let mut plain_nodes = 0;
    plain_minimax(&mut pos, 3, true, &mut plain_nodes);
    let mut nodes = 0;
    minimax(&mut pos, 3, -INFINITY, INFINITY, true, &mut nodes).unwrap();
    assert!(nodes < plain_nodes, "{nodes} vs {plain_nodes}");
}

#[test]
fn test_pick_best_move_start_position() {
    let mut pos = Game::startpos();
    let result = pick_best_move(&mut pos, 2, &unlimited()).unwrap();
    let (mv, _) = result.best_move.expect("start position has moves");
    assert!(pos.legal_moves(None).contains(&mv));
    assert_eq!(result.root_moves_searched, 20);
    assert!(result.nodes > 20);
    assert_eq!(pos.ply_history_length(), 0);
    assert_eq!(pos.fen(), chess_core::STARTPOS_FEN);
}

#[test]
fn test_pick_best_move_finds_mate_in_one() {
    let mut pos = Game::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let (mv, score) = pick_best_move(&mut pos, 1, &unlimited())
        .unwrap()
        .best_move
        .unwrap();
    assert_eq!(mv.san, "Qe8#");
    assert_eq!(score, MATE_SCORE);
}

#[test]
fn test_black_finds_mate_in_one() {
    let mut pos = Game::from_fen("4q1k1/5ppp/8/8/8/8/5PPP/6K1 b - - 0 1").unwrap();
    let (mv, score) = pick_best_move(&mut pos, 2, &unlimited())
        .unwrap()
        .best_move
        .unwrap();
    assert_eq!(mv.san, "Qe1#");
    assert_eq!(score, -MATE_SCORE);
}

#[test]
fn test_black_prefers_winning_material() {
    // Black can take the undefended white queen on d4
    let mut pos = Game::from_fen("3rk3/8/8/8/3Q4/8/8/4K3 b - - 0 1").unwrap();
    let (mv, _) = pick_best_move(&mut pos, 1, &unlimited())
        .unwrap()
        .best_move
        .unwrap();
    assert_eq!(mv.uci(), "d8d4");
    assert_eq!(mv.captured, Some(chess_core::PieceKind::Queen));
}

#[test]
fn test_no_moves_returns_none() {
    for fen in [
        "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
    ] {
        let mut pos = Game::from_fen(fen).unwrap();
        let outcome = pick_best_move(&mut pos, 3, &unlimited()).unwrap();
        assert!(outcome.best_move.is_none());
        assert_eq!(outcome.root_moves_searched, 0);
        assert!(!outcome.stopped);
    }
}

#[test]
fn test_expired_budget_stops_after_first_root_move() {
    let mut pos = Game::startpos();
    let clock = Arc::new(SteppingClock::new(Duration::from_secs(10)));
    let tc = TimeControl::with_clock(Some(Duration::from_millis(500)), clock);
    tc.start();

    let outcome = pick_best_move(&mut pos, 2, &tc).unwrap();
    let first = pos.legal_moves(None).remove(0);
    assert!(outcome.stopped);
    assert_eq!(outcome.root_moves_searched, 1);
    assert_eq!(outcome.best_move.map(|(m, _)| m), Some(first));
}

#[test]
fn test_frozen_clock_searches_every_root_move() {
    let mut pos = Game::startpos();
    let tc = TimeControl::with_clock(Some(Duration::from_millis(1)), Arc::new(ManualClock::new()));
    tc.start();

    let outcome = pick_best_move(&mut pos, 1, &tc).unwrap();
    assert!(!outcome.stopped);
    assert_eq!(outcome.root_moves_searched, 20);
}

#[test]
fn test_external_stop_is_seen_between_root_moves() {
    let mut pos = Game::startpos();
    let tc = unlimited();
    tc.stop();

    let outcome = pick_best_move(&mut pos, 1, &tc).unwrap();
    assert!(outcome.stopped);
    assert_eq!(outcome.root_moves_searched, 1);
    assert!(outcome.best_move.is_some());
}

/// Rules engine that starts rejecting moves after a fixed number of applies.
struct Flaky {
    inner: Game,
    applies_left: usize,
}

impl RulesEngine for Flaky {
    fn load(&mut self, fen: &str) -> Result<(), RulesError> {
        self.inner.load(fen)
    }
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move> {
        self.inner.legal_moves(from)
    }
    fn apply(&mut self, mv: &Move) -> Result<(), RulesError> {
        if self.applies_left == 0 {
            return Err(RulesError::IllegalMove {
                mv: mv.uci(),
                fen: self.inner.fen(),
            });
        }
        self.applies_left -= 1;
        self.inner.apply(mv)
    }
    fn undo_last(&mut self) -> Result<Move, RulesError> {
        self.inner.undo_last()
    }
    fn is_checkmate(&self) -> bool {
        self.inner.is_checkmate()
    }
    fn is_stalemate(&self) -> bool {
        self.inner.is_stalemate()
    }
    fn is_draw(&self) -> bool {
        self.inner.is_draw()
    }
    fn is_in_check(&self) -> bool {
        self.inner.is_in_check()
    }
    fn side_to_move(&self) -> Color {
        self.inner.side_to_move()
    }
    fn ply_history_length(&self) -> usize {
        self.inner.ply_history_length()
    }
    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.inner.piece_at(sq)
    }
}

#[test]
fn test_rules_failure_propagates_and_unwinds() {
    let mut pos = Flaky {
        inner: Game::startpos(),
        applies_left: 5,
    };

    let err = pick_best_move(&mut pos, 3, &unlimited()).unwrap_err();
    assert!(matches!(err, RulesError::IllegalMove { .. }));
    assert_eq!(pos.inner.ply_history_length(), 0);
    assert_eq!(pos.inner.fen(), chess_core::STARTPOS_FEN);
}
