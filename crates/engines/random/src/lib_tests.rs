use super::*;
use chess_core::Game;
use std::collections::HashSet;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let mut pos = Game::startpos();

    let result = engine.search(&mut pos, &SearchLimits::depth(1)).unwrap();

    let mv = result.best_move.expect("start position has moves");
    assert!(pos.legal_moves(None).contains(&mv));
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let mut pos =
        Game::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1").unwrap();

    let result = engine.search(&mut pos, &SearchLimits::depth(1)).unwrap();

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let mut pos = Game::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();

    let result = engine.search(&mut pos, &SearchLimits::depth(1)).unwrap();

    assert!(result.best_move.is_none());
}

#[test]
fn random_move_is_always_legal() {
    let mut rng = StdRng::seed_from_u64(7);
    let fens = [
        chess_core::STARTPOS_FEN,
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/4P3/8/8/8/8/k7/4K3 w - - 0 1",
    ];
    for fen in fens {
        let game = Game::from_fen(fen).unwrap();
        let legal = game.legal_moves(None);
        for _ in 0..50 {
            let mv = random_legal_move(&game, &mut rng).unwrap();
            assert!(legal.contains(&mv), "{mv} not legal in {fen}");
        }
    }
}

#[test]
fn seeded_engines_agree() {
    let game = Game::startpos();
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        assert_eq!(
            random_legal_move(&game, &mut a),
            random_legal_move(&game, &mut b)
        );
    }
}

#[test]
fn random_choice_covers_many_moves() {
    let game = Game::startpos();
    let mut rng = StdRng::seed_from_u64(1);
    let seen: HashSet<String> = (0..400)
        .filter_map(|_| random_legal_move(&game, &mut rng))
        .map(|m| m.uci())
        .collect();
    // Uniform over 20 moves: 400 draws miss any given move with probability ~1e-9
    assert_eq!(seen.len(), 20);
}
