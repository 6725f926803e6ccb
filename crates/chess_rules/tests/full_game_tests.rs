//! Scripted games exercising the engine through its public surface only.

use chess_rules::*;

fn pos(name: &str) -> Position {
    Position::from_name(name).unwrap()
}

fn play(game: &mut Game, moves: &[(&str, &str)]) {
    for &(from, to) in moves {
        game.make_move(pos(from), pos(to))
            .unwrap_or_else(|e| panic!("{e}"));
    }
}

#[test]
fn test_developed_game_with_both_sides_castling() {
    let mut game = Game::new(1200);
    play(
        &mut game,
        &[
            ("E2", "E4"),
            ("E7", "E5"),
            ("G1", "F3"),
            ("G8", "F6"),
            ("F1", "C4"),
            ("F8", "C5"),
            ("E1", "E2"), // queens step aside to free the back rank
            ("E8", "E7"),
            ("D1", "H1"), // white castles with the H rook
            ("D8", "H8"), // black follows
        ],
    );

    let white_king = game.board.piece_at(pos("F1")).unwrap();
    let white_rook = game.board.piece_at(pos("E1")).unwrap();
    assert_eq!((white_king.kind, white_king.color), (PieceKind::King, Color::White));
    assert_eq!((white_rook.kind, white_rook.color), (PieceKind::Rook, Color::White));

    let black_king = game.board.piece_at(pos("F8")).unwrap();
    let black_rook = game.board.piece_at(pos("E8")).unwrap();
    assert_eq!((black_king.kind, black_king.color), (PieceKind::King, Color::Black));
    assert_eq!((black_rook.kind, black_rook.color), (PieceKind::Rook, Color::Black));

    assert_eq!(game.turn, Color::White);
    assert_eq!(game.state(), GameState::Normal);
}

#[test]
fn test_snapshot_tracks_the_game() {
    let mut game = Game::new(1200);
    play(&mut game, &[("E2", "E4")]);
    let snap = game.board_snapshot();
    // rank 4 is snapshot row 4, column E is index 4
    assert_eq!(snap[4][4], Some((PieceKind::Pawn, Color::White)));
    assert_eq!(snap[6][4], None);
}

#[test]
fn test_check_must_be_answered() {
    let mut game = Game::new(1200);
    play(
        &mut game,
        &[
            ("E2", "E4"),
            ("G8", "F6"),
            ("A2", "A3"),
            ("F6", "G4"),
            ("A3", "A4"),
            ("G4", "E3"), // the knight drops in with check on the king
        ],
    );
    assert_eq!(game.state(), GameState::Check);

    // while in check, an unrelated quiet move is rejected outright
    assert!(game.make_move(pos("H2"), pos("H3")).is_err());

    // capturing the knight answers the check
    play(&mut game, &[("F2", "E3")]);
    assert_eq!(game.state(), GameState::Normal);
}
