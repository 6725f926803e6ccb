//! Attack detection and check/checkmate rules over a `Board`.
//!
//! Probes that ask "what if this cell were empty / the king stood here"
//! mutate the board temporarily and restore it before returning, so every
//! function leaves the board exactly as it found it.

use crate::board::Board;
use crate::types::{Color, Position};

/// Full geometric legality of one move: the piece's own rule plus a clear
/// path. Self-check is enforced by the game's trial-and-revert, not here.
pub fn is_legal_move(board: &Board, from: Position, to: Position) -> bool {
    match board.piece_at(from) {
        Some(piece) => piece.allows(from, to, board.piece_at(to)) && has_clear_path(board, from, to),
        None => false,
    }
}

/// No occupied cell strictly between `from` and `to`. Knight-shaped and
/// non-aligned vectors have no between cells and pass vacuously.
pub fn has_clear_path(board: &Board, from: Position, to: Position) -> bool {
    board
        .cells_between(from, to)
        .iter()
        .all(|&p| board.piece_at(p).is_none())
}

/// Cells held by `defender`'s opponent with a legal move onto `target`.
/// `excluding` empties one cell for the duration of the scan, so a square
/// can be probed as if a piece (typically the defender's own king) were
/// not shielding it from sliding attacks.
pub fn attackers_of(
    board: &mut Board,
    target: Position,
    defender: Color,
    excluding: Option<Position>,
) -> Vec<Position> {
    let removed = excluding.and_then(|p| board.take_piece(p));
    let attackers = board
        .cells_held_by_opponent_of(defender)
        .into_iter()
        .filter(|&a| is_legal_move(board, a, target))
        .collect();
    if let Some(p) = excluding {
        board.set_piece(p, removed);
    }
    attackers
}

pub fn is_attacked(
    board: &mut Board,
    target: Position,
    defender: Color,
    excluding: Option<Position>,
) -> bool {
    !attackers_of(board, target, defender, excluding).is_empty()
}

/// Is `color`'s king attacked?
pub fn in_check(board: &mut Board, color: Color) -> bool {
    let king = board.king_pos(color);
    is_attacked(board, king, color, None)
}

/// True when every cell around `color`'s king is either unreachable for the
/// king or unsafe once the king stands on it. Each escape square is probed
/// by trial-placing the king there with its own cell emptied, so the king
/// cannot shield the square from a slider attacking through it.
pub fn king_has_no_escape(board: &mut Board, color: Color) -> bool {
    let king_pos = board.king_pos(color);
    let king = board.piece_at(king_pos).expect("king missing from board");
    for escape in board.surrounding(king_pos) {
        if !is_legal_move(board, king_pos, escape) {
            continue;
        }
        let saved = board.piece_at(escape);
        board.set_piece(escape, Some(king));
        board.set_piece(king_pos, None);
        let attacked = is_attacked(board, escape, color, None);
        board.set_piece(king_pos, Some(king));
        board.set_piece(escape, saved);
        if !attacked {
            return false;
        }
    }
    true
}

/// Can any piece of `color` move onto a cell between the king and one of
/// its attackers? The king cannot shield itself and is not a candidate.
/// The candidate move is tested for raw legality only; a rescuer that is
/// itself pinned is not detected.
pub fn can_interpose(board: &mut Board, color: Color) -> bool {
    let king = board.king_pos(color);
    let attackers = attackers_of(board, king, color, None);
    let mut own = board.cells_held_by(color);
    own.retain(|&p| p != king);
    for attacker in attackers {
        for between in board.cells_between(attacker, king) {
            for &defender in &own {
                if is_legal_move(board, defender, between) {
                    return true;
                }
            }
        }
    }
    false
}

/// Is any attacker of `color`'s king itself attacked by a piece of `color`?
/// Like `can_interpose`, the capture is tested for raw legality only.
pub fn can_capture_attacker(board: &mut Board, color: Color) -> bool {
    let king = board.king_pos(color);
    let attackers = attackers_of(board, king, color, None);
    attackers
        .into_iter()
        .any(|attacker| is_attacked(board, attacker, color.other(), None))
}

pub fn checkmate(board: &mut Board, color: Color) -> bool {
    in_check(board, color)
        && king_has_no_escape(board, color)
        && !can_interpose(board, color)
        && !can_capture_attacker(board, color)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod check_tests;
