//! The game/turn state machine: owns the board, the clocks, and the turn
//! indicator; executes moves (castling, en passant, promotion included) and
//! reports the derived game state.

use crate::board::Board;
use crate::check::{checkmate, has_clear_path, in_check, is_attacked, is_legal_move};
use crate::clock::Clock;
use crate::error::{MoveError, PromotionError};
use crate::types::{Color, Piece, PieceKind, Position};
use crate::vector::vector;

/// Overall game state, recomputed on demand from board and turn since it
/// can change after every move. `Stalemate` is defined for completeness;
/// current detection never produces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    Normal,
    Check,
    Checkmate,
    Stalemate,
    OutOfTime,
}

/// Prior occupants of the cells an attempted move touched, restored in
/// reverse order when the move is rolled back.
type Undo = Vec<(Position, Option<Piece>)>;

/// One match: a board, two clocks, and whose turn it is. Single-threaded by
/// design; a hosting system running several games owns one `Game` each.
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub turn: Color,
    clocks: [Clock; 2],
    /// Remaining seconds at which a clock counts as expired.
    pub out_of_time_threshold: u32,
}

impl Game {
    /// A fresh game from the starting position, both clocks at
    /// `clock_seconds`.
    pub fn new(clock_seconds: u32) -> Self {
        Self::with_board(Board::startpos(), clock_seconds)
    }

    /// A game from a prepared position, White to move.
    pub fn with_board(board: Board, clock_seconds: u32) -> Self {
        Self {
            board,
            turn: Color::White,
            clocks: [Clock::new(clock_seconds); 2],
            out_of_time_threshold: 0,
        }
    }

    pub fn clock(&self, color: Color) -> &Clock {
        &self.clocks[color.idx()]
    }

    /// Deliver one elapsed second to `color`'s clock.
    pub fn tick(&mut self, color: Color) {
        self.clocks[color.idx()].tick();
    }

    /// Attempt to move the piece on `from` to `to` for the side to move.
    /// On success the board is mutated and the turn flips; on any rejection
    /// the game is left exactly as it was. The move either fully commits or
    /// fully rolls back; no caller ever observes an intermediate board.
    pub fn make_move(&mut self, from: Position, to: Position) -> Result<(), MoveError> {
        let illegal = MoveError::IllegalMove { from, to };

        // the en-passant window is exactly one opponent ply: the mover's
        // own flags are cleared before this move is evaluated
        self.board.reset_passable_pawns(self.turn);

        let ep_captured = self.en_passant_capture(from, to);
        let castles = self.is_castle(from, to);

        let mover = self.board.piece_at(from).ok_or(illegal)?;
        if mover.color != self.turn {
            return Err(illegal);
        }
        if !(is_legal_move(&self.board, from, to) || ep_captured.is_some() || castles) {
            return Err(illegal);
        }

        let undo = if castles {
            self.apply_castle(from, to)
        } else {
            self.apply_relocation(from, to)
        };

        // trial-and-revert: self-check and pin legality are enforced by
        // restoring the touched cells, not by a pre-computed pin table
        if in_check(&mut self.board, self.turn) {
            for (pos, occupant) in undo.into_iter().rev() {
                self.board.set_piece(pos, occupant);
            }
            return Err(illegal);
        }

        if let Some(passed) = ep_captured {
            self.board.set_piece(passed, None);
        }

        self.turn = self.turn.other();
        Ok(())
    }

    /// The cell of the pawn captured en passant, when `from -> to` is an
    /// en-passant capture: a pawn moving a legal capture diagonal onto an
    /// empty cell, passing an opposing `passable` pawn on its origin row.
    fn en_passant_capture(&self, from: Position, to: Position) -> Option<Position> {
        let pawn = self.board.piece_at(from)?;
        if pawn.kind != PieceKind::Pawn {
            return None;
        }
        let (dir, disp) = vector(from, to);
        if !pawn.pawn_capture_vector(dir, disp) || self.board.piece_at(to).is_some() {
            return None;
        }
        let neighbor = Position::new(from.col() as i8 + disp.dx, from.row() as i8)?;
        let passed = self.board.piece_at(neighbor)?;
        if passed.kind == PieceKind::Pawn && passed.color != pawn.color && passed.passable {
            Some(neighbor)
        } else {
            None
        }
    }

    /// Castling eligibility: the endpoints hold a same-color king and rook
    /// (in either order), neither has moved, the path between them is clear
    /// and nowhere attacked, and the mover is not currently in check.
    fn is_castle(&mut self, from: Position, to: Position) -> bool {
        let (a, b) = match (self.board.piece_at(from), self.board.piece_at(to)) {
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        let king_and_rook = matches!(
            (a.kind, b.kind),
            (PieceKind::King, PieceKind::Rook) | (PieceKind::Rook, PieceKind::King)
        );
        if !king_and_rook || a.color != b.color || a.has_moved || b.has_moved {
            return false;
        }
        if !has_clear_path(&self.board, from, to) {
            return false;
        }
        for pos in self.board.cells_between(from, to) {
            if is_attacked(&mut self.board, pos, self.turn, None) {
                return false;
            }
        }
        !in_check(&mut self.board, self.turn)
    }

    /// Regular relocation: the piece transfers to `to`, `from` is vacated.
    /// Flags a pawn double-step as passable for the opponent's reply.
    fn apply_relocation(&mut self, from: Position, to: Position) -> Undo {
        let undo = vec![
            (from, self.board.piece_at(from)),
            (to, self.board.piece_at(to)),
        ];
        let mut piece = self.board.piece_at(from).expect("no piece on from-square");
        piece.has_moved = true;
        if piece.kind == PieceKind::Pawn {
            let (_, disp) = vector(from, to);
            if disp.dy.abs() == 2 {
                piece.passable = true;
            }
        }
        self.board.set_piece(to, Some(piece));
        self.board.set_piece(from, None);
        undo
    }

    /// Castling: the king shifts two columns toward the rook, the rook
    /// lands on the column the king crossed, both are flagged moved, and
    /// both origin cells are vacated.
    fn apply_castle(&mut self, from: Position, to: Position) -> Undo {
        let a = self.board.piece_at(from).expect("no piece on from-square");
        let (king_pos, rook_pos) = if a.kind == PieceKind::King {
            (from, to)
        } else {
            (to, from)
        };
        let mut king = self.board.piece_at(king_pos).expect("castling king");
        let mut rook = self.board.piece_at(rook_pos).expect("castling rook");
        let toward: i8 = if rook_pos.col() > king_pos.col() { 1 } else { -1 };
        let row = king_pos.row() as i8;
        let king_to = Position::new(king_pos.col() as i8 + 2 * toward, row)
            .expect("castling king stays on the board");
        let rook_to =
            Position::new(king_to.col() as i8 - toward, row).expect("castling rook stays on the board");

        let undo = vec![
            (king_pos, Some(king)),
            (rook_pos, Some(rook)),
            (king_to, self.board.piece_at(king_to)),
            (rook_to, self.board.piece_at(rook_to)),
        ];

        king.has_moved = true;
        rook.has_moved = true;
        self.board.set_piece(king_pos, None);
        self.board.set_piece(rook_pos, None);
        self.board.set_piece(king_to, Some(king));
        self.board.set_piece(rook_to, Some(rook));
        undo
    }

    /// The first pawn of either color standing on the back rank, if any. A
    /// non-empty result means further moves should wait until `promote`
    /// resolves it.
    pub fn which_pawn_promotable(&self) -> Option<Position> {
        self.board
            .cells_of(PieceKind::Pawn, None)
            .into_iter()
            .find(|p| p.row() == 1 || p.row() == 8)
    }

    /// Replace the pawn on `at` with a fresh piece of `kind`, preserving
    /// color. Only queen, bishop, knight and rook are legal targets.
    pub fn promote(&mut self, at: Position, kind: PieceKind) -> Result<(), PromotionError> {
        let not_applicable = PromotionError::NotApplicable { at, kind };
        let pawn = match self.board.piece_at(at) {
            Some(p) if p.kind == PieceKind::Pawn => p,
            _ => return Err(not_applicable),
        };
        if !matches!(
            kind,
            PieceKind::Queen | PieceKind::Bishop | PieceKind::Knight | PieceKind::Rook
        ) {
            return Err(not_applicable);
        }
        self.board.set_piece(at, Some(Piece::new(kind, pawn.color)));
        Ok(())
    }

    /// Current state for the side to move. Checkmate and check take
    /// precedence over the clock.
    pub fn state(&self) -> GameState {
        let mut board = self.board.clone();
        if checkmate(&mut board, self.turn) {
            GameState::Checkmate
        } else if in_check(&mut board, self.turn) {
            GameState::Check
        } else if self
            .clock(self.turn)
            .is_expired(self.out_of_time_threshold)
        {
            GameState::OutOfTime
        } else {
            GameState::Normal
        }
    }

    /// Render view of the board: `[0]` is rank 8, columns A to H.
    pub fn board_snapshot(&self) -> [[Option<(PieceKind, Color)>; 8]; 8] {
        self.board.snapshot()
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(crate::clock::DEFAULT_GAME_SECONDS)
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
