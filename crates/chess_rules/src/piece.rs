use crate::types::{Color, Piece, PieceKind, Position};
use crate::vector::{vector, Direction, Displacement};

impl Piece {
    /// Pure geometric legality: may this piece move `from` -> `to`, given
    /// the destination occupant? Path clearance and self-check are the move
    /// engine's concern, not the piece's. A destination held by the same
    /// color is illegal for every kind.
    pub fn allows(&self, from: Position, to: Position, target: Option<Piece>) -> bool {
        if target.map_or(false, |t| t.color == self.color) {
            return false;
        }
        let (dir, disp) = vector(from, to);
        match self.kind {
            PieceKind::Pawn => self.pawn_allows(dir, disp, target),
            PieceKind::Rook => dir.is_straight(),
            PieceKind::Bishop => dir.is_diagonal() && disp.dx.abs() == disp.dy.abs(),
            PieceKind::Queen => {
                dir.is_straight() || (dir.is_diagonal() && disp.dx.abs() == disp.dy.abs())
            }
            // the knight is the one piece whose path is never blocked
            PieceKind::Knight => dir.is_diagonal() && disp.dx.abs() + disp.dy.abs() == 3,
            PieceKind::King => {
                (dir.is_straight() || (dir.is_diagonal() && disp.dx.abs() == disp.dy.abs()))
                    && disp.dx.abs() <= 1
                    && disp.dy.abs() <= 1
            }
        }
    }

    fn pawn_allows(&self, dir: Direction, disp: Displacement, target: Option<Piece>) -> bool {
        // quiet push: one cell forward, or two off the start cell; the
        // intervening cell of a double-step is the clear-path check's job
        let steps = disp.dy.abs();
        if dir == self.forward() && target.is_none() && (steps == 1 || (steps == 2 && !self.has_moved))
        {
            return true;
        }
        // capture: one cell along a forward diagonal, onto an occupied cell
        self.pawn_capture_vector(dir, disp) && target.is_some()
    }

    fn forward(&self) -> Direction {
        match self.color {
            Color::White => Direction::N,
            Color::Black => Direction::S,
        }
    }

    /// One-step forward diagonal for this pawn's color. The en-passant test
    /// reuses this against an empty destination, which `allows` itself
    /// rejects.
    pub fn pawn_capture_vector(&self, dir: Direction, disp: Displacement) -> bool {
        if disp.dx.abs() != 1 || disp.dy.abs() != 1 {
            return false;
        }
        match self.color {
            Color::White => matches!(dir, Direction::NE | Direction::NW),
            Color::Black => matches!(dir, Direction::SE | Direction::SW),
        }
    }
}

#[cfg(test)]
#[path = "piece_tests.rs"]
mod piece_tests;
