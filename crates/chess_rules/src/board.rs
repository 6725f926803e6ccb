use crate::error::PositionError;
use crate::types::{Color, Piece, PieceKind, Position};
use crate::vector::vector;

/// One board cell: a fixed position and at most one occupant. Occupants move
/// between cells by value; a piece is never shared by two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Position,
    pub piece: Option<Piece>,
}

/// The 8x8 grid, sole owner of every cell. Row 0 of the internal grid is
/// rank 8, matching render order; all lookups go through `Position`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; 8]; 8],
}

impl Board {
    /// An empty board, no pieces placed.
    pub fn empty() -> Self {
        let placeholder = Cell {
            pos: Position::new(0, 1).unwrap(),
            piece: None,
        };
        let mut grid = [[placeholder; 8]; 8];
        for (r, rank) in grid.iter_mut().enumerate() {
            for (c, cell) in rank.iter_mut().enumerate() {
                cell.pos = Position::new(c as i8, 8 - r as i8).expect("grid index in range");
            }
        }
        Board { grid }
    }

    /// The standard starting position: pawns on ranks 2 and 7, back ranks
    /// A..H as rook, knight, bishop, king, bishop, knight, rook with the
    /// kings on the D file and queens on E.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (c, &kind) in back.iter().enumerate() {
            let c = c as i8;
            board.set_piece(
                Position::new(c, 1).unwrap(),
                Some(Piece::new(kind, Color::White)),
            );
            board.set_piece(
                Position::new(c, 8).unwrap(),
                Some(Piece::new(kind, Color::Black)),
            );
            board.set_piece(
                Position::new(c, 2).unwrap(),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            board.set_piece(
                Position::new(c, 7).unwrap(),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
        }
        board
    }

    fn indices(pos: Position) -> (usize, usize) {
        ((8 - pos.row()) as usize, pos.col() as usize)
    }

    pub fn cell_at(&self, pos: Position) -> &Cell {
        let (r, c) = Self::indices(pos);
        &self.grid[r][c]
    }

    /// Lookup by coordinate name, e.g. `"E4"`.
    pub fn cell_by_name(&self, name: &str) -> Result<&Cell, PositionError> {
        Ok(self.cell_at(Position::from_name(name)?))
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.cell_at(pos).piece
    }

    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        let (r, c) = Self::indices(pos);
        self.grid[r][c].piece = piece;
    }

    /// Remove and return the occupant of `pos`.
    pub fn take_piece(&mut self, pos: Position) -> Option<Piece> {
        let (r, c) = Self::indices(pos);
        self.grid[r][c].piece.take()
    }

    /// All cells, rank 8 down to rank 1, columns A to H.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Positions holding a piece of `kind`, optionally restricted to one
    /// color, in scan order.
    pub fn cells_of(&self, kind: PieceKind, color: Option<Color>) -> Vec<Position> {
        self.cells()
            .filter(|cell| match cell.piece {
                Some(p) => p.kind == kind && color.map_or(true, |c| p.color == c),
                None => false,
            })
            .map(|cell| cell.pos)
            .collect()
    }

    /// The king cell of `color`. Exactly one king per color is a board
    /// invariant; a missing king is unrecoverable.
    pub fn king_pos(&self, color: Color) -> Position {
        self.cells_of(PieceKind::King, Some(color))
            .first()
            .copied()
            .expect("king missing from board")
    }

    /// Open cells strictly between two positions, ordered from `from`
    /// toward `to`. Empty for non-aligned (knight-shaped) vectors and for
    /// adjacent cells.
    pub fn cells_between(&self, from: Position, to: Position) -> Vec<Position> {
        let (dir, disp) = vector(from, to);
        let aligned = disp.dx == 0 || disp.dy == 0 || disp.dx.abs() == disp.dy.abs();
        if !aligned {
            return Vec::new();
        }
        let (step_x, step_y) = dir.delta();
        let mut between = Vec::new();
        let mut col = from.col() as i8 + step_x;
        let mut row = from.row() as i8 + step_y;
        while let Some(pos) = Position::new(col, row) {
            if pos == to {
                break;
            }
            between.push(pos);
            col += step_x;
            row += step_y;
        }
        between
    }

    /// The up-to-8 cells at Chebyshev distance 1 from `pos`.
    pub fn surrounding(&self, pos: Position) -> Vec<Position> {
        let mut cells = Vec::with_capacity(8);
        for dx in -1..=1i8 {
            for dy in -1..=1i8 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if let Some(p) = Position::new(pos.col() as i8 + dx, pos.row() as i8 + dy) {
                    cells.push(p);
                }
            }
        }
        cells
    }

    /// Positions occupied by `color`.
    pub fn cells_held_by(&self, color: Color) -> Vec<Position> {
        self.cells()
            .filter(|cell| cell.piece.map_or(false, |p| p.color == color))
            .map(|cell| cell.pos)
            .collect()
    }

    pub fn cells_held_by_opponent_of(&self, color: Color) -> Vec<Position> {
        self.cells_held_by(color.other())
    }

    /// Clear the en-passant flag on every pawn of `color`. Called at the
    /// start of that color's turn, before legality is evaluated, so the
    /// capture window is exactly one opponent ply.
    pub fn reset_passable_pawns(&mut self, color: Color) {
        for rank in self.grid.iter_mut() {
            for cell in rank.iter_mut() {
                if let Some(p) = cell.piece.as_mut() {
                    if p.kind == PieceKind::Pawn && p.color == color {
                        p.passable = false;
                    }
                }
            }
        }
    }

    /// Render view: `[0]` is rank 8, `[7]` rank 1, columns A to H.
    pub fn snapshot(&self) -> [[Option<(PieceKind, Color)>; 8]; 8] {
        let mut out = [[None; 8]; 8];
        for (r, rank) in self.grid.iter().enumerate() {
            for (c, cell) in rank.iter().enumerate() {
                out[r][c] = cell.piece.map(|p| (p.kind, p.color));
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
