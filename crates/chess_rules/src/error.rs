use crate::types::{PieceKind, Position};

/// Errors for expected rule violations. These are ordinary result values:
/// the game state is left untouched and the caller re-renders. A broken
/// board invariant (a missing king) is not represented here; it panics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("unknown position: {0:?}")]
    UnknownPosition(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Bad geometry, blocked path, wrong turn, or self-check.
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Position, to: Position },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromotionError {
    /// The target cell holds no pawn, or the requested kind is not one of
    /// the four legal promotion pieces.
    #[error("cannot promote {at} to {kind:?}")]
    NotApplicable { at: Position, kind: PieceKind },
}
