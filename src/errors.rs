//! Recoverable errors reported by the position engine.
//!
//! Every variant leaves the game state exactly as it was before the call.
//! Broken internal invariants (a missing king, a third checking piece) are
//! not represented here; they abort.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The `(from, to)` pair is not in the current legal move list.
    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },

    #[error("square index {0} is outside 0..=63")]
    InvalidSquareIndex(usize),

    #[error("invalid square name: {0:?}")]
    InvalidSquareName(String),

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0:?}")]
    InvalidPromotionKind(PieceKind),

    /// A move was submitted while the pawn on `square` still awaits its
    /// promotion choice.
    #[error("promotion pending on square {square}")]
    PromotionPending { square: Square },

    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

/// Narrow a caller-supplied index to a board square.
#[inline]
pub fn checked_square(index: usize) -> EngineResult<Square> {
    if index < 64 {
        Ok(index as Square)
    } else {
        Err(EngineError::InvalidSquareIndex(index))
    }
}
