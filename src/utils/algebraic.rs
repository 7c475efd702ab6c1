//! Square-name conversions (`e4` <-> 28) and long algebraic move text.
//!
//! Used for logs, the match record and test fixtures. The engine itself only
//! ever sees square indices.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;

/// Convert a square name (for example "e4") to a square index.
#[inline]
pub fn algebraic_to_square(name: &str) -> EngineResult<Square> {
    let invalid = || EngineError::InvalidSquareName(name.to_owned());

    let &[file, rank] = name.as_bytes() else {
        return Err(invalid());
    };
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to its name (for example "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square_column(square));
    let rank_char = char::from(b'1' + square_row(square));
    format!("{file_char}{rank_char}")
}

pub fn promotion_to_char(kind: PieceKind) -> Option<char> {
    match kind {
        PieceKind::Queen => Some('q'),
        PieceKind::Rook => Some('r'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Knight => Some('n'),
        PieceKind::Pawn | PieceKind::King => None,
    }
}

/// Long algebraic text for a played move, e.g. "e2e4", "e1g1", "b7b8q".
pub fn move_to_long_algebraic(mv: LegalMove, promotion: Option<PieceKind>) -> String {
    let mut out = square_to_algebraic(mv.from);
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(suffix) = promotion.and_then(promotion_to_char) {
        out.push(suffix);
    }
    out
}
