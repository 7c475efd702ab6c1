//! Canonical chess-rule constants.
//!
//! Home squares, castling geometry, compass directions and the standard
//! starting layout used to initialize a game.

use crate::game_state::chess_types::*;

pub const WHITE_KING_HOME: Square = 4;
pub const BLACK_KING_HOME: Square = 60;

pub const WHITE_KINGSIDE_ROOK_HOME: Square = 7;
pub const WHITE_QUEENSIDE_ROOK_HOME: Square = 0;
pub const BLACK_KINGSIDE_ROOK_HOME: Square = 63;
pub const BLACK_QUEENSIDE_ROOK_HOME: Square = 56;

/// `(row, column)` steps. Indices `0..4` are orthogonal, `4..8` diagonal.
pub const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const ORTHOGONAL_DIRECTIONS: std::ops::Range<usize> = 0..4;
pub const DIAGONAL_DIRECTIONS: std::ops::Range<usize> = 4..8;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
];

/// One side of castling: the squares involved and the right that gates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingSide {
    pub right: CastlingRights,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares between king and rook that must be empty.
    pub must_be_empty: &'static [Square],
    /// Square the king crosses on its way to `king_to`.
    pub king_passes: Square,
}

pub const CASTLING_SIDES: [CastlingSide; 4] = [
    CastlingSide {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        rook_to: 5,
        must_be_empty: &[5, 6],
        king_passes: 5,
    },
    CastlingSide {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        rook_to: 3,
        must_be_empty: &[1, 2, 3],
        king_passes: 3,
    },
    CastlingSide {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        rook_to: 61,
        must_be_empty: &[61, 62],
        king_passes: 61,
    },
    CastlingSide {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        rook_to: 59,
        must_be_empty: &[57, 58, 59],
        king_passes: 59,
    },
];

/// Castling sides available to `color`, kingside first.
#[inline]
pub fn castling_sides(color: Color) -> &'static [CastlingSide] {
    match color {
        Color::White => &CASTLING_SIDES[0..2],
        Color::Black => &CASTLING_SIDES[2..4],
    }
}

/// Rights revoked when a piece leaves or is captured on `square`.
#[inline]
pub const fn castling_rights_tied_to(square: Square) -> CastlingRights {
    match square {
        WHITE_KING_HOME => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
        BLACK_KING_HOME => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        WHITE_KINGSIDE_ROOK_HOME => CASTLE_WHITE_KINGSIDE,
        WHITE_QUEENSIDE_ROOK_HOME => CASTLE_WHITE_QUEENSIDE,
        BLACK_KINGSIDE_ROOK_HOME => CASTLE_BLACK_KINGSIDE,
        BLACK_QUEENSIDE_ROOK_HOME => CASTLE_BLACK_QUEENSIDE,
        _ => 0,
    }
}

#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Row a pawn must stand on to capture en passant.
#[inline]
pub const fn en_passant_capture_row(color: Color) -> u8 {
    match color {
        Color::White => 4,
        Color::Black => 3,
    }
}

pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
