//! Core value types shared by every part of the position engine.
//!
//! Squares are plain indices (`0 == a1`, `7 == h1`, `63 == h8`), pieces are a
//! color/kind pair, and legal moves are `(from, to, kind)` triples produced by
//! the generator and consumed by the applier.

pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn push for this color.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Whether a pawn may become this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// An occupied square's content. Empty squares are `None` on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color == color
    }

    #[inline]
    pub fn is_kind(self, kind: PieceKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn same_color(self, other: Piece) -> bool {
        self.color == other.color
    }
}

/// Board square index (`0..=63`).
pub type Square = u8;

#[inline]
pub const fn square_row(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn square_column(square: Square) -> u8 {
    square % 8
}

/// Square at `(row, column)`, or `None` when either coordinate is off the board.
#[inline]
pub const fn square_at(row: i8, column: i8) -> Option<Square> {
    if row < 0 || row > 7 || column < 0 || column > 7 {
        None
    } else {
        Some((row * 8 + column) as Square)
    }
}

#[inline]
pub const fn square_mask(square: Square) -> u64 {
    1u64 << square
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Quiet move or ordinary capture.
    Normal,
    PawnDoublePush,
    EnPassant,
    Castling,
    /// Pawn reaching the far rank, with or without a capture. The target kind
    /// is supplied afterwards through `resolve_promotion`.
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl LegalMove {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }
}

/// A pinned piece and the destinations it may still reach.
///
/// `permitted` is a square set rather than a ray so that no caller assumes
/// the pinned piece, its king and the pinner are collinear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    pub pinned: Square,
    pub pinner: Square,
    pub permitted: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    /// Checkmate when the side to move is also in check, stalemate otherwise.
    SideToMoveHasNoMoves,
}
