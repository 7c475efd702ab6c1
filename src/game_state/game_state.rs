//! The position engine's single owned state value.
//!
//! `GameState` holds the board plus everything move generation depends on
//! (side to move, king squares, castling rights, en-passant columns) and the
//! derived check, pin and legal-move caches. The caches are rebuilt after every
//! state change, so the query methods here never compute anything themselves.
//!
//! Independent games or search copies are just independent `GameState`
//! values; nothing is shared between them.

use crate::errors::{checked_square, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BLACK_KING_HOME, WHITE_KING_HOME};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, resolve_promotion};
use crate::move_generation::legal_move_generator::refresh_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) king_squares: [Square; 2],
    pub(crate) castling_rights: CastlingRights,
    /// Column a pawn of this color may capture onto en passant this ply.
    pub(crate) en_passant_columns: [Option<u8>; 2],

    pub(crate) checking_pieces: Vec<Square>,
    pub(crate) pinned_pieces: Vec<Pin>,
    pub(crate) legal_moves: Vec<LegalMove>,

    /// Square of a pawn that reached the far rank and awaits its new kind.
    pub(crate) pending_promotion: Option<Square>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard opening position, White to move.
    pub fn new_game() -> Self {
        let mut state = Self {
            board: Board::empty(),
            side_to_move: Color::White,
            king_squares: [WHITE_KING_HOME, BLACK_KING_HOME],
            castling_rights: 0,
            en_passant_columns: [None; 2],
            checking_pieces: Vec::new(),
            pinned_pieces: Vec::new(),
            legal_moves: Vec::new(),
            pending_promotion: None,
        };
        state.initialize();
        state
    }

    /// Reset to the standard opening position. Idempotent.
    pub fn initialize(&mut self) {
        self.board = Board::starting_layout();
        self.side_to_move = Color::White;
        self.king_squares = [WHITE_KING_HOME, BLACK_KING_HOME];
        self.castling_rights = CASTLE_ALL;
        self.en_passant_columns = [None; 2];
        self.pending_promotion = None;
        refresh_position(self);
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn occupant_at(&self, square: usize) -> EngineResult<Option<Piece>> {
        Ok(self.board.get(checked_square(square)?))
    }

    /// Snapshot valid until the next successful `apply`.
    #[inline]
    pub fn legal_moves(&self) -> &[LegalMove] {
        &self.legal_moves
    }

    /// Legal moves starting on `from`, for highlighting a selected piece.
    pub fn legal_moves_from(&self, from: Square) -> impl Iterator<Item = &LegalMove> + '_ {
        self.legal_moves.iter().filter(move |mv| mv.from == from)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_column(&self, color: Color) -> Option<u8> {
        self.en_passant_columns[color.index()]
    }

    #[inline]
    pub fn checking_pieces(&self) -> &[Square] {
        &self.checking_pieces
    }

    #[inline]
    pub fn pinned_pieces(&self) -> &[Pin] {
        &self.pinned_pieces
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        !self.checking_pieces.is_empty()
    }

    #[inline]
    pub fn has_pending_promotion(&self) -> bool {
        self.pending_promotion.is_some()
    }

    #[inline]
    pub fn pending_promotion_square(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn game_outcome(&self) -> GameOutcome {
        if self.pending_promotion.is_none() && self.legal_moves.is_empty() {
            GameOutcome::SideToMoveHasNoMoves
        } else {
            GameOutcome::Ongoing
        }
    }

    /// Play the legal move `(from, to)`. On any error the state is untouched.
    ///
    /// A pawn reaching the far rank leaves the state waiting on
    /// [`GameState::resolve_promotion`] with the same side to move.
    pub fn apply(&mut self, from: usize, to: usize) -> EngineResult<LegalMove> {
        let from = checked_square(from)?;
        let to = checked_square(to)?;
        apply_move(self, from, to)
    }

    /// Turn the pending pawn into `kind` and hand the move to the opponent.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> EngineResult<()> {
        resolve_promotion(self, kind)
    }
}
