//! Full legal move generation pipeline.
//!
//! `refresh_position` runs the threat analysis for the side to move, caches the
//! checkers and pins on the game state, then dispatches every friendly piece
//! to its kind-specific generator. It is the single recompute entry point used
//! after initialization, after each applied move and after a promotion is
//! resolved.

use log::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{analyze_threats, MAX_CHECKING_PIECES};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Recompute check, pin and legal-move caches for the side to move.
///
/// Panics if the cached king square does not hold that side's king.
pub fn refresh_position(game_state: &mut GameState) {
    let side = game_state.side_to_move;
    let king_square = game_state.king_square(side);
    assert_eq!(
        game_state.board.get(king_square),
        Some(Piece::new(side, PieceKind::King)),
        "{side:?} king missing from cached square {king_square}"
    );

    let analysis = analyze_threats(&game_state.board, king_square, side);
    game_state.checking_pieces = analysis.checking_pieces;
    game_state.pinned_pieces = analysis.pins;
    game_state.legal_moves = generate_legal_moves(game_state);

    trace!(
        "{:?} to move: {} checker(s), {} pin(s), {} legal move(s)",
        side,
        game_state.checking_pieces.len(),
        game_state.pinned_pieces.len(),
        game_state.legal_moves.len()
    );
}

/// Legal moves for the side to move, in square-scan order of the moving piece.
///
/// Relies on the check and pin caches already describing the current board.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<LegalMove> {
    let side = game_state.side_to_move;
    let double_check = game_state.checking_pieces.len() >= MAX_CHECKING_PIECES;
    let mut out = Vec::with_capacity(64);

    for (from, piece) in game_state.board.occupied() {
        if !piece.is_color(side) {
            continue;
        }

        match piece.kind {
            PieceKind::King => generate_king_moves(game_state, from, &mut out),
            _ if double_check => {}
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, &mut out),
        }
    }

    out
}
