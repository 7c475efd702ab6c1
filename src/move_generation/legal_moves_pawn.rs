//! Legal pawn move generation: pushes, double pushes, captures, en passant
//! and promotion.

use crate::game_state::chess_rules::{en_passant_capture_row, pawn_home_row, promotion_row};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, mask_squares};
use crate::move_generation::legal_move_shared::destination_constraint;
use crate::moves::pawn_moves::pawn_attacks;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<LegalMove>) {
    let side = game_state.side_to_move;
    let board = &game_state.board;
    let allowed = destination_constraint(game_state, from);
    let row = square_row(from) as i8;
    let column = square_column(from) as i8;
    let forward = side.pawn_direction();

    let arrival_kind = |to: Square| {
        if square_row(to) == promotion_row(side) {
            MoveKind::Promotion
        } else {
            MoveKind::Normal
        }
    };

    if let Some(one_step) = square_at(row + forward, column) {
        if board.is_empty(one_step) {
            if allowed & square_mask(one_step) != 0 {
                out.push(LegalMove::new(from, one_step, arrival_kind(one_step)));
            }

            if square_row(from) == pawn_home_row(side) {
                if let Some(two_step) = square_at(row + 2 * forward, column) {
                    if board.is_empty(two_step) && allowed & square_mask(two_step) != 0 {
                        out.push(LegalMove::new(from, two_step, MoveKind::PawnDoublePush));
                    }
                }
            }
        }
    }

    for to in mask_squares(pawn_attacks(side, from)) {
        match board.get(to) {
            Some(piece) if !piece.is_color(side) => {
                if allowed & square_mask(to) != 0 {
                    out.push(LegalMove::new(from, to, arrival_kind(to)));
                }
            }
            Some(_) => {}
            None => {
                if en_passant_is_legal(game_state, from, to) {
                    out.push(LegalMove::new(from, to, MoveKind::EnPassant));
                }
            }
        }
    }
}

/// En passant removes two pawns from the capturing pawn's rank at once, which
/// the single-blocker pin model cannot see, and may capture the very pawn that
/// gives check. Legality is therefore decided by playing the capture on a
/// scratch board.
fn en_passant_is_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    let side = game_state.side_to_move;

    if game_state.en_passant_column(side) != Some(square_column(to))
        || square_row(from) != en_passant_capture_row(side)
    {
        return false;
    }

    let Some(captured) = square_at(square_row(from) as i8, square_column(to) as i8) else {
        return false;
    };
    if game_state.board.get(captured) != Some(Piece::new(side.opposite(), PieceKind::Pawn)) {
        return false;
    }

    let mut scratch = game_state.board.clone();
    scratch.take(captured);
    let pawn = scratch.take(from);
    scratch.set(to, pawn);

    !is_square_attacked(&scratch, game_state.king_square(side), side.opposite())
}
