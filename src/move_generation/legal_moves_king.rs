//! Legal king move generation, including castling.

use crate::game_state::chess_rules::castling_sides;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_square_attacked, mask_squares};
use crate::moves::king_moves::king_attacks;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<LegalMove>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();

    // The king must not shield a square from a checking slider behind it.
    let mut without_king = game_state.board.clone();
    without_king.take(from);

    for to in mask_squares(king_attacks(from)) {
        if game_state
            .board
            .get(to)
            .is_some_and(|piece| piece.is_color(side))
        {
            continue;
        }
        if !is_square_attacked(&without_king, to, enemy) {
            out.push(LegalMove::new(from, to, MoveKind::Normal));
        }
    }

    generate_castling_moves(game_state, from, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<LegalMove>) {
    // Cannot castle out of check.
    if game_state.is_in_check() {
        return;
    }

    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let board = &game_state.board;

    for castling in castling_sides(side) {
        if game_state.castling_rights & castling.right == 0 || king_from != castling.king_from {
            continue;
        }
        if board.get(castling.rook_from) != Some(Piece::new(side, PieceKind::Rook)) {
            continue;
        }
        if !castling.must_be_empty.iter().all(|sq| board.is_empty(*sq)) {
            continue;
        }
        if is_square_attacked(board, castling.king_passes, enemy)
            || is_square_attacked(board, castling.king_to, enemy)
        {
            continue;
        }

        out.push(LegalMove::new(
            castling.king_from,
            castling.king_to,
            MoveKind::Castling,
        ));
    }
}
