//! Legal bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{destination_constraint, push_piece_moves};
use crate::moves::ray_moves::slider_attacks;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<LegalMove>) {
    let targets = slider_attacks(&game_state.board, from, PieceKind::Bishop)
        & destination_constraint(game_state, from);
    push_piece_moves(game_state, from, targets, out);
}
