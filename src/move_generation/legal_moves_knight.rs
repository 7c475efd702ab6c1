//! Legal knight move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{destination_constraint, push_piece_moves};
use crate::moves::knight_moves::knight_attacks;

/// A pinned knight can never stay on its pin line, so the constraint mask
/// empties its targets without a special case.
pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<LegalMove>) {
    let targets = knight_attacks(from) & destination_constraint(game_state, from);
    push_piece_moves(game_state, from, targets, out);
}
