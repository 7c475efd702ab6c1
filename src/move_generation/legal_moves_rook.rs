//! Legal rook move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::{destination_constraint, push_piece_moves};
use crate::moves::ray_moves::slider_attacks;

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<LegalMove>) {
    let targets = slider_attacks(&game_state.board, from, PieceKind::Rook)
        & destination_constraint(game_state, from);
    push_piece_moves(game_state, from, targets, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position_builder::PositionBuilder;

    #[test]
    fn rook_diagonally_pinned_cannot_move() {
        let game = PositionBuilder::new()
            .piece(0, Color::White, PieceKind::King)
            .piece(9, Color::White, PieceKind::Rook)
            .piece(27, Color::Black, PieceKind::Bishop)
            .piece(63, Color::Black, PieceKind::King)
            .build()
            .expect("position should be valid");

        let mut out = Vec::new();
        generate_rook_moves(&game, 9, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn rook_on_open_board_stops_at_first_enemy() {
        let game = PositionBuilder::new()
            .piece(7, Color::White, PieceKind::King)
            .piece(0, Color::White, PieceKind::Rook)
            .piece(32, Color::Black, PieceKind::Knight)
            .piece(63, Color::Black, PieceKind::King)
            .build()
            .expect("position should be valid");

        let mut out = Vec::new();
        generate_rook_moves(&game, 0, &mut out);
        let targets: Vec<Square> = out.iter().map(|mv| mv.to).collect();
        // b1..g1 along the rank, a2..a5 up the file (a5 is the capture).
        assert_eq!(targets, vec![1, 2, 3, 4, 5, 6, 8, 16, 24, 32]);
    }
}
