//! Check and pin constraints shared by every non-king generator.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::mask_squares;
use crate::moves::ray_moves::squares_between;

/// Destinations a non-king piece on `from` may reach without leaving its king
/// attacked, before its own movement pattern is considered.
///
/// Double check leaves nothing. A single check allows blocking or capturing
/// the checker. A pin intersects that with the pin's permitted squares.
pub fn destination_constraint(game_state: &GameState, from: Square) -> u64 {
    let king = game_state.king_square(game_state.side_to_move);

    let mut allowed = match game_state.checking_pieces.as_slice() {
        [] => u64::MAX,
        [checker] => squares_between(king, *checker) | square_mask(*checker),
        _ => 0,
    };

    if let Some(pin) = game_state.pinned_pieces.iter().find(|pin| pin.pinned == from) {
        allowed &= pin.permitted;
    }

    allowed
}

/// Push a `Normal` move to each square in `targets` that is not held by the
/// side to move.
pub fn push_piece_moves(
    game_state: &GameState,
    from: Square,
    targets: u64,
    out: &mut Vec<LegalMove>,
) {
    let side = game_state.side_to_move;
    for to in mask_squares(targets) {
        match game_state.board.get(to) {
            Some(piece) if piece.is_color(side) => {}
            _ => out.push(LegalMove::new(from, to, MoveKind::Normal)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position_builder::PositionBuilder;

    #[test]
    fn unconstrained_piece_may_go_anywhere() {
        let game = GameState::new_game();
        assert_eq!(destination_constraint(&game, 6), u64::MAX);
    }

    #[test]
    fn single_check_allows_block_or_capture() {
        // White king e1, black rook e8 giving check, white rook a4.
        let game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(24, Color::White, PieceKind::Rook)
            .piece(60, Color::Black, PieceKind::Rook)
            .piece(63, Color::Black, PieceKind::King)
            .build()
            .expect("position should be valid");

        let expected = [12u8, 20, 28, 36, 44, 52, 60]
            .iter()
            .fold(0u64, |acc, sq| acc | square_mask(*sq));
        assert_eq!(destination_constraint(&game, 24), expected);
    }

    #[test]
    fn pinned_piece_under_check_with_disjoint_lines_is_frozen() {
        // King e1 checked by rook e8; knight d2 pinned by bishop a5.
        let game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(11, Color::White, PieceKind::Knight)
            .piece(32, Color::Black, PieceKind::Bishop)
            .piece(60, Color::Black, PieceKind::Rook)
            .piece(63, Color::Black, PieceKind::King)
            .build()
            .expect("position should be valid");

        assert_eq!(destination_constraint(&game, 11), 0);
    }
}
