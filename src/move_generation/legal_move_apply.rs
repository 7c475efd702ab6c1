//! Move application.
//!
//! Moves are only ever looked up in the cached legal move list, so the board
//! updates here never re-validate chess rules. Every error path returns before
//! the first mutation.

use log::debug;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_rules::{castling_rights_tied_to, CASTLING_SIDES};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::refresh_position;

/// Play the cached legal move `(from, to)`.
///
/// Promotions stop after placing the pawn on the far rank: the side to move is
/// kept and the legal move list is emptied until [`resolve_promotion`] runs.
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> EngineResult<LegalMove> {
    if let Some(square) = game_state.pending_promotion {
        debug!("rejected {from}->{to}: promotion pending on {square}");
        return Err(EngineError::PromotionPending { square });
    }

    let Some(mv) = game_state
        .legal_moves
        .iter()
        .copied()
        .find(|mv| mv.from == from && mv.to == to)
    else {
        debug!("rejected illegal move {from}->{to}");
        return Err(EngineError::IllegalMove { from, to });
    };

    let mover = game_state.side_to_move;
    let Some(piece) = game_state.board.take(from) else {
        panic!("cached legal move {mv:?} starts on an empty square");
    };
    game_state.board.set(to, Some(piece));

    // The previous ply's en-passant window closes whatever happens next.
    game_state.en_passant_columns = [None; 2];

    match mv.kind {
        MoveKind::EnPassant => {
            if let Some(captured) = square_at(square_row(from) as i8, square_column(to) as i8) {
                game_state.board.take(captured);
            }
        }
        MoveKind::Castling => {
            if let Some(castling) = CASTLING_SIDES
                .iter()
                .find(|side| side.king_from == from && side.king_to == to)
            {
                let rook = game_state.board.take(castling.rook_from);
                game_state.board.set(castling.rook_to, rook);
            }
        }
        MoveKind::PawnDoublePush => {
            game_state.en_passant_columns[mover.opposite().index()] = Some(square_column(to));
        }
        MoveKind::Normal | MoveKind::Promotion => {}
    }

    if piece.is_kind(PieceKind::King) {
        game_state.king_squares[mover.index()] = to;
    }

    // Leaving a home square or being captured on one both revoke rights.
    game_state.castling_rights &= !(castling_rights_tied_to(from) | castling_rights_tied_to(to));

    if mv.kind == MoveKind::Promotion {
        game_state.pending_promotion = Some(to);
        game_state.legal_moves.clear();
        debug!("{mover:?} {from}->{to}: awaiting promotion choice");
        return Ok(mv);
    }

    debug!("{mover:?} played {from}->{to} ({:?})", mv.kind);
    finish_turn(game_state);
    Ok(mv)
}

/// Replace the pending pawn with `kind` and pass the move to the opponent.
pub fn resolve_promotion(game_state: &mut GameState, kind: PieceKind) -> EngineResult<()> {
    let Some(square) = game_state.pending_promotion else {
        debug!("rejected promotion to {kind:?}: none pending");
        return Err(EngineError::NoPendingPromotion);
    };
    if !kind.is_promotion_target() {
        debug!("rejected promotion to {kind:?} on {square}");
        return Err(EngineError::InvalidPromotionKind(kind));
    }

    let mover = game_state.side_to_move;
    game_state.board.set(square, Some(Piece::new(mover, kind)));
    game_state.pending_promotion = None;
    debug!("{mover:?} promoted on {square} to {kind:?}");

    finish_turn(game_state);
    Ok(())
}

fn finish_turn(game_state: &mut GameState) {
    game_state.side_to_move = game_state.side_to_move.opposite();
    refresh_position(game_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::position_builder::PositionBuilder;
    use pretty_assertions::assert_eq;

    fn play(game: &mut GameState, moves: &[(Square, Square)]) {
        for (from, to) in moves {
            apply_move(game, *from, *to).expect("scripted move should be legal");
        }
    }

    #[test]
    fn double_push_opens_en_passant_for_one_ply() {
        let mut game = GameState::new_game();
        play(&mut game, &[(12, 28)]); // e2e4
        assert_eq!(game.en_passant_column(Color::Black), Some(4));
        assert_eq!(game.en_passant_column(Color::White), None);
        assert_eq!(game.side_to_move(), Color::Black);

        play(&mut game, &[(62, 45)]); // Ng8f6
        assert_eq!(game.en_passant_column(Color::Black), None);
        assert_eq!(game.en_passant_column(Color::White), None);
    }

    #[test]
    fn en_passant_capture_is_available_only_immediately() {
        let mut game = GameState::new_game();
        // e4, a6, e5, d5 (double push next to the e5 pawn)
        play(&mut game, &[(12, 28), (48, 40), (28, 36), (51, 35)]);
        let en_passant = LegalMove::new(36, 43, MoveKind::EnPassant);
        assert!(game.legal_moves().contains(&en_passant));

        let mut taken = game.clone();
        play(&mut taken, &[(36, 43)]);
        assert_eq!(taken.board().get(35), None);
        assert_eq!(
            taken.board().get(43),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );

        // Any other move first closes the window.
        play(&mut game, &[(6, 21), (40, 32)]);
        assert!(!game.legal_moves().iter().any(|mv| mv.kind == MoveKind::EnPassant));
    }

    #[test]
    fn black_pawn_on_fourth_rank_may_take_e3_after_e4() {
        let mut game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(12, Color::White, PieceKind::Pawn) // e2
            .piece(27, Color::Black, PieceKind::Pawn) // d4
            .piece(60, Color::Black, PieceKind::King)
            .build()
            .expect("position should be valid");

        play(&mut game, &[(12, 28)]);
        assert!(game
            .legal_moves()
            .contains(&LegalMove::new(27, 20, MoveKind::EnPassant)));

        play(&mut game, &[(27, 20)]);
        assert_eq!(game.board().get(28), None);
        assert_eq!(
            game.board().get(20),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
    }

    #[test]
    fn illegal_move_leaves_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(
            apply_move(&mut game, 12, 36),
            Err(EngineError::IllegalMove { from: 12, to: 36 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let mut game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(7, Color::White, PieceKind::Rook)
            .piece(0, Color::White, PieceKind::Rook)
            .piece(60, Color::Black, PieceKind::King)
            .castling_rights(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE)
            .build()
            .expect("position should be valid");

        let mv = apply_move(&mut game, 4, 6).expect("castling should be legal");
        assert_eq!(mv.kind, MoveKind::Castling);
        assert_eq!(game.board().get(5), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(game.board().get(7), None);
        assert_eq!(game.king_square(Color::White), 6);
        assert_eq!(game.castling_rights(), 0);
    }

    #[test]
    fn king_returning_home_does_not_restore_castling() {
        let mut game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(7, Color::White, PieceKind::Rook)
            .piece(0, Color::White, PieceKind::Rook)
            .piece(60, Color::Black, PieceKind::King)
            .castling_rights(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE)
            .build()
            .expect("position should be valid");

        // Ke1-f1, Ke8-d8, Kf1-e1, Kd8-e8
        play(&mut game, &[(4, 5), (60, 59), (5, 4), (59, 60)]);
        assert_eq!(game.king_square(Color::White), 4);
        assert_eq!(game.castling_rights(), 0);
        assert!(!game.legal_moves().iter().any(|mv| mv.kind == MoveKind::Castling));
    }

    #[test]
    fn rook_move_revokes_only_its_side() {
        let mut game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(7, Color::White, PieceKind::Rook)
            .piece(0, Color::White, PieceKind::Rook)
            .piece(60, Color::Black, PieceKind::King)
            .castling_rights(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE)
            .build()
            .expect("position should be valid");

        play(&mut game, &[(7, 15), (60, 59), (15, 7)]);
        assert_eq!(game.castling_rights(), CASTLE_WHITE_QUEENSIDE);
        assert!(!game.legal_moves().contains(&LegalMove::new(4, 6, MoveKind::Castling)));
    }

    #[test]
    fn capturing_unmoved_rook_revokes_its_rights() {
        let mut game = PositionBuilder::new()
            .side_to_move(Color::Black)
            .piece(4, Color::White, PieceKind::King)
            .piece(7, Color::White, PieceKind::Rook)
            .piece(60, Color::Black, PieceKind::King)
            .piece(47, Color::Black, PieceKind::Rook) // h6
            .castling_rights(CASTLE_WHITE_KINGSIDE)
            .build()
            .expect("position should be valid");

        play(&mut game, &[(47, 7)]);
        assert_eq!(game.castling_rights(), 0);
    }

    #[test]
    fn promotion_waits_for_choice() {
        let mut game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(48, Color::White, PieceKind::Pawn) // a7
            .piece(62, Color::Black, PieceKind::King)
            .build()
            .expect("position should be valid");

        let mv = apply_move(&mut game, 48, 56).expect("promotion push should be legal");
        assert_eq!(mv.kind, MoveKind::Promotion);
        assert!(game.has_pending_promotion());
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.legal_moves().is_empty());
        assert_eq!(game.game_outcome(), GameOutcome::Ongoing);

        let before = game.clone();
        assert_eq!(
            apply_move(&mut game, 4, 12),
            Err(EngineError::PromotionPending { square: 56 })
        );
        assert_eq!(
            resolve_promotion(&mut game, PieceKind::King),
            Err(EngineError::InvalidPromotionKind(PieceKind::King))
        );
        assert_eq!(game, before);

        resolve_promotion(&mut game, PieceKind::Queen).expect("queen is a valid choice");
        assert_eq!(game.board().get(56), Some(Piece::new(Color::White, PieceKind::Queen)));
        assert_eq!(game.side_to_move(), Color::Black);
        assert!(!game.has_pending_promotion());
        assert!(!game.legal_moves().is_empty());
    }

    #[test]
    fn resolve_without_pending_promotion_is_rejected() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(
            resolve_promotion(&mut game, PieceKind::Queen),
            Err(EngineError::NoPendingPromotion)
        );
        assert_eq!(game, before);
    }

    #[test]
    fn promotion_can_give_check() {
        let mut game = PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(49, Color::White, PieceKind::Pawn) // b7
            .piece(60, Color::Black, PieceKind::King) // e8
            .build()
            .expect("position should be valid");

        apply_move(&mut game, 49, 57).expect("b8 promotion push should be legal");
        resolve_promotion(&mut game, PieceKind::Rook).expect("rook is a valid choice");
        assert!(game.is_in_check());
        assert_eq!(game.checking_pieces(), &[57]);
    }
}
