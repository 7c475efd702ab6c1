//! Attack and threat analysis.
//!
//! `analyze_threats` scans outward from a king to find the pieces giving check
//! and the friendly pieces pinned against it. `is_square_attacked` answers the
//! same question for an arbitrary square and is what king moves and castling
//! are checked against.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::DIRECTIONS;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::ray_moves::{slides_along, squares_between, Ray};

/// Chess never produces more than two simultaneous checkers.
pub const MAX_CHECKING_PIECES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreatAnalysis {
    pub checking_pieces: Vec<Square>,
    pub pins: Vec<Pin>,
}

/// Checkers of, and pins against, the `color` king standing on `king_square`.
///
/// Panics if a third checking piece is found; that position cannot arise from
/// legal play.
pub fn analyze_threats(board: &Board, king_square: Square, color: Color) -> ThreatAnalysis {
    let mut analysis = ThreatAnalysis::default();

    for direction in 0..DIRECTIONS.len() {
        let mut own_blocker: Option<Square> = None;

        for square in Ray::new(king_square, direction) {
            let Some(piece) = board.get(square) else {
                continue;
            };

            if piece.is_color(color) {
                if own_blocker.is_some() {
                    break;
                }
                own_blocker = Some(square);
                continue;
            }

            if slides_along(piece.kind, direction) {
                match own_blocker {
                    None => push_checker(&mut analysis.checking_pieces, square, king_square),
                    Some(pinned) => analysis.pins.push(Pin {
                        pinned,
                        pinner: square,
                        permitted: squares_between(king_square, square) | square_mask(square),
                    }),
                }
            }
            break;
        }
    }

    let enemy = color.opposite();
    for square in mask_squares(knight_attacks(king_square)) {
        if board.get(square) == Some(Piece::new(enemy, PieceKind::Knight)) {
            push_checker(&mut analysis.checking_pieces, square, king_square);
        }
    }
    for square in mask_squares(pawn_attacks(color, king_square)) {
        if board.get(square) == Some(Piece::new(enemy, PieceKind::Pawn)) {
            push_checker(&mut analysis.checking_pieces, square, king_square);
        }
    }

    analysis
}

fn push_checker(checkers: &mut Vec<Square>, square: Square, king_square: Square) {
    assert!(
        checkers.len() < MAX_CHECKING_PIECES,
        "king on {king_square} attacked by more than {MAX_CHECKING_PIECES} pieces"
    );
    checkers.push(square);
}

/// Whether any `attacker` piece attacks `square` on `board`.
///
/// Kings count as attackers of their neighbouring squares, which keeps the two
/// kings from ever standing side by side.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    for direction in 0..DIRECTIONS.len() {
        let first_piece = Ray::new(square, direction).find_map(|sq| board.get(sq));
        if let Some(piece) = first_piece {
            if piece.is_color(attacker) && slides_along(piece.kind, direction) {
                return true;
            }
        }
    }

    let hits = |mask: u64, kind: PieceKind| {
        mask_squares(mask).any(|sq| board.get(sq) == Some(Piece::new(attacker, kind)))
    };

    hits(knight_attacks(square), PieceKind::Knight)
        || hits(pawn_attacks(attacker.opposite(), square), PieceKind::Pawn)
        || hits(king_attacks(square), PieceKind::King)
}

/// Every `attacker` piece attacking `square`, in scan order of the techniques
/// (rays, knights, pawns, king).
pub fn attackers_to_square(board: &Board, square: Square, attacker: Color) -> Vec<Square> {
    let mut attackers = Vec::new();

    for direction in 0..DIRECTIONS.len() {
        let first = Ray::new(square, direction).find_map(|sq| board.get(sq).map(|p| (sq, p)));
        if let Some((sq, piece)) = first {
            if piece.is_color(attacker) && slides_along(piece.kind, direction) {
                attackers.push(sq);
            }
        }
    }

    for (mask, kind) in [
        (knight_attacks(square), PieceKind::Knight),
        (pawn_attacks(attacker.opposite(), square), PieceKind::Pawn),
        (king_attacks(square), PieceKind::King),
    ] {
        attackers.extend(
            mask_squares(mask).filter(|sq| board.get(*sq) == Some(Piece::new(attacker, kind))),
        );
    }

    attackers
}

/// Whether the `color` king on `board` is attacked.
pub fn is_king_in_check(board: &Board, king_square: Square, color: Color) -> bool {
    is_square_attacked(board, king_square, color.opposite())
}

/// Squares set in `mask`, lowest first.
#[inline]
pub fn mask_squares(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let square = mask.trailing_zeros() as Square;
        mask &= mask - 1;
        Some(square)
    })
}
