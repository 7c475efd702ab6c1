//! Pawn capture tables.
//!
//! `pawn_attacks(color, sq)` is the set of squares a `color` pawn on `sq`
//! captures on. Read the other way round, `pawn_attacks(color, king_sq)` is
//! where an enemy pawn must stand to attack a `color` king.

use crate::game_state::chess_types::Color;
use crate::moves::king_moves::set_if_valid;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

const fn generate_pawn_attacks(forward: i8) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let column = (sq % 8) as i8;
        table[sq] = set_if_valid(row + forward, column - 1) | set_if_valid(row + forward, column + 1);
        sq += 1;
    }

    table
}
