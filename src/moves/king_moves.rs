//! King adjacency table, also used to keep the two kings apart.

use crate::game_state::chess_rules::DIRECTIONS;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let column = (sq % 8) as i8;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < DIRECTIONS.len() {
            let (d_row, d_column) = DIRECTIONS[i];
            attacks |= set_if_valid(row + d_row, column + d_column);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn set_if_valid(row: i8, column: i8) -> u64 {
    if row < 0 || row > 7 || column < 0 || column > 7 {
        return 0;
    }

    let square = (row as usize) * 8 + (column as usize);
    1u64 << square
}
