//! Knight attack table, indexed by origin square.

use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::moves::king_moves::set_if_valid;

pub const KNIGHT_ATTACKS: [u64; 64] = generate_knight_attacks();

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

const fn generate_knight_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let column = (sq % 8) as i8;
        let mut attacks = 0u64;

        let mut i = 0usize;
        while i < KNIGHT_OFFSETS.len() {
            let (d_row, d_column) = KNIGHT_OFFSETS[i];
            attacks |= set_if_valid(row + d_row, column + d_column);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{knight_attacks, KNIGHT_ATTACKS};

    #[test]
    fn knight_attacks_from_d4_has_eight_targets() {
        let d4 = 27u8;
        assert_eq!(KNIGHT_ATTACKS[d4 as usize].count_ones(), 8);
        assert_eq!(knight_attacks(d4).count_ones(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let h8 = 63u8;
        let expected = (1u64 << 46) | (1u64 << 53);
        assert_eq!(knight_attacks(h8), expected);
    }
}
