//! 8×8 occupancy grid.

use crate::game_state::chess_rules::{pawn_home_row, BACK_RANK};
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn starting_layout() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back_row = match color {
                Color::White => 0,
                Color::Black => 7,
            };
            let pawn_row = pawn_home_row(color) as usize;
            for (column, kind) in BACK_RANK.iter().enumerate() {
                board.squares[back_row][column] = Some(Piece::new(color, *kind));
                board.squares[pawn_row][column] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square_row(square) as usize][square_column(square) as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square_row(square) as usize][square_column(square) as usize] = piece;
    }

    /// Empties `square` and returns whatever stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square_row(square) as usize][square_column(square) as usize].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares in scan order (`a1`, `b1`, ... `h8`).
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64u8).filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn find(&self, piece: Piece) -> impl Iterator<Item = Square> + '_ {
        self.occupied()
            .filter(move |(_, p)| *p == piece)
            .map(|(square, _)| square)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.find(piece).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_layout_has_thirty_two_pieces() {
        let board = Board::starting_layout();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.get(4), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(board.get(59), Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(board.count(Piece::new(Color::Black, PieceKind::Pawn)), 8);
        assert!(board.is_empty(27));
    }

    #[test]
    fn take_clears_square() {
        let mut board = Board::starting_layout();
        let knight = board.take(1);
        assert_eq!(knight, Some(Piece::new(Color::White, PieceKind::Knight)));
        assert!(board.is_empty(1));
    }
}
