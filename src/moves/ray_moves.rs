//! Ray walking over the board grid for bishops, rooks, queens and the
//! threat analyzer.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{DIAGONAL_DIRECTIONS, DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::game_state::chess_types::*;

/// Squares visited walking from `origin` (exclusive) in `direction` until the
/// edge of the board.
#[derive(Debug, Clone)]
pub struct Ray {
    row: i8,
    column: i8,
    d_row: i8,
    d_column: i8,
}

impl Ray {
    #[inline]
    pub fn new(origin: Square, direction: usize) -> Self {
        let (d_row, d_column) = DIRECTIONS[direction];
        Self {
            row: square_row(origin) as i8,
            column: square_column(origin) as i8,
            d_row,
            d_column,
        }
    }
}

impl Iterator for Ray {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        self.row += self.d_row;
        self.column += self.d_column;
        square_at(self.row, self.column)
    }
}

/// Whether a piece of `kind` slides along `direction`.
#[inline]
pub fn slides_along(kind: PieceKind, direction: usize) -> bool {
    match kind {
        PieceKind::Queen => true,
        PieceKind::Rook => ORTHOGONAL_DIRECTIONS.contains(&direction),
        PieceKind::Bishop => DIAGONAL_DIRECTIONS.contains(&direction),
        _ => false,
    }
}

/// Directions a slider of `kind` moves along.
#[inline]
pub fn slider_directions(kind: PieceKind) -> std::ops::Range<usize> {
    match kind {
        PieceKind::Rook => ORTHOGONAL_DIRECTIONS,
        PieceKind::Bishop => DIAGONAL_DIRECTIONS,
        PieceKind::Queen => 0..DIRECTIONS.len(),
        _ => 0..0,
    }
}

/// Squares reachable along `direction` up to and including the first
/// occupied square.
pub fn ray_attacks(board: &Board, origin: Square, direction: usize) -> u64 {
    let mut attacks = 0u64;
    for square in Ray::new(origin, direction) {
        attacks |= square_mask(square);
        if !board.is_empty(square) {
            break;
        }
    }
    attacks
}

pub fn slider_attacks(board: &Board, origin: Square, kind: PieceKind) -> u64 {
    slider_directions(kind).fold(0u64, |acc, direction| {
        acc | ray_attacks(board, origin, direction)
    })
}

/// Direction index leading from `from` towards `to`, if they share a rank,
/// file or diagonal.
pub fn direction_between(from: Square, to: Square) -> Option<usize> {
    if from == to {
        return None;
    }

    let d_row = square_row(to) as i8 - square_row(from) as i8;
    let d_column = square_column(to) as i8 - square_column(from) as i8;
    let aligned = d_row == 0 || d_column == 0 || d_row.abs() == d_column.abs();
    if !aligned {
        return None;
    }

    let step = (d_row.signum(), d_column.signum());
    DIRECTIONS.iter().position(|d| *d == step)
}

/// Squares strictly between `a` and `b`; empty unless they are aligned.
pub fn squares_between(a: Square, b: Square) -> u64 {
    let Some(direction) = direction_between(a, b) else {
        return 0;
    };

    Ray::new(a, direction)
        .take_while(|square| *square != b)
        .fold(0u64, |acc, square| acc | square_mask(square))
}
