//! Assemble arbitrary positions for tests, puzzles and embedding callers.
//!
//! `build` checks the board invariants the engine relies on and then runs the
//! same recompute as a fresh game, so the returned state is indistinguishable
//! from one reached by play.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{promotion_row, CASTLING_SIDES};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{
    attackers_to_square, is_king_in_check, MAX_CHECKING_PIECES,
};
use crate::move_generation::legal_move_generator::refresh_position;

#[derive(Debug, Clone)]
pub struct PositionBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_column: Option<u8>,
    /// First out-of-range square handed to `piece` or `clear`.
    bad_square: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Empty board, White to move, no castling rights.
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_column: None,
            bad_square: None,
        }
    }

    /// Start from the standard layout with all castling rights.
    pub fn starting_position() -> Self {
        Self {
            board: Board::starting_layout(),
            castling_rights: CASTLE_ALL,
            ..Self::new()
        }
    }

    /// Empty-board builder with the pieces of a placement string such as
    /// `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`: eighth rank first,
    /// uppercase White, digits for runs of empty squares.
    pub fn from_placement(placement: &str) -> EngineResult<Self> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid(format!(
                "placement has {} ranks, expected 8",
                ranks.len()
            )));
        }

        let mut builder = Self::new();
        for (rank_index, rank) in ranks.iter().enumerate() {
            let row = 7 - rank_index as u8;
            let mut column = 0u8;
            for symbol in rank.chars() {
                if let Some(skip) = symbol.to_digit(10) {
                    column += skip as u8;
                } else {
                    let kind = piece_kind_from_symbol(symbol).ok_or_else(|| {
                        invalid(format!("unknown placement symbol {symbol:?}"))
                    })?;
                    let color = if symbol.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if column < 8 {
                        builder = builder.piece(row * 8 + column, color, kind);
                    }
                    column += 1;
                }
                if column > 8 {
                    break;
                }
            }
            if column != 8 {
                return Err(invalid(format!("rank {:?} does not cover 8 squares", rank)));
            }
        }
        Ok(builder)
    }

    pub fn piece(self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.place(square, Some(Piece::new(color, kind)))
    }

    pub fn clear(self, square: Square) -> Self {
        self.place(square, None)
    }

    fn place(mut self, square: Square, occupant: Option<Piece>) -> Self {
        if square < 64 {
            self.board.set(square, occupant);
        } else {
            self.bad_square.get_or_insert(square);
        }
        self
    }

    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    pub fn castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Column of an enemy pawn that just double-pushed, capturable en passant
    /// by the side to move.
    pub fn en_passant_column(mut self, column: u8) -> Self {
        self.en_passant_column = Some(column);
        self
    }

    pub fn build(self) -> EngineResult<GameState> {
        if let Some(square) = self.bad_square {
            return Err(EngineError::InvalidSquareIndex(square as usize));
        }

        let mut king_squares = [0 as Square; 2];
        for color in [Color::White, Color::Black] {
            let king = Piece::new(color, PieceKind::King);
            let kings: Vec<Square> = self.board.find(king).collect();
            let [square] = kings.as_slice() else {
                return Err(invalid(format!(
                    "expected one {color:?} king, found {}",
                    kings.len()
                )));
            };
            king_squares[color.index()] = *square;

            if self.board.count(Piece::new(color, PieceKind::Pawn)) > 8 {
                return Err(invalid(format!("more than eight {color:?} pawns")));
            }
        }

        for (square, piece) in self.board.occupied() {
            let row = square_row(square);
            if piece.is_kind(PieceKind::Pawn)
                && (row == promotion_row(Color::White) || row == promotion_row(Color::Black))
            {
                return Err(invalid(format!("pawn on back rank square {square}")));
            }
        }

        let mover = self.side_to_move;
        let waiting = mover.opposite();
        if is_king_in_check(&self.board, king_squares[waiting.index()], waiting) {
            return Err(invalid(format!("{waiting:?} is in check but not to move")));
        }
        let checkers = attackers_to_square(&self.board, king_squares[mover.index()], waiting);
        if checkers.len() > MAX_CHECKING_PIECES {
            return Err(invalid(format!(
                "{mover:?} king attacked by {} pieces",
                checkers.len()
            )));
        }

        for castling in CASTLING_SIDES {
            if self.castling_rights & castling.right == 0 {
                continue;
            }
            let color = if castling.king_from < 8 {
                Color::White
            } else {
                Color::Black
            };
            if self.board.get(castling.king_from) != Some(Piece::new(color, PieceKind::King))
                || self.board.get(castling.rook_from) != Some(Piece::new(color, PieceKind::Rook))
            {
                return Err(invalid(format!(
                    "castling right {:#06b} without king and rook on home squares",
                    castling.right
                )));
            }
        }

        let mut en_passant_columns = [None; 2];
        if let Some(column) = self.en_passant_column {
            self.validate_en_passant(column)?;
            en_passant_columns[mover.index()] = Some(column);
        }

        let mut game_state = GameState {
            board: self.board,
            side_to_move: mover,
            king_squares,
            castling_rights: self.castling_rights,
            en_passant_columns,
            checking_pieces: Vec::new(),
            pinned_pieces: Vec::new(),
            legal_moves: Vec::new(),
            pending_promotion: None,
        };
        refresh_position(&mut game_state);
        Ok(game_state)
    }

    fn validate_en_passant(&self, column: u8) -> EngineResult<()> {
        if column > 7 {
            return Err(invalid(format!("en-passant column {column} is off the board")));
        }

        // The pushed pawn stands on its fourth rank with the two squares it
        // crossed still empty.
        let pusher = self.side_to_move.opposite();
        let forward = pusher.pawn_direction();
        let pawn_row: i8 = match pusher {
            Color::White => 3,
            Color::Black => 4,
        };
        let column = column as i8;

        let pawn_square = square_at(pawn_row, column);
        let crossed = square_at(pawn_row - forward, column);
        let origin = square_at(pawn_row - 2 * forward, column);

        let consistent = matches!(
            (pawn_square, crossed, origin),
            (Some(pawn), Some(crossed), Some(origin))
                if self.board.get(pawn) == Some(Piece::new(pusher, PieceKind::Pawn))
                    && self.board.is_empty(crossed)
                    && self.board.is_empty(origin)
        );
        if consistent {
            Ok(())
        } else {
            Err(invalid(format!(
                "no {pusher:?} pawn double-pushed on column {column}"
            )))
        }
    }
}

fn piece_kind_from_symbol(symbol: char) -> Option<PieceKind> {
    match symbol.to_ascii_lowercase() {
        'p' => Some(PieceKind::Pawn),
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        'k' => Some(PieceKind::King),
        _ => None,
    }
}

fn invalid(reason: String) -> EngineError {
    EngineError::InvalidPosition(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kings() -> PositionBuilder {
        PositionBuilder::new()
            .piece(4, Color::White, PieceKind::King)
            .piece(60, Color::Black, PieceKind::King)
    }

    #[test]
    fn starting_position_builds_like_a_new_game() {
        let built = PositionBuilder::starting_position()
            .build()
            .expect("starting position should be valid");
        assert_eq!(built, GameState::new_game());
    }

    #[test]
    fn placement_string_matches_starting_position() {
        let built = PositionBuilder::from_placement("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
            .expect("placement should parse")
            .castling_rights(CASTLE_ALL)
            .build()
            .expect("starting position should be valid");
        assert_eq!(built, GameState::new_game());
    }

    #[test]
    fn malformed_placement_is_rejected() {
        for placement in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        ] {
            assert!(
                matches!(
                    PositionBuilder::from_placement(placement),
                    Err(EngineError::InvalidPosition(_))
                ),
                "{placement} should be rejected"
            );
        }
    }

    #[test]
    fn missing_or_extra_king_is_rejected() {
        let no_black_king = PositionBuilder::new().piece(4, Color::White, PieceKind::King);
        assert!(matches!(
            no_black_king.build(),
            Err(EngineError::InvalidPosition(_))
        ));

        let two_white_kings = kings().piece(0, Color::White, PieceKind::King);
        assert!(matches!(
            two_white_kings.build(),
            Err(EngineError::InvalidPosition(_))
        ));
    }

    #[test]
    fn off_board_square_is_rejected() {
        let builder = kings().piece(64, Color::White, PieceKind::Queen);
        assert_eq!(builder.build(), Err(EngineError::InvalidSquareIndex(64)));
    }

    #[test]
    fn pawn_on_back_rank_is_rejected() {
        let builder = kings().piece(0, Color::White, PieceKind::Pawn);
        assert!(matches!(builder.build(), Err(EngineError::InvalidPosition(_))));
    }

    #[test]
    fn side_not_to_move_in_check_is_rejected() {
        let builder = kings().piece(59, Color::White, PieceKind::Queen);
        assert!(matches!(builder.build(), Err(EngineError::InvalidPosition(_))));
    }

    #[test]
    fn castling_right_requires_home_squares() {
        let builder = kings().castling_rights(CASTLE_WHITE_KINGSIDE);
        assert!(matches!(builder.build(), Err(EngineError::InvalidPosition(_))));

        let ok = kings()
            .piece(7, Color::White, PieceKind::Rook)
            .castling_rights(CASTLE_WHITE_KINGSIDE)
            .build()
            .expect("king and rook are home");
        assert_eq!(ok.castling_rights(), CASTLE_WHITE_KINGSIDE);
    }

    #[test]
    fn en_passant_column_requires_double_pushed_pawn() {
        let missing = kings().en_passant_column(3);
        assert!(matches!(missing.build(), Err(EngineError::InvalidPosition(_))));

        let game = kings()
            .piece(35, Color::Black, PieceKind::Pawn)
            .piece(36, Color::White, PieceKind::Pawn)
            .en_passant_column(3)
            .build()
            .expect("d7-d5 was just played");
        assert_eq!(game.en_passant_column(Color::White), Some(3));
        assert_eq!(game.en_passant_column(Color::Black), None);
    }
}
