//! Terminal-oriented Unicode board renderer for logs, tests and diagnostics.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Render the board to a Unicode string, White at the bottom.
pub fn render_game_state(game_state: &GameState) -> String {
    let board = game_state.board();
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8u8).rev() {
        let rank = char::from(b'1' + row);
        out.push(rank);
        out.push(' ');

        for column in 0..8u8 {
            let square = row * 8 + column;
            match board.get(square) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if column < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

pub fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
