//! Crate root module declarations for the chess position engine.
//!
//! Exposes the board state, threat analysis, legal move generation and move
//! application, plus the players, match harness and helpers built on top of
//! them, under stable module paths for binaries, tests and embedding callers.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position_builder;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod ray_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod match_harness;
    pub mod render_game_state;
    pub mod square_selection;
}
