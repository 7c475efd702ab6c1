//! Player abstraction used by the match harness.
//!
//! A player only ever sees a read-only `GameState` and picks from its cached
//! legal moves, so any strategy (random, scripted, a UI bridge) plugs in behind
//! the same two calls.

use crate::game_state::{chess_types::*, game_state::GameState};

pub trait Player {
    fn name(&self) -> &str;

    /// Called once before each game.
    fn new_game(&mut self) {}

    /// Pick one of `game_state.legal_moves()`, or `None` when there are none.
    fn choose_move(&mut self, game_state: &GameState) -> Option<LegalMove>;

    /// Pick the piece a pawn on the far rank becomes.
    fn choose_promotion(&mut self, _game_state: &GameState) -> PieceKind {
        PieceKind::Queen
    }
}
