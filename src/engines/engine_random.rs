//! Random-move player.
//!
//! Selects uniformly from the legal moves and promotes to a uniformly chosen
//! kind. Used for self-play smoke runs and integration testing.

use rand::prelude::IndexedRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::engines::engine_trait::Player;
use crate::game_state::{chess_types::*, game_state::GameState};

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible move choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Option<LegalMove> {
        game_state.legal_moves().choose(&mut self.rng).copied()
    }

    fn choose_promotion(&mut self, _game_state: &GameState) -> PieceKind {
        PROMOTION_KINDS
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(PieceKind::Queen)
    }
}
