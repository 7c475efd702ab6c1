//! Head-to-head player match harness.
//!
//! Runs two `Player` implementations against each other on one `GameState`,
//! resolving promotions through the mover and recording every ply in long
//! algebraic form. Game end is inferred here from the engine's
//! "no legal moves" signal plus the check flag.

use log::{debug, info};

use crate::engines::engine_trait::Player;
use crate::errors::EngineResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinsCheckmate,
    BlackWinsCheckmate,
    Stalemate,
    MaxPliesReached,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Base seed for seeded players; game `i` of a series uses `seed + i`.
    pub seed: u64,
    /// Log every ply at info level.
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            seed: 0,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves_lan: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSeriesStats {
    pub games: u32,
    pub white_wins: u32,
    pub black_wins: u32,
    pub stalemates: u32,
    pub unfinished: u32,
    pub total_plies: u64,
}

impl MatchSeriesStats {
    pub fn record(&mut self, result: &MatchResult) {
        self.games += 1;
        self.total_plies += result.played_moves_lan.len() as u64;
        match result.outcome {
            MatchOutcome::WhiteWinsCheckmate => self.white_wins += 1,
            MatchOutcome::BlackWinsCheckmate => self.black_wins += 1,
            MatchOutcome::Stalemate => self.stalemates += 1,
            MatchOutcome::MaxPliesReached => self.unfinished += 1,
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} white_wins={} black_wins={} stalemates={} unfinished={} avg_plies={:.1}",
            self.games,
            self.white_wins,
            self.black_wins,
            self.stalemates,
            self.unfinished,
            if self.games == 0 {
                0.0
            } else {
                self.total_plies as f64 / f64::from(self.games)
            }
        )
    }
}

/// Play one game from the standard opening position.
pub fn play_match(
    white: &mut dyn Player,
    black: &mut dyn Player,
    config: &MatchConfig,
) -> EngineResult<MatchResult> {
    play_match_from_state(GameState::new_game(), white, black, config)
}

/// Play one game from a caller-provided position.
///
/// A promotion still pending in `state` is first resolved by the side that
/// made it.
pub fn play_match_from_state(
    mut state: GameState,
    white: &mut dyn Player,
    black: &mut dyn Player,
    config: &MatchConfig,
) -> EngineResult<MatchResult> {
    white.new_game();
    black.new_game();

    if state.has_pending_promotion() {
        let player: &mut dyn Player = match state.side_to_move() {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };
        let kind = player.choose_promotion(&state);
        state.resolve_promotion(kind)?;
    }

    let mut played_moves_lan = Vec::new();

    for _ in 0..config.max_plies {
        if state.game_outcome() == GameOutcome::SideToMoveHasNoMoves {
            let outcome = match (state.is_in_check(), state.side_to_move()) {
                (true, Color::White) => MatchOutcome::BlackWinsCheckmate,
                (true, Color::Black) => MatchOutcome::WhiteWinsCheckmate,
                (false, _) => MatchOutcome::Stalemate,
            };
            debug!("game over after {} plies: {outcome:?}", played_moves_lan.len());
            return Ok(MatchResult {
                outcome,
                final_state: state,
                played_moves_lan,
            });
        }

        let mover = state.side_to_move();
        let player: &mut dyn Player = match mover {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let Some(chosen) = player
            .choose_move(&state)
            .or_else(|| state.legal_moves().first().copied())
        else {
            break;
        };
        let mv = state.apply(chosen.from as usize, chosen.to as usize)?;

        let promotion = if state.has_pending_promotion() {
            let kind = player.choose_promotion(&state);
            state.resolve_promotion(kind)?;
            Some(kind)
        } else {
            None
        };

        let lan = move_to_long_algebraic(mv, promotion);
        if config.verbose {
            info!("{} ({mover:?}) plays {lan}", player.name());
        }
        played_moves_lan.push(lan);
    }

    Ok(MatchResult {
        outcome: MatchOutcome::MaxPliesReached,
        final_state: state,
        played_moves_lan,
    })
}

/// White and Black player seeds for game `game` of a series.
pub fn game_seeds(config: &MatchConfig, game: u32) -> (u64, u64) {
    let seed = config.seed.wrapping_add(u64::from(game));
    (seed, seed ^ 0xA5A5_5A5A_0123_4567)
}

/// Play `games` games, building a fresh pair of players for each from its
/// game seeds.
pub fn play_match_series<FW, FB>(
    games: u32,
    config: &MatchConfig,
    white_factory: FW,
    black_factory: FB,
) -> EngineResult<MatchSeriesStats>
where
    FW: Fn(u64) -> Box<dyn Player>,
    FB: Fn(u64) -> Box<dyn Player>,
{
    let mut stats = MatchSeriesStats::default();

    for game in 0..games {
        let (white_seed, black_seed) = game_seeds(config, game);
        let mut white = white_factory(white_seed);
        let mut black = black_factory(black_seed);

        let result = play_match(white.as_mut(), black.as_mut(), config)?;
        info!(
            "game {}/{} seed={} result={:?} plies={}",
            game + 1,
            games,
            white_seed,
            result.outcome,
            result.played_moves_lan.len()
        );
        stats.record(&result);
    }

    Ok(stats)
}
