//! Perft node counting over the cached legal move lists.
//!
//! Every legal move is played on a cloned state; a promotion expands into one
//! child per promotion kind, matching the usual perft convention.

use std::thread;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, resolve_promotion};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    pub fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }

    fn tally_leaf(&mut self, parent: &GameState, mv: LegalMove, child: &GameState) {
        self.nodes += 1;

        if mv.kind == MoveKind::EnPassant || parent.board().get(mv.to).is_some() {
            self.captures += 1;
        }
        match mv.kind {
            MoveKind::EnPassant => self.en_passant += 1,
            MoveKind::Castling => self.castles += 1,
            MoveKind::Promotion => self.promotions += 1,
            MoveKind::Normal | MoveKind::PawnDoublePush => {}
        }

        if child.is_in_check() {
            self.checks += 1;
            if child.legal_moves().is_empty() {
                self.checkmates += 1;
            }
        }
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> EngineResult<PerftCounts> {
    if let Some(square) = game_state.pending_promotion_square() {
        return Err(EngineError::PromotionPending { square });
    }
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        total.merge(perft_move(game_state, *mv, depth)?);
    }
    Ok(total)
}

/// Same counts as [`perft`], with one worker thread per root move.
pub fn perft_multi_threaded(game_state: &GameState, depth: u8) -> EngineResult<PerftCounts> {
    if depth <= 1 {
        return perft(game_state, depth);
    }
    if let Some(square) = game_state.pending_promotion_square() {
        return Err(EngineError::PromotionPending { square });
    }

    thread::scope(|scope| {
        let handles: Vec<_> = game_state
            .legal_moves()
            .iter()
            .map(|mv| scope.spawn(move || perft_move(game_state, *mv, depth)))
            .collect();

        let mut total = PerftCounts::default();
        for handle in handles {
            let local = match handle.join() {
                Ok(result) => result?,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            total.merge(local);
        }
        Ok(total)
    })
}

/// Per-root-move node counts, for locating a miscounting subtree.
pub fn perft_divide(game_state: &GameState, depth: u8) -> EngineResult<Vec<(LegalMove, u64)>> {
    if let Some(square) = game_state.pending_promotion_square() {
        return Err(EngineError::PromotionPending { square });
    }
    if depth == 0 {
        return Ok(Vec::new());
    }
    game_state
        .legal_moves()
        .iter()
        .map(|mv| Ok((*mv, perft_move(game_state, *mv, depth)?.nodes)))
        .collect()
}

fn perft_move(parent: &GameState, mv: LegalMove, depth: u8) -> EngineResult<PerftCounts> {
    let mut counts = PerftCounts::default();
    for child in successors(parent, mv)? {
        if depth == 1 {
            counts.tally_leaf(parent, mv, &child);
        } else {
            counts.merge(perft(&child, depth - 1)?);
        }
    }
    Ok(counts)
}

fn successors(parent: &GameState, mv: LegalMove) -> EngineResult<Vec<GameState>> {
    let mut child = parent.clone();
    apply_move(&mut child, mv.from, mv.to)?;
    if !child.has_pending_promotion() {
        return Ok(vec![child]);
    }

    PROMOTION_KINDS
        .iter()
        .map(|kind| {
            let mut promoted = child.clone();
            resolve_promotion(&mut promoted, *kind)?;
            Ok(promoted)
        })
        .collect()
}
