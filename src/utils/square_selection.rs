//! Caller-side two-click move entry.
//!
//! The first click picks up a piece of the side to move, the second submits
//! `(selected, clicked)` to [`GameState::apply`]. Clicking the selected square
//! again drops the selection. The engine never sees any of this state.

use log::debug;

use crate::errors::{checked_square, EngineResult};
use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    Selected(Square),
    Deselected,
    /// Click on an empty or enemy square with nothing selected.
    Ignored,
    Moved(LegalMove),
}

/// What a renderer needs to draw one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub occupant: Option<Piece>,
    pub selected: bool,
    /// The selected piece may move here.
    pub legal_target: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquareSelector {
    selected: Option<Square>,
}

impl SquareSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Handle one click. An out-of-range index is rejected without touching
    /// the selection; a failed move attempt clears it.
    pub fn select_square(
        &mut self,
        game_state: &mut GameState,
        square: usize,
    ) -> EngineResult<SelectionEvent> {
        let square = checked_square(square)?;

        let Some(from) = self.selected else {
            let own_piece = game_state
                .board()
                .get(square)
                .is_some_and(|piece| piece.is_color(game_state.side_to_move()));
            if own_piece && !game_state.has_pending_promotion() {
                self.selected = Some(square);
                return Ok(SelectionEvent::Selected(square));
            }
            return Ok(SelectionEvent::Ignored);
        };

        self.selected = None;
        if from == square {
            return Ok(SelectionEvent::Deselected);
        }

        debug!("selection submits {from}->{square}");
        let mv = game_state.apply(from as usize, square as usize)?;
        Ok(SelectionEvent::Moved(mv))
    }

    pub fn square_view(&self, game_state: &GameState, square: usize) -> EngineResult<SquareView> {
        let occupant = game_state.occupant_at(square)?;
        let square = square as Square;
        let legal_target = self.selected.is_some_and(|from| {
            game_state
                .legal_moves_from(from)
                .any(|mv| mv.to == square)
        });

        Ok(SquareView {
            occupant,
            selected: self.selected == Some(square),
            legal_target,
        })
    }
}
