//! Rule sets for the grid game.
//!
//! Each variant implements [`RuleSet`]. The engine holds a [`Rules`] value,
//! picked once from the configured [`Variant`] and never swapped.

pub mod classic;
mod lines;
pub mod mutation;

pub use classic::ClassicRules;
pub use mutation::MutationRules;

use crate::action::MoveError;
use crate::board::Board;
use crate::busy::BusySignal;
use crate::events::GameObserver;
use crate::types::{CELL_COUNT, GameState, Player, Variant};

/// The cells touched by an applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Player who moved.
    pub player: Player,
    /// Cells whose owner changed, in the order they changed.
    pub changed: Vec<usize>,
}

/// Game state derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Resulting state.
    pub state: GameState,
    /// Winner, set only for `Victory`.
    pub victor: Option<Player>,
    /// Cells lying on a completed line.
    pub winning_mask: u16,
}

impl Verdict {
    /// Verdict for a board that is still in play.
    pub fn active() -> Self {
        Self {
            state: GameState::Active,
            victor: None,
            winning_mask: 0,
        }
    }

    /// Verdict for a full board without a completed line.
    pub fn full_board() -> Self {
        Self {
            state: GameState::Draw,
            victor: None,
            winning_mask: 0,
        }
    }

    /// Cells that must be greyed out: everything off the winning lines.
    pub fn disabled_cells(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(move |i| self.winning_mask != 0 && self.winning_mask & (1 << i) == 0)
    }
}

/// Variant-specific rules.
pub trait RuleSet {
    /// Checks whether `to_move` may play `index` on `board`.
    fn validate_move(
        &self,
        board: &Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<(), MoveError>;

    /// Validates and applies a move. The board is untouched on error.
    ///
    /// The caller advances the turn after a successful placement.
    fn try_perform_move(
        &mut self,
        board: &mut Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<Placement, MoveError>;

    /// Derives the game state from the board.
    fn check_game_state(&self, board: &Board) -> Verdict;

    /// Runs after every applied move, once the state has been re-evaluated.
    fn on_valid_move(
        &self,
        _board: &Board,
        _to_move: Player,
        _state: GameState,
        _observer: &mut dyn GameObserver,
    ) {
    }
}

/// The closed set of rule variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rules {
    /// Straight three-in-a-row.
    Classic(ClassicRules),
    /// Adjacency-flip variant.
    Mutation(MutationRules),
}

impl Rules {
    /// Creates fresh rules for `variant`.
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Classic => Rules::Classic(ClassicRules),
            Variant::Mutation => Rules::Mutation(MutationRules::new()),
        }
    }

    /// The variant these rules implement.
    pub fn variant(&self) -> Variant {
        match self {
            Rules::Classic(_) => Variant::Classic,
            Rules::Mutation(_) => Variant::Mutation,
        }
    }

    /// Last played cell, tracked only by the mutation variant.
    pub fn last_move(&self) -> Option<usize> {
        match self {
            Rules::Classic(_) => None,
            Rules::Mutation(rules) => rules.last_move(),
        }
    }

    /// Advisory emphasis per cell, for variants that have one.
    pub fn highlights(
        &self,
        board: &Board,
        to_move: Player,
        state: GameState,
    ) -> Option<[bool; CELL_COUNT]> {
        match self {
            Rules::Classic(_) => None,
            Rules::Mutation(rules) => Some(rules.highlights(board, to_move, state)),
        }
    }
}

impl RuleSet for Rules {
    fn validate_move(
        &self,
        board: &Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<(), MoveError> {
        match self {
            Rules::Classic(rules) => rules.validate_move(board, to_move, index, busy),
            Rules::Mutation(rules) => rules.validate_move(board, to_move, index, busy),
        }
    }

    fn try_perform_move(
        &mut self,
        board: &mut Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<Placement, MoveError> {
        match self {
            Rules::Classic(rules) => rules.try_perform_move(board, to_move, index, busy),
            Rules::Mutation(rules) => rules.try_perform_move(board, to_move, index, busy),
        }
    }

    fn check_game_state(&self, board: &Board) -> Verdict {
        match self {
            Rules::Classic(rules) => rules.check_game_state(board),
            Rules::Mutation(rules) => rules.check_game_state(board),
        }
    }

    fn on_valid_move(
        &self,
        board: &Board,
        to_move: Player,
        state: GameState,
        observer: &mut dyn GameObserver,
    ) {
        match self {
            Rules::Classic(rules) => rules.on_valid_move(board, to_move, state, observer),
            Rules::Mutation(rules) => rules.on_valid_move(board, to_move, state, observer),
        }
    }
}
