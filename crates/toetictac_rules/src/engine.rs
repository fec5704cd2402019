//! The grid game-state machine.
//!
//! [`GridEngine`] owns the board, the turn counter and the game state. It
//! receives cell indices from whatever captures player input, hands them to
//! the selected [`Rules`], re-evaluates the board and tells the observer what
//! changed. Bad input is logged and reported back as a value; it never
//! panics and never leaves a move half-applied.

use crate::action::{MoveError, MoveOutcome};
use crate::board::Board;
use crate::busy::{BusySignal, NeverBusy};
use crate::config::GridConfig;
use crate::events::{GameObserver, GridEvent};
use crate::rules::{RuleSet, Rules, Verdict};
use crate::types::{CELL_COUNT, GameState, Player, Variant};
use tracing::{debug, info, instrument, warn};

/// A single game on a 3x3 board.
///
/// `B` answers whether a cell is still animating; `O` receives notifications.
#[derive(Debug)]
pub struct GridEngine<B = NeverBusy, O = ()> {
    board: Board,
    turn: Player,
    state: GameState,
    victor: Option<Player>,
    rules: Rules,
    busy: B,
    observer: O,
}

impl GridEngine {
    /// Creates an engine with no animation and no observer.
    pub fn headless(variant: Variant) -> Self {
        Self::new(&GridConfig::new(variant), NeverBusy, ())
    }
}

impl<B, O> GridEngine<B, O>
where
    B: BusySignal,
    O: GameObserver,
{
    /// Sets up a new game.
    ///
    /// If the config cannot produce a full board the engine starts
    /// `Inactive` and ignores every move.
    #[instrument(skip(busy, observer))]
    pub fn new(config: &GridConfig, busy: B, observer: O) -> Self {
        let state = if config.is_playable() {
            GameState::Active
        } else {
            warn!(
                cell_count = config.cell_count(),
                "Cannot set up a 3x3 board, engine stays inactive"
            );
            GameState::Inactive
        };

        let mut engine = Self {
            board: Board::new(),
            turn: Player::A,
            state,
            victor: None,
            rules: Rules::new(*config.variant()),
            busy,
            observer,
        };

        if engine.state == GameState::Active
            && let Some(highlights) = engine.highlights()
        {
            for (index, emphasized) in highlights.into_iter().enumerate() {
                engine
                    .observer
                    .notify(GridEvent::HighlightChanged { index, emphasized });
            }
        }

        info!(variant = %engine.variant(), state = %engine.state, "Game created");
        engine
    }

    /// Reports a player's action on the cell at `index`.
    ///
    /// Applies the move if the variant allows it, then re-evaluates the game.
    /// Observers hear about applied moves only.
    #[instrument(skip(self), fields(variant = %self.variant(), turn = %self.turn))]
    pub fn report_move(&mut self, index: usize) -> MoveOutcome {
        if index >= CELL_COUNT {
            debug!("Ignoring move outside the board");
            return MoveOutcome::Rejected(MoveError::OutOfRange(index));
        }
        if self.state != GameState::Active {
            debug!(state = %self.state, "Ignoring move, game not active");
            return MoveOutcome::Rejected(MoveError::NotActive(self.state));
        }

        let placement =
            match self
                .rules
                .try_perform_move(&mut self.board, self.turn, index, &self.busy)
            {
                Ok(placement) => placement,
                Err(error) => {
                    debug!(%error, "Move rejected");
                    return MoveOutcome::Rejected(error);
                }
            };

        self.turn = self.turn.opponent();

        self.observer.notify(GridEvent::MoveApplied {
            index,
            player: placement.player,
        });
        for &changed in &placement.changed {
            self.notify_cell(changed);
        }

        if self.check_game_state() {
            info!(state = %self.state, victor = ?self.victor, "Game over");
        }

        self.rules
            .on_valid_move(&self.board, self.turn, self.state, &mut self.observer);

        MoveOutcome::Applied {
            player: placement.player,
            state: self.state,
        }
    }

    /// Re-derives the game state from the board.
    ///
    /// Returns true if the game is now over. Does nothing once the game has
    /// left `Active`.
    #[instrument(skip(self))]
    pub fn check_game_state(&mut self) -> bool {
        if self.state != GameState::Active {
            return false;
        }

        let verdict = self.rules.check_game_state(&self.board);
        self.apply_verdict(verdict);
        self.state.is_terminal()
    }

    /// Checks whether the player to move could play `index` right now.
    ///
    /// Has no side effects.
    pub fn validate_move(&self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if self.state != GameState::Active {
            return Err(MoveError::NotActive(self.state));
        }
        self.rules
            .validate_move(&self.board, self.turn, index, &self.busy)
    }

    /// Cells the player to move could play right now.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT)
            .filter(|&index| self.validate_move(index).is_ok())
            .collect()
    }

    fn apply_verdict(&mut self, verdict: Verdict) {
        for index in verdict.disabled_cells() {
            if let Some(cell) = self.board.cell_mut(index) {
                cell.disable();
            }
            self.notify_cell(index);
        }

        if verdict.state != self.state {
            self.state = verdict.state;
            self.victor = verdict.victor;
            self.observer.notify(GridEvent::GameStateChanged {
                state: self.state,
                victor: self.victor,
            });
        }
    }

    fn notify_cell(&mut self, index: usize) {
        if let Some(cell) = self.board.get(index) {
            self.observer.notify(GridEvent::CellChanged {
                index,
                owner: cell.owner(),
                disabled: cell.is_disabled(),
            });
        }
    }

    /// Releases the board. The engine cannot be used afterwards.
    ///
    /// Hands the busy signal and observer back to the caller.
    #[instrument(skip(self), fields(state = %self.state))]
    pub fn clear(self) -> (B, O) {
        info!("Clearing board");
        (self.busy, self.observer)
    }
}

impl<B, O> GridEngine<B, O> {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move next.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Winner, set only in `Victory`.
    pub fn victor(&self) -> Option<Player> {
        self.victor
    }

    /// Rule variant of this game.
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// Cell played on the previous turn (mutation variant only).
    pub fn last_move(&self) -> Option<usize> {
        self.rules.last_move()
    }

    /// Current advisory emphasis per cell (mutation variant only).
    pub fn highlights(&self) -> Option<[bool; CELL_COUNT]> {
        self.rules.highlights(&self.board, self.turn, self.state)
    }

    /// Returns the busy signal.
    pub fn busy(&self) -> &B {
        &self.busy
    }

    /// Returns the busy signal mutably, for collaborators that drive it.
    pub fn busy_mut(&mut self) -> &mut B {
        &mut self.busy
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}
