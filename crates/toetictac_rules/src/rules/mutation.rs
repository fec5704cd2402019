//! The mutation variant.
//!
//! Playing a cell claims it and hands every orthogonal neighbor to the other
//! player. Because one move can complete lines for both players at once, the
//! state check tracks each player separately and calls a double completion a
//! draw. A player may take back an opponent's cell but may not replay the
//! cell that was played on the previous turn.

use super::lines::LineScan;
use super::{Placement, RuleSet, Verdict};
use crate::action::MoveError;
use crate::board::{Board, is_orthogonal_offset};
use crate::busy::BusySignal;
use crate::events::{GameObserver, GridEvent};
use crate::types::{CELL_COUNT, GameState, Player};
use tracing::{debug, instrument, warn};

/// Mutation rules. Remembers the last played cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationRules {
    last_move: Option<usize>,
}

impl MutationRules {
    /// Creates rules for a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell played on the previous turn.
    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// Checks the 3x3 window around `index`.
    fn local_validate(
        &self,
        board: &Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<(), MoveError> {
        let cell = board.get(index).ok_or(MoveError::OutOfRange(index))?;

        for (offset, neighbor) in Board::window(index) {
            if is_orthogonal_offset(offset) && busy.is_cell_busy(neighbor) {
                return Err(MoveError::NeighborBusy { index, neighbor });
            }
        }

        if busy.is_cell_busy(index) {
            return Err(MoveError::CellBusy(index));
        }
        if cell.owner() == Some(to_move) {
            return Err(MoveError::OwnCell {
                index,
                player: to_move,
            });
        }
        Ok(())
    }

    /// Cells worth emphasizing for the player about to move.
    ///
    /// A cell is emphasized while the game is active if it was just played
    /// or already belongs to `to_move`: the cells that player cannot take.
    pub fn highlights(&self, board: &Board, to_move: Player, state: GameState) -> [bool; CELL_COUNT] {
        std::array::from_fn(|index| {
            state == GameState::Active
                && (self.last_move == Some(index) || board.owner(index) == Some(to_move))
        })
    }
}

impl RuleSet for MutationRules {
    fn validate_move(
        &self,
        board: &Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<(), MoveError> {
        // Nothing moves while any cell is still turning.
        if busy.any_busy() {
            return Err(MoveError::BoardBusy);
        }
        if self.last_move == Some(index) {
            return Err(MoveError::RepeatedMove(index));
        }
        self.local_validate(board, to_move, index, busy)
    }

    #[instrument(skip(self, board, busy), fields(last_move = ?self.last_move))]
    fn try_perform_move(
        &mut self,
        board: &mut Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<Placement, MoveError> {
        self.validate_move(board, to_move, index, busy)?;

        let mut changed = Vec::new();
        for neighbor in Board::orthogonal_neighbors(index) {
            if let Some(cell) = board.cell_mut(neighbor)
                && cell.flip()
            {
                changed.push(neighbor);
            }
        }

        let target = board.cell_mut(index).ok_or(MoveError::OutOfRange(index))?;
        if target.set_owner(Some(to_move)) {
            changed.push(index);
        }

        self.last_move = Some(index);
        debug!(?changed, "Flipped neighbors");

        Ok(Placement {
            player: to_move,
            changed,
        })
    }

    #[instrument(skip(self, board))]
    fn check_game_state(&self, board: &Board) -> Verdict {
        let scan = LineScan::scan(board);

        if scan.has_line() {
            let won_a = scan.won(Player::A);
            let won_b = scan.won(Player::B);

            if !won_a && !won_b {
                warn!(mask = scan.mask(), "Completed lines without a winner, calling it a draw");
            }

            return if won_a == won_b {
                Verdict {
                    state: GameState::Draw,
                    victor: None,
                    winning_mask: scan.mask(),
                }
            } else {
                Verdict {
                    state: GameState::Victory,
                    victor: Some(if won_a { Player::A } else { Player::B }),
                    winning_mask: scan.mask(),
                }
            };
        }

        if board.is_full() {
            return Verdict::full_board();
        }

        Verdict::active()
    }

    fn on_valid_move(
        &self,
        board: &Board,
        to_move: Player,
        state: GameState,
        observer: &mut dyn GameObserver,
    ) {
        for (index, emphasized) in self.highlights(board, to_move, state).into_iter().enumerate() {
            observer.notify(GridEvent::HighlightChanged { index, emphasized });
        }
    }
}
