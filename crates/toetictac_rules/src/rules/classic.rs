//! Classic three-in-a-row.

use super::lines::LineScan;
use super::{Placement, RuleSet, Verdict};
use crate::action::MoveError;
use crate::board::Board;
use crate::busy::BusySignal;
use crate::types::{GameState, Player};
use tracing::instrument;

/// Classic rules: claim an empty cell, first line of three wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassicRules;

impl RuleSet for ClassicRules {
    fn validate_move(
        &self,
        board: &Board,
        _to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<(), MoveError> {
        let cell = board.get(index).ok_or(MoveError::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied(index));
        }
        if busy.is_cell_busy(index) {
            return Err(MoveError::CellBusy(index));
        }
        Ok(())
    }

    #[instrument(skip(self, board, busy))]
    fn try_perform_move(
        &mut self,
        board: &mut Board,
        to_move: Player,
        index: usize,
        busy: &dyn BusySignal,
    ) -> Result<Placement, MoveError> {
        self.validate_move(board, to_move, index, busy)?;

        let cell = board.cell_mut(index).ok_or(MoveError::OutOfRange(index))?;
        cell.set_owner(Some(to_move));

        Ok(Placement {
            player: to_move,
            changed: vec![index],
        })
    }

    #[instrument(skip(self, board))]
    fn check_game_state(&self, board: &Board) -> Verdict {
        let scan = LineScan::scan(board);

        if scan.has_line() {
            return Verdict {
                state: GameState::Victory,
                victor: scan.last_winner(),
                winning_mask: scan.mask(),
            };
        }

        if board.is_full() {
            return Verdict::full_board();
        }

        Verdict::active()
    }
}
