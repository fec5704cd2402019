//! Move outcomes and rejection reasons.

use super::types::{GameState, Player};

/// Why a reported move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a cell.
    #[display("Cell {} is outside the board (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The game is not accepting moves.
    #[display("Game is not accepting moves ({})", _0)]
    NotActive(GameState),

    /// The target cell is still animating.
    #[display("Cell {} is busy", _0)]
    CellBusy(usize),

    /// Some cell on the board is still animating.
    #[display("Board is busy")]
    BoardBusy,

    /// An orthogonal neighbor of the target is still animating.
    #[display("Cell {index} is locked by busy neighbor {neighbor}")]
    NeighborBusy {
        /// Target cell.
        index: usize,
        /// The busy neighbor.
        neighbor: usize,
    },

    /// The target cell already has an owner.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The target cell already belongs to the player to move.
    #[display("Cell {index} already belongs to player {player}")]
    OwnCell {
        /// Target cell.
        index: usize,
        /// The player to move.
        player: Player,
    },

    /// The target cell was played on the previous turn.
    #[display("Cell {} was played on the previous turn", _0)]
    RepeatedMove(usize),
}

impl std::error::Error for MoveError {}

/// What happened to a reported move.
///
/// Rejections are ordinary values. Nothing is raised to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied.
    Applied {
        /// Player who moved.
        player: Player,
        /// Game state after re-evaluation.
        state: GameState,
    },
    /// The move had no effect.
    Rejected(MoveError),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<MoveError> {
        match self {
            MoveOutcome::Applied { .. } => None,
            MoveOutcome::Rejected(error) => Some(*error),
        }
    }
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Applied { player, state } => {
                write!(f, "Player {} moved ({})", player, state.label())
            }
            MoveOutcome::Rejected(error) => write!(f, "Move rejected: {}", error),
        }
    }
}
