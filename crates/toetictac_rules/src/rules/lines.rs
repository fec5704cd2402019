//! Winning-line detection shared by both variants.

use crate::board::Board;
use crate::types::Player;
use tracing::instrument;

/// The eight lines in scan order: rows, then columns, then diagonals.
pub(crate) const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [2, 4, 6],
    [0, 4, 8],
];

/// Returns the player holding all three cells of `line`, if any.
pub(crate) fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Player> {
    let owner = board.owner(a)?;
    (board.owner(b) == Some(owner) && board.owner(c) == Some(owner)).then_some(owner)
}

/// Every completed line on a board, collected in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct LineScan {
    mask: u16,
    last_winner: Option<Player>,
    won: [bool; 2],
}

impl LineScan {
    /// Scans all eight lines without stopping at the first winner.
    #[instrument(skip(board))]
    pub fn scan(board: &Board) -> Self {
        let mut scan = Self::default();
        for line in LINES {
            if let Some(owner) = line_owner(board, line) {
                scan.mask |= line.iter().fold(0, |mask, &i| mask | 1 << i);
                scan.last_winner = Some(owner);
                scan.won[owner.index()] = true;
            }
        }
        scan
    }

    /// Bitmask of every cell on a completed line.
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Returns true if at least one line is complete.
    pub fn has_line(&self) -> bool {
        self.mask != 0
    }

    /// Returns true if `player` completed at least one line.
    pub fn won(&self, player: Player) -> bool {
        self.won[player.index()]
    }

    /// Owner of the last completed line in scan order.
    pub fn last_winner(&self) -> Option<Player> {
        self.last_winner
    }
}
