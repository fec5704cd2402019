//! The 3x3 board of cells.

use super::types::{CELL_COUNT, Cell, Player, SIDE};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new board of unowned cells.
    pub fn new() -> Self {
        Self {
            cells: [Cell::new(); CELL_COUNT],
        }
    }

    /// Creates a board with the given owners, in row-major order.
    pub fn from_owners(owners: [Option<Player>; CELL_COUNT]) -> Self {
        let mut board = Self::new();
        for (cell, owner) in board.cells.iter_mut().zip(owners) {
            cell.set_owner(owner);
        }
        board
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Owner of the cell at `index`; `None` for empty or out-of-range cells.
    pub fn owner(&self, index: usize) -> Option<Player> {
        self.get(index).and_then(Cell::owner)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Checks if every cell is owned.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Owners of all cells, in row-major order.
    pub fn owners(&self) -> [Option<Player>; CELL_COUNT] {
        self.cells.map(|c| c.owner())
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// In-board cells of the 3x3 window centred on `index`.
    ///
    /// Yields `(offset, cell_index)` pairs where `offset` is the row-major
    /// position inside the window: 4 is `index` itself and the odd offsets
    /// 1, 3, 5, 7 are the cells above, left, right and below.
    pub fn window(index: usize) -> impl Iterator<Item = (usize, usize)> {
        let row = (index / SIDE) as isize;
        let col = (index % SIDE) as isize;

        (0..SIDE * SIDE).filter_map(move |offset| {
            let r = row + (offset / SIDE) as isize - 1;
            let c = col + (offset % SIDE) as isize - 1;
            let side = SIDE as isize;
            (r >= 0 && r < side && c >= 0 && c < side)
                .then(|| (offset, (r * side + c) as usize))
        })
    }

    /// Orthogonal neighbors of `index` that lie on the board.
    pub fn orthogonal_neighbors(index: usize) -> impl Iterator<Item = usize> {
        Self::window(index)
            .filter(|(offset, _)| is_orthogonal_offset(*offset))
            .map(|(_, cell)| cell)
    }

    /// Text symbol for the cell at `index`.
    ///
    /// Empty cells show their index, owned cells the owner's letter,
    /// lowercase once disabled. `None` outside the board.
    pub fn symbol(&self, index: usize) -> Option<String> {
        let cell = self.get(index)?;
        let symbol = match (cell.owner(), cell.is_disabled()) {
            (None, _) => index.to_string(),
            (Some(Player::A), false) => "A".to_string(),
            (Some(Player::B), false) => "B".to_string(),
            (Some(Player::A), true) => "a".to_string(),
            (Some(Player::B), true) => "b".to_string(),
        };
        Some(symbol)
    }

    /// Formats the board as a human-readable string.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..SIDE {
            for col in 0..SIDE {
                if let Some(symbol) = self.symbol(row * SIDE + col) {
                    result.push_str(&symbol);
                }
                if col < SIDE - 1 {
                    result.push('|');
                }
            }
            if row < SIDE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// True for window offsets 1, 3, 5 and 7.
pub fn is_orthogonal_offset(offset: usize) -> bool {
    offset & 1 != 0
}
