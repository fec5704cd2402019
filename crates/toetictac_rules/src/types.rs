//! Core domain types for the grid game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Cells per row and per column.
pub const SIDE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player A (moves first, turn counter 0).
    A,
    /// Player B (moves second, turn counter 1).
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Turn counter value for this player (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

/// Lifecycle state of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum GameState {
    /// Setup failed or no game is running.
    #[default]
    Inactive,
    /// Accepting moves.
    Active,
    /// Finished without a winner.
    Draw,
    /// Finished with a winner.
    Victory,
}

impl GameState {
    /// Returns true for `Draw` and `Victory`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Draw | GameState::Victory)
    }

    /// Returns the display label for this state.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            GameState::Inactive => "No game running",
            GameState::Active => "In play",
            GameState::Draw => "Draw",
            GameState::Victory => "Victory",
        }
    }
}

/// Rule variant selected once per game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    /// Straight three-in-a-row.
    #[default]
    Classic,
    /// Every move flips the orthogonal neighbors of the played cell.
    Mutation,
}

impl Variant {
    /// Returns the display label for this variant.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Variant::Classic => "Tic-tac-toe",
            Variant::Mutation => "Toe-tic-tac",
        }
    }
}

/// A single board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    owner: Option<Player>,
    disabled: bool,
}

impl Cell {
    /// Creates an unowned, enabled cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Player currently claiming this cell.
    pub fn owner(&self) -> Option<Player> {
        self.owner
    }

    /// Returns true if nobody claims this cell.
    pub fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// Returns true once the cell has been greyed out by a finished game.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_owner(&mut self, owner: Option<Player>) -> bool {
        let changed = self.owner != owner;
        self.owner = owner;
        changed
    }

    /// Hands an owned cell to the other player; empty cells stay empty.
    pub(crate) fn flip(&mut self) -> bool {
        self.set_owner(self.owner.map(Player::opponent))
    }

    pub(crate) fn disable(&mut self) {
        self.disabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_round_trip() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent().opponent(), Player::B);
    }

    #[test]
    fn test_turn_counter_values() {
        assert_eq!(Player::A.index(), 0);
        assert_eq!(Player::B.index(), 1);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!GameState::Inactive.is_terminal());
        assert!(!GameState::Active.is_terminal());
        assert!(GameState::Draw.is_terminal());
        assert!(GameState::Victory.is_terminal());
    }

    #[test]
    fn test_variant_parses_case_insensitive() {
        assert_eq!(Variant::from_str("classic").unwrap(), Variant::Classic);
        assert_eq!(Variant::from_str("Mutation").unwrap(), Variant::Mutation);
        assert!(Variant::from_str("chess").is_err());
    }

    #[test]
    fn test_flip_keeps_empty_cells_empty() {
        let mut cell = Cell::new();
        assert!(!cell.flip());
        assert!(cell.is_empty());

        let mut cell = Cell::new();
        cell.set_owner(Some(Player::A));
        assert!(cell.flip());
        assert_eq!(cell.owner(), Some(Player::B));
    }
}
