//! Notifications emitted to the rendering side.
//!
//! Events are advisory. The engine never depends on an observer doing
//! anything with them.

use super::types::{GameState, Player};
use serde::{Deserialize, Serialize};

/// Something a renderer may want to animate or recolor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GridEvent {
    /// A reported move passed validation and was applied.
    MoveApplied {
        /// Played cell.
        index: usize,
        /// Player who moved.
        player: Player,
    },
    /// A cell changed owner or was disabled.
    CellChanged {
        /// Changed cell.
        index: usize,
        /// Owner after the change.
        owner: Option<Player>,
        /// Whether the cell is now greyed out.
        disabled: bool,
    },
    /// Advisory emphasis for the mutation variant.
    HighlightChanged {
        /// Cell index.
        index: usize,
        /// Whether the cell should be emphasized.
        emphasized: bool,
    },
    /// The game moved to a new state.
    GameStateChanged {
        /// New state.
        state: GameState,
        /// Winner, set only for `Victory`.
        victor: Option<Player>,
    },
}

/// Receives engine notifications.
pub trait GameObserver {
    /// Called once per event, in emission order.
    fn notify(&mut self, event: GridEvent);
}

/// Discards every event.
impl GameObserver for () {
    fn notify(&mut self, _event: GridEvent) {}
}

/// Records every event.
impl GameObserver for Vec<GridEvent> {
    fn notify(&mut self, event: GridEvent) {
        self.push(event);
    }
}

impl<T: GameObserver + ?Sized> GameObserver for &mut T {
    fn notify(&mut self, event: GridEvent) {
        (**self).notify(event);
    }
}
