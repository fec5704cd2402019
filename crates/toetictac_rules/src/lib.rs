//! Pure game logic for classic and mutation three-in-a-row.
//!
//! The crate knows nothing about rendering or input. A front end builds a
//! [`GridEngine`], feeds it cell indices, supplies a [`BusySignal`] for cells
//! that are still animating, and listens for [`GridEvent`]s.
//!
//! # Example
//!
//! ```
//! use toetictac_rules::{GameState, GridEngine, Player, Variant};
//!
//! let mut engine = GridEngine::headless(Variant::Classic);
//! for index in [0, 3, 1, 4, 2] {
//!     engine.report_move(index);
//! }
//! assert_eq!(engine.state(), GameState::Victory);
//! assert_eq!(engine.victor(), Some(Player::A));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod busy;
mod config;
mod engine;
mod events;
pub mod rules;
mod types;

pub use action::{MoveError, MoveOutcome};
pub use board::{Board, is_orthogonal_offset};
pub use busy::{BusySignal, Cooldowns, NeverBusy};
pub use config::{ConfigError, GridConfig};
pub use engine::GridEngine;
pub use events::{GameObserver, GridEvent};
pub use rules::{ClassicRules, MutationRules, Placement, RuleSet, Rules, Verdict};
pub use types::{CELL_COUNT, Cell, GameState, Player, SIDE, Variant};
