//! Toetictac - console play for classic and mutation three-in-a-row
//!
//! The rules live in [`toetictac_rules`]; this crate adds what a player
//! needs around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for variant, cooldown and highlights
//! - **Session**: one game at a time, restartable, with per-cell cooldowns
//! - **Render**: text board and status line
//! - **Console**: line-based input loop over any reader and writer
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//! use toetictac::{AppConfig, Session};
//! use toetictac_rules::{GameState, Variant};
//!
//! let mut session = Session::new(AppConfig::new(Variant::Classic, 0, true));
//! session.start(Variant::Classic, Instant::now());
//! for index in [0, 3, 1, 4, 2] {
//!     session.press(index, Instant::now());
//! }
//! assert_eq!(session.state(), GameState::Victory);
//! assert!(session.can_restart());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app_config;
mod console;
mod render;
mod session;

pub use app_config::AppConfig;
pub use console::{Command, Console, ParseCommandError};
pub use render::{render_board, status_line};
pub use session::{Press, Session, SessionEngine};
