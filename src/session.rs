//! Game session controller.
//!
//! A [`Session`] owns at most one engine at a time. Starting a game clears
//! whatever was running, so picking a variant always means a fresh board.
//! Every redrawn cell is put on cooldown, and the session remembers the last
//! state it saw so callers learn about transitions exactly once.

use crate::app_config::AppConfig;
use std::time::Instant;
use toetictac_rules::{
    Cooldowns, GameState, GridConfig, GridEngine, GridEvent, MoveError, MoveOutcome, Player, Variant,
};
use tracing::{debug, info, instrument};

/// Engine type driven by a session.
pub type SessionEngine = GridEngine<Cooldowns, Vec<GridEvent>>;

/// What happened when a player pressed a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Press {
    /// Result reported by the engine.
    pub outcome: MoveOutcome,
    /// Notifications raised by the move, in order.
    pub events: Vec<GridEvent>,
    /// New game state, if it changed.
    pub transition: Option<GameState>,
}

/// A sequence of games played with one configuration.
#[derive(Debug)]
pub struct Session {
    config: AppConfig,
    engine: Option<SessionEngine>,
    last_state: GameState,
}

impl Session {
    /// Creates a session with no game running.
    #[instrument(skip(config), fields(variant = %config.variant()))]
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            engine: None,
            last_state: GameState::Inactive,
        }
    }

    /// Starts a new game, discarding the current one.
    ///
    /// Returns the notifications raised while setting up the board.
    #[instrument(skip(self, now))]
    pub fn start(&mut self, variant: Variant, now: Instant) -> Vec<GridEvent> {
        if let Some(previous) = self.engine.take() {
            debug!(state = %previous.state(), "Discarding previous game");
            previous.clear();
        }

        let cooldowns = Cooldowns::starting_at(now, self.config.cooldown());
        let mut engine = GridEngine::new(&GridConfig::new(variant), cooldowns, Vec::new());
        let events = std::mem::take(engine.observer_mut());

        self.last_state = engine.state();
        info!(variant = %variant, state = %self.last_state, "Game started");
        self.engine = Some(engine);
        events
    }

    /// Reports a press on the cell at `index` at time `now`.
    #[instrument(skip(self, now))]
    pub fn press(&mut self, index: usize, now: Instant) -> Press {
        let Some(engine) = self.engine.as_mut() else {
            debug!("Press ignored, no game running");
            return Press {
                outcome: MoveOutcome::Rejected(MoveError::NotActive(GameState::Inactive)),
                events: Vec::new(),
                transition: None,
            };
        };

        engine.busy_mut().advance_to(now);
        let outcome = engine.report_move(index);

        let events = std::mem::take(engine.observer_mut());
        for event in &events {
            engine.busy_mut().observe(event);
        }

        let state = engine.state();
        let transition = (state != self.last_state).then_some(state);
        if let Some(state) = transition {
            info!(from = %self.last_state, to = %state, victor = ?engine.victor(), "Game state changed");
            self.last_state = state;
        }

        Press {
            outcome,
            events,
            transition,
        }
    }

    /// Returns true once the current game has finished.
    pub fn can_restart(&self) -> bool {
        self.last_state.is_terminal()
    }

    /// Current game state; `Inactive` when nothing is running.
    pub fn state(&self) -> GameState {
        self.last_state
    }

    /// Running engine, if any.
    pub fn engine(&self) -> Option<&SessionEngine> {
        self.engine.as_ref()
    }

    /// Variant of the running game.
    pub fn variant(&self) -> Option<Variant> {
        self.engine.as_ref().map(|e| e.variant())
    }

    /// Winner of the running game.
    pub fn victor(&self) -> Option<Player> {
        self.engine.as_ref().and_then(|e| e.victor())
    }

    /// Configuration this session was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn instant_session() -> Session {
        Session::new(AppConfig::new(Variant::Classic, 0, true))
    }

    #[test]
    fn test_press_without_game() {
        let mut session = instant_session();
        let press = session.press(4, Instant::now());
        assert_eq!(
            press.outcome,
            MoveOutcome::Rejected(MoveError::NotActive(GameState::Inactive))
        );
        assert!(press.events.is_empty());
        assert!(!session.can_restart());
    }

    #[test]
    fn test_start_reports_active() {
        let mut session = instant_session();
        let events = session.start(Variant::Classic, Instant::now());
        assert!(events.is_empty());
        assert_eq!(session.state(), GameState::Active);
        assert_eq!(session.variant(), Some(Variant::Classic));
    }

    #[test]
    fn test_mutation_start_returns_highlights() {
        let mut session = instant_session();
        let events = session.start(Variant::Mutation, Instant::now());
        assert_eq!(events.len(), 9);
        // The configured variant only picks the first game.
        assert_eq!(*session.config().variant(), Variant::Classic);
        assert_eq!(session.variant(), Some(Variant::Mutation));
    }

    #[test]
    fn test_changed_cells_go_on_cooldown() {
        let start = Instant::now();
        let mut session = Session::new(AppConfig::new(Variant::Mutation, 300, true));
        session.start(Variant::Mutation, start);

        assert!(session.press(0, start).outcome.is_applied());
        let blocked = session.press(1, start + Duration::from_millis(100));
        assert_eq!(blocked.outcome, MoveOutcome::Rejected(MoveError::BoardBusy));

        let later = session.press(1, start + Duration::from_millis(300));
        assert!(later.outcome.is_applied());
    }
}
