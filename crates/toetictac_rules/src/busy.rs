//! The per-cell busy signal.
//!
//! A cell is busy while the renderer is still animating it. The engine only
//! ever reads this signal; whoever owns the animation decides when a cell
//! stops being busy.

use super::events::GridEvent;
use super::types::CELL_COUNT;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Answers whether a cell is currently locked by an animation.
pub trait BusySignal {
    /// Returns true while the cell at `index` must not take part in a move.
    fn is_cell_busy(&self, index: usize) -> bool;

    /// Returns true if any cell on the board is busy.
    fn any_busy(&self) -> bool {
        (0..CELL_COUNT).any(|index| self.is_cell_busy(index))
    }
}

/// A busy signal for boards without animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeverBusy;

impl BusySignal for NeverBusy {
    fn is_cell_busy(&self, _index: usize) -> bool {
        false
    }
}

impl<F> BusySignal for F
where
    F: Fn(usize) -> bool,
{
    fn is_cell_busy(&self, index: usize) -> bool {
        self(index)
    }
}

/// Busy-until timestamps for every cell, read against a caller-driven clock.
///
/// The clock only moves when the owner calls [`Cooldowns::advance_to`] or
/// [`Cooldowns::advance_by`], so the same sequence of calls always yields the
/// same answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cooldowns {
    busy_until: [Option<Instant>; CELL_COUNT],
    now: Instant,
    duration: Duration,
}

impl Cooldowns {
    /// Creates a table whose clock starts at `now`.
    pub fn starting_at(now: Instant, duration: Duration) -> Self {
        Self {
            busy_until: [None; CELL_COUNT],
            now,
            duration,
        }
    }

    /// Moves the clock to `now`. Earlier instants are ignored.
    pub fn advance_to(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Moves the clock forward by `elapsed`.
    pub fn advance_by(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }

    /// Marks the cell busy for one cooldown from the current clock reading.
    #[instrument(skip(self), fields(now = ?self.now))]
    pub fn start(&mut self, index: usize) {
        match self.busy_until.get_mut(index) {
            Some(slot) => *slot = Some(self.now + self.duration),
            None => debug!(index, "Ignoring cooldown for cell outside the board"),
        }
    }

    /// Starts a cooldown for every cell an event says was redrawn.
    pub fn observe(&mut self, event: &GridEvent) {
        if let GridEvent::CellChanged { index, .. } = event {
            self.start(*index);
        }
    }
}

impl BusySignal for Cooldowns {
    fn is_cell_busy(&self, index: usize) -> bool {
        self.busy_until
            .get(index)
            .copied()
            .flatten()
            .is_some_and(|until| self.now < until)
    }
}
