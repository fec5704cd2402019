//! Line-oriented console front end.
//!
//! Reads one command per line and writes the board back after every change.
//! Input and output are generic so the loop can be driven from tests.

use crate::render::{render_board, status_line};
use crate::session::Session;
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::Instant;
use strum::IntoEnumIterator;
use toetictac_rules::{CELL_COUNT, GridEvent, Variant};
use tracing::{debug, info, instrument, warn};

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Press the cell at this index.
    Press(usize),
    /// Start a new game of the given variant.
    New(Variant),
    /// Print usage.
    Help,
    /// Leave the console.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input '{}'", input)]
pub struct ParseCommandError {
    /// The offending line, trimmed.
    pub input: String,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let error = || ParseCommandError {
            input: line.to_string(),
        };

        let mut words = line.split_whitespace();
        let command = match (words.next(), words.next(), words.next()) {
            (Some(word), None, None) if word.chars().all(|c| c.is_ascii_digit()) => {
                Command::Press(word.parse().map_err(|_| error())?)
            }
            (Some("new"), Some(variant), None) => {
                Command::New(Variant::from_str(variant).map_err(|_| error())?)
            }
            (Some("help" | "?"), None, None) => Command::Help,
            (Some("quit" | "exit" | "q"), None, None) => Command::Quit,
            _ => return Err(error()),
        };
        Ok(command)
    }
}

/// Console loop over a session.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
    echo_events: bool,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a console around a session.
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self {
            input,
            output,
            session,
            echo_events: false,
        }
    }

    /// Also print every engine notification as a JSON line.
    pub fn with_event_echo(self, echo_events: bool) -> Self {
        Self {
            echo_events,
            ..self
        }
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> io::Result<()> {
        let variant = *self.session.config().variant();
        let events = self.session.start(variant, Instant::now());
        self.write_events(&events)?;
        self.write_header()?;
        self.write_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(error) => {
                    warn!(%error, "Bad console input");
                    writeln!(self.output, "{}. Type 'help' for commands.", error)?;
                }
            }
        }

        info!("Console closed");
        writeln!(self.output, "Bye.")?;
        Ok(())
    }

    /// Runs a single command.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Press(index) => {
                let press = self.session.press(index, Instant::now());
                self.write_events(&press.events)?;
                if let Some(error) = press.outcome.rejection() {
                    writeln!(self.output, "Move rejected: {}", error)?;
                    return Ok(());
                }
                self.write_board()?;
                if press.transition.is_some_and(|s| s.is_terminal()) && self.session.can_restart() {
                    writeln!(
                        self.output,
                        "Game over. Type 'new classic' or 'new mutation' to play again."
                    )?;
                }
            }
            Command::New(variant) => {
                let events = self.session.start(variant, Instant::now());
                self.write_events(&events)?;
                self.write_header()?;
                self.write_board()?;
            }
            Command::Help => self.write_help()?,
            Command::Quit => {}
        }
        Ok(())
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the console and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn write_header(&mut self) -> io::Result<()> {
        if let Some(variant) = self.session.variant() {
            writeln!(self.output, "== {} ({}) ==", variant.label(), variant)?;
        }
        Ok(())
    }

    fn write_board(&mut self) -> io::Result<()> {
        let Some(engine) = self.session.engine() else {
            return writeln!(self.output, "{}", status_line(self.session.state(), None, None));
        };

        let highlights = engine
            .highlights()
            .filter(|_| *self.session.config().show_highlights());
        let board = render_board(engine.board(), highlights.as_ref());
        let status = status_line(engine.state(), engine.victor(), Some(engine.turn()));
        writeln!(self.output, "{}\n{}", board, status)
    }

    fn write_events(&mut self, events: &[GridEvent]) -> io::Result<()> {
        if !self.echo_events {
            return Ok(());
        }
        for event in events {
            let json = serde_json::to_string(event).map_err(io::Error::other)?;
            writeln!(self.output, "{}", json)?;
        }
        Ok(())
    }

    fn write_help(&mut self) -> io::Result<()> {
        let variants: Vec<String> = Variant::iter().map(|v| format!("new {}", v)).collect();
        writeln!(
            self.output,
            "0-{}: play that cell\n{}: start over\nhelp: this text\nquit: leave",
            CELL_COUNT - 1,
            variants.join(" | ")
        )
    }
}
