//! Terminal and pacing port.
//!
//! The game never touches stdin/stdout directly. It talks to a [`Console`],
//! so the same flow runs against a real terminal or a scripted one.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::time::Duration;

use crate::error::ConsoleError;

/// Line-based terminal used by the game.
pub trait Console {
    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Blocks until a line of input is available and returns it without the
    /// trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Closed`] at end of input.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Clears the screen before a full redraw.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn clear_screen(&mut self) -> Result<(), ConsoleError>;

    /// Cosmetic pause between messages.
    fn pause(&mut self, delay: Duration);
}

/// Standard input/output terminal.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct Terminal {
    stdin: std::io::Stdin,
    stdout: std::io::Stdout,
}

#[cfg(feature = "std")]
impl Terminal {
    /// Creates a terminal on the process's stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: std::io::stdin(),
            stdout: std::io::stdout(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
fn io_failed(err: &std::io::Error) -> ConsoleError {
    log::error!("terminal i/o failed: {err}");
    ConsoleError::Io(err.kind())
}

#[cfg(feature = "std")]
impl Console for Terminal {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        use std::io::Write;

        let mut out = self.stdout.lock();
        writeln!(out, "{line}").map_err(|err| io_failed(&err))?;
        out.flush().map_err(|err| io_failed(&err))
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut input = String::new();
        let read = self
            .stdin
            .read_line(&mut input)
            .map_err(|err| io_failed(&err))?;
        if read == 0 {
            return Err(ConsoleError::Closed);
        }
        let trimmed = input.trim_end_matches(['\r', '\n']).len();
        input.truncate(trimmed);
        Ok(input)
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        use std::io::Write;

        let mut out = self.stdout.lock();
        write!(out, "\u{1b}[2J\u{1b}[H").map_err(|err| io_failed(&err))?;
        out.flush().map_err(|err| io_failed(&err))
    }

    fn pause(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Answers a prompt given the last line written before it.
pub type Responder = Box<dyn FnMut(&str) -> String>;

/// Non-interactive console fed from a script.
///
/// Queued answers are used first; once they run out the optional responder
/// is asked, and without one input is reported as closed. Output is kept in a
/// transcript and pauses are only added up.
pub struct Scripted {
    answers: VecDeque<String>,
    responder: Option<Responder>,
    transcript: Vec<String>,
    clears: usize,
    paused: Duration,
}

impl Scripted {
    /// Creates a console that answers with `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            responder: None,
            transcript: Vec::new(),
            clears: 0,
            paused: Duration::ZERO,
        }
    }

    /// Answers with `responder` once the queued answers are used up.
    #[must_use]
    pub fn with_responder<F>(mut self, responder: F) -> Self
    where
        F: FnMut(&str) -> String + 'static,
    {
        self.responder = Some(Box::new(responder));
        self
    }

    /// Every line written so far.
    #[must_use]
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Returns whether any written line contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    /// Number of written lines containing `needle`.
    #[must_use]
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }

    /// Queued answers not consumed yet.
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }

    /// Number of screen clears requested.
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// Total pause time requested.
    #[must_use]
    pub const fn paused(&self) -> Duration {
        self.paused
    }
}

impl core::fmt::Debug for Scripted {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scripted")
            .field("answers", &self.answers)
            .field("responder", &self.responder.is_some())
            .field("transcript", &self.transcript.len())
            .field("clears", &self.clears)
            .field("paused", &self.paused)
            .finish()
    }
}

impl Console for Scripted {
    fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        if let Some(answer) = self.answers.pop_front() {
            return Ok(answer);
        }
        let last = self.transcript.last().map_or("", String::as_str);
        self.responder
            .as_mut()
            .map(|respond| respond(last))
            .ok_or(ConsoleError::Closed)
    }

    fn clear_screen(&mut self) -> Result<(), ConsoleError> {
        self.clears += 1;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) {
        self.paused += delay;
    }
}
