//! Terminal event handling.
//!
//! Captures keyboard and resize events from the terminal and turns silence
//! into periodic ticks so the loop redraws at a steady rate.

use std::time::Duration;

use crossterm::event::{self, Event};

/// Terminal input events.
#[derive(Debug, Clone)]
pub enum TerminalEvent {
    /// A key was pressed.
    Key(crossterm::event::KeyEvent),
    /// The terminal was resized.
    Resize(u16, u16),
    /// A periodic tick for UI refresh.
    Tick,
}

/// Blocking source of [`TerminalEvent`]s.
#[derive(Debug, Clone, Copy)]
pub struct EventSource {
    tick_rate: Duration,
}

impl EventSource {
    /// Creates a source that yields a tick after `tick_rate` of inactivity.
    #[must_use]
    pub const fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read.
    pub fn next(&self) -> std::io::Result<TerminalEvent> {
        if !event::poll(self.tick_rate)? {
            return Ok(TerminalEvent::Tick);
        }
        Ok(match event::read()? {
            Event::Key(key) => TerminalEvent::Key(key),
            Event::Resize(width, height) => TerminalEvent::Resize(width, height),
            _ => TerminalEvent::Tick,
        })
    }
}
