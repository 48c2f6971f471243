//! # logitrack-tui
//!
//! Interactive terminal dashboard for the LogiTrack container yard.
//!
//! Built with `ratatui` and `crossterm`, providing:
//! - Headline metrics and the status distribution of the fleet.
//! - A searchable, status-filtered container registry.
//! - The client request queue.
//! - The five-week slot-planning calendar.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod app;
pub mod event;
pub mod ui;

use std::time::Duration;

use ratatui::DefaultTerminal;
use thiserror::Error;

use crate::app::App;
use crate::event::{EventSource, TerminalEvent};

/// Errors raised while driving the terminal.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Terminal setup, drawing, or input failed.
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs the dashboard until the user quits.
///
/// The terminal is restored even when the loop fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be initialized, drawn to, or read.
pub fn run(mut app: App, tick_rate: Duration) -> Result<(), TuiError> {
    tracing::info!(tick_ms = tick_rate.as_millis(), "starting dashboard");
    let mut terminal = ratatui::try_init()?;
    let result = event_loop(&mut terminal, &mut app, tick_rate);
    ratatui::restore();
    tracing::info!("dashboard closed");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), TuiError> {
    let events = EventSource::new(tick_rate);
    while app.running {
        let _ = terminal.draw(|frame| ui::render(frame, app))?;
        match events.next()? {
            TerminalEvent::Key(key) => app.handle_key(key),
            TerminalEvent::Resize(width, height) => {
                tracing::debug!(width, height, "terminal resized");
            }
            TerminalEvent::Tick => {}
        }
    }
    Ok(())
}
