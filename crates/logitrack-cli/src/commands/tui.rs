//! `logitrack tui` — Launch the interactive dashboard.

use std::time::Duration;

use logitrack_tui::app::App;

use super::Context;

/// Executes the `tui` command.
///
/// # Errors
///
/// Returns an error if the terminal cannot be driven.
pub fn execute(ctx: Context) -> anyhow::Result<()> {
    let calendar = ctx.calendar();
    let tick_rate = Duration::from_millis(ctx.config.tick_rate_ms);
    let app = App::new(ctx.catalog, calendar)
        .with_utilization(ctx.config.utilization_percent)
        .with_recent_requests(ctx.config.recent_requests);
    logitrack_tui::run(app, tick_rate)?;
    Ok(())
}
