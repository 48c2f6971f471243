//! `logitrack planning` — Show the slot-planning calendar.

use chrono::Datelike;
use clap::Args;
use logitrack_core::planning::{SlotCalendar, SlotOperation, WEEKDAY_LABELS};

use super::Context;
use crate::output::print_json;

/// Arguments for the `planning` command.
#[derive(Args, Debug)]
pub struct PlanningArgs {
    /// Print the bookings as JSON instead of the calendar grid.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `planning` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &Context, args: &PlanningArgs) -> anyhow::Result<()> {
    let calendar = ctx.calendar();
    if args.json {
        return print_json(&calendar.bookings());
    }

    for line in render_grid(&calendar) {
        println!("{line}");
    }
    println!();
    if calendar.bookings().is_empty() {
        println!("No slots booked.");
    }
    for booking in calendar.bookings() {
        println!(
            "{}  {}  {:<12} {}",
            booking.date.format("%d.%m.%Y"),
            booking.window,
            booking.operation.map_or("-", SlotOperation::label),
            booking.container.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

/// Text rendering of the grid: a header row, then one row per week.
/// Booked days carry a `*`.
fn render_grid(calendar: &SlotCalendar) -> Vec<String> {
    let mut lines = vec![
        WEEKDAY_LABELS
            .iter()
            .map(|day| format!("{day:>4}"))
            .collect::<String>(),
    ];
    for week in calendar.cells().chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| {
                let mark = if cell.slots.is_empty() { ' ' } else { '*' };
                format!("{:>3}{mark}", cell.date.day())
            })
            .collect();
        lines.push(row);
    }
    lines
}
