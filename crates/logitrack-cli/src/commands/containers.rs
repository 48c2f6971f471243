//! `logitrack containers` — List containers with optional filters.

use clap::Args;
use logitrack_common::types::StatusFilter;
use logitrack_core::engine;

use super::Context;
use crate::output::print_json;

/// Arguments for the `containers` command.
#[derive(Args, Debug)]
pub struct ContainersArgs {
    /// Status to show (`all` or a status name such as `in-transit`).
    #[arg(short, long, default_value = "all")]
    pub status: StatusFilter,

    /// Case-insensitive text matched against number and location.
    #[arg(short = 'q', long, default_value = "")]
    pub search: String,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `containers` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &Context, args: &ContainersArgs) -> anyhow::Result<()> {
    let visible = engine::filter_containers(&ctx.catalog.containers, args.status, &args.search);

    if args.json {
        return print_json(&visible);
    }
    if visible.is_empty() {
        println!("No containers found.");
        return Ok(());
    }

    println!("{:<14} {:<6} {:<14} {:<20}", "NUMBER", "TYPE", "STATUS", "LOCATION");
    for c in &visible {
        println!(
            "{:<14} {:<6} {:<14} {:<20}",
            c.number, c.kind, c.status, c.location
        );
    }
    Ok(())
}
