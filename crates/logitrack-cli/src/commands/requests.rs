//! `logitrack requests` — List client requests.

use clap::Args;
use logitrack_common::types::{Request, RequestStatus};
use logitrack_core::engine;

use super::Context;
use crate::output::print_json;

/// Arguments for the `requests` command.
#[derive(Args, Debug)]
pub struct RequestsArgs {
    /// Only show requests in this stage (`new`, `in-progress`, `completed`).
    #[arg(short, long)]
    pub status: Option<RequestStatus>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Executes the `requests` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &Context, args: &RequestsArgs) -> anyhow::Result<()> {
    let requests: Vec<&Request> = ctx
        .catalog
        .requests
        .iter()
        .filter(|r| args.status.is_none_or(|s| r.status == s))
        .collect();

    if args.json {
        return print_json(&requests);
    }

    println!(
        "{} active of {} requests",
        engine::active_request_count(&ctx.catalog.requests),
        ctx.catalog.requests.len()
    );
    if requests.is_empty() {
        println!("No requests found.");
        return Ok(());
    }
    println!(
        "{:<5} {:<19} {:<12} {:<24} {:<10} {:<12}",
        "ID", "TYPE", "CONTAINER", "CLIENT", "DATE", "STATUS"
    );
    for r in &requests {
        println!(
            "{:<5} {:<19} {:<12} {:<24} {:<10} {:<12}",
            r.id.to_string(),
            r.kind.label(),
            r.container,
            r.client,
            r.date.format("%d.%m.%Y").to_string(),
            r.status.label()
        );
    }
    Ok(())
}
