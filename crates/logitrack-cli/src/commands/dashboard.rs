//! `logitrack dashboard` — Headline metrics and status distribution.

use clap::Args;
use logitrack_core::engine;
use serde::Serialize;

use super::Context;
use crate::output::{format_bar, format_percent, print_json};

/// Arguments for the `dashboard` command.
#[derive(Args, Debug)]
pub struct DashboardArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DashboardReport<'a> {
    metrics: engine::DashboardMetrics,
    distribution: Vec<engine::StatusShare>,
    recent_requests: &'a [logitrack_common::types::Request],
}

/// Executes the `dashboard` command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn execute(ctx: &Context, args: &DashboardArgs) -> anyhow::Result<()> {
    let catalog = &ctx.catalog;
    let report = DashboardReport {
        metrics: engine::dashboard_metrics(&catalog.containers, &catalog.requests)
            .with_utilization(ctx.config.utilization_percent),
        distribution: engine::status_distribution(&catalog.containers),
        recent_requests: engine::recent_requests(&catalog.requests, ctx.config.recent_requests),
    };

    if args.json {
        return print_json(&report);
    }

    let m = &report.metrics;
    println!("{:<20} {}", "Total containers", m.total_containers);
    println!("{:<20} {}", "Active requests", m.active_requests);
    println!("{:<20} {}", "In transit", m.in_transit);
    println!("{:<20} {}%", "Utilization", m.utilization_percent);
    println!();
    println!("{:<15} {:>5} {:>7}", "STATUS", "COUNT", "SHARE");
    for share in &report.distribution {
        println!(
            "{:<15} {:>5} {:>7} {}",
            share.status.label(),
            share.count,
            format_percent(share.percentage),
            format_bar(share.percentage)
        );
    }
    if !report.recent_requests.is_empty() {
        println!();
        println!("RECENT REQUESTS");
        for request in report.recent_requests {
            println!(
                "{:<5} {:<19} {:<12} {:<12} {}",
                request.id.to_string(),
                request.kind.label(),
                request.status.label(),
                request.container,
                request.client
            );
        }
    }
    Ok(())
}
