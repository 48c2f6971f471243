//! `logitrack check` — Validate the catalog and the slot calendar.

use logitrack_core::planning::SlotCalendar;

use super::Context;

/// Executes the `check` command.
///
/// Hard violations (duplicate ids or numbers) already failed while loading
/// the context; what remains to report are dangling request references and
/// overlapping slot bookings.
///
/// # Errors
///
/// Never fails once the context is loaded.
pub fn execute(ctx: &Context) -> anyhow::Result<()> {
    for line in report(ctx, &ctx.calendar()) {
        println!("{line}");
    }
    Ok(())
}

fn report(ctx: &Context, calendar: &SlotCalendar) -> Vec<String> {
    let mut lines: Vec<String> = ctx
        .warnings
        .iter()
        .map(|warning| format!("warning: {warning}"))
        .collect();

    let conflicts = calendar.conflicts();
    for (first, second) in &conflicts {
        tracing::warn!(
            date = %first.date,
            first = %first.window,
            second = %second.window,
            "overlapping slot bookings"
        );
        lines.push(format!(
            "warning: slots {} and {} overlap on {}",
            first.window,
            second.window,
            first.date.format("%d.%m.%Y")
        ));
    }

    lines.push(format!(
        "catalog ok: {} containers, {} requests, {} warning(s)",
        ctx.catalog.containers.len(),
        ctx.catalog.requests.len(),
        ctx.warnings.len() + conflicts.len()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use logitrack_core::planning::{SlotBooking, TimeWindow};

    use super::*;
    use crate::commands::load_context;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    #[test]
    fn clean_sample_reports_no_warnings() {
        let ctx = load_context(None, None).expect("context");
        let lines = report(&ctx, &SlotCalendar::sample(monday()));
        assert_eq!(lines, vec!["catalog ok: 6 containers, 3 requests, 0 warning(s)"]);
    }

    #[test]
    fn overlapping_bookings_are_reported() {
        let ctx = load_context(None, None).expect("context");
        let saturday = NaiveDate::from_ymd_opt(2025, 12, 6).unwrap();
        let window = TimeWindow::new(
            NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
        )
        .unwrap();
        let calendar = SlotCalendar::sample(monday()).with_bookings([SlotBooking {
            date: saturday,
            window,
            container: Some("TEMU4567890".into()),
            operation: None,
        }]);

        let lines = report(&ctx, &calendar);
        assert_eq!(
            lines,
            vec![
                "warning: slots 10:00-12:00 and 11:00-13:00 overlap on 06.12.2025",
                "catalog ok: 6 containers, 3 requests, 1 warning(s)",
            ]
        );
    }
}
