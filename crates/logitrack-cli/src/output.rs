//! Formatted output helpers for CLI commands.
//!
//! Provides consistent percentage and bar rendering plus pretty JSON output.

use serde::Serialize;

/// Width of the text bars drawn by [`format_bar`].
const BAR_WIDTH: usize = 20;

/// Formats a percentage with one decimal (e.g., "16.7%").
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Draws a fixed-width text bar for a percentage in `0..=100`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn format_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Prints a value as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_percent_rounds_to_one_decimal() {
        assert_eq!(format_percent(100.0 / 6.0), "16.7%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn format_bar_empty_and_full() {
        assert_eq!(format_bar(0.0), "░".repeat(20));
        assert_eq!(format_bar(100.0), "█".repeat(20));
    }

    #[test]
    fn format_bar_clamps_out_of_range() {
        assert_eq!(format_bar(250.0), "█".repeat(20));
        assert_eq!(format_bar(-5.0), "░".repeat(20));
    }

    #[test]
    fn format_bar_half() {
        let bar = format_bar(50.0);
        assert_eq!(bar.chars().filter(|&c| c == '█').count(), 10);
        assert_eq!(bar.chars().count(), 20);
    }
}
