//! Slot-planning tab.
//!
//! Five-week calendar grid on the left, details of the selected day on the
//! right.

use chrono::Datelike;
use logitrack_core::planning::{DayCell, SlotOperation, WEEKDAY_LABELS};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, Wrap};

use crate::app::App;

/// Renders the planning view.
pub fn render_planning(frame: &mut Frame, app: &App, area: Rect) {
    let [grid, details] =
        Layout::horizontal([Constraint::Percentage(66), Constraint::Percentage(34)]).areas(area);
    render_grid(frame, app, grid);
    render_day_details(frame, app, details);
}

fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let cells = app.calendar.cells();
    let header = Row::new(WEEKDAY_LABELS).style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    );
    let rows = cells.chunks(7).map(|week| {
        Row::new(week.iter().map(|cell| day_cell(cell, cell.index == app.selected_day))).height(2)
    });

    let title = format!(
        " Slot planning {} - {} ",
        app.calendar.first_day().format("%d.%m"),
        app.calendar.last_day().format("%d.%m.%Y"),
    );
    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .block(Block::bordered().title(title))
        .column_spacing(1);
    frame.render_widget(table, area);
}

fn day_cell(cell: &DayCell<'_>, selected: bool) -> Cell<'static> {
    let day_style = if cell.weekend {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let mut lines = vec![Line::from(Span::styled(cell.date.day().to_string(), day_style))];
    if let Some(first) = cell.slots.first() {
        lines.push(Line::from(Span::styled(
            first.window.to_string(),
            Style::default().fg(Color::White).bg(Color::Blue),
        )));
    }
    let cell_widget = Cell::from(Text::from(lines));
    if selected {
        cell_widget.style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        cell_widget
    }
}

fn render_day_details(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    if let Some(cell) = app.calendar.cell(app.selected_day) {
        lines.push(Line::from(Span::styled(
            format!(
                "{} {}",
                WEEKDAY_LABELS[cell.index % 7],
                cell.date.format("%d.%m.%Y")
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        if cell.slots.is_empty() {
            lines.push(Line::from(Span::styled(
                "No slots booked.",
                Style::default().fg(Color::Gray),
            )));
        }
        for slot in &cell.slots {
            let operation = slot.operation.map_or("-", SlotOperation::label);
            let container = slot.container.as_deref().unwrap_or("-");
            lines.push(Line::from(vec![
                Span::styled(slot.window.to_string(), Style::default().fg(Color::Cyan)),
                Span::raw(format!("  {operation}  {container}")),
            ]));
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(format!(
        "Containers available: {}",
        app.catalog.container_numbers().count()
    )));
    let operations: Vec<&str> = SlotOperation::ALL.iter().map(|op| op.label()).collect();
    lines.push(Line::from(format!("Operations: {}", operations.join(", "))));

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title(" Selected day "));
    frame.render_widget(panel, area);
}
