//! Container registry tab.
//!
//! Search box and status filter on top, the filtered container table below.

use logitrack_common::types::StatusFilter;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use super::{status_badge, status_color};
use crate::app::{App, InputMode};

const SEARCH_PLACEHOLDER: &str = "Search by number or location...";

/// Renders the container registry view.
pub fn render_containers(frame: &mut Frame, app: &App, area: Rect) {
    let [controls, table_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
    let [search_area, filter_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(28)]).areas(controls);

    render_search(frame, app, search_area);
    render_filter(frame, app, filter_area);
    render_table(frame, app, table_area);
}

fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode == InputMode::Search;
    let border = if searching {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let content = if app.search.is_empty() && !searching {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(app.search.as_str())
    };
    let search = Paragraph::new(content).block(
        Block::bordered()
            .title(" Search ")
            .border_style(border),
    );
    frame.render_widget(search, area);

    if searching {
        let typed = u16::try_from(app.search.chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(typed)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position((x, area.y.saturating_add(1)));
    }
}

fn render_filter(frame: &mut Frame, app: &App, area: Rect) {
    let value = match app.status_filter {
        StatusFilter::All => Span::raw("All statuses"),
        StatusFilter::Only(status) => {
            Span::styled(status.label(), Style::default().fg(status_color(status)))
        }
    };
    let filter = Paragraph::new(Line::from(value)).block(Block::bordered().title(" Status "));
    frame.render_widget(filter, area);
}

fn render_table(frame: &mut Frame, app: &App, area: Rect) {
    let visible = app.visible_containers();
    let title = format!(
        " Containers ({} of {}) ",
        visible.len(),
        app.catalog.containers.len()
    );
    let block = Block::bordered().title(title);

    if visible.is_empty() {
        let empty = Paragraph::new("No containers match the current filters.")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Number", "Type", "Status", "Location"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = visible.iter().map(|container| {
        Row::new(vec![
            Cell::from(Span::styled(
                container.number.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Cell::from(container.kind.as_str()),
            Cell::from(status_badge(container.status)),
            Cell::from(container.location.as_str()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(13),
            Constraint::Length(6),
            Constraint::Length(15),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("▶ ");

    let mut state = TableState::default().with_selected(Some(app.selected_container));
    frame.render_stateful_widget(table, area, &mut state);
}
