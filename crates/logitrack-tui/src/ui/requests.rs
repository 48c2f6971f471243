//! Request queue tab.

use logitrack_common::types::RequestStatus;
use logitrack_core::engine;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Cell, Row, Table, TableState};

use super::request_badge;
use crate::app::App;

/// Renders the request queue view.
pub fn render_requests(frame: &mut Frame, app: &App, area: Rect) {
    let requests = &app.catalog.requests;
    let title = format!(
        " Requests: {} new, {} in progress, {} completed ",
        engine::requests_by_status(requests, RequestStatus::New),
        engine::requests_by_status(requests, RequestStatus::InProgress),
        engine::requests_by_status(requests, RequestStatus::Completed),
    );

    let header = Row::new(["ID", "Type", "Container", "Client", "Date", "Status"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows = requests.iter().map(|request| {
        // Requests may name containers missing from the catalog.
        let container_style = if app.catalog.find_container(&request.container).is_some() {
            Style::default()
        } else {
            Style::default().fg(Color::Red)
        };
        Row::new(vec![
            Cell::from(request.id.to_string()),
            Cell::from(request.kind.label()),
            Cell::from(request.container.as_str()).style(container_style),
            Cell::from(request.client.as_str()),
            Cell::from(request.date.format("%d.%m.%Y").to_string()),
            Cell::from(request_badge(request.status)),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(19),
            Constraint::Length(13),
            Constraint::Min(16),
            Constraint::Length(10),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(Block::bordered().title(title))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let selected = (!requests.is_empty()).then_some(app.selected_request);
    let mut state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut state);
}
