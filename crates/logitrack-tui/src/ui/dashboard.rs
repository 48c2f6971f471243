//! Dashboard tab.
//!
//! Four metric cards across the top, then the status distribution next to
//! the most recent requests.

use logitrack_core::engine;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Gauge, LineGauge, Paragraph};

use super::{request_badge, status_color};
use crate::app::App;

/// Renders the dashboard view.
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let [cards, details] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);
    render_cards(frame, app, cards);

    let [distribution, recent] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(details);
    render_distribution(frame, app, distribution);
    render_recent_requests(frame, app, recent);
}

fn render_cards(frame: &mut Frame, app: &App, area: Rect) {
    let metrics = app.metrics();
    let [total, active, transit, utilization] =
        Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area);

    frame.render_widget(
        card("Total containers", metrics.total_containers, "in the fleet", Color::Green),
        total,
    );
    frame.render_widget(
        card("Active requests", metrics.active_requests, "being processed", Color::Blue),
        active,
    );
    frame.render_widget(
        card("In transit", metrics.in_transit, "on the road", Color::Magenta),
        transit,
    );

    let gauge = Gauge::default()
        .block(Block::bordered().title(" Utilization "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(metrics.utilization_percent.min(100)))
        .label(format!("{}%", metrics.utilization_percent));
    frame.render_widget(gauge, utilization);
}

fn card(title: &str, value: usize, caption: &str, accent: Color) -> Paragraph<'static> {
    let text = Text::from(vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption.to_string(), Style::default().fg(accent))),
    ]);
    Paragraph::new(text).block(Block::bordered().title(format!(" {title} ")))
}

fn render_distribution(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::bordered().title(" Status distribution ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let shares = engine::status_distribution(&app.catalog.containers);
    let rows = Layout::vertical(vec![Constraint::Length(1); shares.len()]).split(inner);
    for (share, row) in shares.iter().zip(rows.iter()) {
        let color = status_color(share.status);
        let label = Line::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::raw(format!("{:<15}{:>3} ", share.status.label(), share.count)),
        ]);
        let gauge = LineGauge::default()
            .filled_style(Style::default().fg(color))
            .label(label)
            .ratio((share.percentage / 100.0).clamp(0.0, 1.0));
        frame.render_widget(gauge, *row);
    }
}

fn render_recent_requests(frame: &mut Frame, app: &App, area: Rect) {
    let recent = engine::recent_requests(&app.catalog.requests, app.recent_requests);
    let mut lines = Vec::with_capacity(recent.len() * 4);
    for request in recent {
        lines.push(Line::from(vec![
            Span::styled(
                request.kind.label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            request_badge(request.status),
        ]));
        lines.push(Line::from(Span::styled(
            request.container.as_str(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            request.client.as_str(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::default());
    }
    if lines.is_empty() {
        lines.push(Line::from("No requests yet."));
    }

    let panel = Paragraph::new(lines).block(Block::bordered().title(" Recent requests "));
    frame.render_widget(panel, area);
}
