//! Rendering for every tab.
//!
//! Each view reads the [`App`] state and asks the engine for the rows and
//! figures it displays; nothing here mutates state.

pub mod containers;
pub mod dashboard;
pub mod planning;
pub mod requests;

use logitrack_common::types::{ContainerStatus, RequestStatus};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Tabs};

use crate::app::{App, InputMode, Tab};

/// Draws the whole screen: tab bar, active view, key hints.
pub fn render(frame: &mut Frame, app: &App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_tabs(frame, app, header);
    match app.current_tab {
        Tab::Dashboard => dashboard::render_dashboard(frame, app, body),
        Tab::Containers => containers::render_containers(frame, app, body),
        Tab::Requests => requests::render_requests(frame, app, body),
        Tab::Planning => planning::render_planning(frame, app, body),
    }
    render_footer(frame, app, footer);
}

/// Badge colour of a container status.
#[must_use]
pub const fn status_color(status: ContainerStatus) -> Color {
    match status {
        ContainerStatus::Operating => Color::Blue,
        ContainerStatus::Reserved => Color::Yellow,
        ContainerStatus::ForSale => Color::Green,
        ContainerStatus::Faulty => Color::Red,
        ContainerStatus::Dirty => Color::LightRed,
        ContainerStatus::Empty => Color::Gray,
        ContainerStatus::InTransit => Color::Magenta,
        ContainerStatus::PreLoading => Color::Cyan,
        ContainerStatus::Unverified => Color::LightMagenta,
    }
}

/// Filled badge for a container status.
#[must_use]
pub fn status_badge(status: ContainerStatus) -> Span<'static> {
    Span::styled(
        format!(" {} ", status.label()),
        Style::default().fg(Color::Black).bg(status_color(status)),
    )
}

/// Badge for a request status: filled when new, muted when in progress,
/// outlined when completed.
#[must_use]
pub fn request_badge(status: RequestStatus) -> Span<'static> {
    let style = match status {
        RequestStatus::New => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        RequestStatus::InProgress => Style::default().fg(Color::Black).bg(Color::Gray),
        RequestStatus::Completed => Style::default().fg(Color::Gray),
    };
    let text = if status == RequestStatus::Completed {
        format!("[{}]", status.label())
    } else {
        format!(" {} ", status.label())
    };
    Span::styled(text, style)
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{}:{}", i + 1, tab.title()));
    let tabs = Tabs::new(titles)
        .block(Block::bordered().title(" LogiTrack "))
        .select(app.current_tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match (app.input_mode, app.current_tab) {
        (InputMode::Search, _) => " Type to search | [Backspace]Delete | [Enter/Esc]Done ",
        (InputMode::Normal, Tab::Containers) => {
            " [↑/↓]Select [/]Search [s/S]Status filter [c]Clear [←/→]Tabs [q]Quit "
        }
        (InputMode::Normal, Tab::Requests) => " [↑/↓]Select [←/→ or 1-4]Tabs [q]Quit ",
        (InputMode::Normal, Tab::Planning) => {
            " [↑/↓]Week [h/l]Day [←/→ or 1-4]Tabs [q]Quit "
        }
        (InputMode::Normal, Tab::Dashboard) => " [←/→ or 1-4]Switch tabs | [/]Search | [q]Quit ",
    };
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::Gray).bg(Color::Black));
    frame.render_widget(footer, area);
}
