//! TUI application state.
//!
//! `App` owns only what the operator controls: the active tab, the search
//! text, the status filter, and the selected rows. Every figure and row on
//! screen is re-derived from the catalog by the engine at draw time.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use logitrack_common::constants::{
    CALENDAR_CELLS, DEFAULT_RECENT_REQUESTS, DEFAULT_UTILIZATION_PERCENT,
};
use logitrack_common::types::{Container, StatusFilter};
use logitrack_core::catalog::Catalog;
use logitrack_core::engine::{self, DashboardMetrics};
use logitrack_core::planning::SlotCalendar;

/// Which view the TUI is currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Headline metrics, status distribution, and recent requests.
    #[default]
    Dashboard,
    /// Searchable container registry.
    Containers,
    /// Client request queue.
    Requests,
    /// Slot-planning calendar.
    Planning,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Self; 4] = [Self::Dashboard, Self::Containers, Self::Requests, Self::Planning];

    /// Tab title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Containers => "Containers",
            Self::Requests => "Requests",
            Self::Planning => "Planning",
        }
    }

    /// Position in [`Tab::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The tab to the right, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The tab to the left, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Whether keystrokes drive navigation or edit the search text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are shortcuts.
    #[default]
    Normal,
    /// Keys are appended to the search text.
    Search,
}

/// Root application state for the TUI.
#[derive(Debug)]
pub struct App {
    /// Whether the app should continue running.
    pub running: bool,
    /// Current active tab.
    pub current_tab: Tab,
    /// Current keyboard mode.
    pub input_mode: InputMode,
    /// Status selection of the container registry.
    pub status_filter: StatusFilter,
    /// Search text of the container registry.
    pub search: String,
    /// Selected row among the visible containers.
    pub selected_container: usize,
    /// Selected row of the request queue.
    pub selected_request: usize,
    /// Selected calendar cell.
    pub selected_day: usize,
    /// Data shown by every tab.
    pub catalog: Catalog,
    /// Slot calendar shown by the planning tab.
    pub calendar: SlotCalendar,
    /// Utilization figure shown on the dashboard.
    pub utilization_percent: u8,
    /// Size of the recent-requests panel.
    pub recent_requests: usize,
}

impl App {
    /// Creates the application state over a validated catalog.
    #[must_use]
    pub fn new(catalog: Catalog, calendar: SlotCalendar) -> Self {
        Self {
            running: true,
            current_tab: Tab::default(),
            input_mode: InputMode::default(),
            status_filter: StatusFilter::default(),
            search: String::new(),
            selected_container: 0,
            selected_request: 0,
            selected_day: 0,
            catalog,
            calendar,
            utilization_percent: DEFAULT_UTILIZATION_PERCENT,
            recent_requests: DEFAULT_RECENT_REQUESTS,
        }
    }

    /// Sets the displayed utilization figure.
    #[must_use]
    pub fn with_utilization(mut self, percent: u8) -> Self {
        self.utilization_percent = percent;
        self
    }

    /// Sets the size of the recent-requests panel.
    #[must_use]
    pub fn with_recent_requests(mut self, count: usize) -> Self {
        self.recent_requests = count;
        self
    }

    /// Signals the app to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Containers passing the current filter and search.
    #[must_use]
    pub fn visible_containers(&self) -> Vec<&Container> {
        engine::filter_containers(&self.catalog.containers, self.status_filter, &self.search)
    }

    /// Headline figures for the dashboard tab.
    #[must_use]
    pub fn metrics(&self) -> DashboardMetrics {
        engine::dashboard_metrics(&self.catalog.containers, &self.catalog.requests)
            .with_utilization(self.utilization_percent)
    }

    /// Applies one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            tracing::info!("ctrl+c pressed");
            self.quit();
            return;
        }
        match self.input_mode {
            InputMode::Search => self.handle_search_key(key),
            InputMode::Normal => self.handle_normal_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Backspace => {
                let _ = self.search.pop();
                self.clamp_container_selection();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.clamp_container_selection();
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('1') => self.switch_tab(Tab::Dashboard),
            KeyCode::Char('2') => self.switch_tab(Tab::Containers),
            KeyCode::Char('3') => self.switch_tab(Tab::Requests),
            KeyCode::Char('4') => self.switch_tab(Tab::Planning),
            KeyCode::Right | KeyCode::Tab => self.switch_tab(self.current_tab.next()),
            KeyCode::Left | KeyCode::BackTab => self.switch_tab(self.current_tab.previous()),
            KeyCode::Char('/') => {
                self.switch_tab(Tab::Containers);
                self.input_mode = InputMode::Search;
            }
            KeyCode::Char('s') => self.set_status_filter(self.status_filter.next()),
            KeyCode::Char('S') => self.set_status_filter(self.status_filter.previous()),
            KeyCode::Char('c') => {
                self.search.clear();
                self.set_status_filter(StatusFilter::All);
            }
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Char('l') if self.current_tab == Tab::Planning => self.move_day(1),
            KeyCode::Char('h') if self.current_tab == Tab::Planning => self.move_day(-1),
            other => tracing::trace!(key = ?other, "unhandled key"),
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        tracing::debug!(from = self.current_tab.title(), to = tab.title(), "switching tab");
        self.current_tab = tab;
    }

    fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
        self.clamp_container_selection();
    }

    fn move_selection(&mut self, delta: isize) {
        match self.current_tab {
            Tab::Containers => {
                let len = self.visible_containers().len();
                self.selected_container = step(self.selected_container, delta, len);
            }
            Tab::Requests => {
                let len = self.catalog.requests.len();
                self.selected_request = step(self.selected_request, delta, len);
            }
            Tab::Planning => self.move_day(delta * 7),
            Tab::Dashboard => {}
        }
    }

    fn move_day(&mut self, delta: isize) {
        self.selected_day = step(self.selected_day, delta, CALENDAR_CELLS);
    }

    fn clamp_container_selection(&mut self) {
        let len = self.visible_containers().len();
        self.selected_container = self.selected_container.min(len.saturating_sub(1));
    }
}

/// Moves `current` by `delta` within `0..len`, stopping at the ends.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}
