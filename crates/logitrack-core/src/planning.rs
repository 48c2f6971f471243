//! Slot-planning calendar.
//!
//! A Monday-first grid of five weeks with the time slots booked on each
//! day. The calendar is display-only: bookings are supplied up front and
//! never committed back to the catalog.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use logitrack_common::constants::CALENDAR_CELLS;
use logitrack_common::error::{LogitrackError, Result};
use serde::{Deserialize, Serialize};

/// Column headers of the calendar grid.
pub const WEEKDAY_LABELS: [&str; 7] = ["ПН", "ВТ", "СР", "ЧТ", "ПТ", "СБ", "ВС"];

/// Grid positions carrying a slot in the sample calendar.
const SAMPLE_SLOT_CELLS: [u64; 3] = [5, 12, 19];

/// Kind of yard operation a slot is reserved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotOperation {
    /// Loading a container.
    Loading,
    /// Unloading a container.
    Unloading,
    /// Maintenance work.
    Maintenance,
}

impl SlotOperation {
    /// Every operation, in display order.
    pub const ALL: [Self; 3] = [Self::Loading, Self::Unloading, Self::Maintenance];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "Погрузка",
            Self::Unloading => "Разгрузка",
            Self::Maintenance => "Обслуживание",
        }
    }
}

/// A half-open `[start, end)` time range within one day.
///
/// Deserialization goes through [`TimeWindow::new`], so an inverted range is
/// rejected wherever a window is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeWindow")]
pub struct TimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

#[derive(Deserialize)]
struct RawTimeWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = LogitrackError;

    fn try_from(raw: RawTimeWindow) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl TimeWindow {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns [`LogitrackError::InvalidSlot`] unless `start < end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if end <= start {
            return Err(LogitrackError::InvalidSlot {
                message: format!("slot must end after it starts ({start} - {end})"),
            });
        }
        Ok(Self { start, end })
    }

    /// Start of the window.
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of the window.
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Returns whether the two windows share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// A reserved time window on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotBooking {
    /// Day of the slot.
    pub date: NaiveDate,
    /// Reserved time range.
    pub window: TimeWindow,
    /// Container number, when one is assigned.
    pub container: Option<String>,
    /// Planned operation, when known.
    pub operation: Option<SlotOperation>,
}

/// One day of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell<'a> {
    /// Position in the grid, row-major from 0.
    pub index: usize,
    /// Calendar date of the cell.
    pub date: NaiveDate,
    /// Saturday or Sunday.
    pub weekend: bool,
    /// Bookings on this date, earliest first.
    pub slots: Vec<&'a SlotBooking>,
}

/// Five-week slot calendar starting on a Monday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCalendar {
    first_day: NaiveDate,
    bookings: Vec<SlotBooking>,
}

impl SlotCalendar {
    /// Creates an empty calendar whose grid starts on `first_day`.
    ///
    /// # Errors
    ///
    /// Returns [`LogitrackError::InvalidSlot`] if `first_day` is not a Monday.
    pub fn new(first_day: NaiveDate) -> Result<Self> {
        if first_day.weekday() != Weekday::Mon {
            return Err(LogitrackError::InvalidSlot {
                message: format!("calendar must start on a Monday, got {first_day}"),
            });
        }
        Ok(Self {
            first_day,
            bookings: Vec::new(),
        })
    }

    /// Creates a calendar for the week containing `day`.
    #[must_use]
    pub fn containing(day: NaiveDate) -> Self {
        let offset = u64::from(day.weekday().num_days_from_monday());
        Self {
            first_day: day.checked_sub_days(Days::new(offset)).unwrap_or(day),
            bookings: Vec::new(),
        }
    }

    /// The demonstration calendar: a 10:00-12:00 slot on grid cells 5, 12
    /// and 19.
    #[must_use]
    pub fn sample(first_day: NaiveDate) -> Self {
        let mut calendar = Self::containing(first_day);
        let window = NaiveTime::from_hms_opt(10, 0, 0)
            .zip(NaiveTime::from_hms_opt(12, 0, 0))
            .and_then(|(start, end)| TimeWindow::new(start, end).ok());
        let Some(window) = window else {
            return calendar;
        };
        let start = calendar.first_day;
        calendar.bookings = SAMPLE_SLOT_CELLS
            .into_iter()
            .filter_map(|cell| start.checked_add_days(Days::new(cell)))
            .map(|date| SlotBooking {
                date,
                window,
                container: None,
                operation: None,
            })
            .collect();
        calendar
    }

    /// Adds bookings to a calendar before it is displayed.
    #[must_use]
    pub fn with_bookings(mut self, bookings: impl IntoIterator<Item = SlotBooking>) -> Self {
        self.bookings.extend(bookings);
        self
    }

    /// First (top-left) day of the grid.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last (bottom-right) day of the grid.
    #[must_use]
    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_days(Days::new(CALENDAR_CELLS as u64 - 1))
            .unwrap_or(self.first_day)
    }

    /// All bookings, in insertion order.
    #[must_use]
    pub fn bookings(&self) -> &[SlotBooking] {
        &self.bookings
    }

    /// Bookings on `date`, earliest first.
    #[must_use]
    pub fn bookings_on(&self, date: NaiveDate) -> Vec<&SlotBooking> {
        let mut slots: Vec<&SlotBooking> = self.bookings.iter().filter(|b| b.date == date).collect();
        slots.sort_by_key(|b| b.window.start());
        slots
    }

    /// Pairs of same-day bookings whose windows overlap, in insertion order.
    #[must_use]
    pub fn conflicts(&self) -> Vec<(&SlotBooking, &SlotBooking)> {
        let bookings = self.bookings.as_slice();
        bookings
            .iter()
            .enumerate()
            .flat_map(move |(i, first)| {
                bookings[i + 1..]
                    .iter()
                    .filter(move |second| {
                        second.date == first.date && first.window.overlaps(&second.window)
                    })
                    .map(move |second| (first, second))
            })
            .collect()
    }

    /// The grid, row-major, one cell per day.
    #[must_use]
    pub fn cells(&self) -> Vec<DayCell<'_>> {
        (0..CALENDAR_CELLS)
            .filter_map(|index| self.cell(index))
            .collect()
    }

    /// The cell at grid position `index`, if within the grid.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<DayCell<'_>> {
        if index >= CALENDAR_CELLS {
            return None;
        }
        let date = self.first_day.checked_add_days(Days::new(index as u64))?;
        Some(DayCell {
            index,
            date,
            weekend: index % 7 >= 5,
            slots: self.bookings_on(date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn new_requires_monday() {
        assert!(SlotCalendar::new(monday()).is_ok());
        let tuesday = monday().succ_opt().unwrap();
        let err = SlotCalendar::new(tuesday).unwrap_err();
        assert!(err.to_string().contains("Monday"), "got: {err}");
    }

    #[test]
    fn containing_snaps_to_monday() {
        let thursday = NaiveDate::from_ymd_opt(2025, 12, 4).unwrap();
        assert_eq!(SlotCalendar::containing(thursday).first_day(), monday());
        assert_eq!(SlotCalendar::containing(monday()).first_day(), monday());
    }

    #[test]
    fn grid_has_thirty_five_cells_with_weekends() {
        let calendar = SlotCalendar::new(monday()).unwrap();
        let cells = calendar.cells();
        assert_eq!(cells.len(), 35);
        let weekends: Vec<_> = cells.iter().filter(|c| c.weekend).map(|c| c.index).collect();
        assert_eq!(weekends, vec![5, 6, 12, 13, 19, 20, 26, 27, 33, 34]);
        assert!(cells.iter().filter(|c| c.weekend).all(|c| {
            matches!(c.date.weekday(), Weekday::Sat | Weekday::Sun)
        }));
        assert_eq!(calendar.last_day(), NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
    }

    #[test]
    fn sample_places_slots_on_expected_cells() {
        let calendar = SlotCalendar::sample(monday());
        let booked: Vec<_> = calendar
            .cells()
            .into_iter()
            .filter(|c| !c.slots.is_empty())
            .map(|c| c.index)
            .collect();
        assert_eq!(booked, vec![5, 12, 19]);
        assert_eq!(calendar.bookings()[0].window.to_string(), "10:00-12:00");
    }

    #[test]
    fn window_rejects_inverted_range() {
        assert!(TimeWindow::new(time(12, 0), time(10, 0)).is_err());
        assert!(TimeWindow::new(time(10, 0), time(10, 0)).is_err());
    }

    #[test]
    fn windows_touching_at_boundary_do_not_overlap() {
        let morning = TimeWindow::new(time(8, 0), time(10, 0)).unwrap();
        let late = TimeWindow::new(time(10, 0), time(12, 0)).unwrap();
        let middle = TimeWindow::new(time(9, 30), time(10, 30)).unwrap();
        assert!(!morning.overlaps(&late));
        assert!(middle.overlaps(&morning));
        assert!(middle.overlaps(&late));
    }

    #[test]
    fn deserializing_inverted_window_fails() {
        let err = serde_json::from_str::<TimeWindow>(r#"{"start":"12:00:00","end":"10:00:00"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("end after it starts"), "got: {err}");
        assert!(
            serde_json::from_str::<TimeWindow>(r#"{"start":"10:00:00","end":"10:00:00"}"#).is_err()
        );

        let window: TimeWindow =
            serde_json::from_str(r#"{"start":"10:00:00","end":"12:00:00"}"#).unwrap();
        assert_eq!(window, TimeWindow::new(time(10, 0), time(12, 0)).unwrap());
    }

    #[test]
    fn booking_with_inverted_window_fails_to_deserialize() {
        let json = r#"{
            "date": "2025-12-06",
            "window": {"start": "12:00:00", "end": "10:00:00"},
            "container": "TCNU3458923",
            "operation": "loading"
        }"#;
        assert!(serde_json::from_str::<SlotBooking>(json).is_err());
    }

    #[test]
    fn window_survives_serde_roundtrip() {
        let window = TimeWindow::new(time(10, 0), time(12, 0)).unwrap();
        let json = serde_json::to_string(&window).unwrap();
        assert_eq!(serde_json::from_str::<TimeWindow>(&json).unwrap(), window);
    }

    #[test]
    fn sample_calendar_has_no_conflicts() {
        assert!(SlotCalendar::sample(monday()).conflicts().is_empty());
    }

    #[test]
    fn conflicts_pair_overlapping_same_day_bookings() {
        let saturday = NaiveDate::from_ymd_opt(2025, 12, 6).unwrap();
        let booking = |date, start, end| SlotBooking {
            date,
            window: TimeWindow::new(time(start, 0), time(end, 0)).unwrap(),
            container: None,
            operation: Some(SlotOperation::Unloading),
        };
        let calendar = SlotCalendar::sample(monday()).with_bookings([
            booking(saturday, 11, 13),
            booking(monday(), 11, 13),
            booking(saturday, 12, 14),
        ]);

        let conflicts = calendar.conflicts();
        let pairs: Vec<_> = conflicts
            .iter()
            .map(|(a, b)| (a.window.to_string(), b.window.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("10:00-12:00".to_string(), "11:00-13:00".to_string()),
                ("11:00-13:00".to_string(), "12:00-14:00".to_string()),
            ]
        );
        assert!(conflicts.iter().all(|(a, b)| a.date == saturday && b.date == saturday));
    }

    #[test]
    fn bookings_on_sorts_by_start() {
        let day = monday();
        let calendar = SlotCalendar::new(day).unwrap().with_bookings([
            SlotBooking {
                date: day,
                window: TimeWindow::new(time(14, 0), time(15, 0)).unwrap(),
                container: Some("TCNU3458923".into()),
                operation: Some(SlotOperation::Loading),
            },
            SlotBooking {
                date: day,
                window: TimeWindow::new(time(8, 0), time(9, 0)).unwrap(),
                container: None,
                operation: Some(SlotOperation::Maintenance),
            },
        ]);
        let slots = calendar.bookings_on(day);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].operation, Some(SlotOperation::Maintenance));
    }

    #[test]
    fn cell_outside_grid_is_none() {
        let calendar = SlotCalendar::new(monday()).unwrap();
        assert!(calendar.cell(35).is_none());
        assert_eq!(calendar.cell(0).map(|c| c.date), Some(monday()));
    }
}
