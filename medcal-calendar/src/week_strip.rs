//! The seven-day strip shown above the medication schedule.
//!
//! A strip always covers one Monday-to-Sunday week and moves a whole week at
//! a time. Highlighting reuses [`SelectionState::classify`], so the strip and
//! the month grid agree on which day is selected.

use tracing::debug;

use crate::{
    date::CalendarDate,
    date_grid::{GRID_COLUMNS, WEEK_START},
    selection::{CellHighlight, SelectionState},
};

/// One week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekStrip {
    start: CalendarDate,
}

impl WeekStrip {
    /// The week containing `date`.
    pub fn containing(date: CalendarDate) -> Self {
        let back = (date.weekday().index_from_monday() + 7 - WEEK_START.index_from_monday()) % 7;
        Self {
            start: date.add_days(-(back as i64)),
        }
    }

    /// First day of the week.
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Last day of the week.
    pub fn end(&self) -> CalendarDate {
        self.start.add_days(GRID_COLUMNS as i64 - 1)
    }

    /// The seven days in order.
    pub fn days(&self) -> [CalendarDate; GRID_COLUMNS] {
        std::array::from_fn(|idx| self.start.add_days(idx as i64))
    }

    /// Returns true when `date` falls inside this week.
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.start <= date && date <= self.end()
    }

    /// Moves to the following week.
    pub fn next_week(&mut self) {
        self.start = self.start.add_days(GRID_COLUMNS as i64);
        debug!("week strip moved forward");
    }

    /// Moves to the preceding week.
    pub fn previous_week(&mut self) {
        self.start = self.start.add_days(-(GRID_COLUMNS as i64));
        debug!("week strip moved back");
    }

    /// Each day paired with its highlight.
    pub fn classify(
        &self,
        selection: &SelectionState,
        today: CalendarDate,
    ) -> [(CalendarDate, CellHighlight); GRID_COLUMNS] {
        self.days().map(|day| (day, selection.classify(day, today)))
    }
}
