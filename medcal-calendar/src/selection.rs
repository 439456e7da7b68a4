//! Selected-date tracking and per-cell highlight classification.

use tracing::debug;

use crate::{calendar_math::same_date, date::CalendarDate};

/// Visual state of one calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellHighlight {
    /// The selected date. Overrides [`CellHighlight::Today`].
    Selected,
    /// Today's date, when it is not selected.
    Today,
    /// Neither.
    #[default]
    None,
}

/// The externally selected date, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_date: Option<CalendarDate>,
}

impl SelectionState {
    /// Creates a selection state.
    pub fn new(selected_date: Option<CalendarDate>) -> Self {
        Self { selected_date }
    }

    /// Returns the selected date, if any.
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selected_date
    }

    /// Records a tapped date.
    pub fn select(&mut self, date: CalendarDate) {
        debug!("date selected");
        self.selected_date = Some(date);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.selected_date = None;
    }

    /// Returns true when `date` is the selected date.
    pub fn is_selected(&self, date: CalendarDate) -> bool {
        self.selected_date
            .is_some_and(|selected| same_date(date, selected))
    }

    /// Classifies `date` against the selection and `today`.
    pub fn classify(&self, date: CalendarDate, today: CalendarDate) -> CellHighlight {
        if self.is_selected(date) {
            CellHighlight::Selected
        } else if is_today(date, today) {
            CellHighlight::Today
        } else {
            CellHighlight::None
        }
    }
}

/// Returns true when `date` is `today`.
pub fn is_today(date: CalendarDate, today: CalendarDate) -> bool {
    same_date(date, today)
}
