//! Month-by-month navigation of the calendar viewport.

use std::ops::RangeInclusive;

use tracing::debug;

use crate::{
    calendar_math::validate_month,
    date::{CalendarDate, Viewport, YearMonth},
    error::CalendarError,
};

/// Years shown before the reference year in the year picker.
pub const DEFAULT_YEARS_BEFORE: i32 = 100;
/// Years shown after the reference year in the year picker.
pub const DEFAULT_YEARS_AFTER: i32 = 50;

/// Holds the displayed month and moves it around.
///
/// Every transition is total: the navigator accepts any year, the year
/// picker's range is a presentation policy enforced by the picker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportNavigator {
    viewport: Viewport,
}

impl ViewportNavigator {
    /// Creates a navigator showing `viewport`.
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Creates the navigator a calendar starts with: the month of the
    /// selected date, or of `today` when nothing is selected.
    pub fn for_selection(selected: Option<CalendarDate>, today: CalendarDate) -> Self {
        let anchor = selected.unwrap_or(today);
        Self::new(anchor.year_month())
    }

    /// Returns the displayed month.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Moves forward one month, rolling December into January of the next year.
    pub fn next(&mut self) {
        self.viewport = self.viewport.next();
        debug!("navigated to next month");
    }

    /// Moves back one month, rolling January into December of the previous
    /// year.
    pub fn previous(&mut self) {
        self.viewport = self.viewport.previous();
        debug!("navigated to previous month");
    }

    /// Replaces the month, keeping the year.
    pub fn set_month(&mut self, month: u8) -> Result<(), CalendarError> {
        validate_month(month)?;
        self.viewport = YearMonth::new_unchecked(self.viewport.year(), month);
        debug!("month set");
        Ok(())
    }

    /// Replaces the year, keeping the month.
    pub fn set_year(&mut self, year: i32) {
        self.viewport = YearMonth::new_unchecked(year, self.viewport.month());
        debug!("year set");
    }

    /// Jumps straight to the month containing `date`.
    pub fn show(&mut self, date: CalendarDate) {
        self.viewport = date.year_month();
        debug!("showing month of date");
    }
}

/// Years offered by the year picker around `reference_year`:
/// `reference_year - 100 ..= reference_year + 50`.
pub fn supported_year_range(reference_year: i32) -> RangeInclusive<i32> {
    year_range_around(reference_year, DEFAULT_YEARS_BEFORE, DEFAULT_YEARS_AFTER)
}

/// Like [`supported_year_range`] with explicit spans.
pub fn year_range_around(reference_year: i32, before: i32, after: i32) -> RangeInclusive<i32> {
    reference_year.saturating_sub(before)..=reference_year.saturating_add(after)
}
