//! Tunables shared by the date picker controller.

use std::{ops::RangeInclusive, time::Duration};

use derive_setters::Setters;

use crate::{
    navigator::{DEFAULT_YEARS_AFTER, DEFAULT_YEARS_BEFORE, year_range_around},
    picker_position::{PickerLayout, YearPickerItems},
};

/// Default delay between opening a picker and scrolling it.
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Configuration for [`DatePickerController`](crate::date_picker::DatePickerController).
#[derive(Debug, Clone, PartialEq, Setters)]
pub struct CalendarConfig {
    /// Years offered before the reference year.
    pub years_before: i32,
    /// Years offered after the reference year.
    pub years_after: i32,
    /// Layout of the year picker list.
    pub year_picker: PickerLayout,
    /// Layout of the month picker list.
    pub month_picker: PickerLayout,
    /// Delay before a freshly opened picker is scrolled.
    pub scroll_delay: Duration,
}

impl CalendarConfig {
    /// Year range offered around `reference_year`.
    pub fn year_range(&self, reference_year: i32) -> RangeInclusive<i32> {
        year_range_around(reference_year, self.years_before, self.years_after)
    }

    /// Year picker list around `reference_year`.
    pub fn year_items(&self, reference_year: i32) -> YearPickerItems {
        YearPickerItems::new(self.year_range(reference_year))
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            years_before: DEFAULT_YEARS_BEFORE,
            years_after: DEFAULT_YEARS_AFTER,
            year_picker: PickerLayout::YEAR,
            month_picker: PickerLayout::MONTH,
            scroll_delay: DEFAULT_SCROLL_DELAY,
        }
    }
}
