//! Scroll positioning for the month and year pickers.
//!
//! Picker items are laid out in rows of a fixed number of equally tall items.
//! When a picker opens it is pre-scrolled so the current value sits a fixed
//! lead-in below the top edge. All measurements are static layout constants,
//! never measured at runtime, so the same query always yields the same offset.

use std::{num::NonZeroUsize, ops::RangeInclusive};

use derive_setters::Setters;

use crate::{
    calendar_math::MONTHS_PER_YEAR, dp::Dp, error::CalendarError,
    navigator::year_range_around,
};

/// Static layout of a picker list.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct PickerLayout {
    /// Items per row.
    pub items_per_row: NonZeroUsize,
    /// Height of one row.
    pub item_height: Dp,
    /// Space kept above the target row after scrolling.
    pub lead_in: Dp,
}

impl PickerLayout {
    /// Layout of the year picker: four years per row.
    pub const YEAR: PickerLayout = PickerLayout {
        items_per_row: NonZeroUsize::new(4).unwrap(),
        item_height: Dp(32.0),
        lead_in: Dp(80.0),
    };

    /// Layout of the month picker: three months per row.
    pub const MONTH: PickerLayout = PickerLayout {
        items_per_row: NonZeroUsize::new(3).unwrap(),
        item_height: Dp(48.0),
        lead_in: Dp(0.0),
    };

    /// Builds the query that brings `target_index` into view.
    pub fn query(&self, target_index: usize) -> PickerQuery {
        PickerQuery {
            target_index,
            items_per_row: self.items_per_row,
            item_height: self.item_height,
            lead_in: self.lead_in,
        }
    }
}

/// A request for the scroll offset of one picker item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerQuery {
    /// Index of the item in the flat picker list.
    pub target_index: usize,
    /// Items per row.
    pub items_per_row: NonZeroUsize,
    /// Height of one row.
    pub item_height: Dp,
    /// Space kept above the target row.
    pub lead_in: Dp,
}

impl PickerQuery {
    /// The scroll offset for this query; see [`position_for`].
    pub fn offset(&self) -> Dp {
        position_for(
            self.target_index,
            self.items_per_row,
            self.item_height,
            self.lead_in,
        )
    }
}

/// Scroll offset that shows `target_index` one `lead_in` below the top.
///
/// `row = target_index / items_per_row`, offset
/// `max(0, row * item_height - lead_in)`. The index is assumed to exist in
/// the list; resolve it with [`YearPickerItems::index_of`] or
/// [`MonthPickerItems::index_of`] first.
pub fn position_for(
    target_index: usize,
    items_per_row: NonZeroUsize,
    item_height: Dp,
    lead_in: Dp,
) -> Dp {
    let row = target_index / items_per_row.get();
    (item_height * row - lead_in).max(Dp::ZERO)
}

/// The flat list backing the year picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPickerItems {
    years: RangeInclusive<i32>,
}

impl YearPickerItems {
    /// Creates the list for an explicit year range.
    pub fn new(years: RangeInclusive<i32>) -> Self {
        Self { years }
    }

    /// The list offered around `reference_year`, `before` years back and
    /// `after` years ahead.
    pub fn around(reference_year: i32, before: i32, after: i32) -> Self {
        Self::new(year_range_around(reference_year, before, after))
    }

    /// First and last year of the list.
    pub fn years(&self) -> &RangeInclusive<i32> {
        &self.years
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        if self.years.is_empty() {
            0
        } else {
            (*self.years.end() as i64 - *self.years.start() as i64 + 1) as usize
        }
    }

    /// Returns true if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Returns true if `year` is listed.
    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    /// Position of `year` in the list.
    pub fn index_of(&self, year: i32) -> Result<usize, CalendarError> {
        if !self.contains(year) {
            return Err(CalendarError::MissingPickerTarget {
                value: year as i64,
            });
        }
        Ok((year as i64 - *self.years.start() as i64) as usize)
    }

    /// Scroll query for `year` under `layout`.
    pub fn scroll_query_for(
        &self,
        year: i32,
        layout: &PickerLayout,
    ) -> Result<PickerQuery, CalendarError> {
        Ok(layout.query(self.index_of(year)?))
    }

    /// Iterates the listed years in order.
    pub fn iter(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }
}

/// The twelve entries of the month picker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthPickerItems;

impl MonthPickerItems {
    /// Number of entries.
    pub fn len(&self) -> usize {
        MONTHS_PER_YEAR as usize
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Position of the zero-based `month` in the list.
    pub fn index_of(&self, month: u8) -> Result<usize, CalendarError> {
        if month < MONTHS_PER_YEAR {
            Ok(month as usize)
        } else {
            Err(CalendarError::MissingPickerTarget {
                value: month as i64,
            })
        }
    }

    /// Scroll query for `month` under `layout`.
    pub fn scroll_query_for(
        &self,
        month: u8,
        layout: &PickerLayout,
    ) -> Result<PickerQuery, CalendarError> {
        Ok(layout.query(self.index_of(month)?))
    }
}
