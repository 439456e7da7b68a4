//! The 42-cell month grid shown by the calendar.
//!
//! A grid always spans six Monday-first weeks: the tail of the previous
//! month, every day of the viewport month, and the head of the next month.
//! The cell count never depends on month length or weekday alignment, so the
//! layout stays the same height from month to month.

use tracing::trace;

use crate::{
    calendar_math::{
        days_in_month_unchecked, first_weekday_offset_unchecked, validate_month, validate_year,
    },
    date::{CalendarDate, Viewport, Weekday},
    error::CalendarError,
};

/// Columns per grid row.
pub const GRID_COLUMNS: usize = 7;
/// Rows per grid.
pub const GRID_ROWS: usize = 6;
/// Total number of cells in a grid.
pub const GRID_CELLS: usize = GRID_COLUMNS * GRID_ROWS;

/// Week start used by every grid.
pub const WEEK_START: Weekday = Weekday::Monday;

/// One day slot of a [`MonthGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Day of the month shown in the cell.
    pub day_number: u8,
    /// Whether the day belongs to the viewport month rather than a neighbour.
    pub belongs_to_viewport_month: bool,
    /// Full date of the cell.
    pub date: CalendarDate,
}

impl GridCell {
    fn new(date: CalendarDate, belongs_to_viewport_month: bool) -> Self {
        Self {
            day_number: date.day(),
            belongs_to_viewport_month,
            date,
        }
    }
}

/// Six rows of seven [`GridCell`]s for one viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    viewport: Viewport,
    cells: [GridCell; GRID_CELLS],
}

impl MonthGrid {
    /// The viewport this grid was built for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[GridCell; GRID_CELLS] {
        &self.cells
    }

    /// Cells grouped into rows of seven.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLUMNS)
    }

    /// First cell holding `date`, if the grid shows it.
    pub fn position_of(&self, date: CalendarDate) -> Option<usize> {
        self.cells.iter().position(|cell| cell.date == date)
    }

    /// Iterates over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a MonthGrid {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Builds the grid for `viewport`.
///
/// Fails when the viewport year lies outside
/// [`SUPPORTED_YEARS`](crate::calendar_math::SUPPORTED_YEARS). Cells of the
/// neighbouring months are produced even when they fall just outside that
/// range.
pub fn build_grid(viewport: Viewport) -> Result<MonthGrid, CalendarError> {
    let year = viewport.year();
    let month = viewport.month();
    validate_year(year)?;
    validate_month(month)?;

    let offset = first_weekday_offset_unchecked(year, month, WEEK_START) as usize;
    let previous = viewport.previous();
    let previous_len = days_in_month_unchecked(previous.year(), previous.month());
    let current_len = days_in_month_unchecked(year, month);
    let next = viewport.next();

    let month_end = offset + current_len as usize;
    let cells = std::array::from_fn(|index| {
        if index < offset {
            // Trailing days of the previous month.
            let day = previous_len as usize - offset + 1 + index;
            GridCell::new(
                CalendarDate::new_unchecked(previous.year(), previous.month(), day as u8),
                false,
            )
        } else if index < month_end {
            let day = index - offset + 1;
            GridCell::new(CalendarDate::new_unchecked(year, month, day as u8), true)
        } else {
            let day = index - month_end + 1;
            GridCell::new(
                CalendarDate::new_unchecked(next.year(), next.month(), day as u8),
                false,
            )
        }
    });

    trace!(offset, current_len, "built month grid");
    Ok(MonthGrid { viewport, cells })
}
