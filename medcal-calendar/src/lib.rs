//! Calendar engine behind the medcal date pickers.
//!
//! The crate produces the 42-cell month grid, moves the displayed month
//! around, classifies cells as selected or today, and computes the scroll
//! offset that brings the current value of a month or year picker into view.
//! It never reads the clock: the reference "today" is always passed in.
//!
//! # Modules
//!
//! - [`calendar_math`] - leap years, month lengths, weekday offsets.
//! - [`date_grid`] - the six-week grid for a viewport.
//! - [`navigator`] - next/previous month and direct month/year jumps.
//! - [`picker_position`] - scroll offsets for the picker lists.
//! - [`selection`] - selected/today classification.
//! - [`date_picker`] - the controller a host screen owns.

pub mod calendar_math;
pub mod config;
pub mod date;
pub mod date_grid;
pub mod date_picker;
pub mod dp;
pub mod error;
pub mod labels;
pub mod markers;
pub mod navigator;
pub mod picker_position;
pub mod scheduler;
pub mod selection;
pub mod week_strip;

pub use calendar_math::{
    SUPPORTED_YEARS, are_adjacent, days_in_month, first_weekday_offset, is_leap_year, same_date,
};
pub use config::CalendarConfig;
pub use date::{CalendarDate, Viewport, Weekday, YearMonth};
pub use date_grid::{GRID_CELLS, GridCell, MonthGrid, build_grid};
pub use date_picker::{CalendarCell, DatePickerController, DateSelectCallback, PickerKind};
pub use dp::Dp;
pub use error::{CalendarError, DateComponent};
pub use markers::{DayMarkers, MarkerSource, NoMarkers, annotate};
pub use navigator::{ViewportNavigator, supported_year_range};
pub use picker_position::{
    MonthPickerItems, PickerLayout, PickerQuery, YearPickerItems, position_for,
};
pub use scheduler::{PickerScrollScheduler, ScrollCallback, ScrollTicket};
pub use selection::{CellHighlight, SelectionState, is_today};
pub use week_strip::WeekStrip;
