//! Date picker controller: the state a host screen keeps for one calendar.
//!
//! ## Usage
//!
//! Create one controller per screen, call [`DatePickerController::open`] with
//! the currently selected date, render [`DatePickerController::cells`] on
//! every frame and forward user input to the navigation, tap and picker
//! methods. While the calendar is hidden every input method is ignored.
//!
//! ```
//! use medcal_calendar::{CalendarConfig, CalendarDate, CellHighlight, DatePickerController};
//!
//! let today = CalendarDate::new(2026, 9, 16).unwrap();
//! let mut picker = DatePickerController::new(CalendarConfig::default(), today)
//!     .on_date_select(|date| println!("picked {date}"));
//! picker.open(None);
//!
//! let cells = picker.cells().unwrap();
//! assert_eq!(cells.len(), 42);
//! assert!(cells.iter().any(|c| c.highlight == CellHighlight::Today));
//!
//! assert!(picker.tap(today.succ()));
//! assert!(!picker.is_visible());
//! ```

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{
    config::CalendarConfig,
    date::{CalendarDate, Viewport},
    date_grid::{GridCell, MonthGrid, build_grid},
    dp::Dp,
    error::CalendarError,
    labels::format_month_year,
    navigator::ViewportNavigator,
    picker_position::{MonthPickerItems, YearPickerItems},
    scheduler::{PickerScrollScheduler, ScrollCallback},
    selection::{CellHighlight, SelectionState},
};

/// Invoked with the tapped date.
pub type DateSelectCallback = Arc<dyn Fn(CalendarDate) + Send + Sync>;

/// Which list picker is open over the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerKind {
    /// The twelve-month picker.
    Month,
    /// The year picker.
    Year,
}

/// A grid cell with the highlight it should be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    /// The cell itself.
    pub cell: GridCell,
    /// Selected, today or neither.
    pub highlight: CellHighlight,
}

/// Navigation, selection and picker state of one calendar.
pub struct DatePickerController {
    config: CalendarConfig,
    today: CalendarDate,
    navigator: ViewportNavigator,
    selection: SelectionState,
    visible: bool,
    open_picker: Option<PickerKind>,
    on_date_select: Option<DateSelectCallback>,
    scheduler: PickerScrollScheduler,
}

impl DatePickerController {
    /// Creates a hidden controller showing the month of `today`.
    pub fn new(config: CalendarConfig, today: CalendarDate) -> Self {
        Self {
            config,
            today,
            navigator: ViewportNavigator::for_selection(None, today),
            selection: SelectionState::default(),
            visible: false,
            open_picker: None,
            on_date_select: None,
            scheduler: PickerScrollScheduler::new(),
        }
    }

    /// Sets the date-selection callback.
    pub fn on_date_select<F>(mut self, f: F) -> Self
    where
        F: Fn(CalendarDate) + Send + Sync + 'static,
    {
        self.on_date_select = Some(Arc::new(f));
        self
    }

    /// Sets the date-selection callback using a shared callback.
    pub fn on_date_select_shared(mut self, f: DateSelectCallback) -> Self {
        self.on_date_select = Some(f);
        self
    }

    /// Shows the calendar on the month of `selected`, or of today.
    pub fn open(&mut self, selected: Option<CalendarDate>) {
        self.close_picker();
        self.selection = SelectionState::new(selected);
        self.navigator = ViewportNavigator::for_selection(selected, self.today);
        self.visible = true;
        debug!("calendar opened");
    }

    /// Hides the calendar and any open picker.
    pub fn close(&mut self) {
        self.close_picker();
        self.visible = false;
        debug!("calendar closed");
    }

    /// Replaces the reference date used for the today marker.
    pub fn set_today(&mut self, today: CalendarDate) {
        self.today = today;
    }

    /// Returns true while the calendar is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The reference date.
    pub fn today(&self) -> CalendarDate {
        self.today
    }

    /// The displayed month.
    pub fn viewport(&self) -> Viewport {
        self.navigator.viewport()
    }

    /// The selected date, if any.
    pub fn selected_date(&self) -> Option<CalendarDate> {
        self.selection.selected_date()
    }

    /// The selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The list picker currently open, if any.
    pub fn open_picker(&self) -> Option<PickerKind> {
        self.open_picker
    }

    /// The configuration in use.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Title shown above the grid, e.g. "October 2026".
    pub fn header_label(&self) -> String {
        format_month_year(self.viewport())
    }

    /// Grid of the displayed month.
    pub fn grid(&self) -> Result<MonthGrid, CalendarError> {
        build_grid(self.viewport())
    }

    /// Grid of the displayed month with every cell classified.
    pub fn cells(&self) -> Result<Vec<CalendarCell>, CalendarError> {
        let grid = self.grid()?;
        Ok(grid
            .iter()
            .map(|cell| CalendarCell {
                cell: *cell,
                highlight: self.selection.classify(cell.date, self.today),
            })
            .collect())
    }

    /// Shows the next month. Returns false while hidden.
    pub fn next_month(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.navigator.next();
        true
    }

    /// Shows the previous month. Returns false while hidden.
    pub fn previous_month(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.navigator.previous();
        true
    }

    /// Handles a tap on the cell holding `date`.
    ///
    /// Selects the date, reports it through the selection callback exactly
    /// once and closes the calendar. Returns false while hidden.
    pub fn tap(&mut self, date: CalendarDate) -> bool {
        if !self.visible {
            return false;
        }
        self.selection.select(date);
        self.navigator.show(date);
        if let Some(callback) = &self.on_date_select {
            callback(date);
        }
        self.close();
        true
    }

    /// Year picker entries around today's year.
    pub fn year_items(&self) -> YearPickerItems {
        self.config.year_items(self.today.year())
    }

    /// Opens the year picker and schedules it to scroll to the displayed year
    /// (today's year when the displayed one is not listed).
    ///
    /// Returns `Ok(false)` while hidden.
    pub fn open_year_picker<F>(&mut self, on_scroll: F) -> Result<bool, CalendarError>
    where
        F: Fn(Dp) + Send + Sync + 'static,
    {
        if !self.visible {
            return Ok(false);
        }
        let items = self.year_items();
        let year = self.viewport().year();
        let target = if items.contains(year) {
            year
        } else {
            warn!("displayed year is outside the year picker");
            self.today.year()
        };
        let query = items.scroll_query_for(target, &self.config.year_picker)?;
        self.open_picker = Some(PickerKind::Year);
        self.scheduler
            .schedule(query, self.config.scroll_delay, wrap(on_scroll))?;
        debug!("year picker opened");
        Ok(true)
    }

    /// Opens the month picker and schedules it to scroll to the displayed
    /// month. Returns `Ok(false)` while hidden.
    pub fn open_month_picker<F>(&mut self, on_scroll: F) -> Result<bool, CalendarError>
    where
        F: Fn(Dp) + Send + Sync + 'static,
    {
        if !self.visible {
            return Ok(false);
        }
        let month = self.viewport().month();
        let query = MonthPickerItems.scroll_query_for(month, &self.config.month_picker)?;
        self.open_picker = Some(PickerKind::Month);
        self.scheduler
            .schedule(query, self.config.scroll_delay, wrap(on_scroll))?;
        debug!("month picker opened");
        Ok(true)
    }

    /// Closes the open list picker; a pending scroll is dropped.
    pub fn close_picker(&mut self) {
        self.scheduler.cancel();
        if self.open_picker.take().is_some() {
            debug!("picker closed");
        }
    }

    /// Applies a year chosen in the year picker and closes it.
    ///
    /// Returns `Ok(false)` while hidden.
    pub fn choose_year(&mut self, year: i32) -> Result<bool, CalendarError> {
        if !self.visible {
            return Ok(false);
        }
        self.year_items().index_of(year)?;
        self.navigator.set_year(year);
        self.close_picker();
        Ok(true)
    }

    /// Applies a zero-based month chosen in the month picker and closes it.
    ///
    /// Returns `Ok(false)` while hidden.
    pub fn choose_month(&mut self, month: u8) -> Result<bool, CalendarError> {
        if !self.visible {
            return Ok(false);
        }
        self.navigator.set_month(month)?;
        self.close_picker();
        Ok(true)
    }

    /// Returns true while a picker scroll is waiting to fire.
    pub fn is_scroll_pending(&self) -> bool {
        self.scheduler.is_pending()
    }
}

fn wrap<F>(on_scroll: F) -> ScrollCallback
where
    F: Fn(Dp) + Send + Sync + 'static,
{
    Arc::new(on_scroll)
}

#[cfg(test)]
mod tests {
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    use parking_lot::Mutex;

    use super::*;
    use crate::{date::YearMonth, selection::SelectionState, week_strip::WeekStrip};

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn today() -> CalendarDate {
        date(2026, 9, 16)
    }

    fn controller() -> DatePickerController {
        DatePickerController::new(CalendarConfig::default(), today())
    }

    #[test]
    fn opens_on_today_without_selection() {
        let mut picker = controller();
        picker.open(None);
        assert!(picker.is_visible());
        assert_eq!(picker.viewport(), YearMonth::new(2026, 9).unwrap());
        assert_eq!(picker.header_label(), "October 2026");
        let cells = picker.cells().unwrap();
        let today_cells: Vec<_> = cells
            .iter()
            .filter(|c| c.highlight == CellHighlight::Today)
            .collect();
        assert_eq!(today_cells.len(), 1);
        assert_eq!(today_cells[0].cell.date, today());
    }

    #[test]
    fn selected_today_renders_as_selected() {
        let mut picker = controller();
        picker.open(Some(today()));
        let cells = picker.cells().unwrap();
        let cell = cells.iter().find(|c| c.cell.date == today()).unwrap();
        assert_eq!(cell.highlight, CellHighlight::Selected);
        assert!(cells.iter().all(|c| c.highlight != CellHighlight::Today));
    }

    #[test]
    fn tap_reports_once_and_closes() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(None));
        let (calls_in, seen_in) = (calls.clone(), seen.clone());
        let mut picker = controller().on_date_select(move |date| {
            calls_in.fetch_add(1, Ordering::SeqCst);
            *seen_in.lock() = Some(date);
        });
        picker.open(None);
        let tapped = date(2026, 10, 2);
        assert!(picker.tap(tapped));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*seen.lock(), Some(tapped));
        assert!(!picker.is_visible());

        // A second tap on the closed calendar is ignored.
        assert!(!picker.tap(tapped));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn selection_round_trips_through_reopen() {
        let picked = Arc::new(Mutex::new(None));
        let sink = picked.clone();
        let mut picker = controller().on_date_select(move |date| *sink.lock() = Some(date));
        picker.open(None);
        picker.next_month();
        picker.next_month();
        let grid = picker.grid().unwrap();
        let target = grid
            .iter()
            .find(|c| c.belongs_to_viewport_month && c.day_number == 24)
            .copied()
            .unwrap();
        picker.tap(target.date);

        let selected = picked.lock().unwrap();
        picker.open(Some(selected));
        assert_eq!(picker.viewport(), target.date.year_month());
        let cells = picker.cells().unwrap();
        let cell = cells.iter().find(|c| c.cell.date == target.date).unwrap();
        assert_eq!(cell.highlight, CellHighlight::Selected);
    }

    #[test]
    fn hidden_controller_ignores_input() {
        let mut picker = controller();
        assert!(!picker.next_month());
        assert!(!picker.previous_month());
        assert!(!picker.tap(today()));
        assert!(!picker.choose_month(3).unwrap());
        assert!(!picker.open_year_picker(|_| {}).unwrap());
        assert_eq!(picker.viewport(), YearMonth::new(2026, 9).unwrap());
        assert_eq!(picker.selected_date(), None);
    }

    #[test]
    fn navigation_rolls_over_years() {
        let mut picker = controller();
        picker.open(Some(date(2024, 11, 5)));
        picker.next_month();
        assert_eq!(picker.viewport(), YearMonth::new(2025, 0).unwrap());
        picker.previous_month();
        picker.previous_month();
        assert_eq!(picker.viewport(), YearMonth::new(2024, 10).unwrap());
    }

    #[test]
    fn choose_year_is_limited_to_the_picker_list() {
        let mut picker = controller();
        picker.open(None);
        assert!(picker.choose_year(1990).unwrap());
        assert_eq!(picker.viewport(), YearMonth::new(1990, 9).unwrap());
        assert!(matches!(
            picker.choose_year(1800),
            Err(CalendarError::MissingPickerTarget { value: 1800 })
        ));
        assert!(picker.choose_month(1).unwrap());
        assert_eq!(picker.viewport(), YearMonth::new(1990, 1).unwrap());
        assert!(picker.choose_month(12).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn year_picker_scrolls_to_displayed_year() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let sink = offsets.clone();
        let mut picker = controller();
        picker.open(None);
        assert!(
            picker
                .open_year_picker(move |offset| sink.lock().push(offset))
                .unwrap()
        );
        assert_eq!(picker.open_picker(), Some(PickerKind::Year));
        assert!(picker.is_scroll_pending());

        tokio::time::sleep(Duration::from_millis(300)).await;
        // 2026 is entry 100: row 25 of 32dp rows, minus the 80dp lead-in.
        assert_eq!(*offsets.lock(), vec![Dp(720.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn closing_picker_before_scroll_cancels_it() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let sink = offsets.clone();
        let mut picker = controller();
        picker.open(None);
        picker
            .open_month_picker(move |offset| sink.lock().push(offset))
            .unwrap();
        picker.close_picker();
        assert_eq!(picker.open_picker(), None);
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(offsets.lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn month_picker_scrolls_to_displayed_month() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let sink = offsets.clone();
        let mut picker = controller();
        picker.open(None);
        picker
            .open_month_picker(move |offset| sink.lock().push(offset))
            .unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        // October is entry 9: row 3 of 48dp rows.
        assert_eq!(*offsets.lock(), vec![Dp(144.0)]);
    }

    #[tokio::test(start_paused = true)]
    async fn reopening_cancels_an_open_picker() {
        let offsets = Arc::new(Mutex::new(Vec::new()));
        let sink = offsets.clone();
        let mut picker = controller();
        picker.open(None);
        assert!(
            picker
                .open_year_picker(move |offset| sink.lock().push(offset))
                .unwrap()
        );
        picker.open(Some(date(2024, 1, 29)));
        assert_eq!(picker.open_picker(), None);
        assert!(!picker.is_scroll_pending());
        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(offsets.lock().is_empty());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn engine_events_carry_no_dates() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();

        let leap_day = date(2024, 1, 29);
        tracing::subscriber::with_default(subscriber, || {
            let mut picker = controller();
            picker.open(Some(leap_day));
            picker.cells().unwrap();
            picker.next_month();
            picker.previous_month();
            picker.choose_month(1).unwrap();
            picker.choose_year(2024).unwrap();
            picker.choose_year(1800).unwrap_err();
            picker.tap(leap_day);

            let mut selection = SelectionState::default();
            selection.select(leap_day);

            let mut strip = WeekStrip::containing(leap_day);
            strip.next_week();
            strip.previous_week();
        });

        let output = String::from_utf8(log.0.lock().clone()).unwrap();
        assert!(output.contains("date selected"));
        assert!(output.contains("calendar opened"));
        for needle in ["2024-02-29", "2024-02", "2024-03", "2026-10-16", "2024", "1800"] {
            assert!(!output.contains(needle), "log leaked {needle}: {output}");
        }
    }
}
