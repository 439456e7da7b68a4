use std::time::Duration;

use medcal_calendar::{
    CalendarCell, CalendarConfig, CalendarDate, CellHighlight, DatePickerController, DayMarkers,
    Weekday, annotate, labels::weekday_labels,
};
use smallvec::{SmallVec, smallvec};
use tracing::info;

fn render(picker: &DatePickerController) -> Result<(), Box<dyn std::error::Error>> {
    println!("{:^34}", picker.header_label());
    println!(" {}", weekday_labels(Weekday::Monday).join("  "));

    // Pretend every Monday carries a dose.
    let doses = |date: CalendarDate| -> DayMarkers<char> {
        if date.weekday() == Weekday::Monday {
            smallvec!['*']
        } else {
            SmallVec::new()
        }
    };
    let markers = annotate(&picker.grid()?, &doses);

    let cells = picker.cells()?;
    for (row, marker_row) in cells.chunks(7).zip(markers.chunks(7)) {
        let line: Vec<String> = row
            .iter()
            .zip(marker_row)
            .map(|(cell, (_, marks))| format_cell(cell, marks.first().copied()))
            .collect();
        println!("{}", line.join(""));
    }
    Ok(())
}

fn format_cell(cell: &CalendarCell, mark: Option<char>) -> String {
    let day = cell.cell.day_number;
    let mark = mark.unwrap_or(' ');
    match (cell.highlight, cell.cell.belongs_to_viewport_month) {
        (CellHighlight::Selected, _) => format!("[{day:>2}]{mark}"),
        (CellHighlight::Today, _) => format!("({day:>2}){mark}"),
        (CellHighlight::None, true) => format!(" {day:>2} {mark}"),
        (CellHighlight::None, false) => format!("  . {mark}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("off,medcal_calendar=info"))?;
    tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let config = CalendarConfig::default();
    let delay = config.scroll_delay;
    let today = CalendarDate::today();
    let mut picker = DatePickerController::new(config, today)
        .on_date_select(|date| info!(%date, "date selected"));

    picker.open(None);
    render(&picker)?;

    picker.next_month();
    println!();
    render(&picker)?;

    picker.open_year_picker(|offset| println!("\nyear picker scrolled to {:.0}dp", offset.0))?;
    std::thread::sleep(delay + Duration::from_millis(200));
    picker.close_picker();

    let pick = picker.viewport().to_date(15)?;
    picker.tap(pick);
    picker.open(picker.selected_date());
    println!();
    render(&picker)?;
    Ok(())
}
