//! Fixed English label table for months and weekdays.

use crate::date::{CalendarDate, Weekday, YearMonth};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full month name for a zero-based month; `None` out of range.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

/// Three-letter month name for a zero-based month; `None` out of range.
pub fn month_short_name(month: u8) -> Option<&'static str> {
    month_name(month).and_then(|name| name.get(..3))
}

/// Three-letter weekday label.
pub fn weekday_short_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

/// Column header labels for a week starting on `first_day_of_week`.
pub fn weekday_labels(first_day_of_week: Weekday) -> [&'static str; 7] {
    let start = first_day_of_week.index_from_monday() as i64;
    std::array::from_fn(|idx| weekday_short_label(Weekday::from_monday_index(start + idx as i64)))
}

/// "September 2024".
pub fn format_month_year(month: YearMonth) -> String {
    format!(
        "{} {}",
        month_name(month.month()).unwrap_or_default(),
        month.year()
    )
}

/// "Sep 20, 2024".
pub fn format_selected_date(date: CalendarDate) -> String {
    format!(
        "{} {}, {}",
        month_short_name(date.month()).unwrap_or_default(),
        date.day(),
        date.year()
    )
}
