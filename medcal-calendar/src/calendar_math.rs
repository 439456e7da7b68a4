//! Pure Gregorian calendar arithmetic.
//!
//! Public functions validate their inputs and fail with
//! [`CalendarError::InvalidDateComponent`]; nothing here clamps.

use std::ops::RangeInclusive;

use crate::{
    date::{CalendarDate, Weekday},
    error::{CalendarError, DateComponent},
};

/// Years the engine accepts in validated calls.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Number of months in a year.
pub const MONTHS_PER_YEAR: u8 = 12;

/// Returns true for Gregorian leap years.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Number of days in the zero-based `month` of `year`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    validate_year(year)?;
    validate_month(month)?;
    Ok(days_in_month_unchecked(year, month))
}

/// How many grid columns precede day 1 of the month when the week starts on
/// `week_start`.
pub fn first_weekday_offset(year: i32, month: u8, week_start: Weekday) -> Result<u8, CalendarError> {
    validate_year(year)?;
    validate_month(month)?;
    Ok(first_weekday_offset_unchecked(year, month, week_start))
}

/// Structural equality on year, month and day.
pub fn same_date(a: CalendarDate, b: CalendarDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Returns true when the two dates are exactly one day apart, in either order.
pub fn are_adjacent(a: CalendarDate, b: CalendarDate) -> bool {
    (a.day_number() - b.day_number()).abs() == 1
}

pub(crate) fn validate_year(year: i32) -> Result<(), CalendarError> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(CalendarError::invalid(DateComponent::Year, year))
    }
}

pub(crate) fn validate_month(month: u8) -> Result<(), CalendarError> {
    if month < MONTHS_PER_YEAR {
        Ok(())
    } else {
        Err(CalendarError::invalid(DateComponent::Month, month))
    }
}

pub(crate) fn days_in_month_unchecked(year: i32, month: u8) -> u8 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 if is_leap_year(year) => 29,
        _ => 28,
    }
}

pub(crate) fn first_weekday_offset_unchecked(year: i32, month: u8, week_start: Weekday) -> u8 {
    let native = CalendarDate::new_unchecked(year, month, 1)
        .weekday()
        .index_from_sunday();
    (native + 7 - week_start.index_from_sunday()) % 7
}

/// Days since 1970-01-01 for a proleptic Gregorian date with a zero-based month.
pub(crate) fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let m = month as i64 + 1;
    let d = day as i64;
    let y = year as i64 - if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
pub(crate) fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, (month - 1) as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn february_follows_leap_rules() {
        assert_eq!(days_in_month(2024, 1).unwrap(), 29);
        assert_eq!(days_in_month(2023, 1).unwrap(), 28);
        assert_eq!(days_in_month(2000, 1).unwrap(), 29);
        assert_eq!(days_in_month(1900, 1).unwrap(), 28);
    }

    #[test]
    fn month_lengths_sum_to_year_length() {
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            let total: u32 = (0..12)
                .map(|month| days_in_month(year, month).unwrap() as u32)
                .sum();
            let expected = if is_leap_year(year) { 366 } else { 365 };
            assert_eq!(total, expected, "year {year}");
        }
    }

    #[test]
    fn out_of_range_components_fail_fast() {
        assert!(matches!(
            days_in_month(2024, 12),
            Err(CalendarError::InvalidDateComponent {
                component: DateComponent::Month,
                value: 12
            })
        ));
        assert!(matches!(
            first_weekday_offset(0, 0, Weekday::Monday),
            Err(CalendarError::InvalidDateComponent {
                component: DateComponent::Year,
                ..
            })
        ));
        assert!(days_in_month(10_000, 0).is_err());
    }

    #[test]
    fn monday_start_offsets() {
        // 2024-01-01 is a Monday, 2024-09-01 a Sunday, 2023-02-01 a Wednesday.
        assert_eq!(first_weekday_offset(2024, 0, Weekday::Monday).unwrap(), 0);
        assert_eq!(first_weekday_offset(2024, 8, Weekday::Monday).unwrap(), 6);
        assert_eq!(first_weekday_offset(2023, 1, Weekday::Monday).unwrap(), 2);
    }

    #[test]
    fn monday_offset_is_remapped_sunday_index() {
        for year in 1990..=2030 {
            for month in 0..12 {
                let native = CalendarDate::new(year, month, 1)
                    .unwrap()
                    .weekday()
                    .index_from_sunday();
                assert_eq!(
                    first_weekday_offset(year, month, Weekday::Monday).unwrap(),
                    (native + 6) % 7
                );
                assert_eq!(
                    first_weekday_offset(year, month, Weekday::Sunday).unwrap(),
                    native
                );
            }
        }
    }

    #[test]
    fn civil_conversion_round_trips() {
        assert_eq!(days_from_civil(1970, 0, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 0, 1));
        assert_eq!(civil_from_days(days_from_civil(2000, 1, 29)), (2000, 1, 29));
        assert_eq!(civil_from_days(-1), (1969, 11, 31));
    }

    #[test]
    fn equality_and_adjacency() {
        let a = CalendarDate::new(2024, 11, 31).unwrap();
        let b = CalendarDate::new(2025, 0, 1).unwrap();
        assert!(same_date(a, a));
        assert!(!same_date(a, b));
        assert!(are_adjacent(a, b));
        assert!(are_adjacent(b, a));
        assert!(!are_adjacent(a, a));
        assert!(!are_adjacent(a, b.succ()));
    }
}
