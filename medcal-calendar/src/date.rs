//! Calendar value types: [`CalendarDate`], [`YearMonth`] and [`Weekday`].
//!
//! Months are zero-based throughout (`0` is January, `11` is December).

use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::{
    calendar_math::{
        civil_from_days, days_from_civil, days_in_month_unchecked, validate_month, validate_year,
    },
    error::{CalendarError, DateComponent},
};

/// Days of the week in Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl Weekday {
    /// Position of this weekday in a Monday-first week (`0..=6`).
    pub fn index_from_monday(self) -> u8 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }

    /// Position of this weekday in a Sunday-first week (`0..=6`).
    pub fn index_from_sunday(self) -> u8 {
        (self.index_from_monday() + 1) % 7
    }

    /// Builds a weekday from a Monday-first index; wraps modulo 7.
    pub fn from_monday_index(index: i64) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Monday,
            1 => Weekday::Tuesday,
            2 => Weekday::Wednesday,
            3 => Weekday::Thursday,
            4 => Weekday::Friday,
            5 => Weekday::Saturday,
            _ => Weekday::Sunday,
        }
    }
}

/// An immutable Gregorian date.
///
/// The day is always valid for the year and month, leap-year February
/// included. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date, rejecting any component out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        validate_year(year)?;
        validate_month(month)?;
        let max_day = days_in_month_unchecked(year, month);
        if day == 0 || day > max_day {
            return Err(CalendarError::invalid(DateComponent::Day, day));
        }
        Ok(Self { year, month, day })
    }

    pub(crate) fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the zero-based month (0-11).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the weekday this date falls on.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday.
        Weekday::from_monday_index(self.day_number() + 3)
    }

    /// Returns the month this date belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth::new_unchecked(self.year, self.month)
    }

    /// Returns the date `days` days after this one (before, when negative).
    pub fn add_days(&self, days: i64) -> Self {
        let (year, month, day) = civil_from_days(self.day_number() + days);
        Self::new_unchecked(year, month, day)
    }

    /// Returns the following day.
    pub fn succ(&self) -> Self {
        self.add_days(1)
    }

    /// Returns the preceding day.
    pub fn pred(&self) -> Self {
        self.add_days(-1)
    }

    /// Days since 1970-01-01.
    pub fn day_number(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the current date in UTC.
    ///
    /// Only hosts call this; the engine always receives `today` explicitly.
    pub fn today() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let days = (duration.as_secs() / 86_400) as i64;
        let (year, month, day) = civil_from_days(days);
        Self::new_unchecked(year, month, day)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

/// A year and month pair used for month navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

/// The month currently displayed by a calendar.
pub type Viewport = YearMonth;

impl YearMonth {
    /// Creates a year/month pair. Only the month is validated; any year is
    /// accepted here.
    pub fn new(year: i32, month: u8) -> Result<Self, CalendarError> {
        validate_month(month)?;
        Ok(Self { year, month })
    }

    pub(crate) fn new_unchecked(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the zero-based month (0-11).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the date for this month at the provided day.
    pub fn to_date(&self, day: u8) -> Result<CalendarDate, CalendarError> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// Adds or subtracts months, adjusting the year as needed.
    ///
    /// Saturates at December of `i32::MAX` and January of `i32::MIN`.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = (self.year as i64 * 12 + self.month as i64 + delta as i64)
            .clamp(i32::MIN as i64 * 12, i32::MAX as i64 * 12 + 11);
        let year = total.div_euclid(12) as i32;
        let month = total.rem_euclid(12) as u8;
        Self { year, month }
    }

    /// The month before this one.
    pub fn previous(&self) -> Self {
        self.add_months(-1)
    }

    /// The month after this one.
    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    /// Returns true when `date` falls inside this month.
    pub fn contains(&self, date: CalendarDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn rejects_invalid_components() {
        assert!(CalendarDate::new(2024, 12, 1).is_err());
        assert!(CalendarDate::new(2024, 1, 30).is_err());
        assert!(CalendarDate::new(2023, 1, 29).is_err());
        assert!(CalendarDate::new(2024, 0, 0).is_err());
        assert!(CalendarDate::new(0, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 1, 29).is_ok());
    }

    #[test]
    fn weekday_matches_known_dates() {
        assert_eq!(date(1970, 0, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2024, 0, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2000, 1, 29).weekday(), Weekday::Tuesday);
        assert_eq!(date(1900, 0, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2026, 9, 16).weekday(), Weekday::Friday);
    }

    #[test]
    fn add_days_crosses_year_boundaries() {
        assert_eq!(date(2024, 11, 31).succ(), date(2025, 0, 1));
        assert_eq!(date(2025, 0, 1).pred(), date(2024, 11, 31));
        assert_eq!(date(2024, 1, 28).succ(), date(2024, 1, 29));
        assert_eq!(date(2023, 1, 28).succ(), date(2023, 2, 1));
        assert_eq!(date(2024, 0, 1).add_days(366), date(2025, 0, 1));
    }

    #[test]
    fn weekday_indices_round_trip() {
        for index in 0..7 {
            assert_eq!(Weekday::from_monday_index(index).index_from_monday() as i64, index);
        }
        assert_eq!(Weekday::Sunday.index_from_sunday(), 0);
        assert_eq!(Weekday::Monday.index_from_sunday(), 1);
    }

    #[test]
    fn year_month_rolls_over() {
        let december = YearMonth::new(2024, 11).unwrap();
        assert_eq!(december.next(), YearMonth::new(2025, 0).unwrap());
        let january = YearMonth::new(2024, 0).unwrap();
        assert_eq!(january.previous(), YearMonth::new(2023, 11).unwrap());
        assert_eq!(january.add_months(-25), YearMonth::new(2021, 11).unwrap());
        assert!(YearMonth::new(2024, 12).is_err());
    }

    #[test]
    fn year_month_saturates_at_i32_bounds() {
        let last = YearMonth::new(i32::MAX, 11).unwrap();
        assert_eq!(last.next(), last);
        assert_eq!(last.add_months(i32::MAX), last);
        assert_eq!(last.previous(), YearMonth::new(i32::MAX, 10).unwrap());

        let first = YearMonth::new(i32::MIN, 0).unwrap();
        assert_eq!(first.previous(), first);
        assert_eq!(first.add_months(i32::MIN), first);
        assert_eq!(first.next(), YearMonth::new(i32::MIN, 1).unwrap());
    }

    #[test]
    fn display_uses_one_based_month() {
        assert_eq!(date(2024, 0, 5).to_string(), "2024-01-05");
        assert_eq!(YearMonth::new(2024, 11).unwrap().to_string(), "2024-12");
    }
}
