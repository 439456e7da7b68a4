//! Error types shared by every calendar module.

use thiserror::Error;

/// Which part of a date a [`CalendarError::InvalidDateComponent`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComponent {
    /// The year.
    Year,
    /// The zero-based month index.
    Month,
    /// The day of the month.
    Day,
}

impl std::fmt::Display for DateComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DateComponent::Year => "year",
            DateComponent::Month => "month",
            DateComponent::Day => "day",
        };
        f.write_str(name)
    }
}

/// Errors raised by the calendar engine.
///
/// None of these are recoverable at runtime: they signal a caller passing
/// values the engine cannot represent.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A year, month or day outside its valid range.
    #[error("invalid {component}: {value}")]
    InvalidDateComponent {
        /// The offending component.
        component: DateComponent,
        /// The value that was rejected.
        value: i64,
    },
    /// A picker lookup for a value that is not part of its backing list.
    #[error("picker has no item for {value}")]
    MissingPickerTarget {
        /// The value that was looked up.
        value: i64,
    },
    /// The background runtime used for deferred picker scrolls failed to start.
    #[error("failed to start the picker scheduler: {0}")]
    SchedulerUnavailable(#[from] std::io::Error),
}

impl CalendarError {
    pub(crate) fn invalid(component: DateComponent, value: impl Into<i64>) -> Self {
        CalendarError::InvalidDateComponent {
            component,
            value: value.into(),
        }
    }
}
