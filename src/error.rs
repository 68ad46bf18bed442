// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the almanac crate.

use crate::rules::CalendarSystem;

/// Result alias used by every fallible operation in this crate.
pub type CalendarResult<T> = Result<T, CalendarError>;

/// Error type for all fallible operations in the almanac crate.
///
/// Every variant is a local, synchronous failure: inputs are never clamped
/// or normalized, the operation simply refuses to proceed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// A structural parameter is outside its domain (e.g. an empty list
    /// handed to a chronological-order check, or a non-finite Julian Day).
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the problem.
        reason: String,
    },

    /// A month number is outside `1..=months_in_year`.
    ///
    /// This is the invalid-argument failure of the per-month lookups
    /// (`days_in_month`, `month_name`); it gets its own variant so the
    /// offending month travels with it.  Callers treating
    /// [`InvalidArgument`](Self::InvalidArgument) as "bad input" should
    /// match this variant too.
    #[error("invalid month: {month} (must be 1..={months_in_year})")]
    InvalidMonth {
        /// The month that was provided.
        month: u8,
        /// Number of months in the calendar's year.
        months_in_year: u8,
    },

    /// A `(year, month, day)` triple that names no real day in `calendar`.
    #[error("invalid date: {year}-{month:02}-{day:02} does not exist in the {calendar}")]
    InvalidDate {
        /// Calendar system the triple was checked against.
        calendar: CalendarSystem,
        /// The year that was provided.
        year: i32,
        /// The month that was provided.
        month: u8,
        /// The day that was provided.
        day: u8,
    },
}

impl CalendarError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        CalendarError::InvalidArgument {
            reason: reason.into(),
        }
    }
}
