// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Structural rules of each supported calendar system.
//!
//! [`CalendarSystem`] is a closed set: one variant per calendar, each owning
//! its leap-year predicate and its constant month/weekday tables.
//!
//! | Variant | Leap rule | Month names |
//! |---------|-----------|-------------|
//! | [`CalendarSystem::Julian`] | `y % 4 == 0` | Roman lettering |
//! | [`CalendarSystem::Gregorian`] | `y % 4 == 0 && (y % 100 != 0 \|\| y % 400 == 0)` | English |

use crate::error::{CalendarError, CalendarResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Month names kept in traditional Roman lettering.
const JULIAN_MONTH_NAMES: [&str; 12] = [
    "IANVARIVS",
    "FEBRVARIVS",
    "MARTIVS",
    "APRILLIS",
    "MAIVS",
    "IVNIVS",
    "IVLIVS",
    "AVGVSTVS",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

const JULIAN_WEEKDAY_NAMES: [&str; 7] = [
    "DIES SOLIS",
    "DIES LVNAE",
    "DIES MARTIS",
    "DIES MERCVRII",
    "DIES IOVIS",
    "DIES VENERIS",
    "DIES SATVRNI",
];

const GREGORIAN_MONTH_NAMES: [&str; 12] = [
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

const GREGORIAN_WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// A supported calendar system.
///
/// All methods are pure functions of their arguments; the variants carry no
/// state and may be shared freely across threads.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalendarSystem {
    /// The proleptic Julian calendar.
    Julian,
    /// The proleptic Gregorian calendar.
    Gregorian,
}

impl CalendarSystem {
    /// Human-readable calendar name.
    pub const fn name(self) -> &'static str {
        match self {
            CalendarSystem::Julian => "Julian Calendar",
            CalendarSystem::Gregorian => "Gregorian Calendar",
        }
    }

    /// Length of the week in days.
    #[inline]
    pub const fn days_in_week(self) -> u8 {
        match self {
            CalendarSystem::Julian | CalendarSystem::Gregorian => 7,
        }
    }

    /// Number of months in a year.
    #[inline]
    pub const fn months_in_year(self) -> u8 {
        match self {
            CalendarSystem::Julian | CalendarSystem::Gregorian => 12,
        }
    }

    /// Whether `year` is a leap year.
    ///
    /// The Julian rule has no century exception, so years like 100 and 1900
    /// are leap years there but not in the Gregorian calendar.
    pub const fn is_leap_year(self, year: i32) -> bool {
        match self {
            CalendarSystem::Julian => year % 4 == 0,
            CalendarSystem::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
        }
    }

    /// Number of days in `month` of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside
    /// `1..=months_in_year`.
    pub fn days_in_month(self, month: u8, year: i32) -> CalendarResult<u8> {
        self.check_month(month)?;
        Ok(self.month_length(month, year))
    }

    /// Number of days in `year` (365 or 366).
    pub const fn days_in_year(self, year: i32) -> u16 {
        if self.is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// Month lengths of `year`, January first.
    pub fn days_per_month_in_year(self, year: i32) -> Vec<u8> {
        (1..=self.months_in_year())
            .map(|month| self.month_length(month, year))
            .collect()
    }

    /// Name of `month` (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is outside
    /// `1..=months_in_year`.
    pub fn month_name(self, month: u8) -> CalendarResult<&'static str> {
        self.check_month(month)?;
        Ok(self.month_names()[usize::from(month - 1)])
    }

    /// All month names, January first.
    pub const fn month_names(self) -> &'static [&'static str] {
        match self {
            CalendarSystem::Julian => &JULIAN_MONTH_NAMES,
            CalendarSystem::Gregorian => &GREGORIAN_MONTH_NAMES,
        }
    }

    /// Name of the weekday numbered `weekday` (0 is the first day of the week).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`] if `weekday` is not below
    /// [`days_in_week`](Self::days_in_week).
    pub fn weekday_name(self, weekday: u8) -> CalendarResult<&'static str> {
        self.weekday_names()
            .get(usize::from(weekday))
            .copied()
            .ok_or_else(|| {
                CalendarError::invalid_argument(format!(
                    "weekday {weekday} outside 0..{}",
                    self.days_in_week()
                ))
            })
    }

    /// All weekday names, starting with the first day of the week.
    pub const fn weekday_names(self) -> &'static [&'static str] {
        match self {
            CalendarSystem::Julian => &JULIAN_WEEKDAY_NAMES,
            CalendarSystem::Gregorian => &GREGORIAN_WEEKDAY_NAMES,
        }
    }

    /// Checks that `(year, month, day)` names a real day in this calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] otherwise.
    pub fn validate(self, year: i32, month: u8, day: u8) -> CalendarResult<()> {
        let invalid = || CalendarError::InvalidDate {
            calendar: self,
            year,
            month,
            day,
        };
        let max_day = self.days_in_month(month, year).map_err(|_| invalid())?;
        if day == 0 || day > max_day {
            debug!("rejecting {year}-{month}-{day}: month has {max_day} days");
            return Err(invalid());
        }
        Ok(())
    }

    /// Month length for an already range-checked `month`.
    pub(crate) const fn month_length(self, month: u8, year: i32) -> u8 {
        match month {
            4 | 6 | 9 | 11 => 30,
            2 if self.is_leap_year(year) => 29,
            2 => 28,
            _ => 31,
        }
    }

    fn check_month(self, month: u8) -> CalendarResult<()> {
        if month == 0 || month > self.months_in_year() {
            return Err(CalendarError::InvalidMonth {
                month,
                months_in_year: self.months_in_year(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
