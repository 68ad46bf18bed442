// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-parameterised date.
//!
//! [`Date<C>`] is the core value type of the crate.  It stores a
//! `(year, month, day)` triple whose *meaning* is fixed by the compile-time
//! marker `C: Calendar`.  Stepping, comparison, weekday lookup and
//! conversion are implemented once, generically.
//!
//! A date is also a small mutable cursor: [`next_day`](Date::next_day),
//! [`prev_day`](Date::prev_day), [`add_days`](Date::add_days) and
//! [`subtract_days`](Date::subtract_days) move it in place and always leave
//! a valid date behind.

use chrono::{Datelike, NaiveDate, Utc};
use qtty::Days;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Sub;

use crate::calendar::{Calendar, Gregorian};
use crate::chronology::{dates_are_chronological, dates_are_reverse_chronological, DayInstant};
use crate::converter;
use crate::error::{CalendarError, CalendarResult};
use crate::julian_day::JulianDay;
use crate::rules::CalendarSystem;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// A day in calendar `C`.
///
/// Invariant: `1 <= month <= C::months_in_year()` and
/// `1 <= day <= C::days_in_month(month, year)`.  Years are proleptic and may
/// be zero or negative.
///
/// # Examples
///
/// ```
/// use almanac::{Date, Julian};
///
/// let mut date = Date::<Julian>::new(4, 2, 28).unwrap();
/// date.next_day().unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (4, 2, 29));
/// date.next_day().unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (4, 3, 1));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Date<C: Calendar> {
    year: i32,
    month: u8,
    day: u8,
    _calendar: PhantomData<C>,
}

impl<C: Calendar> Date<C> {
    // ── constructors ──────────────────────────────────────────────────

    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`](crate::CalendarError::InvalidDate)
    /// if the triple names no real day in `C`.
    pub fn new(year: i32, month: u8, day: u8) -> CalendarResult<Self> {
        C::SYSTEM.validate(year, month, day)?;
        Ok(Self::from_parts_unchecked(year, month, day))
    }

    /// Builds a date from a triple the caller has already validated.
    #[inline]
    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            _calendar: PhantomData,
        }
    }

    /// The date in `C` of the civil day containing `jd`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`](crate::CalendarError::InvalidArgument)
    /// if `jd` is not finite or lies beyond the `i32` year range.
    #[inline]
    pub fn from_julian_day(jd: JulianDay) -> CalendarResult<Self> {
        converter::to_date::<C>(jd)
    }

    /// The same day expressed in `C`, whatever calendar `other` uses.
    #[inline]
    pub fn from_date<T: Calendar>(other: Date<T>) -> CalendarResult<Self> {
        other.to::<C>()
    }

    /// Builds a date from a chrono [`NaiveDate`], read as a proleptic
    /// Gregorian date.
    pub fn from_naive_date(date: NaiveDate) -> CalendarResult<Self> {
        let gregorian = Date::<Gregorian>::new(date.year(), date.month() as u8, date.day() as u8)?;
        gregorian.to::<C>()
    }

    /// Today's date (UTC) from the host clock.
    pub fn today() -> CalendarResult<Self> {
        Self::from_naive_date(Utc::now().date_naive())
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The (proleptic) year.
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month, 1-based.
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month, 1-based.
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The calendar system tag of `C`.
    #[inline]
    pub const fn calendar_system(&self) -> CalendarSystem {
        C::SYSTEM
    }

    /// Whether this date's year is a leap year.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        C::is_leap_year(self.year)
    }

    /// Number of days in this date's month.
    #[inline]
    pub fn days_in_month(&self) -> u8 {
        C::SYSTEM.month_length(self.month, self.year)
    }

    /// Month lengths of this date's year, January first.
    #[inline]
    pub fn days_per_month_in_year(&self) -> Vec<u8> {
        C::SYSTEM.days_per_month_in_year(self.year)
    }

    /// Name of this date's month.
    #[inline]
    pub fn month_name(&self) -> &'static str {
        C::SYSTEM.month_names()[usize::from(self.month - 1)]
    }

    /// Weekday number: 0 for the first day of the week (Sunday) through
    /// `days_in_week − 1`.
    ///
    /// Computed as `⌊jd + 1.5⌋ mod days_in_week`, the `1.5` undoing the
    /// noon-aligned epoch.
    pub fn weekday_number(&self) -> u8 {
        let jd = self.julian_day().value();
        // The remainder is below days_in_week, which fits in a u8.
        ((jd + 1.5).floor() as i64).rem_euclid(i64::from(C::days_in_week())) as u8
    }

    /// Name of this date's weekday.
    #[inline]
    pub fn weekday_name(&self) -> &'static str {
        C::SYSTEM.weekday_names()[usize::from(self.weekday_number())]
    }

    // ── conversion ────────────────────────────────────────────────────

    /// Julian Day of the midnight opening this date.
    #[inline]
    pub fn julian_day(&self) -> JulianDay {
        converter::to_julian_day(self)
    }

    /// Convert this date to another calendar.
    ///
    /// The conversion routes through the canonical Julian Day:
    ///
    /// ```text
    /// self → JulianDay → target
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`](crate::CalendarError::InvalidArgument)
    /// if the target year does not fit in an `i32`.
    #[inline]
    pub fn to<T: Calendar>(&self) -> CalendarResult<Date<T>> {
        converter::convert::<C, T>(self)
    }

    /// The same day as a chrono [`NaiveDate`] (proleptic Gregorian).
    ///
    /// Returns `None` if the date falls outside chrono's representable range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let gregorian = self.to::<Gregorian>().ok()?;
        NaiveDate::from_ymd_opt(
            gregorian.year(),
            u32::from(gregorian.month()),
            u32::from(gregorian.day()),
        )
    }

    // ── stepping ──────────────────────────────────────────────────────

    /// Moves to the following day, rolling over month and year ends.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`] when rolling over the last
    /// day of year `i32::MAX`; the date is left unchanged.
    pub fn next_day(&mut self) -> CalendarResult<()> {
        if self.day < self.days_in_month() {
            self.day += 1;
            return Ok(());
        }
        if self.month < C::months_in_year() {
            self.month += 1;
        } else {
            self.year = self
                .year
                .checked_add(1)
                .ok_or_else(|| out_of_range(self.year))?;
            self.month = 1;
        }
        self.day = 1;
        Ok(())
    }

    /// Moves to the preceding day, rolling back over month and year starts.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`] when rolling back over the
    /// first day of year `i32::MIN`; the date is left unchanged.
    pub fn prev_day(&mut self) -> CalendarResult<()> {
        if self.day > 1 {
            self.day -= 1;
            return Ok(());
        }
        if self.month > 1 {
            self.month -= 1;
        } else {
            self.year = self
                .year
                .checked_sub(1)
                .ok_or_else(|| out_of_range(self.year))?;
            self.month = C::months_in_year();
        }
        self.day = self.days_in_month();
        Ok(())
    }

    /// Moves `n` days forward.
    ///
    /// Same result as `n` calls to [`next_day`](Self::next_day), computed in
    /// constant time on the Julian Day axis.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`] if the result falls outside
    /// the `i32` year range; the date is left unchanged.
    pub fn add_days(&mut self, n: u32) -> CalendarResult<()> {
        let mut jd = self.julian_day();
        jd += Days::new(f64::from(n));
        *self = Self::from_julian_day(jd)?;
        Ok(())
    }

    /// Moves `n` days backward.
    ///
    /// Same result as `n` calls to [`prev_day`](Self::prev_day).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidArgument`] if the result falls outside
    /// the `i32` year range; the date is left unchanged.
    pub fn subtract_days(&mut self, n: u32) -> CalendarResult<()> {
        let mut jd = self.julian_day();
        jd -= Days::new(f64::from(n));
        *self = Self::from_julian_day(jd)?;
        Ok(())
    }

    // ── comparison ────────────────────────────────────────────────────

    /// Whether this date comes strictly before `other`, in any calendar.
    #[inline]
    pub fn is_before<T: DayInstant + ?Sized>(&self, other: &T) -> bool {
        self.julian_day() < other.julian_day()
    }

    /// Whether this date comes strictly after `other`, in any calendar.
    #[inline]
    pub fn is_after<T: DayInstant + ?Sized>(&self, other: &T) -> bool {
        self.julian_day() > other.julian_day()
    }

    /// Whether `dates` are in non-decreasing order.
    ///
    /// See [`dates_are_chronological`].
    #[inline]
    pub fn are_chronological(dates: &[Self]) -> CalendarResult<bool> {
        dates_are_chronological(dates)
    }

    /// Whether `dates` are in non-increasing order.
    ///
    /// See [`dates_are_reverse_chronological`].
    #[inline]
    pub fn are_reverse_chronological(dates: &[Self]) -> CalendarResult<bool> {
        dates_are_reverse_chronological(dates)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

fn out_of_range(year: i32) -> CalendarError {
    CalendarError::invalid_argument(format!(
        "stepping past year {year} leaves the supported year range"
    ))
}

impl<C: Calendar> DayInstant for Date<C> {
    #[inline]
    fn julian_day(&self) -> JulianDay {
        converter::to_julian_day(self)
    }
}

impl<C: Calendar> PartialOrd for Date<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Calendar> Ord for Date<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

/// Signed distance in whole days.
impl<C: Calendar> Sub for Date<C> {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.julian_day() - rhs.julian_day()
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<C: Calendar> fmt::Display for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}, {}",
            C::SYSTEM,
            self.month_name(),
            self.day,
            self.year
        )
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for Date<C> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut state = serializer.serialize_struct("Date", 3)?;
        state.serialize_field("year", &self.year)?;
        state.serialize_field("month", &self.month)?;
        state.serialize_field("day", &self.day)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Calendar> Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            year: i32,
            month: u8,
            day: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.year, raw.month, raw.day).map_err(serde::de::Error::custom)
    }
}
