// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar marker types.
//!
//! Each zero-sized type selects one [`CalendarSystem`] at compile time, so a
//! [`Date<Julian>`](crate::Date) and a [`Date<Gregorian>`](crate::Date) can
//! never be mixed up by field-wise comparison.
//!
//! | Marker | System |
//! |--------|--------|
//! | [`Julian`] | proleptic Julian calendar |
//! | [`Gregorian`] | proleptic Gregorian calendar |
//!
//! The trait is sealed: the set of calendars is closed, and every rule
//! lookup dispatches on [`Calendar::SYSTEM`].

use crate::error::CalendarResult;
use crate::rules::CalendarSystem;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Julian {}
    impl Sealed for super::Gregorian {}
}

/// Marker trait for calendar systems.
///
/// All provided methods forward to the [`CalendarSystem`] tag; implementors
/// only name their tag.
pub trait Calendar:
    sealed::Sealed + Copy + Clone + std::fmt::Debug + PartialEq + Eq + std::hash::Hash + 'static
{
    /// The rule set this marker stands for.
    const SYSTEM: CalendarSystem;

    /// Length of the week in days.
    #[inline]
    fn days_in_week() -> u8 {
        Self::SYSTEM.days_in_week()
    }

    /// Number of months in a year.
    #[inline]
    fn months_in_year() -> u8 {
        Self::SYSTEM.months_in_year()
    }

    /// Whether `year` is a leap year.
    #[inline]
    fn is_leap_year(year: i32) -> bool {
        Self::SYSTEM.is_leap_year(year)
    }

    /// Number of days in `month` of `year`.
    #[inline]
    fn days_in_month(month: u8, year: i32) -> CalendarResult<u8> {
        Self::SYSTEM.days_in_month(month, year)
    }

    /// Name of `month` (1-based).
    #[inline]
    fn month_name(month: u8) -> CalendarResult<&'static str> {
        Self::SYSTEM.month_name(month)
    }
}

/// The proleptic Julian calendar: every fourth year is a leap year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Julian;

impl Calendar for Julian {
    const SYSTEM: CalendarSystem = CalendarSystem::Julian;
}

/// The proleptic Gregorian calendar: century years are leap years only when
/// divisible by 400.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gregorian;

impl Calendar for Gregorian {
    const SYSTEM: CalendarSystem = CalendarSystem::Gregorian;
}

// ---------------------------------------------------------------------------
// Cross-calendar TryFrom  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `TryFrom<Date<A>> for Date<B>` implementations.
macro_rules! impl_date_conversions {
    // Base case: single calendar, nothing left.
    ($single:ty) => {};

    // Recursive: generate pairs between $first and every $rest, then recurse.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl TryFrom<crate::date::Date<$first>> for crate::date::Date<$rest> {
                type Error = crate::error::CalendarError;

                #[inline]
                fn try_from(date: crate::date::Date<$first>) -> Result<Self, Self::Error> {
                    date.to::<$rest>()
                }
            }

            impl TryFrom<crate::date::Date<$rest>> for crate::date::Date<$first> {
                type Error = crate::error::CalendarError;

                #[inline]
                fn try_from(date: crate::date::Date<$rest>) -> Result<Self, Self::Error> {
                    date.to::<$first>()
                }
            }
        )+

        impl_date_conversions!($($rest),+);
    };
}

impl_date_conversions!(Julian, Gregorian);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    #[test]
    fn markers_forward_to_their_system() {
        assert_eq!(Julian::SYSTEM, CalendarSystem::Julian);
        assert_eq!(Gregorian::SYSTEM, CalendarSystem::Gregorian);
        assert!(Julian::is_leap_year(1900));
        assert!(!Gregorian::is_leap_year(1900));
        assert_eq!(Julian::days_in_week(), 7);
        assert_eq!(Gregorian::months_in_year(), 12);
        assert_eq!(Julian::days_in_month(2, 100), Ok(29));
        assert_eq!(Gregorian::days_in_month(2, 100), Ok(28));
        assert_eq!(Gregorian::month_name(10), Ok("October"));
    }

    #[test]
    fn try_from_routes_through_julian_day() {
        let julian = Date::<Julian>::new(1582, 10, 5).unwrap();
        let gregorian: Date<Gregorian> = julian.try_into().unwrap();
        assert_eq!(gregorian, Date::<Gregorian>::new(1582, 10, 15).unwrap());

        let back = Date::<Julian>::try_from(gregorian).unwrap();
        assert_eq!(back, julian);
    }
}
