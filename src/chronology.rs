// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chronological-order checks over anything that sits on the Julian Day axis.
//!
//! Ordering is always decided by Julian Day, never by `(year, month, day)`
//! fields, so dates from different calendars compare correctly.  Mixed
//! sequences can be checked through trait objects:
//!
//! ```
//! use almanac::{dates_are_chronological, Date, DayInstant, Gregorian, Julian};
//!
//! let julian = Date::<Julian>::new(1582, 10, 4).unwrap();
//! let gregorian = Date::<Gregorian>::new(1582, 10, 15).unwrap();
//! let dates: [&dyn DayInstant; 2] = [&julian, &gregorian];
//! assert!(dates_are_chronological(&dates).unwrap());
//! ```

use crate::error::{CalendarError, CalendarResult};
use crate::julian_day::JulianDay;

/// Trait for values that denote a point on the Julian Day timeline.
pub trait DayInstant {
    /// The Julian Day of this value.
    fn julian_day(&self) -> JulianDay;
}

impl DayInstant for JulianDay {
    #[inline]
    fn julian_day(&self) -> JulianDay {
        *self
    }
}

impl<T: DayInstant + ?Sized> DayInstant for &T {
    #[inline]
    fn julian_day(&self) -> JulianDay {
        (**self).julian_day()
    }
}

/// Whether `dates` are in non-decreasing Julian Day order.
///
/// Equal consecutive values are accepted; a single date is trivially
/// chronological.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidArgument`] if `dates` is empty.
pub fn dates_are_chronological<T: DayInstant>(dates: &[T]) -> CalendarResult<bool> {
    is_ordered(dates, |previous, next| next >= previous)
}

/// Whether `dates` are in non-increasing Julian Day order.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidArgument`] if `dates` is empty.
pub fn dates_are_reverse_chronological<T: DayInstant>(dates: &[T]) -> CalendarResult<bool> {
    is_ordered(dates, |previous, next| next <= previous)
}

fn is_ordered<T: DayInstant>(
    dates: &[T],
    in_order: impl Fn(JulianDay, JulianDay) -> bool,
) -> CalendarResult<bool> {
    let Some((first, rest)) = dates.split_first() else {
        return Err(CalendarError::invalid_argument(
            "cannot check the order of an empty list of dates",
        ));
    };
    let mut previous = first.julian_day();
    for date in rest {
        let next = date.julian_day();
        if !in_order(previous, next) {
            return Ok(false);
        }
        previous = next;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Gregorian, Julian};
    use crate::date::Date;

    #[test]
    fn non_strict_ordering() {
        let a = Date::<Julian>::new(1, 1, 1).unwrap();
        let b = Date::<Julian>::new(1, 1, 2).unwrap();
        let c = Date::<Julian>::new(1, 1, 1).unwrap();
        assert_eq!(dates_are_chronological(&[a, b]), Ok(true));
        assert_eq!(dates_are_chronological(&[b, a]), Ok(false));
        assert_eq!(dates_are_chronological(&[a, c]), Ok(true));
        assert_eq!(dates_are_reverse_chronological(&[b, a]), Ok(true));
        assert_eq!(dates_are_reverse_chronological(&[a, b]), Ok(false));
        assert_eq!(dates_are_reverse_chronological(&[a, c]), Ok(true));
    }

    #[test]
    fn stops_at_first_out_of_order_pair() {
        let days: Vec<JulianDay> = [1.0, 2.0, 2.0, 1.5, 3.0]
            .into_iter()
            .map(JulianDay::new)
            .collect();
        assert_eq!(dates_are_chronological(&days[..3]), Ok(true));
        assert_eq!(dates_are_chronological(&days), Ok(false));
    }

    #[test]
    fn single_date_is_trivially_ordered() {
        let only = [JulianDay::J2000];
        assert_eq!(dates_are_chronological(&only), Ok(true));
        assert_eq!(dates_are_reverse_chronological(&only), Ok(true));
    }

    #[test]
    fn empty_list_is_rejected() {
        let empty: [JulianDay; 0] = [];
        assert!(matches!(
            dates_are_chronological(&empty),
            Err(CalendarError::InvalidArgument { .. })
        ));
        assert!(matches!(
            dates_are_reverse_chronological(&empty),
            Err(CalendarError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn mixed_calendars_compare_by_julian_day() {
        // Field-wise these look reversed; on the timeline they are not.
        let julian = Date::<Julian>::new(1582, 10, 10).unwrap();
        let gregorian = Date::<Gregorian>::new(1582, 10, 5).unwrap();
        let dates: [&dyn DayInstant; 2] = [&gregorian, &julian];
        assert_eq!(dates_are_chronological(&dates), Ok(true));
        assert_eq!(dates_are_reverse_chronological(&dates), Ok(false));
    }
}
