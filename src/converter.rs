// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversions between calendar dates and the Julian Day timeline.
//!
//! This is the only place that knows the day-counting formulas.  Every
//! cross-calendar conversion routes through the canonical Julian Day:
//!
//! ```text
//! Date<A> → JulianDay → Date<B>
//! ```
//!
//! so adding a calendar costs one forward and one inverse formula, never a
//! formula per calendar pair.
//!
//! ## Day counting
//!
//! Both formulas count from a March-based year (`y = year + 4800 − a`,
//! `m = month + 12a − 3`, with `a = 1` for January and February), which puts
//! the leap day at the end of the counted year.  Floor division keeps them
//! exact for every `i32` year, including zero and negative (proleptic) years.
//!
//! The integral *day number* is noon-aligned; a calendar date maps to the
//! midnight that opens it, i.e. `day_number − 0.5`.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::error::{CalendarError, CalendarResult};
use crate::julian_day::JulianDay;
use crate::rules::CalendarSystem;

/// Days in a 4-year Julian leap cycle.
const DAYS_PER_4_YEARS: i64 = 365 * 4 + 1;
/// Days in a 100-year Gregorian cycle without its 400-year leap day.
const DAYS_PER_100_YEARS: i64 = DAYS_PER_4_YEARS * 25 - 1;
/// Days in the full 400-year Gregorian cycle.
const DAYS_PER_400_YEARS: i64 = DAYS_PER_100_YEARS * 4 + 1;

/// 1 March, year −4800, has day number `1 − SHIFT` in each calendar.
const JULIAN_SHIFT: i64 = 32_083;
const GREGORIAN_SHIFT: i64 = 32_045;

/// Noon-aligned day number of `(year, month, day)` in `system`.
///
/// The triple must already be valid for `system`.
pub(crate) fn day_number(system: CalendarSystem, year: i32, month: u8, day: u8) -> i64 {
    let a = i64::from(month <= 2);
    let y = i64::from(year) + 4800 - a;
    let m = i64::from(month) + 12 * a - 3;
    let base = i64::from(day) + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4);
    match system {
        CalendarSystem::Julian => base - JULIAN_SHIFT,
        CalendarSystem::Gregorian => base - y.div_euclid(100) + y.div_euclid(400) - GREGORIAN_SHIFT,
    }
}

/// Inverse of [`day_number`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidArgument`] if the recovered year does not
/// fit in an `i32`.
pub(crate) fn ymd_from_day_number(
    system: CalendarSystem,
    day_number: i64,
) -> CalendarResult<(i32, u8, u8)> {
    let out_of_range = |year: i64| {
        CalendarError::invalid_argument(format!(
            "day number {day_number} falls in year {year}, outside the supported range"
        ))
    };
    let shift = match system {
        CalendarSystem::Julian => JULIAN_SHIFT,
        CalendarSystem::Gregorian => GREGORIAN_SHIFT,
    };
    // Zero-based day count from 1 March −4800.
    let z = day_number
        .checked_add(shift - 1)
        .ok_or_else(|| out_of_range(day_number / 365))?;

    // March-based year and zero-based day within it.
    let (y, doy) = match system {
        CalendarSystem::Julian => {
            let cycle = z.div_euclid(DAYS_PER_4_YEARS);
            let doc = z.rem_euclid(DAYS_PER_4_YEARS);
            let yoc = (doc / 365).min(3);
            (cycle * 4 + yoc, doc - 365 * yoc)
        }
        CalendarSystem::Gregorian => {
            let era = z.div_euclid(DAYS_PER_400_YEARS);
            let doe = z.rem_euclid(DAYS_PER_400_YEARS);
            let yoe = (doe - doe / (DAYS_PER_4_YEARS - 1) + doe / DAYS_PER_100_YEARS
                - doe / (DAYS_PER_400_YEARS - 1))
                / 365;
            (era * 400 + yoe, doe - (365 * yoe + yoe / 4 - yoe / 100))
        }
    };

    let m = (5 * doy + 2) / 153;
    let day = doy - (153 * m + 2) / 5 + 1;
    let month = if m < 10 { m + 3 } else { m - 9 };
    let year = y - 4800 + i64::from(month <= 2);

    let year = i32::try_from(year).map_err(|_| out_of_range(year))?;
    // month ∈ 1..=12 and day ∈ 1..=31 by construction.
    Ok((year, month as u8, day as u8))
}

/// Julian Day of the midnight opening `date`.
pub fn to_julian_day<C: Calendar>(date: &Date<C>) -> JulianDay {
    let jd = JulianDay::from_day_number(day_number(
        C::SYSTEM,
        date.year(),
        date.month(),
        date.day(),
    ));
    trace!("{} {}-{}-{} -> {}", C::SYSTEM, date.year(), date.month(), date.day(), jd);
    jd
}

/// Julian Day of `(year, month, day)` in `system`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the triple names no real day;
/// nothing is normalized.
pub fn julian_day_of(
    system: CalendarSystem,
    year: i32,
    month: u8,
    day: u8,
) -> CalendarResult<JulianDay> {
    system.validate(year, month, day)?;
    Ok(JulianDay::from_day_number(day_number(system, year, month, day)))
}

/// Calendar date in `C` of the civil day containing `jd`.
///
/// Any instant from one midnight up to the next maps to the same date.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidArgument`] if `jd` is not finite or lies
/// beyond the `i32` year range.
pub fn to_date<C: Calendar>(jd: JulianDay) -> CalendarResult<Date<C>> {
    if !jd.is_finite() {
        debug!("refusing non-finite {}", jd);
        return Err(CalendarError::invalid_argument(format!(
            "{jd} is not a finite Julian Day"
        )));
    }
    let (year, month, day) = ymd_from_day_number(C::SYSTEM, jd.day_number())?;
    trace!("{} -> {} {}-{}-{}", jd, C::SYSTEM, year, month, day);
    Ok(Date::from_parts_unchecked(year, month, day))
}

/// Convert `date` into calendar `B` through its Julian Day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidArgument`] if the result's year does not
/// fit in an `i32`.
pub fn convert<A: Calendar, B: Calendar>(date: &Date<A>) -> CalendarResult<Date<B>> {
    to_date::<B>(to_julian_day(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Gregorian, Julian};

    #[test]
    fn known_day_numbers() {
        // Calendar reform: Julian 1582-10-05 is Gregorian 1582-10-15.
        assert_eq!(day_number(CalendarSystem::Julian, 1582, 10, 5), 2_299_161);
        assert_eq!(day_number(CalendarSystem::Gregorian, 1582, 10, 15), 2_299_161);
        assert_eq!(day_number(CalendarSystem::Gregorian, 2000, 1, 1), 2_451_545);
        assert_eq!(day_number(CalendarSystem::Gregorian, 1970, 1, 1), 2_440_588);
        // Epoch of the Julian Period.
        assert_eq!(day_number(CalendarSystem::Julian, -4712, 1, 1), 0);
        assert_eq!(day_number(CalendarSystem::Gregorian, -4713, 11, 24), 0);
    }

    #[test]
    fn inverse_of_known_day_numbers() {
        assert_eq!(
            ymd_from_day_number(CalendarSystem::Julian, 0),
            Ok((-4712, 1, 1))
        );
        assert_eq!(
            ymd_from_day_number(CalendarSystem::Gregorian, 0),
            Ok((-4713, 11, 24))
        );
        assert_eq!(
            ymd_from_day_number(CalendarSystem::Julian, 2_299_161),
            Ok((1582, 10, 5))
        );
        assert_eq!(
            ymd_from_day_number(CalendarSystem::Gregorian, 2_451_545),
            Ok((2000, 1, 1))
        );
    }

    #[test]
    fn day_numbers_are_contiguous_across_years() {
        for system in [CalendarSystem::Julian, CalendarSystem::Gregorian] {
            let mut expected = day_number(system, -10_001, 1, 1);
            for year in -10_001..=10_000 {
                for (i, &len) in system.days_per_month_in_year(year).iter().enumerate() {
                    let month = i as u8 + 1;
                    assert_eq!(day_number(system, year, month, 1), expected);
                    assert_eq!(
                        ymd_from_day_number(system, expected + i64::from(len) - 1),
                        Ok((year, month, len))
                    );
                    expected += i64::from(len);
                }
            }
        }
    }

    #[test]
    fn julian_day_is_midnight_aligned() {
        let date = Date::<Gregorian>::new(2000, 1, 1).unwrap();
        assert_eq!(to_julian_day(&date).value(), 2_451_544.5);
        let reform = Date::<Gregorian>::new(1582, 10, 15).unwrap();
        assert_eq!(to_julian_day(&reform), JulianDay::GREGORIAN_REFORM);
    }

    #[test]
    fn to_date_accepts_any_instant_within_the_day() {
        let expected = Date::<Gregorian>::new(2000, 1, 1).unwrap();
        for value in [2_451_544.5, 2_451_545.0, 2_451_545.499] {
            assert_eq!(to_date::<Gregorian>(JulianDay::new(value)), Ok(expected));
        }
        assert_eq!(
            to_date::<Gregorian>(JulianDay::new(2_451_545.5)),
            Date::new(2000, 1, 2)
        );
    }

    #[test]
    fn to_date_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                to_date::<Julian>(JulianDay::new(value)),
                Err(CalendarError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn to_date_rejects_years_beyond_i32() {
        assert!(matches!(
            to_date::<Julian>(JulianDay::new(1e15)),
            Err(CalendarError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn ymd_from_extreme_day_number_does_not_overflow() {
        assert!(ymd_from_day_number(CalendarSystem::Julian, i64::MAX).is_err());
        assert!(ymd_from_day_number(CalendarSystem::Gregorian, i64::MIN).is_err());
    }

    #[test]
    fn julian_day_of_validates_first() {
        assert_eq!(
            julian_day_of(CalendarSystem::Julian, 1, 2, 29),
            Err(CalendarError::InvalidDate {
                calendar: CalendarSystem::Julian,
                year: 1,
                month: 2,
                day: 29
            })
        );
        assert_eq!(
            julian_day_of(CalendarSystem::Julian, 4, 2, 29).map(|jd| jd.day_number()),
            Ok(day_number(CalendarSystem::Julian, 4, 2, 29))
        );
    }

    #[test]
    fn convert_between_calendars() {
        let julian = Date::<Julian>::new(1582, 10, 4).unwrap();
        let gregorian = convert::<Julian, Gregorian>(&julian).unwrap();
        assert_eq!(gregorian, Date::new(1582, 10, 14).unwrap());

        // Julian and Gregorian agree through the third century.
        let julian = Date::<Julian>::new(250, 3, 1).unwrap();
        let gregorian = convert::<Julian, Gregorian>(&julian).unwrap();
        assert_eq!(
            (gregorian.year(), gregorian.month(), gregorian.day()),
            (250, 3, 1)
        );

        // In 2000 the calendars are 13 days apart.
        let gregorian = Date::<Gregorian>::new(2000, 1, 1).unwrap();
        let julian = convert::<Gregorian, Julian>(&gregorian).unwrap();
        assert_eq!(julian, Date::new(1999, 12, 19).unwrap());
    }
}
