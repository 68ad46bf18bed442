// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Almanac
//!
//! Calendar arithmetic and conversion pivoting through the Julian Day.
//!
//! # Core types
//!
//! - [`Date<C>`] — a `(year, month, day)` in calendar `C`, usable as a
//!   mutable day cursor.
//! - [`Calendar`] — sealed marker trait selecting a calendar's rules.
//! - [`CalendarSystem`] — the closed set of supported rule sets.
//! - [`JulianDay`] — the calendar-agnostic timeline value.
//! - [`DayInstant`] — anything placed on the Julian Day axis.
//! - [`CalendarError`] — every failure the crate reports.
//!
//! # Calendars
//!
//! | Marker | Leap years | Alias |
//! |--------|------------|-------|
//! | [`Julian`] | every 4th year | [`JulianDate`] |
//! | [`Gregorian`] | every 4th, except non-400th centuries | [`GregorianDate`] |
//!
//! # Conversions
//!
//! A date never converts straight to another calendar.  It goes to a
//! [`JulianDay`] first and comes back in the target calendar:
//!
//! ```
//! use almanac::{Date, Gregorian, Julian, JulianDay};
//!
//! let reform = Date::<Gregorian>::new(1582, 10, 15).unwrap();
//! assert_eq!(reform.julian_day(), JulianDay::GREGORIAN_REFORM);
//!
//! let julian = reform.to::<Julian>().unwrap();
//! assert_eq!((julian.year(), julian.month(), julian.day()), (1582, 10, 5));
//! assert_eq!(julian.weekday_number(), reform.weekday_number());
//! ```
//!
//! # Cargo features
//!
//! - `serde`: serialization for [`JulianDay`], [`CalendarSystem`] and [`Date`].
//! - `logging`: trace/debug records through the `log` facade.

#[macro_use]
mod logging;

mod calendar;
mod chronology;
pub mod converter;
mod date;
mod error;
mod julian_day;
mod rules;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{Calendar, Gregorian, Julian};
pub use chronology::{dates_are_chronological, dates_are_reverse_chronological, DayInstant};
pub use date::Date;
pub use error::{CalendarError, CalendarResult};
pub use julian_day::JulianDay;
pub use rules::CalendarSystem;

// ── Type aliases ──────────────────────────────────────────────────────────

/// A date in the proleptic Julian calendar.
pub type JulianDate = Date<Julian>;

/// A date in the proleptic Gregorian calendar.
pub type GregorianDate = Date<Gregorian>;
