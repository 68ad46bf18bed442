// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day — the calendar-agnostic timeline every calendar converts through.
//!
//! [`JulianDay`] stores a single [`Days`] quantity counted from the Julian
//! Period epoch.  Integral values fall at **noon**; `.5` values fall at
//! midnight, so the civil day opening at midnight `x.5` runs until `x+1.5`.
//!
//! No validation happens on construction: any real number is a legal
//! Julian Day.  Only the conversions in [`converter`](crate::converter)
//! refuse values (non-finite ones) that name no day.

use qtty::Days;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on the Julian Day timeline.
///
/// The struct is `Copy` and layout-identical to a single `f64`.  Equality and
/// ordering are numeric, so equal values denote the same instant whichever
/// calendar produced them.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00 (Gregorian), JD 2 451 545.0.
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Midnight opening 15 October 1582 (Gregorian), which is
    /// 5 October 1582 in the Julian calendar.
    pub const GREGORIAN_REFORM: Self = Self::new(2_299_160.5);

    /// Midnight opening 1970-01-01 (Gregorian).
    pub const UNIX_EPOCH: Self = Self::new(2_440_587.5);

    // ── constructors ──────────────────────────────────────────────────

    /// Create from a raw scalar (days since the Julian Period epoch).
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// The midnight opening the noon-aligned day `day_number`.
    #[inline]
    pub fn from_day_number(day_number: i64) -> Self {
        Self::new(day_number as f64 - 0.5)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// The integral (noon-aligned) day number containing this instant.
    ///
    /// Every instant from midnight `x.5` up to, but excluding, the next
    /// midnight `x + 1.5` belongs to day `x + 1`.
    #[inline]
    pub fn day_number(&self) -> i64 {
        (self.value() + 0.5).floor() as i64
    }

    /// Whether the value is finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value().is_finite()
    }

    // ── min / max ─────────────────────────────────────────────────────

    /// The earlier of two instants.
    #[inline]
    pub const fn min(self, other: Self) -> Self {
        Self::from_days(self.quantity.min_const(other.quantity))
    }

    /// The later of two instants.
    #[inline]
    pub const fn max(self, other: Self) -> Self {
        Self::from_days(self.quantity.max_const(other.quantity))
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JD {}", self.value())
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        *self = *self + rhs;
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        *self = *self - rhs;
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_and_accessors() {
        let jd = JulianDay::new(2_451_545.0);
        assert_eq!(jd.quantity(), Days::new(2_451_545.0));
        assert_eq!(jd.value(), 2_451_545.0);
        assert_eq!(jd, JulianDay::J2000);
    }

    #[test]
    fn day_number_is_noon_aligned() {
        assert_eq!(JulianDay::new(2_451_544.5).day_number(), 2_451_545);
        assert_eq!(JulianDay::new(2_451_545.0).day_number(), 2_451_545);
        assert_eq!(JulianDay::new(2_451_545.49).day_number(), 2_451_545);
        assert_eq!(JulianDay::new(2_451_545.5).day_number(), 2_451_546);
        assert_eq!(JulianDay::new(-0.5).day_number(), 0);
        assert_eq!(JulianDay::new(-0.6).day_number(), -1);
    }

    #[test]
    fn from_day_number_lands_on_midnight() {
        assert_eq!(JulianDay::from_day_number(2_299_161), JulianDay::GREGORIAN_REFORM);
        assert_eq!(JulianDay::from_day_number(-10).value(), -10.5);
    }

    #[test]
    fn ordering_is_numeric() {
        let a = JulianDay::new(10.0);
        let b = JulianDay::new(14.0);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(b.min(a), a);

        const LATER: JulianDay = JulianDay::J2000.max(JulianDay::UNIX_EPOCH);
        assert_eq!(LATER, JulianDay::J2000);
    }

    #[test]
    fn arithmetic_with_days() {
        let mut jd = JulianDay::new(2_451_545.0);
        assert_eq!((jd + Days::new(1.5)).value(), 2_451_546.5);
        assert_eq!((jd - Days::new(1.5)).value(), 2_451_543.5);
        jd += Days::new(1.0);
        assert_eq!(jd.value(), 2_451_546.0);
        jd -= Days::new(0.5);
        assert_eq!(jd.value(), 2_451_545.5);
        assert_eq!(jd - JulianDay::J2000, Days::new(0.5));
    }

    #[test]
    fn display_has_label() {
        assert_eq!(JulianDay::new(2_451_544.5).to_string(), "JD 2451544.5");
    }

    #[test]
    fn non_finite_values_are_representable() {
        assert!(!JulianDay::new(f64::NAN).is_finite());
        assert!(JulianDay::J2000.is_finite());
    }
}
