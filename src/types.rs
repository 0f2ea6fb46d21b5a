//! Core types shared by the difference engine and the stepper.

use core::fmt;
use core::str::FromStr;

/// Granularity of a calendar difference or a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Unit {
    /// One millisecond.
    Millisecond,

    /// 1 000 milliseconds.
    Second,

    /// 60 seconds.
    Minute,

    /// 60 minutes.
    Hour,

    /// 24 hours when measuring, one civil day when shifting.
    Day,

    /// Variable length, 28 to 31 days.
    Month,

    /// Variable length, 365 or 366 days.
    Year,
}

impl Unit {
    /// All units, finest first.
    pub const ALL: [Unit; 7] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Month,
        Unit::Year,
    ];

    /// Returns the length of this unit in milliseconds.
    ///
    /// Returns `None` for [`Unit::Month`] and [`Unit::Year`], whose length
    /// depends on where they fall in the calendar.
    #[inline]
    pub const fn fixed_millis(self) -> Option<i64> {
        match self {
            Unit::Millisecond => Some(1),
            Unit::Second => Some(1_000),
            Unit::Minute => Some(60_000),
            Unit::Hour => Some(3_600_000),
            Unit::Day => Some(86_400_000),
            Unit::Month | Unit::Year => None,
        }
    }

    /// Lowercase singular name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = CalendarError;

    /// Parses a unit name, ignoring ASCII case and a trailing plural `s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let singular = match s.len() {
            n if n > 1 && (s.ends_with('s') || s.ends_with('S')) => &s[..n - 1],
            _ => s,
        };
        Unit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(singular))
            .ok_or(CalendarError::InvalidArgument("unknown unit name"))
    }
}

/// How a fractional remainder is resolved into a whole unit.
///
/// E.g. 2.5 seconds is 2 seconds under `Floor` and 3 seconds under `Ceiling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RoundingMode {
    /// A partial period counts as one more whole unit.
    #[default]
    Ceiling,

    /// A partial period is dropped.
    Floor,
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundingMode::Ceiling => f.write_str("ceiling"),
            RoundingMode::Floor => f.write_str("floor"),
        }
    }
}

impl FromStr for RoundingMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("ceiling") || s.eq_ignore_ascii_case("ceil") {
            Ok(RoundingMode::Ceiling)
        } else if s.eq_ignore_ascii_case("floor") {
            Ok(RoundingMode::Floor)
        } else {
            Err(CalendarError::InvalidArgument("unknown rounding mode"))
        }
    }
}

/// Errors returned by calendar operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalendarError {
    /// An argument could not be honored.
    ///
    /// Carries a short description of what was rejected.
    InvalidArgument(&'static str),
}

impl fmt::Display for CalendarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarError::InvalidArgument(reason) => {
                write!(f, "invalid argument: {}", reason)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CalendarError {}
