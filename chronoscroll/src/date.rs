use alloc::format;
use alloc::string::String;
use core::fmt;

use chrono::{Datelike, NaiveDate};

const MONTH_ABBREV: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month.
///
/// Ordering is chronological. Day-of-month is never stored: every date that reaches the timeline
/// is bucketed into its month.
///
/// With `feature = "serde"`, it (de)serializes as a `YYYY-MM` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct YearMonth {
    year: i32,
    month: u8, // 1..=12
}

impl YearMonth {
    /// Returns `None` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    /// Months since year 0, January. Consecutive months differ by exactly one.
    pub fn ordinal(self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    pub fn from_ordinal(ordinal: i64) -> Self {
        let year = ordinal.div_euclid(12);
        let month = ordinal.rem_euclid(12) as u8 + 1;
        Self {
            year: year.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            month,
        }
    }

    pub fn add_months(self, months: i64) -> Self {
        Self::from_ordinal(self.ordinal().saturating_add(months))
    }

    /// Signed number of months from `self` to `other`.
    pub fn months_until(self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }

    /// Parses `YYYY-MM`, `YYYY-MM-DD` or `YYYY-MM-DDThh:mm...`. See [`parse_month`].
    pub fn parse(s: &str) -> Option<Self> {
        parse_month(s)
    }

    /// The machine form, `YYYY-MM`.
    pub fn to_iso(self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// Returned when a string is not a recognizable month.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMonthError(String);

impl fmt::Display for ParseMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a YYYY-MM or YYYY-MM-DD date: {:?}", self.0)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseMonthError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_month(&s).ok_or(ParseMonthError(s))
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_iso()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = MONTH_ABBREV[(self.month - 1) as usize];
        write!(f, "{name} {}", self.year)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month() as u8,
        }
    }
}

/// Parses a partial date string into its calendar month.
///
/// Accepted forms: `YYYY-MM`, `YYYY-MM-DD`, and `YYYY-MM-DD` followed by a `T` time suffix (the
/// time is ignored). Surrounding whitespace is ignored. Anything else, including impossible days
/// like `2021-02-30`, yields `None`.
pub fn parse_month(s: &str) -> Option<YearMonth> {
    let s = s.trim();
    let (date, has_time) = match s.split_once('T') {
        Some((date, _)) => (date, true),
        None => (s, false),
    };
    if !is_iso_shaped(date) {
        return None;
    }

    let date = match date.len() {
        // A time without a day is not a date.
        7 if has_time => return None,
        7 => NaiveDate::from_ymd_opt(date[..4].parse().ok()?, date[5..].parse().ok()?, 1)?,
        _ => NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?,
    };
    Some(date.into())
}

// `YYYY-MM` or `YYYY-MM-DD` with fixed-width ASCII digits; calendar checks are left to chrono.
fn is_iso_shaped(date: &str) -> bool {
    matches!(date.len(), 7 | 10)
        && date.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Display adapter for an optional month: `None` renders as `Present`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthLabel(pub Option<YearMonth>);

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ym) => fmt::Display::fmt(&ym, f),
            None => f.write_str("Present"),
        }
    }
}

/// Formats a month for display; an open end (`None`) reads as `Present`.
pub fn format_month(month: Option<YearMonth>) -> MonthLabel {
    MonthLabel(month)
}

/// Clamps `v` into `[lo, hi]`. `NaN` clamps to `lo`.
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    v.max(lo).min(hi)
}

/// A continuous position on the month axis.
///
/// The integer part is a [`YearMonth::ordinal`]; the fraction is how far into that month the
/// point lies. The scroll mapper produces these, and reveal decisions compare them against entry
/// start months.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonthPoint(f64);

impl MonthPoint {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The point at the very beginning of `month`.
    pub fn at(month: YearMonth) -> Self {
        Self(month.ordinal() as f64)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// The month this point falls in.
    pub fn month(self) -> YearMonth {
        YearMonth::from_ordinal(floor_i64(self.0))
    }

    pub fn is_at_or_after(self, month: YearMonth) -> bool {
        self.0 >= month.ordinal() as f64
    }

    pub fn is_at_or_before(self, month: YearMonth) -> bool {
        self.0 <= month.ordinal() as f64
    }
}

// `f64::floor` lives in `std`; this keeps `no_std` builds working.
fn floor_i64(v: f64) -> i64 {
    let t = v as i64;
    if (t as f64) > v { t - 1 } else { t }
}
