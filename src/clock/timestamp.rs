//! Compact nanosecond timestamp
//!
//! A [`CompactTimestamp`] is a single `i64` counting nanoseconds from the Unix
//! epoch. It converts to and from `chrono::DateTime` and mirrors the calendar
//! operations that make sense on a bare integer.

use alloc::string::String;
use core::fmt::{self, Write};
use core::ops::{Add, AddAssign, Sub};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, DurationRound, TimeDelta, TimeZone, Utc};

use crate::error::{TimestampError, TimestampResult};

use super::convert::{
    NANOS_PER_SEC, date_offset, delta_nanos, epoch_offset, is_zero_time, zero_time,
};

/// Compact timestamp with nanosecond precision
///
/// The value counts nanoseconds from 1970-01-01T00:00:00 UTC, which gives a
/// range of roughly 1970 ± 292 years (1677-09-21 to 2262-04-11).
///
/// Numeric zero is reserved for the calendar zero instant
/// ([`zero_time`](crate::clock::zero_time)), the "unset" value of the calendar
/// side. The epoch instant itself also maps to zero, so the two cannot be told
/// apart once converted: `from_unix(0, 0).is_zero()` is true.
///
/// No timezone is stored. Every conversion back to a calendar instant yields
/// UTC.
///
/// # Memory Usage
/// - Fixed size: 8 bytes, no heap allocation
///
/// # Example
/// ```rust
/// use tinystamp::prelude::*;
/// use chrono::TimeDelta;
///
/// let start = CompactTimestamp::from_unix(1_600_000_000, 0);
/// let later = start.add(TimeDelta::milliseconds(1500));
///
/// assert!(later.after(start));
/// assert_eq!(later.sub(start), TimeDelta::milliseconds(1500));
/// assert_eq!(later.unix(), 1_600_000_001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CompactTimestamp {
    /// Nanoseconds since the Unix epoch, zero meaning unset
    pub value: i64,
}

/// Largest representable timestamp
pub const MAX_TS: CompactTimestamp = CompactTimestamp::MAX;

/// Smallest representable timestamp
pub const MIN_TS: CompactTimestamp = CompactTimestamp::MIN;

impl CompactTimestamp {
    /// Largest representable timestamp (2262-04-11T23:47:16.854775807Z)
    pub const MAX: Self = Self::new(i64::MAX);

    /// Smallest representable timestamp (1677-09-21T00:12:43.145224192Z)
    pub const MIN: Self = Self::new(i64::MIN);

    /// Creates a timestamp from nanoseconds since the epoch
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Creates the zero (unset) timestamp
    pub const fn zero() -> Self {
        Self { value: 0 }
    }

    /// Returns the timestamp value
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Returns the timestamp as i64
    pub const fn as_i64(&self) -> i64 {
        self.value
    }

    /// Converts a calendar instant into a compact timestamp
    ///
    /// The calendar zero instant becomes [`zero`](Self::zero). Instants beyond
    /// the representable range saturate to [`MAX`](Self::MAX) or
    /// [`MIN`](Self::MIN); use [`out_of_range`](crate::clock::out_of_range)
    /// beforehand when clamping is not acceptable.
    ///
    /// # Example
    /// ```rust
    /// use tinystamp::prelude::*;
    /// use chrono::{TimeZone, Utc};
    ///
    /// let t = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
    /// let ts = CompactTimestamp::from_datetime(&t);
    /// assert_eq!(ts.to_time(), t);
    ///
    /// assert!(CompactTimestamp::from_datetime(&zero_time()).is_zero());
    /// ```
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        if is_zero_time(t) {
            return Self::zero();
        }
        Self::new(epoch_offset(t))
    }

    /// Returns the current time as a timestamp
    #[cfg(feature = "std")]
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Creates a timestamp `sec` seconds and `nsec` nanoseconds after the
    /// epoch
    ///
    /// `nsec` may lie outside `[0, 999_999_999]`; the excess carries into the
    /// seconds. Note that `from_unix(0, 0)` is the zero timestamp.
    pub fn from_unix(sec: i64, nsec: i64) -> Self {
        let sec = sec.saturating_add(nsec.div_euclid(NANOS_PER_SEC));
        let nsec = nsec.rem_euclid(NANOS_PER_SEC) as u32;
        match DateTime::from_timestamp(sec, nsec) {
            Some(t) => Self::from_datetime(&t),
            None if sec < 0 => Self::MIN,
            None => Self::MAX,
        }
    }

    /// Reinterprets a duration as a timestamp
    ///
    /// Durations wider than the `i64` nanosecond range saturate.
    pub fn from_duration(d: TimeDelta) -> Self {
        Self::new(delta_nanos(d))
    }

    /// Returns the raw value as a duration
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::nanoseconds(self.value)
    }

    /// Converts the timestamp into a UTC calendar instant
    ///
    /// The zero timestamp converts to the calendar zero instant, not to the
    /// epoch.
    pub fn to_time(&self) -> DateTime<Utc> {
        if self.is_zero() {
            return zero_time();
        }
        DateTime::from_timestamp_nanos(self.value)
    }

    /// Converts the timestamp into a calendar instant in `tz`
    pub fn in_timezone<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        self.to_time().with_timezone(tz)
    }

    /// Returns the timezone of the timestamp, which is always UTC
    pub const fn timezone(&self) -> Utc {
        Utc
    }

    /// Returns `self + d`
    ///
    /// Overflow wraps around.
    pub fn add(self, d: TimeDelta) -> Self {
        Self::new(self.value.wrapping_add(delta_nanos(d)))
    }

    /// Returns the value-level sum of two timestamps
    ///
    /// Overflow wraps around.
    pub const fn add_ts(self, other: Self) -> Self {
        Self::new(self.value.wrapping_add(other.value))
    }

    /// Adds the offset of "epoch + `years`/`months`/`days`" at midnight in
    /// `tz`
    ///
    /// The offsets are applied in order: whole months first (`years * 12 +
    /// months`), then `days`. Neither has to stay within its calendar range. The timezone decides where midnight falls, so it has to be
    /// given explicitly.
    ///
    /// # Example
    /// ```rust
    /// use tinystamp::prelude::*;
    /// use chrono::{TimeDelta, Utc};
    ///
    /// let ts = CompactTimestamp::from_unix(3600, 0);
    /// let next = ts.add_date(0, 0, 1, &Utc);
    /// assert_eq!(next.sub(ts), TimeDelta::days(1));
    /// ```
    pub fn add_date<Tz: TimeZone>(self, years: i32, months: i32, days: i32, tz: &Tz) -> Self {
        self.add_ts(date_offset(years, months, days, tz))
    }

    /// Returns the difference `self - other`
    ///
    /// Overflow wraps around.
    pub fn sub(self, other: Self) -> TimeDelta {
        TimeDelta::nanoseconds(self.value.wrapping_sub(other.value))
    }

    /// Returns the difference between the timestamp and a calendar instant
    ///
    /// The result is unreliable if `t` is out of range.
    pub fn sub_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> TimeDelta {
        self.to_time()
            .naive_utc()
            .signed_duration_since(t.naive_utc())
    }

    /// Returns true if `self` is later than `other`
    pub const fn after(&self, other: Self) -> bool {
        self.value > other.value
    }

    /// Returns true if `self` is earlier than `other`
    pub const fn before(&self, other: Self) -> bool {
        self.value < other.value
    }

    /// Returns true if both timestamps are the same instant
    pub const fn equal(&self, other: Self) -> bool {
        self.value == other.value
    }

    /// Returns true if `self` is later than `t`
    ///
    /// The result is unreliable if `t` is out of range.
    pub fn after_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        self.to_time() > *t
    }

    /// Returns true if `self` is earlier than `t`
    ///
    /// The result is unreliable if `t` is out of range.
    pub fn before_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        self.to_time() < *t
    }

    /// Returns true if `self` and `t` are the same instant
    ///
    /// The result is unreliable if `t` is out of range.
    pub fn equal_time<Tz: TimeZone>(&self, t: &DateTime<Tz>) -> bool {
        self.to_time() == *t
    }

    /// Returns true if this is the zero (unset) timestamp
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Rounds the timestamp down to a multiple of `d` since the epoch
    ///
    /// Rounding goes towards negative infinity, so instants before the epoch
    /// move further into the past. A non-positive `d` returns the timestamp
    /// unchanged.
    ///
    /// # Example
    /// ```rust
    /// use tinystamp::prelude::*;
    /// use chrono::TimeDelta;
    ///
    /// let ts = CompactTimestamp::new(-1);
    /// assert_eq!(ts.truncate(TimeDelta::seconds(1)), CompactTimestamp::new(-1_000_000_000));
    /// assert_eq!(ts.truncate(TimeDelta::zero()), ts);
    /// ```
    pub fn truncate(self, d: TimeDelta) -> Self {
        let d = delta_nanos(d);
        if d <= 0 {
            return self;
        }
        // the remainder is negative only for negative non-multiples,
        // its sign bit then moves the quotient down by one
        let quotient = self.value / d + ((self.value % d) >> 63);
        Self::new(quotient.wrapping_mul(d))
    }

    /// Rounds the calendar form of the timestamp down to a multiple of `d`
    ///
    /// Uses chrono's own rounding and falls back to [`truncate`](Self::truncate)
    /// when chrono refuses, e.g. for a duration longer than the distance to
    /// the epoch. The zero timestamp stays the calendar zero instant.
    pub fn truncate_time(&self, d: TimeDelta) -> DateTime<Utc> {
        let t = self.to_time();
        if delta_nanos(d) <= 0 {
            return t;
        }
        match t.duration_trunc(d) {
            Ok(truncated) => truncated,
            Err(err) => {
                log::debug!("calendar truncation of {t} by {d} failed: {err}");
                if self.is_zero() {
                    return t;
                }
                // no zero mapping here, a result on the epoch stays the epoch
                DateTime::from_timestamp_nanos(self.truncate(d).value)
            }
        }
    }

    /// Returns whole seconds since the epoch, rounded down
    pub fn unix(&self) -> i64 {
        self.to_time().timestamp()
    }

    /// Returns nanoseconds since the epoch
    ///
    /// Computed from the calendar form. For the zero timestamp the value
    /// overflows `i64` and wraps.
    pub fn unix_nano(&self) -> i64 {
        let t = self.to_time();
        t.timestamp()
            .wrapping_mul(NANOS_PER_SEC)
            .wrapping_add(i64::from(t.timestamp_subsec_nanos()))
    }

    /// Formats the timestamp (in UTC) with a strftime-like format string
    ///
    /// The layout is parsed up front, so an unknown specifier is reported as
    /// [`TimestampError::InvalidLayout`] instead of failing while rendering.
    ///
    /// # Example
    /// ```rust
    /// use tinystamp::prelude::*;
    ///
    /// let ts = CompactTimestamp::from_unix(86_400, 0);
    /// assert_eq!(ts.format("%Y-%m-%d %H:%M").unwrap(), "1970-01-02 00:00");
    /// assert!(ts.format("%Q").is_err());
    /// ```
    pub fn format(&self, layout: &str) -> TimestampResult<String> {
        let invalid = || TimestampError::InvalidLayout {
            layout: String::from(layout),
        };
        if StrftimeItems::new(layout).any(|item| matches!(item, Item::Error)) {
            log::debug!("rejected format layout {layout:?}");
            return Err(invalid());
        }

        let mut out = String::new();
        write!(out, "{}", self.to_time().format(layout)).map_err(|_| invalid())?;
        Ok(out)
    }
}

impl fmt::Display for CompactTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_time(), f)
    }
}

impl Add<TimeDelta> for CompactTimestamp {
    type Output = CompactTimestamp;

    fn add(self, rhs: TimeDelta) -> Self::Output {
        CompactTimestamp::add(self, rhs)
    }
}

impl AddAssign<TimeDelta> for CompactTimestamp {
    fn add_assign(&mut self, rhs: TimeDelta) {
        *self = CompactTimestamp::add(*self, rhs);
    }
}

impl Sub for CompactTimestamp {
    type Output = TimeDelta;

    fn sub(self, rhs: CompactTimestamp) -> Self::Output {
        CompactTimestamp::sub(self, rhs)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CompactTimestamp {
    fn from(t: DateTime<Tz>) -> Self {
        Self::from_datetime(&t)
    }
}

impl From<CompactTimestamp> for DateTime<Utc> {
    fn from(ts: CompactTimestamp) -> Self {
        ts.to_time()
    }
}
