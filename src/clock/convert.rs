//! Boundary between compact timestamps and chrono calendar instants
//!
//! Offsets are measured from [`EPOCH`]. The calendar zero instant
//! (`0001-01-01T00:00:00Z`, see [`zero_time`]) lies far outside the compact
//! range and is mapped onto numeric zero instead of being converted.

use chrono::{DateTime, Months, NaiveDate, TimeDelta, TimeZone, Utc};

use super::timestamp::CompactTimestamp;

/// Reference instant of the compact representation: 1970-01-01T00:00:00 UTC
pub const EPOCH: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

/// Nanoseconds per second
pub const NANOS_PER_SEC: i64 = 1_000_000_000;

/// Seconds between the calendar zero instant and the epoch
const ZERO_TIME_EPOCH_SECS: i64 = 62_135_596_800;

/// Returns the calendar zero instant, `0001-01-01T00:00:00Z`
///
/// This is the "unset" value of the calendar side. It converts to
/// [`CompactTimestamp::zero`] and back.
pub fn zero_time() -> DateTime<Utc> {
    EPOCH - TimeDelta::seconds(ZERO_TIME_EPOCH_SECS)
}

/// Returns true if `t` is the calendar zero instant, in any timezone
pub fn is_zero_time<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    *t == zero_time()
}

/// Returns true if `t` cannot be represented as a compact timestamp
///
/// The zero instant is always representable. For every other instant the
/// offset from the epoch must lie strictly between [`CompactTimestamp::MIN`]
/// and [`CompactTimestamp::MAX`]; the extremes themselves are reported as out
/// of range since they are also what a saturated conversion produces.
///
/// Callers that cannot tolerate a clamped value must check this before
/// calling [`CompactTimestamp::from_datetime`].
pub fn out_of_range<Tz: TimeZone>(t: &DateTime<Tz>) -> bool {
    if is_zero_time(t) {
        return false;
    }
    let offset = epoch_offset(t);
    offset <= CompactTimestamp::MIN.value || offset >= CompactTimestamp::MAX.value
}

/// Converts a duration to whole nanoseconds, saturating at the `i64` limits
pub(crate) fn delta_nanos(d: TimeDelta) -> i64 {
    d.num_nanoseconds()
        .unwrap_or(if d < TimeDelta::zero() { i64::MIN } else { i64::MAX })
}

/// Offset of `t` from the epoch in nanoseconds, saturated
pub(crate) fn epoch_offset<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    let delta = t.naive_utc().signed_duration_since(EPOCH.naive_utc());
    let offset = delta_nanos(delta);
    if offset == i64::MIN || offset == i64::MAX {
        log::trace!("instant {t:?} outside timestamp range, saturated to {offset}");
    }
    offset
}

/// Builds "epoch + years/months/days" at local midnight in `tz`
///
/// `years` and `months` are combined into one month count and applied to
/// 1970-01-01 first, then `days` is added as a plain day offset (12 months is
/// January 1971, `days == 0` stays on the first of the month). Negative values
/// move backwards. A local midnight skipped by a DST transition is read as UTC
/// midnight of that day.
pub(crate) fn date_offset<Tz: TimeZone>(
    years: i32,
    months: i32,
    days: i32,
    tz: &Tz,
) -> CompactTimestamp {
    let total_months = i64::from(years) * 12 + i64::from(months);
    let midnight = shift_months(EPOCH.date_naive(), total_months)
        .and_then(|date| date.checked_add_signed(TimeDelta::days(i64::from(days))))
        .and_then(|date| date.and_hms_opt(0, 0, 0));

    match midnight {
        Some(naive) => {
            let local = tz
                .from_local_datetime(&naive)
                .earliest()
                .unwrap_or_else(|| tz.from_utc_datetime(&naive));
            CompactTimestamp::from_datetime(&local)
        }
        None => {
            log::trace!("date offset {years}y {months}m {days}d outside calendar range");
            if total_months.saturating_mul(31).saturating_add(i64::from(days)) < 0 {
                CompactTimestamp::MIN
            } else {
                CompactTimestamp::MAX
            }
        }
    }
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let count = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(count)
    } else {
        date.checked_sub_months(count)
    }
}
