//! Property-based tests for timestamp arithmetic and comparison
//!
//! This module tests the integer-level operations:
//! - Additive inverse: a.add(d).sub(a) == d
//! - Calendar agreement: a.add(d) matches a.to_time() + d
//! - Ordering: exactly one of after/before/equal holds and matches the calendar
//! - Wraparound: overflow behaves like i64 wrapping arithmetic

#![allow(special_module_name)]

use chrono::{TimeDelta, Utc};
use proptest::prelude::*;
use tinystamp::prelude::*;

use lib::*;

proptest! {
    #![proptest_config(timestamp_config())]

    /// Test adding a positive duration that stays in range
    /// Property: the sum agrees with the calendar sum and inverts with sub
    #[test]
    fn add_positive_duration(ts in positive_timestamp_strategy(), raw in 0i64..i64::MAX) {
        let d = TimeDelta::nanoseconds(raw % (i64::MAX - ts.value()));
        prop_assume!(!ts.add(d).is_zero());
        prop_assert_eq!(addition_mismatch(ts, d), None);
    }

    /// Test adding a negative duration from a positive timestamp
    /// Property: the sum never leaves the range and agrees with the calendar
    #[test]
    fn add_negative_duration(ts in positive_timestamp_strategy(), raw in 0i64..i64::MAX) {
        let d = TimeDelta::nanoseconds(-raw);
        prop_assume!(!ts.add(d).is_zero());
        prop_assert_eq!(addition_mismatch(ts, d), None);
    }

    /// Test the additive inverse without calendar involvement
    /// Property: a.add(d).sub(a) == d for every a and d (wrapping)
    #[test]
    fn add_then_sub_is_identity(value in any::<i64>(), d in duration_strategy()) {
        let ts = CompactTimestamp::new(value);
        prop_assert_eq!(ts.add(d).sub(ts), d);
        prop_assert_eq!((ts + d) - ts, d);
    }

    /// Test that a non-zero duration always moves the timestamp
    /// Property: a.add(d) != a whenever d != 0
    #[test]
    fn nonzero_duration_moves(value in any::<i64>(), d in duration_strategy()) {
        prop_assume!(d != TimeDelta::zero());
        let ts = CompactTimestamp::new(value);
        prop_assert_ne!(ts.add(d), ts);
    }

    /// Test add_ts against add
    /// Property: a.add_ts(b) == a.add(b.duration())
    #[test]
    fn add_ts_matches_add(a in any::<i64>(), b in any::<i64>()) {
        let a = CompactTimestamp::new(a);
        let b = CompactTimestamp::new(b);
        prop_assert_eq!(a.add_ts(b), a.add(b.duration()));
        prop_assert_eq!(a.add_ts(b), b.add_ts(a));
    }

    /// Test that exactly one ordering relation holds
    /// Property: after, before and equal partition every pair
    #[test]
    fn ordering_is_exclusive(a in any::<i64>(), b in any::<i64>()) {
        let a = CompactTimestamp::new(a);
        let b = CompactTimestamp::new(b);
        let held = [a.after(b), a.before(b), a.equal(b)];
        prop_assert_eq!(held.iter().filter(|&&h| h).count(), 1);
        prop_assert_eq!(a.after(b), b.before(a));
        prop_assert_eq!(a.cmp(&b), a.value().cmp(&b.value()));
    }

    /// Test that the ordering matches the calendar ordering
    /// Property: a.after(b) iff a.to_time() > b.to_time(), zero excluded
    #[test]
    fn ordering_matches_calendar(
        a in nonzero_timestamp_strategy(),
        b in nonzero_timestamp_strategy(),
    ) {
        let (ta, tb) = (a.to_time(), b.to_time());
        prop_assert_eq!(a.after(b), ta > tb);
        prop_assert_eq!(a.before(b), ta < tb);
        prop_assert_eq!(a.equal(b), ta == tb);
        prop_assert_eq!(a.after_time(&tb), ta > tb);
        prop_assert_eq!(a.before_time(&tb), ta < tb);
        prop_assert_eq!(a.equal_time(&tb), ta == tb);
    }

    /// Test sub_time against sub
    /// Property: a.sub_time(b.to_time()) == a.sub(b) for non-zero in-range a, b
    #[test]
    fn sub_time_matches_sub(
        a in positive_timestamp_strategy(),
        b in positive_timestamp_strategy(),
    ) {
        prop_assert_eq!(a.sub_time(&b.to_time()), a.sub(b));
    }

    /// Test whole-day date offsets in UTC
    /// Property: add_date(0, 0, n) adds exactly n days
    #[test]
    fn add_date_days_in_utc(ts in positive_timestamp_strategy(), days in -10_000i32..10_000) {
        let shifted = ts.add_date(0, 0, days, &Utc);
        prop_assert_eq!(shifted.sub(ts), TimeDelta::days(i64::from(days)));
    }

    /// Test whole-year date offsets in UTC
    /// Property: add_date(y, 0, 0) == add_date(0, 12 * y, 0)
    #[test]
    fn add_date_years_are_twelve_months(ts in any::<i64>(), years in -100i32..100) {
        let ts = CompactTimestamp::new(ts);
        prop_assert_eq!(
            ts.add_date(years, 0, 0, &Utc),
            ts.add_date(0, 12 * years, 0, &Utc)
        );
    }
}

#[test]
fn test_wraparound_is_not_guarded() {
    assert_eq!(MAX_TS.add(TimeDelta::nanoseconds(1)), MIN_TS);
    assert_eq!(MIN_TS.add(TimeDelta::nanoseconds(-1)), MAX_TS);
    assert_eq!(MAX_TS.add_ts(MAX_TS), CompactTimestamp::new(-2));
    assert_eq!(MIN_TS.sub(MAX_TS), TimeDelta::nanoseconds(1));
}

#[test]
fn test_add_date_counts_leap_days_from_epoch() {
    let zero = CompactTimestamp::zero();
    assert_eq!(zero.add_date(1, 0, 0, &Utc).sub(zero), TimeDelta::days(365));
    // 1970-01-01 to 2001-01-01 spans the leap years 1972..=2000
    assert_eq!(
        zero.add_date(31, 0, 0, &Utc).sub(zero),
        TimeDelta::days(31 * 365 + 8)
    );
    assert_eq!(
        zero.add_date(31, 0, 0, &Utc),
        CompactTimestamp::from_unix(978_307_200, 0)
    );
}

#[test]
fn test_add_date_normalises_overflowing_fields() {
    let zero = CompactTimestamp::zero();
    // day 32 of January is February 1st
    assert_eq!(
        zero.add_date(0, 0, 31, &Utc),
        zero.add_date(0, 1, 0, &Utc)
    );
    // minus one month from January 1970 is December 1969
    assert_eq!(
        zero.add_date(0, -1, 0, &Utc).sub(zero),
        TimeDelta::days(-31)
    );
}
