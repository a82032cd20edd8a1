#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! **Compact Nanosecond Timestamps**
//!
//! tinystamp is a `no_std` Rust library providing an 8-byte, allocation-free
//! timestamp that stands in for a full `chrono::DateTime` wherever memory or
//! speed matters: hot structs, lock-free shared state, large in-memory tables.
//!
//! ## Features
//!
//! - **Single `i64`** - nanoseconds since 1970-01-01T00:00:00 UTC
//! - **Range** - 1677-09-21 to 2262-04-11 (epoch ± ~292 years)
//! - **Calendar Interop** - lossless round trip with `chrono` inside the range
//! - **Lock-free Sharing** - [`AtomicTimestamp`] with store/load/swap/CAS
//! - **Total Operations** - conversion and arithmetic never fail
//!
//! ## Feature Overview
//!
//! - `std` (default) - [`CompactTimestamp::now`] and `std::error::Error`
//! - `serde` - `Serialize` plus JSON and binary encoding hooks
//!
//! ## The zero value
//!
//! Numeric zero stands for the calendar zero instant `0001-01-01T00:00:00Z`,
//! the "unset" value on the chrono side, and converts back to it. The epoch
//! instant also has the numeric value zero, so `from_unix(0, 0)` reads as unset.
//!
//! ## Overflow
//!
//! - Converting a calendar instant outside the range saturates to
//!   [`CompactTimestamp::MAX`] or [`CompactTimestamp::MIN`]; check with
//!   [`out_of_range`] first when that matters.
//! - Arithmetic on timestamps wraps like plain `i64` arithmetic.
//!
//! ## Quick Start
//!
//! ```rust
//! use tinystamp::prelude::*;
//! use chrono::{TimeDelta, TimeZone, Utc};
//!
//! let t = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 0).unwrap();
//! assert!(!out_of_range(&t));
//!
//! let ts = CompactTimestamp::from_datetime(&t);
//! let hour = ts.truncate(TimeDelta::hours(1));
//! assert_eq!(hour.to_time(), Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap());
//!
//! let shared = AtomicTimestamp::new(ts);
//! shared.store(ts.add(TimeDelta::seconds(1)));
//! assert!(shared.load().after(ts));
//! ```
//!
//! [`AtomicTimestamp`]: crate::clock::AtomicTimestamp
//! [`CompactTimestamp::now`]: crate::clock::CompactTimestamp::now
//! [`CompactTimestamp::MAX`]: crate::clock::CompactTimestamp::MAX
//! [`CompactTimestamp::MIN`]: crate::clock::CompactTimestamp::MIN
//! [`out_of_range`]: crate::clock::out_of_range

#![no_std]
#![deny(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::should_implement_trait)]

extern crate alloc;

// Core modules
pub mod clock;
pub mod error;

/// Prelude module of tinystamp
///
/// Convenient re-exports for common tinystamp types and functions
pub mod prelude {
    // Re-export clock types
    #[cfg(target_has_atomic = "64")]
    pub use crate::clock::AtomicTimestamp;
    pub use crate::clock::{
        CompactTimestamp, EPOCH, MAX_TS, MIN_TS, is_zero_time, out_of_range, zero_time,
    };

    // Re-export error types
    pub use crate::error::{TimestampError, TimestampResult};
}
