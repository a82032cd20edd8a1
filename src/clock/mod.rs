//! Clock management module
//!
//! This module provides the [`CompactTimestamp`] value type, its atomic cell
//! [`AtomicTimestamp`] and the conversion boundary to `chrono` calendar
//! instants.
//!
//! Conversions from calendar instants never fail. Instants outside the
//! representable range saturate; [`out_of_range`] tells the caller when that
//! would happen.

#[cfg(target_has_atomic = "64")]
pub mod atomic;
pub mod convert;
pub mod marshal;
pub mod timestamp;

#[cfg(target_has_atomic = "64")]
pub use atomic::AtomicTimestamp;
pub use convert::{EPOCH, NANOS_PER_SEC, is_zero_time, out_of_range, zero_time};
pub use timestamp::{CompactTimestamp, MAX_TS, MIN_TS};
