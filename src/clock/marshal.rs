//! Encoding hooks
//!
//! A timestamp has no wire format of its own. Every encoding is that of the
//! equivalent UTC calendar instant returned by
//! [`to_time`](CompactTimestamp::to_time). There is deliberately no decoding
//! counterpart.

use alloc::string::String;
#[cfg(feature = "serde")]
use alloc::vec::Vec;

use chrono::{DateTime, Datelike, SecondsFormat, Utc};

use super::timestamp::CompactTimestamp;
use crate::error::{TimestampError, TimestampResult};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

impl CompactTimestamp {
    /// Encodes the timestamp as RFC 3339 text with nanosecond precision
    ///
    /// # Example
    /// ```rust
    /// use tinystamp::prelude::*;
    ///
    /// let ts = CompactTimestamp::from_unix(1_000_000_000, 5_000_000);
    /// assert_eq!(ts.marshal_text()?, "2001-09-09T01:46:40.005Z");
    /// # Ok::<(), tinystamp::error::TimestampError>(())
    /// ```
    pub fn marshal_text(&self) -> TimestampResult<String> {
        let t = text_encodable(self.to_time())?;
        Ok(t.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    /// Encodes the timestamp as a JSON string
    #[cfg(feature = "serde")]
    pub fn marshal_json(&self) -> TimestampResult<Vec<u8>> {
        let t = text_encodable(self.to_time())?;
        Ok(serde_json::to_vec(&t)?)
    }

    /// Encodes the timestamp with bincode
    #[cfg(feature = "serde")]
    pub fn marshal_binary(&self) -> TimestampResult<Vec<u8>> {
        Ok(bincode::serialize(&self.to_time())?)
    }
}

/// Rejects instants whose year does not fit four digits
fn text_encodable(t: DateTime<Utc>) -> TimestampResult<DateTime<Utc>> {
    let year = t.year();
    if !(0..=9999).contains(&year) {
        log::debug!("refusing to encode {t}: year {year} not representable");
        return Err(TimestampError::YearOutOfRange { year });
    }
    Ok(t)
}

// Serialized as the calendar instant, there is no Deserialize
#[cfg(feature = "serde")]
impl Serialize for CompactTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_time().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{EPOCH, zero_time};
    use chrono::TimeDelta;

    #[test]
    fn test_marshal_text() {
        let ts = CompactTimestamp::new(1);
        assert_eq!(ts.marshal_text().unwrap(), "1970-01-01T00:00:00.000000001Z");

        let ts = CompactTimestamp::from_unix(-1, 0);
        assert_eq!(ts.marshal_text().unwrap(), "1969-12-31T23:59:59Z");
    }

    #[test]
    fn test_marshal_text_zero() {
        assert_eq!(
            CompactTimestamp::zero().marshal_text().unwrap(),
            "0001-01-01T00:00:00Z"
        );
    }

    #[test]
    fn test_text_encodable_year_limits() {
        assert!(text_encodable(zero_time()).is_ok());
        assert!(text_encodable(CompactTimestamp::MAX.to_time()).is_ok());

        let far = EPOCH + TimeDelta::days(9000 * 366);
        match text_encodable(far) {
            Err(TimestampError::YearOutOfRange { year }) => assert!(year > 9999),
            other => panic!("unexpected result: {other:?}"),
        }

        let before_year_zero = zero_time() - TimeDelta::days(400);
        assert!(matches!(
            text_encodable(before_year_zero),
            Err(TimestampError::YearOutOfRange { year: -1 })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_marshal_json_matches_calendar_encoding() {
        let ts = CompactTimestamp::from_unix(1_600_000_000, 123);
        let expected = serde_json::to_vec(&ts.to_time()).unwrap();
        assert_eq!(ts.marshal_json().unwrap(), expected);
        assert_eq!(serde_json::to_vec(&ts).unwrap(), expected);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_marshal_binary_matches_calendar_encoding() {
        let ts = CompactTimestamp::new(-42);
        let expected = bincode::serialize(&ts.to_time()).unwrap();
        assert_eq!(ts.marshal_binary().unwrap(), expected);
    }
}
