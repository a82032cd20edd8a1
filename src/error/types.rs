//! Core error types for tinystamp
//!
//! The conversion and arithmetic layer is total. Only layout formatting and
//! the marshaling hooks, which hand the calendar value to an external
//! encoder, can fail.

use alloc::string::String;

use thiserror::Error;

/// Main error type for timestamp formatting and marshaling
///
/// Range violations during conversion are never reported through this type;
/// they are detected with [`out_of_range`](crate::clock::out_of_range).
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The calendar year cannot be represented by the text encodings
    ///
    /// RFC 3339 renderings are limited to four-digit years.
    #[error("timestamp year {year} outside of range [0, 9999]")]
    YearOutOfRange {
        /// Year of the offending instant
        year: i32,
    },

    /// The strftime layout handed to `format` contains an unknown specifier
    #[error("invalid format layout {layout:?}")]
    InvalidLayout {
        /// The rejected layout
        layout: String,
    },

    /// JSON encoder failure
    #[cfg(feature = "serde")]
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary encoder failure
    #[cfg(feature = "serde")]
    #[error("binary encoding failed: {0}")]
    Binary(#[from] bincode::Error),
}

impl TimestampError {
    /// Returns true if the error comes from the instant itself rather than
    /// from an encoder
    pub const fn is_range_error(&self) -> bool {
        matches!(self, Self::YearOutOfRange { .. })
    }

    /// Returns the error category as a string
    pub const fn category(&self) -> &'static str {
        match self {
            Self::YearOutOfRange { .. } => "Range",
            Self::InvalidLayout { .. } => "Layout",
            #[cfg(feature = "serde")]
            Self::Json(_) | Self::Binary(_) => "Encoding",
        }
    }
}

/// Result type for timestamp formatting and marshaling
pub type TimestampResult<T> = Result<T, TimestampError>;
