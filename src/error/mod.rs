//! Error handling module for tinystamp
//!
//! This module provides the error type returned by the marshaling hooks.

pub mod types;

// Re-export main types
pub use types::{TimestampError, TimestampResult};
