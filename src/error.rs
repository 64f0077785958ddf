//! Error types used by the ticker.
//!
//! [`TickerError`] covers both the construction-time contract violation
//! (a zero period) and the single runtime outcome a ticker reports: the tick
//! sequence has ended.
//!
//! Helper methods (`as_label`, `as_message`) are provided for logs/metrics.

use std::time::Duration;
use thiserror::Error;

/// # Errors produced by a ticker.
///
/// `InvalidPeriod` is a programmer error and is returned by constructors only.
/// `Stopped` is the sole runtime failure: the caller's waiting should end.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    /// The configured period is not a positive duration.
    #[error("ticker period must be positive, got {period:?}")]
    InvalidPeriod {
        /// The rejected period.
        period: Duration,
    },

    /// The ticker lifetime ended or a release was consumed.
    #[error("ticker stopped")]
    Stopped,
}

impl TickerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use tickvisor::TickerError;
    ///
    /// assert_eq!(TickerError::Stopped.as_label(), "ticker_stopped");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            TickerError::InvalidPeriod { .. } => "ticker_invalid_period",
            TickerError::Stopped => "ticker_stopped",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            TickerError::InvalidPeriod { period } => format!("invalid period: {period:?}"),
            TickerError::Stopped => "ticker stopped".to_string(),
        }
    }

    /// Indicates whether this is the ordinary end of a tick sequence.
    pub fn is_stopped(&self) -> bool {
        matches!(self, TickerError::Stopped)
    }
}
