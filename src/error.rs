//! Errors for turning text into dates.
//!
//! Sorting itself never fails. The only fallible surface is [`parse_dates`],
//! which reports the first token it cannot read.
//!
//! [`parse_dates`]: crate::parse_dates

use thiserror::Error;

/// Errors returned by [`parse_dates`](crate::parse_dates).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A token is not shaped like an ISO `YYYY-MM-DD` date.
    #[error("token {position} `{token}` is not a YYYY-MM-DD date")]
    InvalidToken {
        /// The offending token.
        token: String,
        /// 1-based position of the token in the input.
        position: usize,
    },

    /// A token is shaped like a date but names a day that does not exist.
    #[error("token {position} `{token}` is not a valid calendar date")]
    InvalidDate {
        /// The offending token.
        token: String,
        /// 1-based position of the token in the input.
        position: usize,
    },
}
