use chrono::NaiveDate;
use thiserror::Error;

use super::types::DISPLAY_DATE_FORMAT;

/// Errors that can occur while parsing, decoding or generating an RNOKPP.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RnokppError {
    /// Input has more than 10 characters.
    #[error("more than 10 digits, expects exactly 10 digits")]
    TooLong {
        /// Character count of the rejected input.
        len: usize,
    },

    /// Input has fewer than 10 characters.
    #[error("less than 10 symbols, expects exactly 10 symbols")]
    TooShort {
        /// Character count of the rejected input.
        len: usize,
    },

    /// Input is 10 characters long but not all of them are ASCII digits.
    #[error("string does not consist of digits")]
    NotDigits,

    /// Input is well-formed but the 10th digit does not match the checksum.
    #[error("invalid control digit")]
    InvalidControlDigit,

    /// Birth date precedes the base date.
    #[error(
        "the allowed dates start from 31.12.1899, but your date {} is earlier",
        .0.format(DISPLAY_DATE_FORMAT)
    )]
    DateTooEarly(NaiveDate),

    /// Birth date lies after the current day.
    #[error(
        "it is allowed to use only dates in past or current date, but your date is in the future {}",
        .0.format(DISPLAY_DATE_FORMAT)
    )]
    DateInFuture(NaiveDate),

    /// Birth date does not fit into the five day-count digits.
    #[error(
        "date {} is beyond the last encodable date {}",
        .0.format(DISPLAY_DATE_FORMAT),
        super::types::max_birthday().format(DISPLAY_DATE_FORMAT)
    )]
    DateOutOfRange(NaiveDate),

    /// Bulk generation was asked for zero identifiers.
    #[error("number of rnokpp should be greater than 0")]
    InvalidCount,

    /// A `DD.MM.YYYY` date string could not be parsed.
    #[error("invalid date '{0}', expected DD.MM.YYYY")]
    InvalidDate(String),
}
