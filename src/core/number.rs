use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::checksum::control_digit;
use super::error::RnokppError;
use super::types::{BASE_DATE, Details, Gender};

/// Number of digits in an RNOKPP.
pub const RNOKPP_LEN: usize = 10;

/// A well-formed RNOKPP: exactly ten ASCII digits.
///
/// Holding an `Rnokpp` only guarantees the shape. Whether the control digit
/// matches is checked by [`Rnokpp::details`] and [`Rnokpp::is_valid`].
///
/// Digit layout:
///
/// | Positions | Meaning |
/// |-----------|---------|
/// | 0-4 | days since [`BASE_DATE`], zero-padded |
/// | 5-7 | sequence number |
/// | 8 | gender digit (odd = male, even = female) |
/// | 9 | control digit |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rnokpp {
    digits: [u8; RNOKPP_LEN],
}

impl Rnokpp {
    /// Parse a string of exactly ten ASCII digits.
    ///
    /// Length is counted in characters. A ten-character string with any
    /// non-digit fails with [`RnokppError::NotDigits`], not a length error.
    pub fn parse(s: &str) -> Result<Self, RnokppError> {
        let len = s.chars().count();
        if len > RNOKPP_LEN {
            return Err(RnokppError::TooLong { len });
        }
        if len < RNOKPP_LEN {
            return Err(RnokppError::TooShort { len });
        }

        let mut digits = [0u8; RNOKPP_LEN];
        for (slot, c) in digits.iter_mut().zip(s.chars()) {
            if !c.is_ascii_digit() {
                return Err(RnokppError::NotDigits);
            }
            *slot = c as u8 - b'0';
        }
        Ok(Self { digits })
    }

    /// Assemble from the first nine digits, appending the matching control digit.
    ///
    /// Every element of `head` must be in `0..=9`.
    #[cfg_attr(not(feature = "generate"), allow(dead_code))]
    pub(crate) fn with_control_digit(head: [u8; 9]) -> Self {
        debug_assert!(head.iter().all(|&d| d <= 9));
        let mut digits = [0u8; RNOKPP_LEN];
        digits[..9].copy_from_slice(&head);
        digits[9] = control_digit(&head);
        Self { digits }
    }

    pub fn digits(&self) -> &[u8; RNOKPP_LEN] {
        &self.digits
    }

    /// Days elapsed since [`BASE_DATE`] (digits 0-4).
    pub fn day_count(&self) -> u32 {
        self.digits[..5]
            .iter()
            .fold(0, |acc, &d| acc * 10 + u32::from(d))
    }

    /// Three-digit sequence number (digits 5-7).
    pub fn sequence_number(&self) -> u16 {
        self.digits[5..8]
            .iter()
            .fold(0, |acc, &d| acc * 10 + u16::from(d))
    }

    pub fn gender_digit(&self) -> u8 {
        self.digits[8]
    }

    pub fn control_digit(&self) -> u8 {
        self.digits[9]
    }

    /// Control digit computed from digits 0-8.
    pub fn expected_control_digit(&self) -> u8 {
        let mut head = [0u8; 9];
        head.copy_from_slice(&self.digits[..9]);
        control_digit(&head)
    }

    pub fn gender(&self) -> Gender {
        Gender::from_digit(self.gender_digit())
    }

    pub fn birthday(&self) -> NaiveDate {
        BASE_DATE + Days::new(u64::from(self.day_count()))
    }

    pub fn is_valid(&self) -> bool {
        self.control_digit() == self.expected_control_digit()
    }

    /// Verify the control digit and decode gender and birthday.
    pub fn details(&self) -> Result<Details, RnokppError> {
        if !self.is_valid() {
            return Err(RnokppError::InvalidControlDigit);
        }
        Ok(Details::new(true, self.gender(), self.birthday()))
    }
}

impl fmt::Display for Rnokpp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for Rnokpp {
    type Err = RnokppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Rnokpp {
    type Error = RnokppError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rnokpp {
    type Error = RnokppError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Rnokpp> for String {
    fn from(value: Rnokpp) -> Self {
        value.to_string()
    }
}
