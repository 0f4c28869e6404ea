use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::RnokppError;

/// Date format used in every human-readable rendering (`01.01.2000`).
pub const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

/// Day-count zero. Digits 0-4 of an RNOKPP count days elapsed since this date.
pub const BASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1899, 12, 31) {
    Some(date) => date,
    None => panic!("base date must be a valid calendar date"),
};

/// Largest day count that fits into the five leading digits.
pub const MAX_DAY_COUNT: u32 = 99_999;

/// Last birthday an RNOKPP can encode (`BASE_DATE` + 99999 days).
pub fn max_birthday() -> NaiveDate {
    BASE_DATE + Days::new(u64::from(MAX_DAY_COUNT))
}

/// Gender encoded by the parity of the 9th digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Odd gender digit.
    Male,
    /// Even gender digit.
    Female,
}

impl Gender {
    /// Gender digits permitted for this gender.
    pub const fn digits(self) -> [u8; 5] {
        match self {
            Gender::Male => [1, 3, 5, 7, 9],
            Gender::Female => [0, 2, 4, 6, 8],
        }
    }

    /// Decode the gender from the 9th digit.
    pub const fn from_digit(digit: u8) -> Self {
        if digit % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn is_male(self) -> bool {
        self == Gender::Male
    }

    pub fn is_female(self) -> bool {
        self == Gender::Female
    }

    /// Lowercase name, as used in `Details` rendering.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a gender name is neither "male" nor "female".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGenderError(pub String);

impl fmt::Display for ParseGenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender '{}', expected 'male' or 'female'", self.0)
    }
}

impl std::error::Error for ParseGenderError {}

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else {
            Err(ParseGenderError(s.into()))
        }
    }
}

/// Decoded content of an RNOKPP.
///
/// `gender` and `birthday` only carry meaning when `valid` is true.
/// [`get_details`](super::get_details) never returns an invalid record;
/// `valid = false` exists for records assembled by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Details {
    pub valid: bool,
    pub gender: Gender,
    pub birthday: NaiveDate,
}

impl Details {
    pub fn new(valid: bool, gender: Gender, birthday: NaiveDate) -> Self {
        Self {
            valid,
            gender,
            birthday,
        }
    }

    /// Build details from a `DD.MM.YYYY` birthday string.
    pub fn from_date_str(valid: bool, gender: Gender, date: &str) -> Result<Self, RnokppError> {
        let birthday = NaiveDate::parse_from_str(date, DISPLAY_DATE_FORMAT)
            .map_err(|_| RnokppError::InvalidDate(date.into()))?;
        Ok(Self::new(valid, gender, birthday))
    }
}

impl fmt::Display for Details {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.valid {
            return f.write_str("invalid");
        }
        write!(
            f,
            "valid, {}, {}",
            self.gender,
            self.birthday.format(DISPLAY_DATE_FORMAT)
        )
    }
}
