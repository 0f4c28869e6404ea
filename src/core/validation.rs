use super::error::RnokppError;
use super::number::Rnokpp;
use super::types::{Details, Gender};

/// Parse and validate an RNOKPP, returning its decoded details.
///
/// Malformed input fails with the parser's error kinds
/// ([`RnokppError::TooLong`], [`RnokppError::TooShort`],
/// [`RnokppError::NotDigits`]). A well-formed number whose last digit does
/// not match the checksum fails with [`RnokppError::InvalidControlDigit`].
///
/// ```
/// use chrono::NaiveDate;
/// use rnokpp::{Gender, get_details};
///
/// let details = get_details("3652504575").unwrap();
/// assert_eq!(details.gender, Gender::Male);
/// assert_eq!(details.birthday, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
/// assert_eq!(details.to_string(), "valid, male, 01.01.2000");
/// ```
pub fn get_details(rnokpp: &str) -> Result<Details, RnokppError> {
    Rnokpp::parse(rnokpp)?.details()
}

/// Whether `rnokpp` is well-formed and carries a matching control digit.
pub fn is_valid(rnokpp: &str) -> bool {
    get_details(rnokpp).is_ok_and(|d| d.valid)
}

/// Whether a valid RNOKPP belongs to a male.
pub fn is_male(rnokpp: &str) -> Result<bool, RnokppError> {
    Ok(get_gender(rnokpp)?.is_male())
}

/// Whether a valid RNOKPP belongs to a female.
pub fn is_female(rnokpp: &str) -> Result<bool, RnokppError> {
    Ok(get_gender(rnokpp)?.is_female())
}

pub fn get_gender(rnokpp: &str) -> Result<Gender, RnokppError> {
    Ok(get_details(rnokpp)?.gender)
}
