//! Malformed input, checksum corner cases, and error text.

use rnokpp::*;

// ---------------------------------------------------------------------------
// Length and character checks
// ---------------------------------------------------------------------------

#[test]
fn nine_digits_too_short() {
    assert_eq!(get_details("365250457"), Err(RnokppError::TooShort { len: 9 }));
}

#[test]
fn eleven_digits_too_long() {
    assert_eq!(get_details("36525045750"), Err(RnokppError::TooLong { len: 11 }));
}

#[test]
fn empty_string_too_short() {
    assert_eq!(get_details(""), Err(RnokppError::TooShort { len: 0 }));
}

#[test]
fn non_digit_at_exact_length() {
    for input in [
        "123456789X",
        "          ",
        "ABCDEFGHIJ",
        " 234567890",
        "123456789 ",
        "-365250457",
        "36525.4575",
    ] {
        assert_eq!(get_details(input), Err(RnokppError::NotDigits), "{input:?}");
    }
}

#[test]
fn non_digit_with_wrong_length_reports_length() {
    assert_eq!(get_details("abc"), Err(RnokppError::TooShort { len: 3 }));
    assert_eq!(get_details("ABCDEFGHIJK"), Err(RnokppError::TooLong { len: 11 }));
}

#[test]
fn whitespace_not_trimmed() {
    assert_eq!(get_details(" 3652504575"), Err(RnokppError::TooLong { len: 11 }));
    assert_eq!(get_details("3652504575\n"), Err(RnokppError::TooLong { len: 11 }));
}

#[test]
fn multibyte_characters_counted_once() {
    // Cyrillic letters take two bytes each
    assert_eq!(get_details("РНОКПП1234"), Err(RnokppError::NotDigits));
    assert_eq!(get_details("РНОКПП"), Err(RnokppError::TooShort { len: 6 }));
}

// ---------------------------------------------------------------------------
// Checksum
// ---------------------------------------------------------------------------

#[test]
fn every_other_last_digit_is_rejected() {
    for valid in ["3652504575", "3068208400"] {
        let head = &valid[..9];
        let good = valid.as_bytes()[9];
        for c in b'0'..=b'9' {
            if c == good {
                continue;
            }
            let candidate = format!("{head}{}", c as char);
            assert_eq!(
                get_details(&candidate),
                Err(RnokppError::InvalidControlDigit),
                "{candidate}"
            );
        }
    }
}

#[test]
fn negative_weighted_sum() {
    // 9 * -1 = -9 -> rem_euclid(11) = 2
    assert_eq!(control_digit(&[9, 0, 0, 0, 0, 0, 0, 0, 0]), 2);
    assert!(is_valid("9000000002"));
    assert!(!is_valid("9000000009"));
}

#[test]
fn weights_match_documented_formula() {
    assert_eq!(WEIGHTS, [-1, 5, 7, 9, 4, 6, 10, 5, 7]);
}

// ---------------------------------------------------------------------------
// Error messages
// ---------------------------------------------------------------------------

#[test]
fn parse_error_messages() {
    insta::assert_snapshot!(
        get_details("1234567890+").unwrap_err(),
        @"more than 10 digits, expects exactly 10 digits"
    );
    insta::assert_snapshot!(
        get_details("123456789").unwrap_err(),
        @"less than 10 symbols, expects exactly 10 symbols"
    );
    insta::assert_snapshot!(
        get_details("123456789X").unwrap_err(),
        @"string does not consist of digits"
    );
    insta::assert_snapshot!(
        get_details("1234567890").unwrap_err(),
        @"invalid control digit"
    );
}

#[test]
fn invalid_count_message() {
    insta::assert_snapshot!(
        RnokppError::InvalidCount,
        @"number of rnokpp should be greater than 0"
    );
}

#[test]
fn out_of_range_message() {
    let date = chrono::NaiveDate::from_ymd_opt(2200, 1, 1).unwrap();
    insta::assert_snapshot!(
        RnokppError::DateOutOfRange(date),
        @"date 01.01.2200 is beyond the last encodable date 14.10.2173"
    );
}

// ---------------------------------------------------------------------------
// Hand-built details
// ---------------------------------------------------------------------------

#[test]
fn invalid_details_render_as_invalid() {
    let details = Details::from_date_str(false, Gender::Female, "01.01.2003").unwrap();
    assert_eq!(details.to_string(), "invalid");
}

#[test]
fn details_from_bad_date() {
    assert_eq!(
        Details::from_date_str(true, Gender::Male, "31.02.2000"),
        Err(RnokppError::InvalidDate("31.02.2000".into()))
    );
}
