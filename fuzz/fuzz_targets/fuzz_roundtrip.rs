#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Anything that parses must print back to the same text.
        if let Ok(number) = s.parse::<rnokpp::Rnokpp>() {
            assert_eq!(number.to_string(), s);
        }
    }
});
