#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let result = rnokpp::get_details(s);
        assert_eq!(result.is_ok(), rnokpp::is_valid(s));
    }
});
