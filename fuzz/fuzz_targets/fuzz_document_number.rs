#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic: malformed input is just invalid.
        let _ = academy::core::is_valid_document_number(s);
    }
});
