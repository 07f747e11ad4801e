#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let valid = academy::core::is_valid_iban(s);
        let _ = academy::core::resolve_bank_identifier(s);
        let _ = academy::core::format_iban(s);
        if valid {
            assert_eq!(academy::core::iban_remainder(&academy::core::normalize_iban(s)), Some(1));
        }
    }
});
