#![no_main]

use academy::forms::{StudentField, StudentForm};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mut form = StudentForm::default();
        for (i, field) in StudentField::ALL.iter().enumerate() {
            form.set(*field, s.get(i..).unwrap_or(s));
            form.blur(*field);
        }
        // Errors are fine, panics are bugs.
        let _ = form.into_student("fuzz", chrono::NaiveDate::MIN);
    }
});
