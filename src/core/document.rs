//! NIF/DNI-style document number checksum.
//!
//! A document number is eight digits followed by one control letter. The
//! letter is `LETTER_SEQUENCE[number mod 23]`. Validation is silent: any
//! malformed input is simply invalid.

/// Control letters indexed by `number mod 23`.
pub const LETTER_SEQUENCE: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

const DOCUMENT_LENGTH: usize = 9;
const NUMBER_LENGTH: usize = 8;

/// Compute the control letter for a document number.
pub fn control_letter(number: u32) -> char {
    LETTER_SEQUENCE[(number % 23) as usize] as char
}

/// Check whether `value` is a checksum-valid document number.
///
/// The value must be exactly eight ASCII digits followed by one ASCII
/// letter (either case). No trimming is applied.
///
/// ```
/// use academy::core::is_valid_document_number;
///
/// assert!(is_valid_document_number("12345678Z"));
/// assert!(is_valid_document_number("12345678z"));
/// assert!(!is_valid_document_number("12345678A"));
/// ```
pub fn is_valid_document_number(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != DOCUMENT_LENGTH {
        return false;
    }

    let (digits, letter) = bytes.split_at(NUMBER_LENGTH);
    if !digits.iter().all(u8::is_ascii_digit) || !letter[0].is_ascii_alphabetic() {
        return false;
    }

    // Eight digits always fit in a u32.
    let number = digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));

    letter[0].to_ascii_uppercase() == LETTER_SEQUENCE[(number % 23) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_valid_numbers() {
        // 12345678 % 23 = 14 -> Z
        assert!(is_valid_document_number("12345678Z"));
        // 0 % 23 = 0 -> T
        assert!(is_valid_document_number("00000000T"));
        // 99999999 % 23 = 1 -> R
        assert!(is_valid_document_number("99999999R"));
    }

    #[test]
    fn lowercase_letter_accepted() {
        assert!(is_valid_document_number("12345678z"));
        assert!(is_valid_document_number("00000000t"));
    }

    #[test]
    fn wrong_letter_rejected() {
        assert!(!is_valid_document_number("12345678A"));
        assert!(!is_valid_document_number("00000000R"));
        assert!(!is_valid_document_number("99999999T"));
    }

    #[test]
    fn malformed_rejected() {
        for value in [
            "",
            "1234567Z",
            "123456789",
            "123456789Z",
            "1234567A9",
            "ABCDEFGHR",
            " 12345678Z",
            "12345678Z ",
            "1234 678Z",
            "12345678-",
            "12345678Ñ",
            "１２３４５６７８Z",
        ] {
            assert!(!is_valid_document_number(value), "{value:?} accepted");
        }
    }

    #[test]
    fn control_letter_matches_sequence() {
        assert_eq!(control_letter(12_345_678), 'Z');
        assert_eq!(control_letter(0), 'T');
        assert_eq!(control_letter(22), 'E');
        assert_eq!(control_letter(23), 'T');
    }

    #[test]
    fn sequence_has_no_duplicates() {
        let mut seen = LETTER_SEQUENCE.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 23);
    }
}
