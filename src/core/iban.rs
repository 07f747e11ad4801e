//! IBAN checksum (ISO 7064 mod 97-10) and Spanish bank-code resolution.
//!
//! Only the 24-character form `^[A-Z]{2}[0-9]{22}$` is accepted by
//! [`is_valid_iban`]. The bank identifier lookup is a convenience: an
//! unmapped bank code says nothing about the IBAN's validity.

const IBAN_LENGTH: usize = 24;

/// Country prefix the bank table applies to.
const BANK_TABLE_COUNTRY: &str = "ES";

/// Bank code (BBAN digits 1-4) to BIC. Sorted for binary search.
static BANK_IDENTIFIERS: &[(&str, &str)] = &[
    ("0049", "BSCHESMMXXX"),
    ("0075", "POPUESMMXXX"),
    ("0081", "BSABESBBXXX"),
    ("0128", "BKBKESMMXXX"),
    ("0182", "BBVAESMMXXX"),
    ("1465", "INGDESMMXXX"),
    ("2038", "CAHMESMMXXX"),
    ("2080", "CAGLESMMXXX"),
    ("2085", "CAZRES2ZXXX"),
    ("2100", "CAIXESBBXXX"),
];

/// Strip all whitespace and uppercase.
pub fn normalize_iban(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Check whether `value` is a checksum-valid 24-character IBAN.
///
/// Whitespace anywhere in the input is ignored and letters may be in any
/// case.
///
/// ```
/// use academy::core::is_valid_iban;
///
/// assert!(is_valid_iban("ES91 2100 0418 4502 0005 1332"));
/// assert!(!is_valid_iban("ES9121000418450200051333"));
/// ```
pub fn is_valid_iban(value: &str) -> bool {
    let iban = normalize_iban(value);
    let bytes = iban.as_bytes();
    if bytes.len() != IBAN_LENGTH {
        return false;
    }
    if !bytes[..2].iter().all(u8::is_ascii_uppercase)
        || !bytes[2..].iter().all(u8::is_ascii_digit)
    {
        return false;
    }

    iban_remainder(&iban) == Some(1)
}

/// Remainder of the rearranged IBAN numeral modulo 97.
///
/// The first four characters are moved to the end, letters become
/// `A=10 .. Z=35` and the resulting decimal numeral is reduced piecewise,
/// which is exact for any length. Returns `None` when the input is shorter
/// than five characters or contains anything but ASCII letters and digits.
pub fn iban_remainder(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() < 5 {
        return None;
    }

    let (head, tail) = bytes.split_at(4);
    tail.iter().chain(head).try_fold(0u32, |rem, &b| match b {
        b'0'..=b'9' => Some((rem * 10 + u32::from(b - b'0')) % 97),
        b'A'..=b'Z' => Some((rem * 100 + u32::from(b - b'A') + 10) % 97),
        b'a'..=b'z' => Some((rem * 100 + u32::from(b - b'a') + 10) % 97),
        _ => None,
    })
}

/// Resolve the BIC for the bank code embedded in a Spanish IBAN.
///
/// Returns `None` when the prefix is not `ES`, the value is too short to
/// hold a bank code, or the code is not in the table.
///
/// ```
/// use academy::core::resolve_bank_identifier;
///
/// assert_eq!(resolve_bank_identifier("ES9121000418450200051332"), Some("CAIXESBBXXX"));
/// assert_eq!(resolve_bank_identifier("ES0099990000000000000000"), None);
/// ```
pub fn resolve_bank_identifier(value: &str) -> Option<&'static str> {
    let iban = normalize_iban(value);
    if !iban.starts_with(BANK_TABLE_COUNTRY) {
        return None;
    }
    let code = iban.get(4..8)?;
    BANK_IDENTIFIERS
        .binary_search_by(|(c, _)| (*c).cmp(code))
        .ok()
        .map(|i| BANK_IDENTIFIERS[i].1)
}

/// Format an IBAN for display in groups of four characters.
pub fn format_iban(value: &str) -> String {
    let iban = normalize_iban(value);
    let mut out = String::with_capacity(iban.len() + iban.len() / 4);
    for (i, c) in iban.chars().enumerate() {
        if i > 0 && i % 4 == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Check the shape of a BIC: 6 letters followed by 2 or 5 alphanumerics.
pub fn is_valid_bic(value: &str) -> bool {
    let bytes = value.as_bytes();
    (bytes.len() == 8 || bytes.len() == 11)
        && bytes[..6].iter().all(u8::is_ascii_uppercase)
        && bytes[6..]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "ES9121000418450200051332";

    #[test]
    fn reference_iban_valid() {
        assert!(is_valid_iban(VALID));
        assert_eq!(iban_remainder(VALID), Some(1));
    }

    #[test]
    fn whitespace_and_case_normalized() {
        assert!(is_valid_iban("es91 2100 0418 4502 0005 1332"));
        assert!(is_valid_iban("\tES9121000418450200051332\n"));
    }

    #[test]
    fn altered_digit_rejected() {
        assert!(!is_valid_iban("ES9121000418450200051333"));
        assert!(!is_valid_iban("ES9221000418450200051332"));
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!is_valid_iban("ES912100041845020005133"));
        assert!(!is_valid_iban("ES91210004184502000513321"));
        assert!(!is_valid_iban(""));
    }

    #[test]
    fn other_country_long_form_rejected() {
        // Valid German IBAN, but only 22 characters.
        assert!(!is_valid_iban("DE89370400440532013000"));
        assert_eq!(iban_remainder("DE89370400440532013000"), Some(1));
    }

    #[test]
    fn letters_in_bban_rejected() {
        assert!(!is_valid_iban("ES91210004184502000513A2"));
        assert!(!is_valid_iban("1291210004184502000513322"));
    }

    #[test]
    fn non_ascii_does_not_panic() {
        assert!(!is_valid_iban("ÉS9121000418450200051332"));
        assert_eq!(iban_remainder("ÉS9121000418450200051332"), None);
        assert_eq!(resolve_bank_identifier("ESé"), None);
    }

    #[test]
    fn bank_identifier_resolved() {
        assert_eq!(resolve_bank_identifier(VALID), Some("CAIXESBBXXX"));
        assert_eq!(
            resolve_bank_identifier("es00 0049 0000 0000 0000 0000"),
            Some("BSCHESMMXXX")
        );
    }

    #[test]
    fn bank_identifier_independent_of_checksum() {
        // Broken checksum, known bank.
        assert_eq!(
            resolve_bank_identifier("ES0021000418450200051332"),
            Some("CAIXESBBXXX")
        );
        // Unknown bank.
        assert_eq!(resolve_bank_identifier("ES9199990418450200051332"), None);
    }

    #[test]
    fn bank_identifier_needs_prefix_and_length() {
        assert_eq!(resolve_bank_identifier("DE0021000418450200051332"), None);
        assert_eq!(resolve_bank_identifier("ES00210"), None);
        assert_eq!(resolve_bank_identifier("ES002100"), Some("CAIXESBBXXX"));
    }

    #[test]
    fn table_is_sorted() {
        for window in BANK_IDENTIFIERS.windows(2) {
            assert!(window[0].0 < window[1].0, "{} >= {}", window[0].0, window[1].0);
        }
        assert_eq!(BANK_IDENTIFIERS.len(), 10);
        assert!(BANK_IDENTIFIERS.iter().all(|(_, bic)| is_valid_bic(bic)));
    }

    #[test]
    fn display_grouping() {
        assert_eq!(format_iban(VALID), "ES91 2100 0418 4502 0005 1332");
        assert_eq!(format_iban("es91 21"), "ES91 21");
        assert_eq!(format_iban(""), "");
    }

    #[test]
    fn bic_shapes() {
        assert!(is_valid_bic("CAIXESBBXXX"));
        assert!(is_valid_bic("CAIXESBB"));
        assert!(is_valid_bic("CAZRES2Z"));
        assert!(!is_valid_bic("CAIXESB"));
        assert!(!is_valid_bic("CAIX3SBBXXX"));
        assert!(!is_valid_bic("caixesbbxxx"));
    }
}
