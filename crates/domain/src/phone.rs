/// Country code applied to bare national numbers
pub const DEFAULT_COUNTRY_CODE: &str = "91";

const NATIONAL_NUMBER_LEN: usize = 10;
const MIN_CANONICAL_LEN: usize = 11;
const MAX_CANONICAL_LEN: usize = 13;

/// Canonicalizes a raw phone value into its digits only international form.
///
/// Every non digit is dropped. A number that is left with exactly ten digits
/// is treated as a national number and gets the `DEFAULT_COUNTRY_CODE`
/// prefixed, anything else is returned as the stripped digits (which can be
/// empty).
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == NATIONAL_NUMBER_LEN {
        format!("{}{}", DEFAULT_COUNTRY_CODE, digits)
    } else {
        digits
    }
}

/// A canonical phone is valid when it consists of 11 to 13 digits
pub fn is_valid_phone(canonical: &str) -> bool {
    (MIN_CANONICAL_LEN..=MAX_CANONICAL_LEN).contains(&canonical.len())
        && canonical.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_prefixes_country_code_to_national_numbers() {
        assert_eq!(normalize_phone("98765 43210"), "919876543210");
        assert_eq!(normalize_phone("(987) 654-3210"), "919876543210");
    }

    #[test]
    fn it_keeps_numbers_that_already_have_a_country_code() {
        assert_eq!(normalize_phone("+91-9876543210"), "919876543210");
        assert_eq!(normalize_phone("919123456789"), "919123456789");
    }

    #[test]
    fn it_returns_stripped_digits_for_other_lengths() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("n/a"), "");
        assert_eq!(normalize_phone("12-345"), "12345");
    }

    #[test]
    fn it_validates_canonical_length() {
        assert!(is_valid_phone("919876543210"));
        assert!(is_valid_phone("19876543210"));
        assert!(is_valid_phone("4419876543210"));
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("91987654321a"));
    }

    #[test]
    fn normalized_national_numbers_are_valid() {
        assert!(is_valid_phone(&normalize_phone("9876543210")));
        assert!(!is_valid_phone(&normalize_phone("987654321")));
    }
}
