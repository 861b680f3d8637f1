use regex::Regex;
use lazy_static::lazy_static;
use crate::config::PhoneStyle;

lazy_static! {
    // North American layout: area code, optional separator, 3 digits, required separator, 4 digits.
    // Separators include the information separators U+001C..U+001F.
    static ref PHONE_PATTERN: Regex = Regex::new(
        r"^(?:\(\d{3}\)|\d{3})[-.\s\x1c-\x1f]?\d{3}[-.\s\x1c-\x1f]\d{4}$"
    ).unwrap();

    pub(crate) static ref PHONE_EXTRACTION_PATTERN: Regex = Regex::new(
        r"(?:\(\d{3}\)|\d{3})[-.\s\x1c-\x1f]?\d{3}[-.\s\x1c-\x1f]\d{4}"
    ).unwrap();

    // Each parenthesis is optional on its own, so "123) 456-7890" is accepted
    pub(crate) static ref LENIENT_PHONE_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\(?\d{3}\)?[-.\s\x1c-\x1f]?\d{3}[-.\s\x1c-\x1f]\d{4}"
    ).unwrap();
}

/// Extraction pattern used for the given parenthesis handling.
pub fn extraction_pattern(style: PhoneStyle) -> &'static Regex {
    match style {
        PhoneStyle::Balanced => &*PHONE_EXTRACTION_PATTERN,
        PhoneStyle::Lenient => &*LENIENT_PHONE_EXTRACTION_PATTERN,
    }
}

pub fn is_match(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

pub fn extract_phonenumbers(text: &str) -> Vec<String> {
    extract_with_style(text, PhoneStyle::Balanced)
}

pub fn extract_with_style(text: &str, style: PhoneStyle) -> Vec<String> {
    extraction_pattern(style)
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        let valid_phones = vec![
            "123-456-7890",
            "(123) 456-7890",
            "(123)456-7890",
            "123.456.7890",
            "123 456 7890",
            "123456-7890",
        ];

        for phone in valid_phones {
            assert!(is_match(phone), "Should match: {}", phone);
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        let invalid_phones = vec![
            "123-45-678",
            "1234567890",      // no separator before the last four digits
            "+1 123-456-7890", // country code is not part of the token
            "123) 456-7890",
            "(123 456-7890",
            "abcd",
            "192.168.1.1",
        ];

        for phone in invalid_phones {
            assert!(!is_match(phone), "Should not match: {}", phone);
        }
    }

    #[test]
    fn test_extract_phone_numbers_in_order() {
        let text = "Call us at (123) 456-7890 or 987-654-3210";
        assert_eq!(extract_phonenumbers(text), vec!["(123) 456-7890", "987-654-3210"]);
    }

    #[test]
    fn test_unbalanced_parenthesis_styles() {
        assert!(extract_phonenumbers("123) 456-7890").is_empty());
        assert_eq!(
            extract_with_style("123) 456-7890", PhoneStyle::Lenient),
            vec!["123) 456-7890"]
        );

        assert_eq!(extract_phonenumbers("(123 456-7890"), vec!["123 456-7890"]);
        assert_eq!(
            extract_with_style("(123 456-7890", PhoneStyle::Lenient),
            vec!["(123 456-7890"]
        );
    }

    #[test]
    fn test_information_separator_is_a_separator() {
        assert_eq!(
            extract_with_style("123\x1f456\x1f7890", PhoneStyle::Lenient),
            vec!["123\x1f456\x1f7890"]
        );
        assert!(is_match("123\x1c456\x1d7890"));
    }

    #[test]
    fn test_no_digit_validation() {
        // Trailing digits are not inspected
        assert_eq!(extract_phonenumbers("000-000-00001"), vec!["000-000-0000"]);
    }
}
