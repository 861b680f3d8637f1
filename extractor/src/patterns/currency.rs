use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // Dollar sign, 1-3 leading digits, comma-grouped thousands, optional cents
    static ref CURRENCY_PATTERN: Regex = Regex::new(
        r"^\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?$"
    ).unwrap();

    pub(crate) static ref CURRENCY_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\$\d{1,3}(?:,\d{3})*(?:\.\d{2})?"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    CURRENCY_PATTERN.is_match(value)
}

pub fn extract_currency(text: &str) -> Vec<String> {
    CURRENCY_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
