use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // http(s) only; host labels must end in a purely alphabetic label of two or more letters.
    // The path also stops at the information separators U+001C..U+001F.
    static ref URL_PATTERN: Regex = Regex::new(
        r"^https?://(?:www\.)?[a-zA-Z0-9-]+(?:\.[a-zA-Z]{2,})+(?:/[^\s\x1c-\x1f]*)?$"
    ).unwrap();

    pub(crate) static ref URL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"https?://(?:www\.)?[a-zA-Z0-9-]+(?:\.[a-zA-Z]{2,})+(?:/[^\s\x1c-\x1f]*)?"
    ).unwrap();
}

pub fn is_match(value: &str) -> bool {
    URL_PATTERN.is_match(value)
}

pub fn extract_urls(text: &str) -> Vec<String> {
    URL_EXTRACTION_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
