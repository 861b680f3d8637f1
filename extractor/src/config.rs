//! Extractor configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::patterns::TokenKind;

/// How the phone rule treats parentheses around the area code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneStyle {
    /// Area code is either `(123)` or `123`.
    #[default]
    Balanced,
    /// Opening and closing parentheses are each optional, so `123)` is accepted.
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Kinds reported by `extract_all`, in report order.
    pub kinds: Vec<TokenKind>,
    pub phone_style: PhoneStyle,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            kinds: TokenKind::ALL.to_vec(),
            phone_style: PhoneStyle::default(),
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kinds(mut self, kinds: Vec<TokenKind>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn exclude(mut self, excluded: &[TokenKind]) -> Self {
        self.kinds.retain(|k| !excluded.contains(k));
        self
    }

    pub fn phone_style(mut self, style: PhoneStyle) -> Self {
        self.phone_style = style;
        self
    }

    pub fn enabled(&self, kind: TokenKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// Parse a comma-separated kind list such as `"email, url"`.
///
/// Empty entries are skipped and duplicates collapse to their first position.
pub fn parse_kinds(list: &str) -> Result<Vec<TokenKind>> {
    let mut kinds = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let kind = name.parse::<TokenKind>()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_default_enables_everything() {
        let config = ExtractorConfig::default();
        for kind in TokenKind::ALL {
            assert!(config.enabled(kind));
        }
        assert_eq!(config.phone_style, PhoneStyle::Balanced);
    }

    #[test]
    fn test_parse_kinds() {
        let kinds = parse_kinds("url, email,,url").unwrap();
        assert_eq!(kinds, vec![TokenKind::Url, TokenKind::Email]);
    }

    #[test]
    fn test_parse_kinds_rejects_unknown() {
        match parse_kinds("email,ssn") {
            Err(ExtractError::UnknownKind(name)) => assert_eq!(name, "ssn"),
            other => panic!("expected unknown kind error, got {:?}", other),
        }
    }

    #[test]
    fn test_exclude_keeps_order() {
        let config = ExtractorConfig::new().exclude(&[TokenKind::Url]);
        assert_eq!(
            config.kinds,
            vec![TokenKind::Email, TokenKind::Phone, TokenKind::Currency]
        );
    }
}
