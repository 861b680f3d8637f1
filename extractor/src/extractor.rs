//! The extractor: four fixed recognition rules applied independently to text.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ExtractorConfig;
use crate::patterns::{currency, email, phonenumber, url, TokenKind};

/// An immutable recognition rule for one token kind.
#[derive(Debug, Clone, Copy)]
pub struct MatchRule {
    kind: TokenKind,
    regex: &'static Regex,
}

impl MatchRule {
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Source text of the pattern.
    pub fn pattern(&self) -> &'static str {
        self.regex.as_str()
    }

    /// Every non-overlapping match, left to right.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Holds one rule per kind. Construct once, call many times; nothing is
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct Extractor {
    rules: [MatchRule; 4],
    kinds: Vec<TokenKind>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::with_config(&ExtractorConfig::default())
    }

    pub fn with_config(config: &ExtractorConfig) -> Self {
        let rules = [
            MatchRule { kind: TokenKind::Email, regex: &*email::EMAIL_EXTRACTION_PATTERN },
            MatchRule { kind: TokenKind::Url, regex: &*url::URL_EXTRACTION_PATTERN },
            MatchRule {
                kind: TokenKind::Phone,
                regex: phonenumber::extraction_pattern(config.phone_style),
            },
            MatchRule { kind: TokenKind::Currency, regex: &*currency::CURRENCY_EXTRACTION_PATTERN },
        ];

        Self {
            rules,
            kinds: config.kinds.clone(),
        }
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    pub fn rule(&self, kind: TokenKind) -> &MatchRule {
        // rules are stored in TokenKind::ALL order
        &self.rules[kind as usize]
    }

    /// Kinds that `extract_all` reports.
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }

    pub fn extract(&self, kind: TokenKind, text: &str) -> Vec<String> {
        self.rule(kind).find_all(text)
    }

    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        self.extract(TokenKind::Email, text)
    }

    pub fn extract_urls(&self, text: &str) -> Vec<String> {
        self.extract(TokenKind::Url, text)
    }

    pub fn extract_phone_numbers(&self, text: &str) -> Vec<String> {
        self.extract(TokenKind::Phone, text)
    }

    pub fn extract_currency(&self, text: &str) -> Vec<String> {
        self.extract(TokenKind::Currency, text)
    }

    /// Run every enabled rule over `text`. Disabled kinds come back empty.
    pub fn extract_all(&self, text: &str) -> Extraction {
        let mut extraction = Extraction::default();
        for &kind in &self.kinds {
            *extraction.get_mut(kind) = self.extract(kind, text);
        }
        debug!(
            emails = extraction.emails.len(),
            urls = extraction.urls.len(),
            phone_numbers = extraction.phone_numbers.len(),
            currency = extraction.currency.len(),
            "extracted tokens"
        );
        extraction
    }
}

/// Tokens found in one piece of text, grouped by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub currency: Vec<String>,
}

impl Extraction {
    pub fn get(&self, kind: TokenKind) -> &[String] {
        match kind {
            TokenKind::Email => &self.emails,
            TokenKind::Url => &self.urls,
            TokenKind::Phone => &self.phone_numbers,
            TokenKind::Currency => &self.currency,
        }
    }

    fn get_mut(&mut self, kind: TokenKind) -> &mut Vec<String> {
        match kind {
            TokenKind::Email => &mut self.emails,
            TokenKind::Url => &mut self.urls,
            TokenKind::Phone => &mut self.phone_numbers,
            TokenKind::Currency => &mut self.currency,
        }
    }

    pub fn total(&self) -> usize {
        TokenKind::ALL.iter().map(|&k| self.get(k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Listing of one input line as printed by the command-line tool.
    pub fn format_line(&self, line_number: usize) -> String {
        let mut out = format!("Line {}:\n", line_number);
        if self.is_empty() {
            out.push_str("  No tokens found\n");
        }
        for (kind, token) in self.iter() {
            out.push_str(&format!("  {}: \"{}\"\n", kind, token));
        }
        out
    }

    /// `(kind, token)` pairs in report order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, &str)> {
        TokenKind::ALL
            .into_iter()
            .flat_map(move |kind| self.get(kind).iter().map(move |t| (kind, t.as_str())))
    }
}
