pub mod currency;
pub mod email;
pub mod phonenumber;
pub mod url;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExtractError;

/// The kinds of token the extractor knows how to recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Email,
    Url,
    Phone,
    Currency,
}

impl TokenKind {
    /// Every kind, in the order results are reported.
    pub const ALL: [TokenKind; 4] = [
        TokenKind::Email,
        TokenKind::Url,
        TokenKind::Phone,
        TokenKind::Currency,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Email => "email",
            TokenKind::Url => "url",
            TokenKind::Phone => "phone",
            TokenKind::Currency => "currency",
        }
    }

    /// Heading used when listing results for a person to read.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Email => "Emails",
            TokenKind::Url => "URLs",
            TokenKind::Phone => "Phone numbers",
            TokenKind::Currency => "Currency amounts",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "emails" => Ok(TokenKind::Email),
            "url" | "urls" => Ok(TokenKind::Url),
            "phone" | "phones" | "phonenumber" => Ok(TokenKind::Phone),
            "currency" => Ok(TokenKind::Currency),
            other => Err(ExtractError::UnknownKind(other.to_string())),
        }
    }
}
