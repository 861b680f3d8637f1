pub mod config;
pub mod error;
pub mod extractor;
pub mod patterns;
pub mod stats;

pub use config::{ExtractorConfig, PhoneStyle};
pub use error::{ExtractError, Result};
pub use extractor::{Extraction, Extractor, MatchRule};
pub use patterns::TokenKind;
pub use stats::{StatsReport, TokenStats};

/// Text used by the demonstration run of the `regex-extractor` binary.
pub const SAMPLE_TEXT: &str = "
    Contact us at user@example.com or support.team@company.co.uk
    Visit our website at https://www.example.com or https://subdomain.example.org/page
    Call us at (123) 456-7890 or 987-654-3210
    Products starting from $19.99 to $1,234.56
    ";

/// Extract every token of `kind` from `text` with the default rules.
pub fn extract(kind: TokenKind, text: &str) -> Vec<String> {
    Extractor::new().extract(kind, text)
}
