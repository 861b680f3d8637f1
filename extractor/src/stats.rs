//! Per-kind token counts for the `--stats` report.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::Result;
use crate::extractor::Extraction;
use crate::patterns::TokenKind;

#[derive(Debug, Clone, Default)]
pub struct TokenStats {
    lines: usize,
    counts: BTreeMap<TokenKind, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub summary: Summary,
    /// Most frequent kind first.
    pub kinds: Vec<KindCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_lines_processed: usize,
    pub total_tokens: usize,
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KindCount {
    pub kind: TokenKind,
    pub count: usize,
    /// Share of all tokens, rounded to a whole percent.
    pub percentage: f64,
}

impl TokenStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one processed line and the tokens found on it.
    pub fn record(&mut self, found: &Extraction) {
        self.lines += 1;
        for (kind, _) in found.iter() {
            *self.counts.entry(kind).or_insert(0) += 1;
        }
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, kind: TokenKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn report(&self, file_path: &str) -> StatsReport {
        let total = self.total();

        // stable sort keeps kind order among equal counts
        let mut kinds: Vec<_> = self.counts.iter().map(|(&k, &c)| (k, c)).collect();
        kinds.sort_by(|a, b| b.1.cmp(&a.1));

        let kinds = kinds
            .into_iter()
            .map(|(kind, count)| {
                let percentage = if total > 0 {
                    ((count as f64) / (total as f64) * 100.0).round()
                } else {
                    0.0
                };
                KindCount { kind, count, percentage }
            })
            .collect();

        StatsReport {
            summary: Summary {
                total_lines_processed: self.lines,
                total_tokens: total,
                file_path: file_path.to_string(),
            },
            kinds,
        }
    }
}

impl StatsReport {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::Extractor;

    fn stats_for(lines: &[&str]) -> TokenStats {
        let extractor = Extractor::new();
        let mut stats = TokenStats::new();
        for line in lines {
            stats.record(&extractor.extract_all(line));
        }
        stats
    }

    #[test]
    fn test_report_sorted_by_count() {
        let stats = stats_for(&[
            "$1 and $2 to a@b.io",
            "nothing here",
            "$3 at https://example.com, call 555-123-4567",
        ]);

        let report = stats.report("prices.txt");
        assert_eq!(report.summary.total_lines_processed, 3);
        assert_eq!(report.summary.total_tokens, 6);
        assert_eq!(report.summary.file_path, "prices.txt");

        let order: Vec<_> = report.kinds.iter().map(|k| (k.kind, k.count)).collect();
        assert_eq!(
            order,
            vec![
                (TokenKind::Currency, 3),
                (TokenKind::Email, 1),
                (TokenKind::Url, 1),
                (TokenKind::Phone, 1),
            ]
        );
    }

    #[test]
    fn test_percentages_are_rounded() {
        let stats = stats_for(&["$1 $2 a@b.io"]);
        let report = stats.report("-");

        let percentages: Vec<_> = report.kinds.iter().map(|k| k.percentage).collect();
        assert_eq!(percentages, vec![67.0, 33.0]);
    }

    #[test]
    fn test_empty_input_reports_nothing() {
        let stats = stats_for(&["no tokens", ""]);
        let report = stats.report("empty.txt");
        assert_eq!(report.summary.total_lines_processed, 2);
        assert_eq!(report.summary.total_tokens, 0);
        assert!(report.kinds.is_empty());
    }

    #[test]
    fn test_json_layout() {
        let stats = stats_for(&["$5"]);
        let value: serde_json::Value =
            serde_json::from_str(&stats.report("a.txt").to_json_pretty().unwrap()).unwrap();

        assert_eq!(value["summary"]["total_tokens"], 1);
        assert_eq!(value["kinds"][0]["kind"], "currency");
        assert_eq!(value["kinds"][0]["count"], 1);
        assert_eq!(value["kinds"][0]["percentage"], 100.0);
    }
}
