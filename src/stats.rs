use std::collections::BTreeMap;
use std::fmt::Write as _;
use serde::Serialize;
use crate::token::{Kind, Token};

/// Summary of a finished scan, printed after the token listing.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub total_tokens: usize,
    pub lines: usize,
    pub counts: BTreeMap<Kind, usize>,
}

impl ScanStats {
    /// EOF tokens are not counted.
    pub fn collect<'t>(tokens: impl IntoIterator<Item = &'t Token>, lines: usize) -> Self {
        let mut stats = Self {
            lines,
            ..Self::default()
        };
        for token in tokens.into_iter().filter(|t| !t.is_eof()) {
            stats.total_tokens += 1;
            *stats.counts.entry(token.kind()).or_insert(0) += 1;
        }
        stats
    }

    pub fn count(&self, kind: Kind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn render(&self) -> String {
        let mut out = String::from("--- Scanner Statistics ---\n");
        let _ = writeln!(out, "Total Tokens: {}", self.total_tokens);
        let _ = writeln!(out, "Lines Processed: {}", self.lines);
        out.push_str("Token Counts by Type:\n");
        for (kind, count) in &self.counts {
            let _ = writeln!(out, "  {:<15}: {}", kind, count);
        }
        out
    }
}

#[cfg(test)]
mod tests;
