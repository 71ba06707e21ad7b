//! Whole-file scan and its printable report.

use std::fmt::Write as _;
use serde::Serialize;
use crate::config::Config;
use crate::error::{Diagnostic, ErrorLog};
use crate::keywords::Keywords;
use crate::scanner::{ScanOptions, Scanner};
use crate::stats::ScanStats;
use crate::symbol_table::SymbolTable;
use crate::token::Token;

#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub tokens: Vec<Token>,
    pub symbols: SymbolTable,
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ScanStats,
    /// False when a fatal diagnostic cut the token stream short.
    pub complete: bool,
}

impl ScanReport {
    pub fn scan(source: &str, keywords: &Keywords, options: ScanOptions) -> Self {
        let mut scanner = Scanner::with_options(source, keywords, options);
        let tokens = scanner.tokenize();
        let stats = ScanStats::collect(&tokens, scanner.line());
        let (symbols, errors) = scanner.into_parts();
        Self::assemble(tokens, symbols, &errors, stats)
    }

    fn assemble(tokens: Vec<Token>, symbols: SymbolTable, errors: &ErrorLog, stats: ScanStats) -> Self {
        Self {
            tokens,
            symbols,
            diagnostics: errors.diagnostics().to_vec(),
            stats,
            complete: !errors.has_fatal(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Token listing followed by the sections enabled in `config`.
    pub fn render_text(&self, config: &Config) -> String {
        let mut out = String::from("--- Manual Scanner Output ---\n");
        for token in self.tokens.iter().filter(|t| !t.is_eof()) {
            let _ = writeln!(out, "{}", token);
        }
        if config.show_stats {
            out.push('\n');
            out.push_str(&self.stats.render());
        }
        if config.show_symbols {
            out.push('\n');
            out.push_str(&self.symbols.render());
        }
        out
    }

    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
