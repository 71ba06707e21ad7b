//! Identifier bookkeeping populated by the scanner.
//!
//! Entries are kept in first-sighting order; both [`SymbolTable::iter`] and
//! [`SymbolTable::render`] walk them in that order.

use std::fmt;
use std::fmt::Write as _;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Symbol {
    pub(crate) kind: String,
    pub(crate) first_line: usize,
    pub(crate) frequency: usize,
}

impl Symbol {
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn first_line(&self) -> usize {
        self.first_line
    }

    pub fn frequency(&self) -> usize {
        self.frequency
    }
}

#[derive(Debug, Default, Clone, Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    entries: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name` on first sighting, otherwise bumps its frequency.
    /// `kind` and `line` are only kept from the first sighting.
    pub fn record(&mut self, name: &str, kind: &str, line: usize) {
        match self.entries.get_mut(name) {
            Some(symbol) => symbol.frequency += 1,
            None => {
                self.entries.insert(
                    name.to_string(),
                    Symbol {
                        kind: kind.to_string(),
                        first_line: line,
                        frequency: 1,
                    },
                );
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Symbol)> {
        self.entries.iter().map(|(name, symbol)| (name.as_str(), symbol))
    }

    pub fn render(&self) -> String {
        let mut out = String::from("--- Symbol Table ---\n");
        let _ = writeln!(
            out,
            "{:<20} {:<15} {:<10} {:<10}",
            "Name", "Type", "First Line", "Frequency"
        );
        for (name, symbol) in self.iter() {
            let _ = writeln!(
                out,
                "{:<20} {:<15} {:<10} {:<10}",
                name, symbol.kind, symbol.first_line, symbol.frequency
            );
        }
        out
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests;
